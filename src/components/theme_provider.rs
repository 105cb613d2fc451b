use dioxus::prelude::*;
use crate::error::ThemeError;
use crate::theme::{ document_root, install, Theme, ThemeStore };

/// Store handle shared through the component tree. The signal mirrors the
/// store so components re-render when the theme changes.
#[derive(Clone)]
pub struct ThemeContext {
    store: ThemeStore,
    theme: Signal<Theme>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        (self.theme)()
    }

    pub fn is_dark(&self) -> bool {
        self.theme() == Theme::Dark
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.set_theme(theme);
    }

    pub fn set_theme_str(&self, value: &str) -> Result<(), ThemeError> {
        self.store.set_theme_str(value)
    }

    pub fn toggle_theme(&self) {
        self.store.toggle_theme();
    }
}

// The first client render hydrates server markup built from the default
// theme, so the persisted value is only applied once the app has mounted.
#[cfg(target_arch = "wasm32")]
fn open_store() -> ThemeStore {
    let options = crate::theme::StoreOptions {
        restore: false,
        ..crate::theme::StoreOptions::default()
    };
    ThemeStore::with_options(options, crate::theme::LocalStorage)
}

// Server renders never see the visitor's storage; the client restores the
// persisted theme when it hydrates.
#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
fn open_store() -> ThemeStore {
    ThemeStore::in_memory()
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
fn open_store() -> ThemeStore {
    let config = crate::configs::ThemeConfig::from_env();
    let options = crate::theme::StoreOptions {
        persist: config.persist,
        ..crate::theme::StoreOptions::default()
    };
    ThemeStore::with_options(options, crate::theme::FileStorage::new(config.store_path))
}

/// Opens the theme store, installs the `data-theme` plugin on the document
/// root and provides a [`ThemeContext`] to `children`. The context's signal
/// follows the store, so any mutation re-renders readers.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let store = use_hook(open_store);
    let theme = use_signal(|| store.current());
    use_hook(|| {
        install(&store, document_root());
        store.subscribe(move |state| {
            let mut theme = theme;
            if *theme.peek() != state.current {
                theme.set(state.current);
            }
        });
        log::info!("Theme store {:?} ready with {}", store.id(), store.current());
    });

    #[cfg(target_arch = "wasm32")]
    {
        let store = store.clone();
        use_effect(move || {
            store.reload();
        });
    }

    use_context_provider(|| ThemeContext { store, theme });

    rsx! {
        {children}
    }
}
