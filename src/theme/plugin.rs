//! Keeps the document root's `data-theme` attribute in step with the
//! [`ThemeStore`]. daisyUI picks its colour scheme from that attribute.

use log::debug;
use super::observable::SubscriptionId;
use super::store::ThemeStore;

pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Something the plugin can write the theme attribute onto.
pub trait RootElement {
    fn set_attribute(&self, name: &str, value: &str);
}

/// Sets the attribute by evaluating a script in the renderer, for targets
/// without direct DOM access (desktop and mobile webviews). Runs once the
/// renderer processes its queue rather than before the call returns.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvalRoot;

impl RootElement for EvalRoot {
    fn set_attribute(&self, name: &str, value: &str) {
        let script = format!(
            "document.documentElement.setAttribute({}, {});",
            js_string(name),
            js_string(value)
        );
        let _ = dioxus::prelude::document::eval(&script);
    }
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(target_arch = "wasm32")]
impl RootElement for web_sys::Element {
    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(e) = web_sys::Element::set_attribute(self, name, value) {
            log::warn!("Failed to set {} on document root: {:?}", name, e);
        }
    }
}

/// The root element for the current platform.
pub fn document_root() -> Box<dyn RootElement> {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        if let Some(root) = root {
            return Box::new(root);
        }
        log::warn!("No document root available, falling back to script evaluation");
    }

    Box::new(EvalRoot)
}

/// Returned by [`install`]; the application keeps it for its lifetime.
#[derive(Clone)]
pub struct PluginHandle {
    store: ThemeStore,
    subscription: SubscriptionId,
}

impl PluginHandle {
    pub fn uninstall(self) -> bool {
        self.store.unsubscribe(self.subscription)
    }
}

/// Writes the current theme onto `root` immediately, then again after
/// every store mutation.
pub fn install(store: &ThemeStore, root: impl RootElement + 'static) -> PluginHandle {
    let subscription = store.subscribe(move |state| {
        debug!("Applying {}={}", THEME_ATTRIBUTE, state.current);
        root.set_attribute(THEME_ATTRIBUTE, state.current.as_str());
    });

    PluginHandle {
        store: store.clone(),
        subscription,
    }
}

impl RootElement for Box<dyn RootElement> {
    fn set_attribute(&self, name: &str, value: &str) {
        (**self).set_attribute(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::theme::Theme;

    #[derive(Clone, Default)]
    struct RecordingRoot {
        writes: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl RootElement for RecordingRoot {
        fn set_attribute(&self, name: &str, value: &str) {
            self.writes.borrow_mut().push((name.to_string(), value.to_string()));
        }
    }

    #[test]
    fn test_install_applies_current_theme() {
        let store = ThemeStore::in_memory();
        store.set_theme(Theme::Dark);
        let root = RecordingRoot::default();

        install(&store, root.clone());

        assert_eq!(*root.writes.borrow(), vec![(THEME_ATTRIBUTE.to_string(), "dark".to_string())]);
    }

    #[test]
    fn test_uninstall_stops_updates() {
        let store = ThemeStore::in_memory();
        let root = RecordingRoot::default();
        let handle = install(&store, root.clone());

        assert!(handle.uninstall());
        store.toggle_theme();

        assert_eq!(root.writes.borrow().len(), 1);
    }

    #[test]
    fn test_js_string_escapes_quotes() {
        assert_eq!(js_string("dark"), "\"dark\"");
        assert_eq!(js_string("a\"b"), "\"a\\\"b\"");
    }
}
