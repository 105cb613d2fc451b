use std::rc::Rc;
use log::{ debug, info, warn };
use crate::error::{ StorageError, ThemeError };
use super::observable::{ Observable, SubscriptionId };
use super::state::{ Theme, ThemeState };
use super::storage::KeyValueStorage;

/// Key the store persists under unless told otherwise.
pub const DEFAULT_STORE_ID: &str = "theme";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    /// Storage key for the persisted state.
    pub id: String,
    /// When false the store neither restores nor writes its state.
    pub persist: bool,
    /// Read the persisted state at construction. When false the store
    /// starts at the default and waits for [`ThemeStore::reload`].
    pub restore: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            id: DEFAULT_STORE_ID.to_string(),
            persist: true,
            restore: true,
        }
    }
}

/// Holds the active theme and writes it through to storage on every
/// mutation.
///
/// The store is a handle: clones observe and mutate the same state.
#[derive(Clone)]
pub struct ThemeStore {
    id: Rc<str>,
    storage: Option<Rc<dyn KeyValueStorage>>,
    state: Observable<ThemeState>,
}

impl ThemeStore {
    /// Persisted store under [`DEFAULT_STORE_ID`].
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self::with_options(StoreOptions::default(), storage)
    }

    pub fn with_options(options: StoreOptions, storage: impl KeyValueStorage + 'static) -> Self {
        let storage = if options.persist {
            Some(Rc::new(storage) as Rc<dyn KeyValueStorage>)
        } else {
            None
        };
        let initial = match &storage {
            Some(storage) if options.restore => {
                load(storage.as_ref(), &options.id).unwrap_or_default()
            }
            _ => ThemeState::default(),
        };

        Self {
            id: Rc::from(options.id.as_str()),
            storage,
            state: Observable::new(initial),
        }
    }

    /// A store that is never persisted.
    pub fn in_memory() -> Self {
        Self {
            id: Rc::from(DEFAULT_STORE_ID),
            storage: None,
            state: Observable::new(ThemeState::default()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.storage.is_some()
    }

    pub fn state(&self) -> ThemeState {
        self.state.get()
    }

    pub fn current(&self) -> Theme {
        self.state().current
    }

    pub fn is_dark(&self) -> bool {
        self.state().is_dark()
    }

    /// Always persists and notifies, including when `theme` is already
    /// active.
    pub fn set_theme(&self, theme: Theme) {
        debug!("Setting theme to {}", theme);
        let state = ThemeState::new(theme);
        self.persist(&state);
        self.state.set(state);
    }

    /// Entry point for identifiers that arrive as text (query strings,
    /// form values). Unknown names leave the store untouched.
    pub fn set_theme_str(&self, value: &str) -> Result<(), ThemeError> {
        let theme = value.parse::<Theme>()?;
        self.set_theme(theme);
        Ok(())
    }

    pub fn toggle_theme(&self) {
        self.set_theme(self.current().toggled());
    }

    /// Re-reads the persisted state and, when one is found, notifies
    /// observers with it. Storage is not written. Returns whether a
    /// persisted state was applied.
    pub fn reload(&self) -> bool {
        let Some(storage) = &self.storage else {
            return false;
        };
        match load(storage.as_ref(), &self.id) {
            Some(state) => {
                self.state.set(state);
                true
            }
            None => false,
        }
    }

    /// Calls `callback` with the current state now and after every
    /// mutation.
    pub fn subscribe(&self, callback: impl Fn(&ThemeState) + 'static) -> SubscriptionId {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    fn persist(&self, state: &ThemeState) {
        let Some(storage) = &self.storage else {
            return;
        };
        let result = serde_json
            ::to_string(state)
            .map_err(StorageError::serialization)
            .and_then(|payload| storage.set_item(&self.id, &payload));
        if let Err(e) = result {
            warn!("Failed to persist theme under {:?}: {}", self.id, e);
        }
    }
}

fn load(storage: &dyn KeyValueStorage, id: &str) -> Option<ThemeState> {
    let payload = match storage.get_item(id) {
        Ok(Some(payload)) => payload,
        Ok(None) => {
            debug!("No persisted theme under {:?}", id);
            return None;
        }
        Err(e) => {
            warn!("Theme storage unreadable: {}", e);
            return None;
        }
    };

    match serde_json::from_str::<ThemeState>(&payload) {
        Ok(state) => {
            info!("Restored theme {} from {:?}", state.current, id);
            Some(state)
        }
        Err(e) => {
            warn!("Ignoring invalid persisted theme {:?}: {}", payload, e);
            None
        }
    }
}
