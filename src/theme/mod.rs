mod observable;
mod plugin;
mod state;
mod storage;
mod store;

pub use observable::{ Observable, SubscriptionId };
pub use plugin::{ document_root, install, EvalRoot, PluginHandle, RootElement, THEME_ATTRIBUTE };
pub use state::{ Theme, ThemeState };
pub use storage::{ FileStorage, KeyValueStorage, MemoryStorage };
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use store::{ StoreOptions, ThemeStore, DEFAULT_STORE_ID };
