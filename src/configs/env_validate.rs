use std::path::PathBuf;

pub const STORE_PATH_VAR: &str = "THEME_STORE_PATH";
pub const PERSIST_VAR: &str = "THEME_PERSIST";
const DEFAULT_STORE_PATH: &str = ".theme_starter/store.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    /// File backing the store on native targets.
    pub store_path: PathBuf,
    pub persist: bool,
}

impl ThemeConfig {
    pub fn from_env() -> Self {
        Self {
            store_path: get_store_path(),
            persist: get_persist_flag(),
        }
    }
}

pub fn get_store_path() -> PathBuf {
    match std::env::var(STORE_PATH_VAR) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => {
            log::warn!("{} not set, using {}", STORE_PATH_VAR, DEFAULT_STORE_PATH);
            PathBuf::from(DEFAULT_STORE_PATH)
        }
    }
}

pub fn get_persist_flag() -> bool {
    let Ok(value) = std::env::var(PERSIST_VAR) else {
        return true;
    };
    let persist = parse_flag(&value).unwrap_or_else(|| {
        log::warn!("Unrecognised {}={:?}, keeping persistence on", PERSIST_VAR, value);
        true
    });
    log::info!("Theme persistence {}", if persist { "enabled" } else { "disabled" });
    persist
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
