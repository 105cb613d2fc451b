mod env_validate;

pub use env_validate::{ get_store_path, get_persist_flag, ThemeConfig };
