pub mod views;
pub mod components;
pub mod theme;
mod routes;
mod configs;
mod error;

pub use crate::routes::*;
pub use crate::configs::{ get_persist_flag, get_store_path, ThemeConfig };
pub use crate::error::{ StorageError, ThemeError };
