mod theme_provider;
mod theme_toggle;

pub use theme_provider::{ ThemeContext, ThemeProvider };
pub use theme_toggle::{ ThemePicker, ThemeToggle };
