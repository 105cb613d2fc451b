mod home;
mod navbar;

pub use home::Home;
pub use navbar::Navbar;
