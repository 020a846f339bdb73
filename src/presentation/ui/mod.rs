//! UI screens.

mod app;
mod home_screen;
mod login_screen;

pub use app::App;
pub use home_screen::HomeScreen;
pub use login_screen::{LoginAction, LoginScreen};
