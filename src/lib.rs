//! NooBank - a mobile-style banking mockup for the terminal.
//!
//! This crate renders a fictional bank's first screen in the terminal: a
//! login form asking for the user's name, then a home screen with a masked
//! account balance, a row of shortcuts, and a fixed statement of mock
//! transactions. There is no backend and no persistence.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Domain layer containing entities, money handling, and error types.
pub mod domain;
/// Infrastructure layer containing configuration loading.
pub mod infrastructure;
/// Presentation layer containing UI screens, widgets, and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "noobank";
