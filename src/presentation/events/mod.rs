//! Event handling.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Terminal event handler.
pub struct EventHandler {
    poll_timeout: Duration,
}

impl EventHandler {
    const DEFAULT_POLL_TIMEOUT_MS: u64 = 100;

    /// Creates new handler with default timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            poll_timeout: Duration::from_millis(Self::DEFAULT_POLL_TIMEOUT_MS),
        }
    }

    /// Creates handler with custom timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            poll_timeout: timeout,
        }
    }

    /// Polls for events.
    ///
    /// # Errors
    /// Returns IO error if polling fails.
    pub fn poll(&self) -> std::io::Result<Option<Event>> {
        if event::poll(self.poll_timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Checks if key is a quit event. Includes `q`, which only applies on
    /// screens without text entry.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Checks if key is a cancel event, safe to honor while typing.
    #[must_use]
    pub fn is_cancel_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Checks if key is a submit event.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }

    /// Checks if key toggles value visibility.
    #[must_use]
    pub fn is_toggle_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('h'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Tab,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
