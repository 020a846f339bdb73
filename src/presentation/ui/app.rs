//! Main application orchestrator.

use crossterm::event::{Event, KeyEvent};
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info};

use crate::domain::entities::{AccountState, sample_statement};
use crate::infrastructure::AppConfig;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{HomeScreen, LoginAction, LoginScreen};

/// The two screens of the session. Login transitions to Home on submit;
/// there is no way back (no logout).
enum CurrentScreen {
    Login(LoginScreen),
    Home,
}

/// Application orchestrator: owns the account state, the active screen, and
/// the event loop. Every handled event is followed by a full-frame redraw
/// derived from the state.
pub struct App {
    screen: CurrentScreen,
    account: AccountState,
    theme: Theme,
    events: EventHandler,
}

impl App {
    /// Creates the app from configuration.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let theme = Theme::new(&config.theme.accent_color);
        let mut account = AccountState::new(sample_statement());
        if config.show_values {
            account.toggle_visibility();
        }

        Self {
            screen: CurrentScreen::Login(LoginScreen::new(&theme)),
            account,
            theme,
            events: EventHandler::new(),
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns error if terminal drawing or event polling fails.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        terminal.draw(|frame| self.render(frame))?;

        loop {
            let Some(event) = self.events.poll()? else {
                continue;
            };

            if let Event::Key(key) = event
                && self.handle_key(key) == EventResult::Exit
            {
                break;
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        match &mut self.screen {
            CurrentScreen::Login(login) => {
                if EventHandler::is_cancel_event(&key) {
                    return EventResult::Exit;
                }

                if login.handle_key(key) == LoginAction::Submit {
                    self.account.set_user_name(login.name());
                    info!(user = %self.account.user_name(), "Login submitted");
                    self.screen = CurrentScreen::Home;
                }

                EventResult::Consumed
            }
            CurrentScreen::Home => {
                if EventHandler::is_quit_event(&key) {
                    return EventResult::Exit;
                }

                if EventHandler::is_toggle_event(&key) {
                    self.account.toggle_visibility();
                    debug!(
                        visible = self.account.values_visible(),
                        "Visibility toggled"
                    );
                    return EventResult::Consumed;
                }

                EventResult::Continue
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        match &self.screen {
            CurrentScreen::Login(login) => {
                frame.render_widget(login, frame.area());
            }
            CurrentScreen::Home => {
                frame.render_widget(HomeScreen::new(&self.account, &self.theme), frame.area());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(&AppConfig::default())
    }

    #[test]
    fn test_starts_on_login_masked() {
        let app = app();
        assert!(matches!(app.screen, CurrentScreen::Login(_)));
        assert_eq!(app.account.user_name(), "Cliente");
        assert!(!app.account.values_visible());
    }

    #[test]
    fn test_show_values_config() {
        let config = AppConfig {
            show_values: true,
            ..AppConfig::default()
        };
        let app = App::new(&config);
        assert!(app.account.values_visible());
    }

    #[test]
    fn test_login_to_home_scenario() {
        let mut app = app();

        for c in "Maria".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert!(matches!(app.screen, CurrentScreen::Home));
        assert_eq!(app.account.user_name(), "Maria");
        assert!(!app.account.values_visible());

        app.handle_key(key(KeyCode::Char('h')));
        assert!(app.account.values_visible());

        app.handle_key(key(KeyCode::Char('h')));
        assert!(!app.account.values_visible());
    }

    #[test]
    fn test_empty_login_falls_back_to_default_name() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));

        assert!(matches!(app.screen, CurrentScreen::Home));
        assert_eq!(app.account.user_name(), "Cliente");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(key(KeyCode::Esc)), EventResult::Exit);

        let mut app = self::app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), EventResult::Exit);
    }

    #[test]
    fn test_q_types_on_login_screen() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.account.user_name(), "q");
    }
}
