//! Login screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

/// Action produced by a login key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    /// Nothing to do.
    None,
    /// Enter the app. An empty name is allowed; the state coerces it.
    Submit,
}

/// Login screen UI: the welcome card asking for the user's name.
pub struct LoginScreen {
    name_input: TextInput,
    accent: Color,
}

impl LoginScreen {
    /// Creates new login screen.
    #[must_use]
    pub fn new(theme: &Theme) -> Self {
        let mut name_input =
            TextInput::new("Como podemos te chamar?").placeholder("Digite seu nome aqui...");
        name_input.set_focused(true);

        Self {
            name_input,
            accent: theme.accent,
        }
    }

    /// Returns the entered name, possibly empty.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name_input.value()
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        match key.code {
            KeyCode::Enter => return LoginAction::Submit,
            KeyCode::Char(c) => {
                self.name_input.input_char(c);
            }
            KeyCode::Backspace => {
                self.name_input.backspace();
            }
            KeyCode::Delete => {
                self.name_input.delete();
            }
            KeyCode::Left => {
                self.name_input.move_left();
            }
            KeyCode::Right => {
                self.name_input.move_right();
            }
            KeyCode::Home => {
                self.name_input.move_start();
            }
            KeyCode::End => {
                self.name_input.move_end();
            }
            _ => {}
        }

        LoginAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(44),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
            .title(" NooBank ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let areas = inner_layout.areas::<5>(inner);

        let title = Paragraph::new("Bem-vindo(a) ao NooBank!").style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        title.render(areas[0], buf);

        (&self.name_input).render(areas[2], buf);

        let hints = Line::from(vec![
            Span::styled("Enter: entrar", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Esc: sair", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(hints).render(areas[4], buf);
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> LoginScreen {
        LoginScreen::new(&Theme::default())
    }

    #[test]
    fn test_initial_state() {
        let screen = screen();
        assert!(screen.name().is_empty());
    }

    #[test]
    fn test_typing() {
        let mut screen = screen();
        for c in "Maria".chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }

        assert_eq!(screen.name(), "Maria");
    }

    #[test]
    fn test_editing_keys() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Char('A')));
        screen.handle_key(key(KeyCode::Char('n')));
        screen.handle_key(key(KeyCode::Char('a')));
        screen.handle_key(key(KeyCode::Backspace));

        assert_eq!(screen.name(), "An");

        screen.handle_key(key(KeyCode::Home));
        screen.handle_key(key(KeyCode::Delete));
        assert_eq!(screen.name(), "n");
    }

    #[test]
    fn test_submit_with_name() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Char('x')));
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::Submit);
    }

    #[test]
    fn test_submit_empty_is_allowed() {
        // Coercion to the default name happens in the account state.
        let mut screen = screen();
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::Submit);
    }
}
