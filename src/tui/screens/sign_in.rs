//! Sign-in screen — credentials form plus routes to sign-up and recovery.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::{FormRegistry, Rule, Schema, submit};
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::{FormView, Input, draw_form};

/// State for the sign-in screen.
#[derive(Debug)]
pub struct SignInState {
    view: FormView,
    registry: FormRegistry,
}

impl Default for SignInState {
    fn default() -> Self {
        Self::new()
    }
}

impl SignInState {
    /// Creates the sign-in form with empty fields.
    pub fn new() -> Self {
        let view = FormView::new(vec![
            Input::new("email", "E-mail"),
            Input::new("password", "Password").masked(),
        ]);
        let mut registry = FormRegistry::new();
        view.register_all(&mut registry);
        Self { view, registry }
    }

    /// Returns a reference to the form for rendering.
    pub fn view(&self) -> &FormView {
        &self.view
    }

    /// Returns the backing registry.
    pub fn registry(&self) -> &FormRegistry {
        &self.registry
    }

    /// Resets the form to its initial empty state.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.view.clear_errors();
    }

    fn schema() -> Schema {
        Schema::new()
            .field(
                "email",
                vec![
                    Rule::required("Enter your e-mail"),
                    Rule::email("Enter a valid e-mail"),
                ],
            )
            .field("password", vec![Rule::required("Enter your password")])
    }

    fn submit(&mut self) -> Action {
        let action = submit(&mut self.registry, &Self::schema(), |data| Action::SignIn {
            email: data.get("email").cloned().unwrap_or_default(),
            password: data.get("password").cloned().unwrap_or_default(),
        });
        self.view.set_errors(self.registry.errors());
        action.unwrap_or(Action::None)
    }
}

impl ScreenState for SignInState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.view.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.view.focus_prev();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.view.insert_char(ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.view.delete_char();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::F(2) => Action::Navigate(Screen::SignUp),
            KeyCode::F(3) => Action::Navigate(Screen::ForgotPassword),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the sign-in screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_sign_in(state: &SignInState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Sign in ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.view(), frame, form_area);

    let footer = Paragraph::new(Line::from(
        "Enter: sign in  F2: create account  F3: forgot password  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(state: &mut SignInState, s: &str) {
        for ch in s.chars() {
            state.handle_key(press(KeyCode::Char(ch)));
        }
    }

    fn fill_valid(state: &mut SignInState) {
        type_string(state, "ada@example.com");
        state.handle_key(press(KeyCode::Tab));
        type_string(state, "secret");
    }

    mod typing {
        use super::*;

        #[test]
        fn chars_fill_focused_field() {
            let mut state = SignInState::new();
            type_string(&mut state, "ada");
            assert_eq!(state.view().input("email").unwrap().value(), "ada");
        }

        #[test]
        fn tab_moves_to_password() {
            let mut state = SignInState::new();
            state.handle_key(press(KeyCode::Tab));
            type_string(&mut state, "s");
            assert_eq!(state.view().input("password").unwrap().value(), "s");
        }

        #[test]
        fn backspace_deletes_char() {
            let mut state = SignInState::new();
            type_string(&mut state, "ab");
            state.handle_key(press(KeyCode::Backspace));
            assert_eq!(state.view().input("email").unwrap().value(), "a");
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn f2_opens_sign_up() {
            let mut state = SignInState::new();
            assert_eq!(
                state.handle_key(press(KeyCode::F(2))),
                Action::Navigate(Screen::SignUp)
            );
        }

        #[test]
        fn f3_opens_forgot_password() {
            let mut state = SignInState::new();
            assert_eq!(
                state.handle_key(press(KeyCode::F(3))),
                Action::Navigate(Screen::ForgotPassword)
            );
        }

        #[test]
        fn esc_quits() {
            let mut state = SignInState::new();
            assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn valid_credentials_produce_sign_in_action() {
            let mut state = SignInState::new();
            fill_valid(&mut state);
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(
                action,
                Action::SignIn {
                    email: "ada@example.com".into(),
                    password: "secret".into(),
                }
            );
        }

        #[test]
        fn empty_submit_reports_both_fields() {
            let mut state = SignInState::new();
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert!(state.view().input("email").unwrap().error().is_some());
            assert!(state.view().input("password").unwrap().error().is_some());
        }

        #[test]
        fn missing_email_keeps_password_value() {
            let mut state = SignInState::new();
            state.handle_key(press(KeyCode::Tab));
            type_string(&mut state, "secret");

            let action = state.handle_key(press(KeyCode::Enter));

            assert_eq!(action, Action::None);
            assert!(state.view().input("email").unwrap().error().is_some());
            assert_eq!(
                state.registry().field_value("password"),
                Some("secret".to_string())
            );
        }

        #[test]
        fn malformed_email_reports_format_error() {
            let mut state = SignInState::new();
            type_string(&mut state, "not-an-email");
            state.handle_key(press(KeyCode::Tab));
            type_string(&mut state, "secret");
            state.handle_key(press(KeyCode::Enter));
            assert_eq!(
                state.view().input("email").unwrap().error(),
                Some("Enter a valid e-mail")
            );
        }

        #[test]
        fn errors_cleared_on_valid_resubmit() {
            let mut state = SignInState::new();
            state.handle_key(press(KeyCode::Enter));
            assert!(state.view().input("email").unwrap().error().is_some());

            fill_valid(&mut state);
            let action = state.handle_key(press(KeyCode::Enter));
            assert!(matches!(action, Action::SignIn { .. }));
            assert!(state.view().input("email").unwrap().error().is_none());
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn reset_clears_values_and_errors() {
            let mut state = SignInState::new();
            type_string(&mut state, "x");
            state.handle_key(press(KeyCode::Enter));
            state.reset();
            assert_eq!(state.view().input("email").unwrap().value(), "");
            assert!(state.view().input("email").unwrap().error().is_none());
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render(state: &SignInState, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_sign_in(state, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_title_and_fields() {
            let state = SignInState::new();
            let output = render(&state, 70, 16);
            assert!(output.contains("Sign in"));
            assert!(output.contains("E-mail"));
            assert!(output.contains("Password"));
        }

        #[test]
        fn renders_footer_keys() {
            let state = SignInState::new();
            let output = render(&state, 80, 16);
            assert!(output.contains("F2: create account"));
        }
    }
}
