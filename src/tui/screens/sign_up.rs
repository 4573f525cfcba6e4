//! Sign-up screen — account creation form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::api::NewUser;
use crate::form::{FormRegistry, Rule, Schema, submit};
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::{FormView, Input, draw_form};

/// State for the sign-up screen.
#[derive(Debug)]
pub struct SignUpState {
    view: FormView,
    registry: FormRegistry,
}

impl Default for SignUpState {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpState {
    /// Creates the sign-up form with empty fields.
    pub fn new() -> Self {
        let view = FormView::new(vec![
            Input::new("name", "Name"),
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

    /// Resets the form to its initial empty state.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.view.clear_errors();
    }

    fn schema() -> Schema {
        Schema::new()
            .field("name", vec![Rule::required("Enter your name")])
            .field(
                "email",
                vec![
                    Rule::required("Enter your e-mail"),
                    Rule::email("Enter a valid e-mail"),
                ],
            )
            .field(
                "password",
                vec![Rule::min_len(6, "Password must be at least 6 characters")],
            )
    }

    fn submit(&mut self) -> Action {
        let action = submit(&mut self.registry, &Self::schema(), |data| {
            Action::SignUp(NewUser {
                name: data.get("name").cloned().unwrap_or_default(),
                email: data.get("email").cloned().unwrap_or_default(),
                password: data.get("password").cloned().unwrap_or_default(),
            })
        });
        self.view.set_errors(self.registry.errors());
        action.unwrap_or(Action::None)
    }
}

impl ScreenState for SignUpState {
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
            KeyCode::Esc => Action::Navigate(Screen::SignIn),
            _ => Action::None,
        }
    }
}

/// Renders the sign-up screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_sign_up(state: &SignUpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Create your account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(9),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.view(), frame, form_area);

    let footer = Paragraph::new(Line::from("Enter: create account  Esc: back to sign-in"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
