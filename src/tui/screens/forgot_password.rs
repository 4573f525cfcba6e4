//! Forgot-password screen — requests a recovery e-mail.

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

/// State for the forgot-password screen.
#[derive(Debug)]
pub struct ForgotPasswordState {
    view: FormView,
    registry: FormRegistry,
}

impl Default for ForgotPasswordState {
    fn default() -> Self {
        Self::new()
    }
}

impl ForgotPasswordState {
    /// Creates the recovery form with an empty e-mail field.
    pub fn new() -> Self {
        let view = FormView::new(vec![Input::new("email", "E-mail")]);
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
        Schema::new().field(
            "email",
            vec![
                Rule::required("Enter your e-mail"),
                Rule::email("Enter a valid e-mail"),
            ],
        )
    }

    fn submit(&mut self) -> Action {
        let action = submit(&mut self.registry, &Self::schema(), |data| {
            Action::RecoverPassword {
                email: data.get("email").cloned().unwrap_or_default(),
            }
        });
        self.view.set_errors(self.registry.errors());
        action.unwrap_or(Action::None)
    }
}

impl ScreenState for ForgotPasswordState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
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

/// Renders the forgot-password screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_forgot_password(state: &ForgotPasswordState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Recover password ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.view(), frame, form_area);

    let footer = Paragraph::new(Line::from("Enter: send recovery e-mail  Esc: back"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
