//! Profile screen — edit name, e-mail, password, and avatar.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::api::ProfileUpdate;
use crate::form::{FormData, FormRegistry, Rule, Schema, submit};
use crate::model::User;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::{FormView, Input, draw_form};

/// State for the profile screen.
#[derive(Debug)]
pub struct ProfileState {
    view: FormView,
    registry: FormRegistry,
    /// Path buffer for the avatar prompt; `Some` while the prompt is open.
    avatar_prompt: Option<String>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileState {
    /// Creates the profile form with empty fields. Call
    /// [`populate`](Self::populate) on entry to prefill from the session.
    pub fn new() -> Self {
        let view = FormView::new(vec![
            Input::new("name", "Name"),
            Input::new("email", "E-mail"),
            Input::new("old_password", "Current password").masked(),
            Input::new("password", "New password").masked(),
            Input::new("password_confirmation", "Confirm new password").masked(),
        ]);
        let mut registry = FormRegistry::new();
        view.register_all(&mut registry);
        Self {
            view,
            registry,
            avatar_prompt: None,
        }
    }

    /// Rebuilds the form and prefills name and e-mail from the user.
    ///
    /// A fresh mount: the inputs are recreated and re-registered, the
    /// password fields come back empty, and the current values are
    /// bulk-injected through the registry.
    pub fn populate(&mut self, user: &User) {
        *self = Self::new();
        let mut data = FormData::new();
        data.insert("name".into(), user.name.clone());
        data.insert("email".into(), user.email.clone());
        self.registry.set_data(&data);
    }

    /// Returns a reference to the form for rendering.
    pub fn view(&self) -> &FormView {
        &self.view
    }

    /// Returns the avatar prompt's current path while it is open.
    pub fn avatar_prompt(&self) -> Option<&str> {
        self.avatar_prompt.as_deref()
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
                vec![
                    Rule::required_with("old_password", "Enter a new password"),
                    Rule::min_len_with(
                        "old_password",
                        6,
                        "Password must be at least 6 characters",
                    ),
                ],
            )
            .field(
                "password_confirmation",
                vec![
                    Rule::required_with("old_password", "Confirm your new password"),
                    Rule::matches("password", "Passwords do not match"),
                ],
            )
    }

    fn submit(&mut self) -> Action {
        let action = submit(&mut self.registry, &Self::schema(), |data| {
            let field = |name: &str| data.get(name).cloned().unwrap_or_default();
            let changing_password = !field("old_password").is_empty();
            Action::UpdateProfile(ProfileUpdate {
                name: field("name"),
                email: field("email"),
                old_password: changing_password.then(|| field("old_password")),
                password: changing_password.then(|| field("password")),
                password_confirmation: changing_password
                    .then(|| field("password_confirmation")),
            })
        });
        self.view.set_errors(self.registry.errors());
        action.unwrap_or(Action::None)
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) -> Action {
        // Invariant: only called while the prompt is open.
        let Some(path) = &mut self.avatar_prompt else {
            return Action::None;
        };
        match key.code {
            KeyCode::Char(ch) => {
                path.push(ch);
                Action::None
            }
            KeyCode::Backspace => {
                path.pop();
                Action::None
            }
            KeyCode::Enter => {
                let chosen = path.clone();
                self.avatar_prompt = None;
                if chosen.is_empty() {
                    Action::None
                } else {
                    Action::UploadAvatar(PathBuf::from(chosen))
                }
            }
            KeyCode::Esc => {
                self.avatar_prompt = None;
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl ScreenState for ProfileState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.avatar_prompt.is_some() {
            return self.handle_prompt_key(key);
        }
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
            KeyCode::F(2) => {
                self.avatar_prompt = Some(String::new());
                Action::None
            }
            KeyCode::Esc => Action::Navigate(Screen::Dashboard),
            _ => Action::None,
        }
    }
}

/// Renders the profile screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_profile(state: &ProfileState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" My profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, prompt_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(15),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.view(), frame, form_area);

    if let Some(path) = state.avatar_prompt() {
        let prompt = Paragraph::new(Line::from(vec![
            Span::styled("Avatar file: ", Style::default().fg(Color::Yellow)),
            Span::raw(path),
            Span::styled("\u{2588}", Style::default()),
        ]));
        frame.render_widget(prompt, prompt_area);
    }

    let footer = Paragraph::new(Line::from(
        "Enter: save  F2: change avatar  Esc: back to dashboard",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
