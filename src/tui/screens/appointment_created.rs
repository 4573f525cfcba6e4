//! Confirmation screen shown after an appointment is booked.

use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::confirmation_date;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// State for the booking confirmation screen.
#[derive(Debug, Default)]
pub struct AppointmentCreatedState {
    provider_name: String,
    time: Option<NaiveDateTime>,
}

impl AppointmentCreatedState {
    /// Records the booking to confirm.
    pub fn set(&mut self, provider_name: impl Into<String>, time: NaiveDateTime) {
        self.provider_name = provider_name.into();
        self.time = Some(time);
    }

    /// Returns the confirmation text, e.g.
    /// `Friday, August 28, 2026 at 14:00 with Sam`.
    pub fn summary(&self) -> Option<String> {
        self.time
            .map(|time| format!("{} with {}", confirmation_date(&time), self.provider_name))
    }
}

impl ScreenState for AppointmentCreatedState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => Action::Navigate(Screen::Dashboard),
            _ => Action::None,
        }
    }
}

/// Renders the booking confirmation screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_appointment_created(state: &AppointmentCreatedState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Appointment booked ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let lines = vec![
        Line::from(""),
        Line::styled(
            "Your appointment is booked!",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(state.summary().unwrap_or_default()),
        Line::from(""),
        Line::styled(
            "Press Enter to return to the dashboard",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
