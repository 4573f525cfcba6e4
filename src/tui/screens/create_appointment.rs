//! Scheduling screen — pick a provider, a day, and an hour slot.

use chrono::{Days, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{DaySchedule, HourSlot, Provider, appointment_time};
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::Notice;

/// State for the scheduling screen.
#[derive(Debug, Default)]
pub struct CreateAppointmentState {
    /// Providers known at the time booking started.
    providers: Vec<Provider>,
    /// Id of the provider the booking targets.
    provider_id: String,
    date: NaiveDate,
    /// Availability for `provider_id` on `date`; empty until fetched.
    schedule: DaySchedule,
    selected_hour: Option<u8>,
}

impl CreateAppointmentState {
    /// Begins a booking for `provider` on `date`. The schedule starts
    /// empty; follow up with [`set_schedule`](Self::set_schedule) once
    /// availability arrives.
    pub fn start(&mut self, provider: &Provider, providers: Vec<Provider>, date: NaiveDate) {
        self.provider_id = provider.id.clone();
        self.providers = providers;
        self.date = date;
        self.schedule = DaySchedule::default();
        self.selected_hour = None;
    }

    /// Returns the provider the booking currently targets, if it is
    /// still in the list.
    pub fn provider(&self) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == self.provider_id)
    }

    /// Returns the day being scheduled.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the fetched schedule.
    pub fn schedule(&self) -> &DaySchedule {
        &self.schedule
    }

    /// Returns the highlighted hour, if any.
    pub fn selected_hour(&self) -> Option<u8> {
        self.selected_hour
    }

    /// Installs freshly fetched availability. A previously selected
    /// hour that is no longer available is dropped.
    pub fn set_schedule(&mut self, schedule: DaySchedule) {
        self.schedule = schedule;
        if let Some(hour) = self.selected_hour {
            if !self.schedule.is_available(hour) {
                self.selected_hour = None;
            }
        }
    }

    /// The fetch the current provider and date call for.
    fn load_action(&self) -> Action {
        Action::LoadAvailability {
            provider_id: self.provider_id.clone(),
            date: self.date,
        }
    }

    fn cycle_provider(&mut self, step: isize) -> Action {
        let Some(current) = self
            .providers
            .iter()
            .position(|p| p.id == self.provider_id)
        else {
            return Action::None;
        };
        let len = self.providers.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        self.provider_id = self.providers[next].id.clone();
        self.schedule = DaySchedule::default();
        self.selected_hour = None;
        self.load_action()
    }

    fn step_date(&mut self, forward: bool) -> Action {
        let stepped = if forward {
            self.date.checked_add_days(Days::new(1))
        } else {
            self.date.checked_sub_days(Days::new(1))
        };
        let Some(date) = stepped else {
            return Action::None;
        };
        self.date = date;
        self.schedule = DaySchedule::default();
        self.selected_hour = None;
        self.load_action()
    }

    /// Moves the hour highlight through the available slots (no wrap).
    fn step_hour(&mut self, forward: bool) {
        let hours = self.schedule.available_hours();
        if hours.is_empty() {
            return;
        }
        self.selected_hour = match self.selected_hour {
            None => Some(hours[0]),
            Some(current) => {
                let at = hours.iter().position(|&h| h == current).unwrap_or(0);
                let next = if forward {
                    (at + 1).min(hours.len() - 1)
                } else {
                    at.saturating_sub(1)
                };
                Some(hours[next])
            }
        };
    }

    fn book(&self) -> Action {
        let Some(provider) = self.provider() else {
            return Action::Notice(Notice::new("Booking failed", "Unable to find provider"));
        };
        let Some(hour) = self.selected_hour else {
            return Action::Notice(Notice::new("Booking failed", "Choose a time"));
        };
        match appointment_time(self.date, hour) {
            Some(time) => Action::BookAppointment {
                provider: provider.clone(),
                time,
            },
            None => Action::Notice(Notice::new("Booking failed", "Choose a time")),
        }
    }
}

impl ScreenState for CreateAppointmentState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => self.cycle_provider(1),
            KeyCode::BackTab => self.cycle_provider(-1),
            KeyCode::Left => self.step_date(false),
            KeyCode::Right => self.step_date(true),
            KeyCode::Up => {
                self.step_hour(false);
                Action::None
            }
            KeyCode::Down => {
                self.step_hour(true);
                Action::None
            }
            KeyCode::Enter => self.book(),
            KeyCode::Esc => Action::Navigate(Screen::Dashboard),
            _ => Action::None,
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn slot_line(title: &str, slots: &[HourSlot], selected: Option<u8>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{title:<11}"),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for slot in slots {
        let style = if selected == Some(slot.hour) {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else if slot.available {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", slot.label), style));
        spans.push(Span::raw(" "));
    }
    if slots.is_empty() {
        spans.push(Span::styled("none", Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

/// Renders the scheduling screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_create_appointment(state: &CreateAppointmentState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Book an appointment ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [header_area, slots_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let provider_name = state
        .provider()
        .map_or("(unknown)".to_string(), |p| p.name.clone());
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Barber: ", Style::default().fg(Color::Yellow)),
            Span::raw(provider_name),
            Span::styled("  (Tab to change)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled("Date:   ", Style::default().fg(Color::Yellow)),
            Span::raw(state.date().format("%A, %B %-d, %Y").to_string()),
            Span::styled(
                "  (\u{2190}/\u{2192} to change)",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ]);
    frame.render_widget(header, header_area);

    let slots = Paragraph::new(vec![
        Line::from(""),
        slot_line("Morning", &state.schedule().morning, state.selected_hour()),
        Line::from(""),
        slot_line(
            "Afternoon",
            &state.schedule().afternoon,
            state.selected_hour(),
        ),
    ]);
    frame.render_widget(slots, slots_area);

    let footer =
        Paragraph::new("\u{2191}/\u{2193}: pick a time  Enter: book  Esc: back to dashboard")
            .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
