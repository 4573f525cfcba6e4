//! Dashboard screen — lists providers and routes to booking and profile.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::model::Provider;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// State for the dashboard screen.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Providers fetched on entry.
    providers: Vec<Provider>,
    /// Index of the highlighted provider, or `None` if the list is empty.
    selected: Option<usize>,
}

impl DashboardState {
    /// Creates an empty state. The `App` populates it on navigation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the provider list, resetting the highlight.
    pub fn set_providers(&mut self, providers: Vec<Provider>) {
        self.selected = if providers.is_empty() { None } else { Some(0) };
        self.providers = providers;
    }

    /// Returns the cached provider list.
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Returns the highlighted index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Moves the highlight up by one (no wrap).
    fn select_prev(&mut self) {
        self.selected = match self.selected {
            Some(i) if i > 0 => Some(i - 1),
            other => other,
        };
    }

    /// Moves the highlight down by one (no wrap).
    fn select_next(&mut self) {
        self.selected = match self.selected {
            Some(i) if i + 1 < self.providers.len() => Some(i + 1),
            other => other,
        };
    }

    fn open_selected(&self) -> Action {
        match self.selected {
            Some(i) => self
                .providers
                .get(i)
                .map_or(Action::None, |provider| {
                    Action::StartBooking(provider.clone())
                }),
            None => Action::None,
        }
    }
}

impl ScreenState for DashboardState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.select_prev();
                Action::None
            }
            KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('p') => Action::Navigate(Screen::Profile),
            KeyCode::Char('s') => Action::SignOut,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the dashboard screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_dashboard(state: &DashboardState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Barbers ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if state.providers().is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from("No barbers available right now."),
            Line::from("p: profile  s: sign out  q: quit"),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = Row::new(vec!["Name", "Hours"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = state
        .providers()
        .iter()
        .enumerate()
        .map(|(i, provider)| {
            let style = if state.selected() == Some(i) {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(vec![provider.name.clone(), "8:00 - 18:00".to_string()]).style(style)
        })
        .collect();

    let widths = [Constraint::Min(24), Constraint::Length(14)];
    let table = Table::new(rows, widths).header(header);

    let [table_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    frame.render_widget(table, table_area);

    let footer = Paragraph::new("Enter: book  p: profile  s: sign out  q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
