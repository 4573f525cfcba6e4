//! Status bar widget — persistent one-line session context display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget; decoupled from the session type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// The signed-in user's display name.
    pub name: String,
    /// The signed-in user's e-mail address.
    pub email: String,
}

/// Renders a one-line status bar showing who is signed in.
///
/// Renders nothing if `ctx.name` is empty (signed out).
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    if ctx.name.is_empty() {
        return;
    }

    let cyan = Style::default().fg(Color::Cyan);
    let gray = Style::default().fg(Color::DarkGray);

    let spans = vec![
        Span::styled(format!("Welcome, {}", ctx.name), cyan),
        Span::styled(format!("  <{}>", ctx.email), gray),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
