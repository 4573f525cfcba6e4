//! A column of input controls with focus management and error display.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::input::Input;
use crate::form::{FieldErrors, FormRegistry};

/// The visual side of a form: an ordered list of [`Input`] controls and
/// the focus index. Values and errors live in the [`FormRegistry`]; the
/// view is a projection of it.
#[derive(Debug)]
pub struct FormView {
    inputs: Vec<Input>,
    focus: usize,
}

impl FormView {
    /// Creates a view over the given inputs. Focus starts on the first.
    pub fn new(inputs: Vec<Input>) -> Self {
        Self { inputs, focus: 0 }
    }

    /// Registers every input's handle with the registry, keyed by the
    /// input's name. Re-registration overwrites, so calling this on a
    /// rebuilt view never duplicates entries.
    pub fn register_all(&self, registry: &mut FormRegistry) {
        for input in &self.inputs {
            registry.register(input.name(), Box::new(input.handle()));
        }
    }

    /// Returns the index of the focused input.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to the next input, wrapping around.
    pub fn focus_next(&mut self) {
        if self.inputs.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.inputs.len();
    }

    /// Moves focus to the previous input, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.inputs.is_empty() {
            return;
        }
        self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
    }

    /// Appends a character to the focused input.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(input) = self.inputs.get_mut(self.focus) {
            input.push_char(ch);
        }
    }

    /// Deletes the last character from the focused input.
    pub fn delete_char(&mut self) {
        if let Some(input) = self.inputs.get_mut(self.focus) {
            input.pop_char();
        }
    }

    /// Projects the registry's error map onto the inputs, replacing any
    /// prior messages.
    pub fn set_errors(&mut self, errors: &FieldErrors) {
        for input in &mut self.inputs {
            input.set_error(errors.get(input.name()).cloned());
        }
    }

    /// Clears every input's error message.
    pub fn clear_errors(&mut self) {
        for input in &mut self.inputs {
            input.set_error(None);
        }
    }

    /// Returns the input registered under `name`.
    pub fn input(&self, name: &str) -> Option<&Input> {
        self.inputs.iter().find(|input| input.name() == name)
    }

    /// Returns all inputs in display order.
    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }
}

/// Renders the form as a column of bordered inputs with any error text
/// below each one.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(view: &FormView, frame: &mut Frame, area: Rect) {
    let row_height = 3_u16;
    let constraints: Vec<Constraint> = view
        .inputs
        .iter()
        .map(|_| Constraint::Length(row_height))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, input) in view.inputs.iter().enumerate() {
        let is_focused = i == view.focus;

        let border_color = if input.error().is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .title(input.label().to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = vec![Span::raw(input.display_value())];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);

        if let Some(err) = input.error() {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + row_height.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_view() -> FormView {
        FormView::new(vec![
            Input::new("email", "E-mail"),
            Input::new("password", "Password").masked(),
        ])
    }

    mod focus {
        use super::*;

        #[test]
        fn starts_on_first_input() {
            let view = make_view();
            assert_eq!(view.focus(), 0);
        }

        #[test]
        fn next_advances_and_wraps() {
            let mut view = make_view();
            view.focus_next();
            assert_eq!(view.focus(), 1);
            view.focus_next();
            assert_eq!(view.focus(), 0);
        }

        #[test]
        fn prev_wraps_backward() {
            let mut view = make_view();
            view.focus_prev();
            assert_eq!(view.focus(), 1);
        }

        #[test]
        fn empty_view_focus_is_noop() {
            let mut view = FormView::new(vec![]);
            view.focus_next();
            view.focus_prev();
            assert_eq!(view.focus(), 0);
        }
    }

    mod typing {
        use super::*;

        #[test]
        fn chars_land_in_focused_input() {
            let mut view = make_view();
            view.insert_char('a');
            view.focus_next();
            view.insert_char('s');
            assert_eq!(view.input("email").unwrap().value(), "a");
            assert_eq!(view.input("password").unwrap().value(), "s");
        }

        #[test]
        fn delete_removes_from_focused_input() {
            let mut view = make_view();
            view.insert_char('a');
            view.insert_char('b');
            view.delete_char();
            assert_eq!(view.input("email").unwrap().value(), "a");
        }
    }

    mod registry_wiring {
        use super::*;

        #[test]
        fn register_all_exposes_every_input() {
            let view = make_view();
            let mut registry = FormRegistry::new();
            view.register_all(&mut registry);
            let names: Vec<_> = registry.names().collect();
            assert_eq!(names, vec!["email", "password"]);
        }

        #[test]
        fn typed_values_visible_through_registry() {
            let mut view = make_view();
            let mut registry = FormRegistry::new();
            view.register_all(&mut registry);
            view.insert_char('x');
            assert_eq!(registry.field_value("email"), Some("x".to_string()));
        }

        #[test]
        fn registry_writes_visible_through_view() {
            let view = make_view();
            let mut registry = FormRegistry::new();
            view.register_all(&mut registry);
            registry.set_field_value("email", "a@b.co");
            assert_eq!(view.input("email").unwrap().value(), "a@b.co");
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn set_errors_projects_messages_onto_inputs() {
            let mut view = make_view();
            let mut errors = FieldErrors::new();
            errors.insert("email".into(), "required".into());
            view.set_errors(&errors);
            assert_eq!(view.input("email").unwrap().error(), Some("required"));
            assert_eq!(view.input("password").unwrap().error(), None);
        }

        #[test]
        fn set_errors_replaces_prior_messages() {
            let mut view = make_view();
            let mut first = FieldErrors::new();
            first.insert("email".into(), "old".into());
            view.set_errors(&first);
            view.set_errors(&FieldErrors::new());
            assert_eq!(view.input("email").unwrap().error(), None);
        }

        #[test]
        fn clear_errors_removes_all_messages() {
            let mut view = make_view();
            let mut errors = FieldErrors::new();
            errors.insert("email".into(), "bad".into());
            errors.insert("password".into(), "bad".into());
            view.set_errors(&errors);
            view.clear_errors();
            assert!(view.inputs().iter().all(|i| i.error().is_none()));
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

        fn render(view: &FormView, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_form(view, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_labels_and_values() {
            let mut view = make_view();
            view.insert_char('a');
            let output = render(&view, 40, 10);
            assert!(output.contains("E-mail"));
            assert!(output.contains("Password"));
            assert!(output.contains('a'));
        }

        #[test]
        fn masked_input_renders_bullets_not_text() {
            let mut view = make_view();
            view.focus_next();
            view.insert_char('s');
            view.insert_char('s');
            let output = render(&view, 40, 10);
            assert!(output.contains("\u{2022}\u{2022}"));
            assert!(!output.contains("ss"));
        }

        #[test]
        fn renders_error_text_under_input() {
            let mut view = make_view();
            let mut errors = FieldErrors::new();
            errors.insert("email".into(), "Enter your e-mail".into());
            view.set_errors(&errors);
            let output = render(&view, 40, 10);
            assert!(output.contains("Enter your e-mail"));
        }
    }
}
