//! A single named text input control.

use std::cell::RefCell;
use std::rc::Rc;

use crate::form::CellHandle;

/// A text input that owns its value cell and hands out imperative
/// handles to it.
///
/// The cell is the authoritative value; the registry's handle and the
/// widget both read from it, so an imperative write shows up on the next
/// frame without any screen-level plumbing.
#[derive(Debug)]
pub struct Input {
    name: String,
    label: String,
    cell: Rc<RefCell<String>>,
    error: Option<String>,
    masked: bool,
}

impl Input {
    /// Creates an empty input registered under `name`.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            cell: Rc::new(RefCell::new(String::new())),
            error: None,
            masked: false,
        }
    }

    /// Renders the value as bullets (passwords).
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Returns the field name this input registers under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns a weak imperative handle to this input's cell.
    pub fn handle(&self) -> CellHandle {
        CellHandle::new(&self.cell)
    }

    /// Returns the current value.
    pub fn value(&self) -> String {
        self.cell.borrow().clone()
    }

    /// Returns the value as rendered: masked inputs show one bullet per
    /// character.
    pub fn display_value(&self) -> String {
        let value = self.cell.borrow();
        if self.masked {
            "\u{2022}".repeat(value.chars().count())
        } else {
            value.clone()
        }
    }

    /// Appends a typed character.
    pub fn push_char(&mut self, ch: char) {
        self.cell.borrow_mut().push(ch);
    }

    /// Deletes the last character.
    pub fn pop_char(&mut self) {
        self.cell.borrow_mut().pop();
    }

    /// Sets the validation message shown under the input.
    pub fn set_error(&mut self, message: Option<String>) {
        self.error = message;
    }

    /// Returns the validation message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldHandle;

    #[test]
    fn typing_updates_value() {
        let mut input = Input::new("email", "E-mail");
        input.push_char('a');
        input.push_char('b');
        assert_eq!(input.value(), "ab");
        input.pop_char();
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn handle_reads_and_writes_same_cell() {
        let mut input = Input::new("email", "E-mail");
        let handle = input.handle();
        input.push_char('x');
        assert_eq!(handle.read(), "x");
        handle.write("forced@example.com");
        assert_eq!(input.value(), "forced@example.com");
    }

    #[test]
    fn handle_outliving_input_is_noop() {
        let handle = {
            let input = Input::new("email", "E-mail");
            input.handle()
        };
        handle.write("ignored");
        assert_eq!(handle.read(), "");
    }

    #[test]
    fn masked_input_displays_bullets() {
        let mut input = Input::new("password", "Password").masked();
        input.push_char('a');
        input.push_char('b');
        assert_eq!(input.display_value(), "\u{2022}\u{2022}");
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn unmasked_input_displays_value() {
        let mut input = Input::new("email", "E-mail");
        input.push_char('a');
        assert_eq!(input.display_value(), "a");
    }
}
