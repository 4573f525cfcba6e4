//! Imperative handles to input controls.

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::{Rc, Weak};

/// Imperative access to a single input control's value.
///
/// A handle lets the registry read, overwrite, or clear a control without
/// the enclosing screen re-rendering: the next frame simply paints from
/// the shared cell. Handles never own the control; once the control is
/// gone, `write`/`clear` are no-ops and `read` returns an empty string.
pub trait FieldHandle: Debug {
    /// Returns the control's current value.
    fn read(&self) -> String;

    /// Replaces the control's value.
    fn write(&self, value: &str);

    /// Resets the control's value to empty.
    fn clear(&self);
}

/// A [`FieldHandle`] over a shared string cell.
///
/// Holds the cell weakly: dropping the owning control tears the handle
/// down to a no-op rather than keeping the buffer alive.
#[derive(Debug, Clone)]
pub struct CellHandle {
    cell: Weak<RefCell<String>>,
}

impl CellHandle {
    /// Creates a handle to the given cell without taking ownership of it.
    pub fn new(cell: &Rc<RefCell<String>>) -> Self {
        Self {
            cell: Rc::downgrade(cell),
        }
    }
}

impl FieldHandle for CellHandle {
    fn read(&self) -> String {
        self.cell
            .upgrade()
            .map(|cell| cell.borrow().clone())
            .unwrap_or_default()
    }

    fn write(&self, value: &str) {
        if let Some(cell) = self.cell.upgrade() {
            *cell.borrow_mut() = value.to_string();
        }
    }

    fn clear(&self) {
        self.write("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cell(value: &str) -> Rc<RefCell<String>> {
        Rc::new(RefCell::new(value.to_string()))
    }

    #[test]
    fn read_returns_cell_contents() {
        let cell = make_cell("hello");
        let handle = CellHandle::new(&cell);
        assert_eq!(handle.read(), "hello");
    }

    #[test]
    fn write_replaces_cell_contents() {
        let cell = make_cell("old");
        let handle = CellHandle::new(&cell);
        handle.write("new");
        assert_eq!(*cell.borrow(), "new");
        assert_eq!(handle.read(), "new");
    }

    #[test]
    fn clear_empties_cell() {
        let cell = make_cell("something");
        let handle = CellHandle::new(&cell);
        handle.clear();
        assert_eq!(*cell.borrow(), "");
    }

    #[test]
    fn handle_does_not_keep_cell_alive() {
        let cell = make_cell("x");
        let _handle = CellHandle::new(&cell);
        assert_eq!(Rc::strong_count(&cell), 1);
    }

    mod torn_down_control {
        use super::*;

        fn dropped_handle() -> CellHandle {
            let cell = make_cell("gone");
            CellHandle::new(&cell)
        }

        #[test]
        fn read_returns_empty() {
            let handle = dropped_handle();
            assert_eq!(handle.read(), "");
        }

        #[test]
        fn write_is_noop() {
            let handle = dropped_handle();
            handle.write("ignored");
            assert_eq!(handle.read(), "");
        }

        #[test]
        fn clear_is_noop() {
            let handle = dropped_handle();
            handle.clear();
            assert_eq!(handle.read(), "");
        }
    }
}
