//! Reusable TUI widgets.

pub mod form_view;
pub mod input;
pub mod notice;
pub mod status_bar;

pub use form_view::{FormView, draw_form};
pub use input::Input;
pub use notice::{Notice, draw_notice};
pub use status_bar::{StatusBarContext, draw_status_bar};
