//! TUI screen implementations.

pub mod appointment_created;
pub mod create_appointment;
pub mod dashboard;
pub mod forgot_password;
pub mod profile;
pub mod sign_in;
pub mod sign_up;

pub use appointment_created::{AppointmentCreatedState, draw_appointment_created};
pub use create_appointment::{CreateAppointmentState, draw_create_appointment};
pub use dashboard::{DashboardState, draw_dashboard};
pub use forgot_password::{ForgotPasswordState, draw_forgot_password};
pub use profile::{ProfileState, draw_profile};
pub use sign_in::{SignInState, draw_sign_in};
pub use sign_up::{SignUpState, draw_sign_up};
