mod appointment;
mod availability;
mod user;

pub use appointment::{appointment_time, confirmation_date, wire_date};
pub use availability::{AvailabilitySlot, DaySchedule, HourSlot};
pub use user::{Provider, User};
