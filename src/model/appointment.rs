//! Appointment timestamp construction and the service's wire format.

use chrono::{NaiveDate, NaiveDateTime};

/// The service's appointment date format, e.g. `2026-08-28:14:00:00`.
const WIRE_FORMAT: &str = "%Y-%m-%d:%H:%M:%S";

/// Combines a calendar date and an hour slot into the appointment
/// timestamp, with minutes and seconds zeroed.
///
/// Returns `None` for hours outside 0–23.
pub fn appointment_time(date: NaiveDate, hour: u8) -> Option<NaiveDateTime> {
    date.and_hms_opt(u32::from(hour), 0, 0)
}

/// Renders a timestamp in the booking service's wire format.
pub fn wire_date(time: &NaiveDateTime) -> String {
    time.format(WIRE_FORMAT).to_string()
}

/// Renders a timestamp for the confirmation screen,
/// e.g. `Friday, August 28, 2026 at 14:00`.
pub fn confirmation_date(time: &NaiveDateTime) -> String {
    time.format("%A, %B %-d, %Y at %H:%M").to_string()
}
