//! Client for the booking service's REST API.
//!
//! The [`BookingApi`] trait is the seam between the app and the network:
//! the shell talks to the trait, [`HttpApi`] implements it over a
//! blocking HTTP client, and tests substitute a fake.

mod client;
mod error;

pub use client::{BookingApi, HttpApi, NewUser, ProfileUpdate};
pub use error::ApiError;
