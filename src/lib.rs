#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Terminal client for booking barbershop appointments.
//!
//! The interesting part is the form engine in [`form`]: named input
//! controls register imperative handles with a per-screen registry,
//! declarative schemas validate the extracted record in one pass, and a
//! submission coordinator either hands the clean data to the caller or
//! pushes field errors back onto the controls. Everything else is the
//! shell around it: domain model, booking-service client, persisted
//! session, and the ratatui screens.

pub mod api;
pub mod form;
pub mod model;
pub mod session;
pub mod tui;
