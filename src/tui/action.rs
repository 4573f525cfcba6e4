//! Actions returned by screen event handlers.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::KeyEvent;

use crate::api::{NewUser, ProfileUpdate};
use crate::model::Provider;

use super::app::Screen;
use super::widgets::Notice;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to perform API calls, mutate the session,
/// and navigate between screens; screens themselves stay side-effect
/// free.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Show a blocking notice dialog over the current screen.
    Notice(Notice),
    /// Exchange credentials for a session.
    SignIn { email: String, password: String },
    /// Create a new account.
    SignUp(NewUser),
    /// Request a password recovery e-mail.
    RecoverPassword { email: String },
    /// Clear the session and return to sign-in.
    SignOut,
    /// Update the signed-in user's profile.
    UpdateProfile(ProfileUpdate),
    /// Upload a new avatar image from the given path.
    UploadAvatar(PathBuf),
    /// Open the scheduling screen for the selected provider.
    StartBooking(Provider),
    /// Fetch a provider's availability for a day.
    LoadAvailability {
        provider_id: String,
        date: NaiveDate,
    },
    /// Book the chosen slot with the chosen provider.
    BookAppointment {
        provider: Provider,
        time: NaiveDateTime,
    },
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}
