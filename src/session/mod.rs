//! The signed-in session: an explicit current-user object with a defined
//! lifecycle (created at sign-in, replaced on profile refresh, cleared at
//! sign-out), persisted across runs as a JSON file.

mod error;
mod store;

use serde::{Deserialize, Serialize};

use crate::model::User;

pub use error::SessionError;
pub use store::SessionStore;

/// The authenticated pair returned by `POST sessions` and kept for the
/// lifetime of the sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// The current session plus its backing store. Every mutation is
/// persisted before it is observable, so a crash never loses a sign-in
/// or revives a sign-out.
pub struct Session {
    store: SessionStore,
    current: Option<AuthSession>,
}

impl Session {
    /// Loads the persisted session, if any, from the store.
    pub fn load(store: SessionStore) -> Result<Self, SessionError> {
        let current = store.load()?;
        Ok(Self { store, current })
    }

    /// Returns the active session, if signed in.
    pub fn current(&self) -> Option<&AuthSession> {
        self.current.as_ref()
    }

    /// Returns the signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.current.as_ref().map(|auth| &auth.user)
    }

    /// Returns the bearer token, if signed in.
    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|auth| auth.token.as_str())
    }

    /// Installs and persists a fresh session.
    pub fn sign_in(&mut self, auth: AuthSession) -> Result<(), SessionError> {
        self.store.save(&auth)?;
        self.current = Some(auth);
        Ok(())
    }

    /// Clears the session in memory and on disk.
    pub fn sign_out(&mut self) -> Result<(), SessionError> {
        self.store.clear()?;
        self.current = None;
        Ok(())
    }

    /// Replaces the user inside the active session, keeping the token.
    /// A no-op when signed out.
    pub fn update_user(&mut self, user: User) -> Result<(), SessionError> {
        if let Some(auth) = &mut self.current {
            auth.user = user;
            self.store.save(auth)?;
        }
        Ok(())
    }
}
