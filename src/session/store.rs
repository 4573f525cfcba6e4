//! JSON-file persistence for the signed-in session.

use std::fs;
use std::path::PathBuf;

use super::AuthSession;
use super::error::SessionError;

const SESSION_FILE: &str = "session.json";

/// Persists the session as `chairside/session.json` under the XDG data
/// directory.
pub struct SessionStore {
    base_path: PathBuf,
}

impl SessionStore {
    /// Creates a store under the XDG data directory, creating the
    /// `chairside` directory if it does not already exist.
    pub fn new() -> Result<Self, SessionError> {
        let data_dir = dirs::data_dir().ok_or(SessionError::NoDataDir)?;
        let base_path = data_dir.join("chairside");
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Creates a store rooted at the given path.
    #[cfg(test)]
    pub(crate) fn with_path(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let base_path = path.into();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    fn session_path(&self) -> PathBuf {
        self.base_path.join(SESSION_FILE)
    }

    /// Writes the session to disk, overwriting any prior one.
    pub fn save(&self, session: &AuthSession) -> Result<(), SessionError> {
        let json = serde_json::to_string(session)?;
        fs::write(self.session_path(), json)?;
        Ok(())
    }

    /// Reads the persisted session. A missing file means signed out; a
    /// present but unparseable file is an error.
    pub fn load(&self) -> Result<Option<AuthSession>, SessionError> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Deletes the persisted session if one exists.
    pub fn clear(&self) -> Result<(), SessionError> {
        let path = self.session_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
