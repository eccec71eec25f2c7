//! File-backed session persistence.

use helpdesk_core::auth::{SessionStore, StoredSession};
use helpdesk_core::error::{HelpdeskError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Persists the current session as a single JSON file.
///
/// ```text
/// base_dir/
/// └── session.json
/// ```
///
/// Nothing is encrypted and no expiry is tracked; a stored token that the
/// server no longer accepts simply fails the next request.
pub struct FileSessionStore {
    base_dir: PathBuf,
}

impl FileSessionStore {
    /// Creates a store rooted at the given directory, creating it if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)
            .map_err(|err| HelpdeskError::data_access(format!(
                "failed to create session directory {base_dir:?}: {err}"
            )))?;
        Ok(Self { base_dir })
    }

    /// Creates a store at the default location (`~/.helpdesk`).
    pub fn default_location() -> Result<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| HelpdeskError::data_access("failed to get home directory"))?;
        Self::new(home_dir.join(".helpdesk"))
    }

    fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &StoredSession) -> Result<()> {
        let json = serde_json::to_string_pretty(session)?;
        fs::write(self.session_file(), json)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredSession>> {
        let file_path = self.session_file();
        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path)?;
        match serde_json::from_str(&json) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                // A session file we cannot read is as good as none; drop it
                // so the next load starts clean.
                tracing::warn!(?file_path, %err, "discarding unreadable session file");
                self.clear()?;
                Ok(None)
            }
        }
    }

    fn clear(&self) -> Result<()> {
        let file_path = self.session_file();
        if file_path.exists() {
            fs::remove_file(&file_path)?;
        }
        Ok(())
    }
}
