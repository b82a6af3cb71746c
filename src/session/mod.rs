//! Client-held session persistence. The session is one composite record
//! (token, user, logged-in flag) written atomically via a temp file and
//! rename, so a read immediately after a write always observes either the
//! whole record or nothing. On-disk field names match the keys the rest of
//! the platform expects: `token`, `user`, `isLoggedIn` (string `"true"`).

use crate::errors::FlowError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOGGED_IN: &str = "true";

/// The {token, user, isLoggedIn} triple representing an authenticated
/// identity on this client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub user: Value,
    #[serde(rename = "isLoggedIn", default, with = "logged_in_flag")]
    pub is_logged_in: bool,
}

impl Session {
    #[must_use]
    pub fn new(token: String, user: Value) -> Self {
        Self {
            token,
            user,
            is_logged_in: true,
        }
    }

    /// A session may only drive the dashboard handoff when all three fields
    /// are present. Anything less aborts with an error instead of navigating
    /// with partial data.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.token.is_empty() && !self.user.is_null() && self.is_logged_in
    }
}

/// The platform persists the flag as the string `"true"`, not a boolean.
mod logged_in_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *flag { super::LOGGED_IN } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref() == Some(super::LOGGED_IN))
    }
}

/// File-backed store for the session record plus the transient
/// `verificationEmail` hint left behind by signup.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

#[derive(Serialize, Deserialize, Default)]
struct VerificationHint {
    #[serde(rename = "verificationEmail", default)]
    email: Option<String>,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the whole session in one atomic write.
    pub fn write(&self, session: &Session) -> Result<(), FlowError> {
        let body = serde_json::to_string_pretty(session)
            .map_err(|err| FlowError::Store(err.to_string()))?;
        self.write_atomic(&self.path, &body)?;
        debug!("session written to {}", self.path.display());
        Ok(())
    }

    /// Read the session back. A missing file or unparsable record reads as
    /// store-empty rather than an error; partial records come back as-is so
    /// callers can gate on [`Session::is_complete`].
    #[must_use]
    pub fn read(&self) -> Option<Session> {
        let body = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&body).ok()
    }

    /// Remove the session record entirely.
    pub fn clear(&self) -> Result<(), FlowError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(FlowError::Store(err.to_string())),
        }
    }

    /// Leave the one-shot hint telling the verification page which address
    /// to prefill.
    pub fn write_verification_hint(&self, email: &str) -> Result<(), FlowError> {
        let hint = VerificationHint {
            email: Some(email.to_string()),
        };
        let body =
            serde_json::to_string(&hint).map_err(|err| FlowError::Store(err.to_string()))?;
        self.write_atomic(&self.hint_path(), &body)
    }

    /// Read the hint and clear it in the same step.
    pub fn take_verification_hint(&self) -> Option<String> {
        let path = self.hint_path();
        let body = fs::read_to_string(&path).ok()?;
        let _ = fs::remove_file(&path);
        serde_json::from_str::<VerificationHint>(&body).ok()?.email
    }

    fn hint_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| "session".into(), |name| name.to_os_string());
        name.push(".hint");
        self.path.with_file_name(name)
    }

    fn write_atomic(&self, path: &Path, body: &str) -> Result<(), FlowError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| FlowError::Store(err.to_string()))?;
            }
        }

        let mut tmp = path.as_os_str().to_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, body).map_err(|err| FlowError::Store(err.to_string()))?;
        fs::rename(&tmp, path).map_err(|err| FlowError::Store(err.to_string()))?;
        Ok(())
    }
}
