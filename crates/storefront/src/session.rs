//! Client-side session persistence.
//!
//! A small namespaced key-value store backed by one JSON file, standing in
//! for the browser's local storage: it holds the bearer token, the serialized
//! user summary, and the comparison-list ids. Keys are prefixed `zenith.` so
//! the file can coexist with unrelated tooling data.
//!
//! Writes go through a temp-file rename so a crash mid-write never corrupts
//! the store. A pre-existing unreadable store is treated as empty rather than
//! fatal - losing a session is recoverable, refusing to start is not.

use std::io::Write;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use zenith_core::ProductId;
use zenith_core::compare::ComparisonSet;

use crate::api::types::UserSummary;

/// Namespaced store keys.
pub mod keys {
    /// Key for the bearer token.
    pub const TOKEN: &str = "zenith.token";

    /// Key for the serialized logged-in user summary.
    pub const USER: &str = "zenith.user";

    /// Key for the client-only comparison-list product ids.
    pub const COMPARE_LIST: &str = "zenith.compare_list";
}

/// Errors that can occur persisting the session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Session store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed key-value session store.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl SessionStore {
    /// Open (or create) the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing store file cannot be read. A store
    /// that reads but does not parse is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();

        let values = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            match serde_json::from_str::<Map<String, Value>>(&raw) {
                Ok(values) => values,
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "Session store unreadable, starting empty");
                    Map::new()
                }
            }
        } else {
            Map::new()
        };

        Ok(Self { path, values })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode a value. Absent or mistyped values yield `None`.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Encode and persist a value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing the store file fails.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), SessionError> {
        self.values
            .insert(key.to_string(), serde_json::to_value(value)?);
        self.persist()
    }

    /// Remove `key` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the store file fails.
    pub fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        if self.values.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    /// Write the store atomically: temp file in the same directory, then
    /// rename over the target.
    fn persist(&self) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = std::fs::File::create(&tmp)?;
            file.write_all(serde_json::to_string_pretty(&self.values)?.as_bytes())?;
            file.sync_all()?;
        }
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    // =========================================================================
    // Typed Accessors
    // =========================================================================

    /// The stored bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        self.get::<String>(keys::TOKEN).map(SecretString::from)
    }

    /// Store the bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn set_token(&mut self, token: &str) -> Result<(), SessionError> {
        self.set(keys::TOKEN, &token)
    }

    /// Whether a token is present.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.values.contains_key(keys::TOKEN)
    }

    /// The stored user summary, if any.
    #[must_use]
    pub fn user(&self) -> Option<UserSummary> {
        self.get(keys::USER)
    }

    /// Store the user summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn set_user(&mut self, user: &UserSummary) -> Result<(), SessionError> {
        self.set(keys::USER, user)
    }

    /// The persisted comparison selection, rebuilt under its invariants.
    #[must_use]
    pub fn compare_list(&self) -> ComparisonSet {
        self.get::<Vec<ProductId>>(keys::COMPARE_LIST)
            .map_or_else(ComparisonSet::new, ComparisonSet::from_saved)
    }

    /// Persist the comparison selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn set_compare_list(&mut self, set: &ComparisonSet) -> Result<(), SessionError> {
        self.set(keys::COMPARE_LIST, &set.ids())
    }

    /// Clear token and user. The comparison list deliberately survives
    /// logout, and the server-side cart is untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.values.remove(keys::TOKEN);
        self.values.remove(keys::USER);
        self.persist()
    }
}
