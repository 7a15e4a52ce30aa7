//! Persistence gateway for user records
//!
//! Stores each user as a whole, versioned record in an embedded sled
//! database, keyed by username. There is no partial update: every save
//! rewrites the user's entire graph (albums, photos, tags), matching the
//! checkpoint discipline of the callers (logout, navigation, exit).
//!
//! Records are bincode-encoded through serde with a leading format-version
//! integer. The version is decoded on its own before the user payload, so a
//! record written by a newer schema fails with `UnsupportedVersion` instead
//! of a misleading decode error.

pub mod error;

pub use error::StoreError;

use crate::model::User;
use sled::{Db, Tree};
use std::collections::BTreeMap;
use std::path::Path;

/// Current on-disk record format version
pub const FORMAT_VERSION: u32 = 1;

/// Gateway that loads and saves whole users keyed by username
pub struct UserStore {
    db: Db,
    users: Tree,
}

fn encode_record(user: &User) -> Result<Vec<u8>, StoreError> {
    let config = bincode::config::standard();
    let mut buf = bincode::serde::encode_to_vec(FORMAT_VERSION, config)?;
    buf.extend(bincode::serde::encode_to_vec(user, config)?);
    Ok(buf)
}

fn decode_record(username: &str, bytes: &[u8]) -> Result<User, StoreError> {
    let config = bincode::config::standard();
    let (version, used): (u32, usize) = bincode::serde::decode_from_slice(bytes, config)?;
    if version != FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            username: username.to_string(),
            version,
        });
    }
    let (user, _): (User, usize) = bincode::serde::decode_from_slice(&bytes[used..], config)?;
    Ok(user)
}

impl UserStore {
    /// Open or create a store at the specified path
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or the user
    /// tree cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let users = db.open_tree("users")?;
        Ok(Self { db, users })
    }

    /// Save a user, overwriting any existing record with the same username
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encoding or the database write fails.
    pub fn save(&self, user: &User) -> Result<(), StoreError> {
        let record = encode_record(user)?;
        self.users.insert(user.username().as_bytes(), record)?;
        Ok(())
    }

    /// Load a user by username
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database read fails, the record cannot be
    /// decoded, or its format version is unsupported.
    pub fn load(&self, username: &str) -> Result<Option<User>, StoreError> {
        match self.users.get(username.as_bytes())? {
            Some(bytes) => Ok(Some(decode_record(username, &bytes)?)),
            None => Ok(None),
        }
    }

    /// Load every stored user, keyed by username
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if iteration fails or any record is corrupt.
    pub fn load_all(&self) -> Result<BTreeMap<String, User>, StoreError> {
        let mut users = BTreeMap::new();
        for entry in &self.users {
            let (key, value) = entry?;
            let username = String::from_utf8(key.to_vec())
                .map_err(|e| StoreError::CorruptKey(e.to_string()))?;
            let user = decode_record(&username, &value)?;
            users.insert(username, user);
        }
        Ok(users)
    }

    /// Create and persist a brand new user
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserExists` if the username is taken, or
    /// `StoreError` if the save fails.
    pub fn create(&self, username: &str) -> Result<User, StoreError> {
        if self.contains(username)? {
            return Err(StoreError::UserExists(username.to_string()));
        }
        let user = User::new(username);
        self.save(&user)?;
        Ok(user)
    }

    /// Remove a user's record
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserNotFound` if no record exists, or
    /// `StoreError` if the database write fails.
    pub fn remove(&self, username: &str) -> Result<(), StoreError> {
        if self.users.remove(username.as_bytes())?.is_none() {
            return Err(StoreError::UserNotFound(username.to_string()));
        }
        Ok(())
    }

    /// Whether a record exists for this username
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database read fails.
    pub fn contains(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.users.contains_key(username.as_bytes())?)
    }

    /// All stored usernames, sorted
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if iteration fails or a key is corrupt.
    pub fn usernames(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for entry in &self.users {
            let (key, _) = entry?;
            names.push(
                String::from_utf8(key.to_vec())
                    .map_err(|e| StoreError::CorruptKey(e.to_string()))?,
            );
        }
        names.sort();
        Ok(names)
    }

    /// Number of stored users
    #[must_use]
    pub fn count(&self) -> usize {
        self.users.len()
    }

    /// Flush all pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the flush operation fails.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }
}

impl Drop for UserStore {
    fn drop(&mut self) {
        // Best-effort flush on drop. Errors are ignored since we can't
        // propagate them from Drop. Callers should explicitly flush()
        // if they need guaranteed durability.
        let _ = self.db.flush();
    }
}
