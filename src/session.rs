//! Explicit login sessions over the user store
//!
//! A [`Session`] owns a [`UserStore`] and at most one logged-in user. It
//! replaces any ambient "current user" state: callers pass the session to
//! whatever needs the logged-in user, which keeps multiple sessions (and
//! tests) possible. Saves happen at checkpoints: logout, explicit
//! [`Session::checkpoint`] calls, and never in the middle of a mutation.
//!
//! Administrative operations (create, delete, list users) also live here;
//! the reserved `admin` account can never be deleted.

use crate::model::{Photo, User};
use crate::search::{Query, SearchError};
use crate::store::{StoreError, UserStore};
use std::path::Path;
use thiserror::Error;

/// The reserved administrator account name
pub const ADMIN_USERNAME: &str = "admin";

/// Session-specific errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// An operation needed a logged-in user and there is none
    #[error("No user is logged in")]
    NotLoggedIn,

    /// The reserved admin account cannot be deleted
    #[error("The '{ADMIN_USERNAME}' account cannot be deleted")]
    ReservedUser,

    /// Persistence error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Search error
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
}

/// A single login session: one store, at most one current user
pub struct Session {
    store: UserStore,
    current: Option<User>,
}

impl Session {
    /// Create a session over an already-open store
    #[must_use]
    pub const fn new(store: UserStore) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Open the store at `path` and wrap it in a fresh session
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the store cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SessionError> {
        Ok(Self::new(UserStore::open(path)?))
    }

    /// Log a user in, saving and replacing any current user first
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserNotFound` (wrapped) if the username is
    /// unknown, or a store error if loading fails.
    pub fn login(&mut self, username: &str) -> Result<&User, SessionError> {
        self.logout()?;
        let user = self
            .store
            .load(username)?
            .ok_or_else(|| StoreError::UserNotFound(username.to_string()))?;
        Ok(self.current.insert(user))
    }

    /// Save and clear the current user; a no-op when nobody is logged in
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the save fails. The user stays logged in
    /// when that happens, so nothing is silently dropped.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        if let Some(user) = &self.current {
            self.store.save(user)?;
            self.current = None;
        }
        Ok(())
    }

    /// Save the current user without logging out
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` or a store error.
    pub fn checkpoint(&self) -> Result<(), SessionError> {
        let user = self.current.as_ref().ok_or(SessionError::NotLoggedIn)?;
        self.store.save(user)?;
        Ok(())
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// The logged-in user
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` when nobody is logged in.
    pub fn current(&self) -> Result<&User, SessionError> {
        self.current.as_ref().ok_or(SessionError::NotLoggedIn)
    }

    /// The logged-in user, mutably
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` when nobody is logged in.
    pub fn current_mut(&mut self) -> Result<&mut User, SessionError> {
        self.current.as_mut().ok_or(SessionError::NotLoggedIn)
    }

    /// Run a search query against the logged-in user's photos
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` or a query validation error.
    pub fn search(&self, query: &Query) -> Result<Vec<Photo>, SessionError> {
        let user = self.current()?;
        Ok(query.run(user)?)
    }

    /// Create a new user account
    ///
    /// # Errors
    ///
    /// Returns a wrapped `StoreError::UserExists` for a duplicate username.
    pub fn create_user(&self, username: &str) -> Result<User, SessionError> {
        Ok(self.store.create(username)?)
    }

    /// Delete a user account
    ///
    /// If the deleted user is currently logged in, the session is cleared
    /// without a final save.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::ReservedUser` for the admin account, or a
    /// wrapped `StoreError::UserNotFound` for an unknown username.
    pub fn delete_user(&mut self, username: &str) -> Result<(), SessionError> {
        if username.eq_ignore_ascii_case(ADMIN_USERNAME) {
            return Err(SessionError::ReservedUser);
        }
        self.store.remove(username)?;
        if let Some(user) = &self.current
            && user.username() == username
        {
            self.current = None;
        }
        Ok(())
    }

    /// All known usernames, sorted
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the store cannot be read.
    pub fn list_users(&self) -> Result<Vec<String>, SessionError> {
        Ok(self.store.usernames()?)
    }
}
