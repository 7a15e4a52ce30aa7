//! Users: named album collections and allowed tag types
//!
//! Album names are unique per user, compared case-insensitively. New users
//! start with the default tag types `location` and `person`; tag types are
//! stored lowercased.

use super::album::Album;
use super::error::ModelError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A user owning albums and a set of allowed tag-type names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    username: String,
    albums: Vec<Album>,
    tag_types: Vec<String>,
}

impl User {
    /// Create a user with no albums and the default tag types
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            albums: Vec::new(),
            tag_types: vec!["location".to_string(), "person".to_string()],
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The user's albums in creation order
    #[must_use]
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    #[must_use]
    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    fn album_index(&self, name: &str) -> Option<usize> {
        self.albums
            .iter()
            .position(|a| a.name().eq_ignore_ascii_case(name))
    }

    /// Look up an album by name, case-insensitively
    #[must_use]
    pub fn album_by_name(&self, name: &str) -> Option<&Album> {
        self.album_index(name).map(|i| &self.albums[i])
    }

    /// Look up an album by name, case-insensitively, mutably
    pub fn album_by_name_mut(&mut self, name: &str) -> Option<&mut Album> {
        self.album_index(name).map(move |i| &mut self.albums[i])
    }

    #[must_use]
    pub fn has_album(&self, name: &str) -> bool {
        self.album_index(name).is_some()
    }

    /// Add an album
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidArgument` if the album name is empty, or
    /// `ModelError::DuplicateAlbum` if an album with the same name
    /// (case-insensitive) already exists.
    pub fn add_album(&mut self, album: Album) -> Result<(), ModelError> {
        if album.name().trim().is_empty() {
            return Err(ModelError::InvalidArgument(
                "Album name cannot be empty".to_string(),
            ));
        }
        if self.has_album(album.name()) {
            return Err(ModelError::DuplicateAlbum(album.name().to_string()));
        }
        self.albums.push(album);
        Ok(())
    }

    /// Create and add an empty album with this name
    ///
    /// # Errors
    ///
    /// Same as [`User::add_album`].
    pub fn create_album(&mut self, name: &str) -> Result<&mut Album, ModelError> {
        self.add_album(Album::new(name))?;
        // just pushed, so the lookup cannot fail
        Ok(self.albums.last_mut().expect("album was just added"))
    }

    /// Remove the album with this name and return it
    ///
    /// # Errors
    ///
    /// Returns `ModelError::AlbumNotFound` if the user has no such album.
    pub fn remove_album(&mut self, name: &str) -> Result<Album, ModelError> {
        let index = self
            .album_index(name)
            .ok_or_else(|| ModelError::AlbumNotFound(name.to_string()))?;
        Ok(self.albums.remove(index))
    }

    /// Rename an album, keeping names unique case-insensitively
    ///
    /// Changing only the letter case of an album's own name is allowed.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::AlbumNotFound` if no album has the old name,
    /// `ModelError::DuplicateAlbum` if another album holds the new name, or
    /// `ModelError::InvalidArgument` if the new name is empty.
    pub fn rename_album(&mut self, old_name: &str, new_name: &str) -> Result<(), ModelError> {
        let index = self
            .album_index(old_name)
            .ok_or_else(|| ModelError::AlbumNotFound(old_name.to_string()))?;

        if let Some(other) = self.album_index(new_name)
            && other != index
        {
            return Err(ModelError::DuplicateAlbum(new_name.to_string()));
        }

        self.albums[index].rename(new_name)
    }

    /// Move a photo between two of this user's albums
    ///
    /// Delegates to [`Album::move_photo`], which only removes from the
    /// source once the target accepted the photo.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::AlbumNotFound` if either album is missing,
    /// `ModelError::InvalidArgument` if source and target are the same
    /// album, and otherwise whatever the album-level move returns.
    pub fn move_photo(
        &mut self,
        source: &str,
        path: &Path,
        target: &str,
    ) -> Result<(), ModelError> {
        let src = self
            .album_index(source)
            .ok_or_else(|| ModelError::AlbumNotFound(source.to_string()))?;
        let dst = self
            .album_index(target)
            .ok_or_else(|| ModelError::AlbumNotFound(target.to_string()))?;

        if src == dst {
            return Err(ModelError::InvalidArgument(
                "Source and target are the same album".to_string(),
            ));
        }

        let (source_album, target_album) = if src < dst {
            let (left, right) = self.albums.split_at_mut(dst);
            (&mut left[src], &mut right[0])
        } else {
            let (left, right) = self.albums.split_at_mut(src);
            (&mut right[0], &mut left[dst])
        };
        source_album.move_photo(path, target_album)
    }

    /// Copy a photo into another of this user's albums
    ///
    /// The copy carries the caption, capture time and tags of the source
    /// photo; the source album keeps its own copy.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::AlbumNotFound` if either album is missing,
    /// `ModelError::PhotoNotFound` if the photo is not a member of the
    /// source album, or `ModelError::DuplicatePhoto` if the target already
    /// holds that path (copying onto the same album always does).
    pub fn copy_photo(
        &mut self,
        source: &str,
        path: &Path,
        target: &str,
    ) -> Result<(), ModelError> {
        let src = self
            .album_index(source)
            .ok_or_else(|| ModelError::AlbumNotFound(source.to_string()))?;
        let dst = self
            .album_index(target)
            .ok_or_else(|| ModelError::AlbumNotFound(target.to_string()))?;

        let photo = self.albums[src]
            .photo(path)
            .ok_or_else(|| ModelError::PhotoNotFound(path.display().to_string()))?
            .clone();
        self.albums[dst].add_photo(photo)
    }

    /// The user's allowed tag-type names
    #[must_use]
    pub fn tag_types(&self) -> &[String] {
        &self.tag_types
    }

    /// Add a tag type; stored lowercased, duplicates ignored
    pub fn add_tag_type(&mut self, tag_type: &str) {
        let lowered = tag_type.to_lowercase();
        if !self.tag_types.contains(&lowered) {
            self.tag_types.push(lowered);
        }
    }

    /// Whether a tag type may carry multiple values per photo
    ///
    /// Only `person` is multi-valued.
    #[must_use]
    pub fn is_tag_type_multiple(&self, tag_type: &str) -> bool {
        tag_type.eq_ignore_ascii_case("person")
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "User: {} (Albums: {})", self.username, self.albums.len())
    }
}
