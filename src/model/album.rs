//! Albums: ordered photo collections with cursor navigation
//!
//! An album holds an ordered list of photos with no duplicates (identity is
//! by file path), a circular navigation cursor, and a cached date-range
//! summary recomputed whenever the photo list changes. Moving a photo to
//! another album inserts into the target first and removes from the source
//! only on success, so a failed move never loses the photo.

use super::error::ModelError;
use super::photo::Photo;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named, ordered collection of photos belonging to one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    name: String,
    photos: Vec<Photo>,
    cursor: usize,
    date_range: String,
}

/// Render a capture date as `M/D/YYYY` without zero padding
fn format_day(date: DateTime<Utc>) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

impl Album {
    /// Create an empty album
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            photos: Vec::new(),
            cursor: 0,
            date_range: "N/A".to_string(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The photos in album order
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    #[must_use]
    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Whether a photo with this path is a member of the album
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.photos.iter().any(|p| p.path() == path)
    }

    /// The first photo, used as the album's thumbnail
    #[must_use]
    pub fn thumbnail(&self) -> Option<&Photo> {
        self.photos.first()
    }

    /// Look up a member photo by path
    #[must_use]
    pub fn photo(&self, path: &Path) -> Option<&Photo> {
        self.photos.iter().find(|p| p.path() == path)
    }

    /// Look up a member photo by path, mutably
    pub fn photo_mut(&mut self, path: &Path) -> Option<&mut Photo> {
        self.photos.iter_mut().find(|p| p.path() == path)
    }

    /// Rename the album
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidArgument` if the new name is empty or
    /// whitespace only.
    pub fn rename(&mut self, new_name: &str) -> Result<(), ModelError> {
        if new_name.trim().is_empty() {
            return Err(ModelError::InvalidArgument(
                "Album name cannot be empty".to_string(),
            ));
        }
        self.name = new_name.to_string();
        Ok(())
    }

    /// Add a photo to the end of the album
    ///
    /// Recomputes the cached date-range summary on success.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicatePhoto` if a photo with the same path is
    /// already a member.
    pub fn add_photo(&mut self, photo: Photo) -> Result<(), ModelError> {
        if self.photos.contains(&photo) {
            return Err(ModelError::DuplicatePhoto(
                photo.path().display().to_string(),
            ));
        }
        self.photos.push(photo);
        self.refresh_date_range();
        Ok(())
    }

    /// Remove the photo with this path and return it
    ///
    /// Recomputes the cached date-range summary on success. The cursor is
    /// clamped so it stays valid for the remaining photos.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::PhotoNotFound` if no member has this path.
    pub fn remove_photo(&mut self, path: &Path) -> Result<Photo, ModelError> {
        let index = self
            .photos
            .iter()
            .position(|p| p.path() == path)
            .ok_or_else(|| ModelError::PhotoNotFound(path.display().to_string()))?;

        let photo = self.photos.remove(index);
        if self.cursor >= self.photos.len() {
            self.cursor = 0;
        }
        self.refresh_date_range();
        Ok(photo)
    }

    /// Move a photo from this album into `target`
    ///
    /// The photo is inserted into the target first and removed from this
    /// album only once the insert succeeded, so a failed move leaves the
    /// photo where it was.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::PhotoNotFound` if the photo is not a member of
    /// this album, or `ModelError::MoveFailed` if the target refused it
    /// (already a member there).
    pub fn move_photo(&mut self, path: &Path, target: &mut Album) -> Result<(), ModelError> {
        let photo = self
            .photo(path)
            .ok_or_else(|| ModelError::PhotoNotFound(path.display().to_string()))?
            .clone();

        if let Err(err) = target.add_photo(photo) {
            return Err(ModelError::MoveFailed {
                photo: path.display().to_string(),
                target: target.name.clone(),
                reason: err.to_string(),
            });
        }
        self.remove_photo(path)?;
        Ok(())
    }

    /// Set the caption of a member photo
    ///
    /// # Errors
    ///
    /// Returns `ModelError::PhotoNotFound` if the photo is not a member.
    pub fn caption_photo(&mut self, path: &Path, caption: &str) -> Result<(), ModelError> {
        let photo = self
            .photo_mut(path)
            .ok_or_else(|| ModelError::PhotoNotFound(path.display().to_string()))?;
        photo.set_caption(caption);
        Ok(())
    }

    /// Build a new album (same name) containing only the matching photos
    ///
    /// The source album is not mutated.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Album
    where
        P: Fn(&Photo) -> bool,
    {
        let mut filtered = Album::new(self.name.clone());
        filtered.photos = self.photos.iter().filter(|p| predicate(p)).cloned().collect();
        filtered.refresh_date_range();
        filtered
    }

    /// The cached date-range summary
    ///
    /// `"N/A"` when the album is empty, a single `M/D/YYYY` date for one
    /// photo, and `"earliest - latest"` otherwise.
    #[must_use]
    pub fn date_range(&self) -> &str {
        &self.date_range
    }

    /// Earliest capture date across all photos, by linear scan
    #[must_use]
    pub fn earliest_date(&self) -> Option<DateTime<Utc>> {
        self.photos.iter().map(Photo::taken).min()
    }

    /// Latest capture date across all photos, by linear scan
    #[must_use]
    pub fn latest_date(&self) -> Option<DateTime<Utc>> {
        self.photos.iter().map(Photo::taken).max()
    }

    fn refresh_date_range(&mut self) {
        self.date_range = match (self.earliest_date(), self.latest_date()) {
            (Some(earliest), Some(latest)) if self.photos.len() > 1 => {
                format!("{} - {}", format_day(earliest), format_day(latest))
            }
            (Some(only), _) => format_day(only),
            _ => "N/A".to_string(),
        };
    }

    /// The photo under the cursor
    ///
    /// # Errors
    ///
    /// Returns `ModelError::CursorOutOfRange` if the album is empty or the
    /// cursor does not point at a photo.
    pub fn current_photo(&self) -> Result<&Photo, ModelError> {
        self.photos
            .get(self.cursor)
            .ok_or(ModelError::CursorOutOfRange {
                cursor: self.cursor,
                len: self.photos.len(),
            })
    }

    /// Advance the cursor to the next photo, wrapping to the first
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EmptyAlbum` if the album has no photos.
    pub fn next_photo(&mut self) -> Result<&Photo, ModelError> {
        if self.photos.is_empty() {
            return Err(ModelError::EmptyAlbum);
        }
        self.cursor = (self.cursor + 1) % self.photos.len();
        self.current_photo()
    }

    /// Move the cursor to the previous photo, wrapping to the last
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EmptyAlbum` if the album has no photos.
    pub fn previous_photo(&mut self) -> Result<&Photo, ModelError> {
        if self.photos.is_empty() {
            return Err(ModelError::EmptyAlbum);
        }
        self.cursor = (self.cursor + self.photos.len() - 1) % self.photos.len();
        self.current_photo()
    }
}

impl std::fmt::Display for Album {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
