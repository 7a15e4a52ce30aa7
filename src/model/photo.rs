//! Photo records: file reference, caption, capture time and tags
//!
//! Photo identity is by file path alone. Two `Photo` values with the same
//! path compare equal even when their captions or tags differ; callers that
//! need content comparison use [`Photo::same_content`] instead. The tag list
//! preserves insertion order and never holds two tags that are equal under
//! the case-insensitive tag comparison.

use super::tag::Tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// A single photo with its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    path: PathBuf,
    caption: String,
    taken: DateTime<Utc>,
    tags: Vec<Tag>,
}

impl Photo {
    /// Create a new photo with an empty caption and no tags
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, taken: DateTime<Utc>) -> Self {
        Self {
            path: path.into(),
            caption: String::new(),
            taken,
            tags: Vec::new(),
        }
    }

    /// Path of the photo file (file existence is not validated here)
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// When the photo was taken
    #[must_use]
    pub const fn taken(&self) -> DateTime<Utc> {
        self.taken
    }

    /// The photo's tags in insertion order
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Overwrite the caption unconditionally
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    /// Add a tag unless an equal tag (case-insensitive) is already present
    ///
    /// Idempotent: adding `("Person", "Alice")` after `("person", "alice")`
    /// is a no-op.
    pub fn add_tag(&mut self, tag: Tag) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Remove a tag; no-op if no equal tag is present
    pub fn remove_tag(&mut self, tag: &Tag) {
        self.tags.retain(|t| t != tag);
    }

    /// Whether the photo carries a tag equal to `tag` (case-insensitive)
    #[must_use]
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Render all tags as `name=value` strings
    #[must_use]
    pub fn tag_strings(&self) -> Vec<String> {
        self.tags.iter().map(Tag::pair_string).collect()
    }

    /// Deep comparison of path, caption, capture time and tags
    ///
    /// Identity (`==`) only looks at the path; use this when the caller
    /// cares whether two records describe the same metadata as well.
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.path == other.path
            && self.caption == other.caption
            && self.taken == other.taken
            && self.tags == other.tags
    }
}

impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Photo {}

impl Hash for Photo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl std::fmt::Display for Photo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Photo: {}, caption: {}", self.path.display(), self.caption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn photo(path: &str) -> Photo {
        let taken = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();
        Photo::new(path, taken)
    }

    #[test]
    fn test_identity_is_by_path_only() {
        let mut a = photo("trip/beach.png");
        let b = photo("trip/beach.png");
        a.set_caption("sunset");
        a.add_tag(Tag::new("location", "paris"));

        assert_eq!(a, b);
        assert!(!a.same_content(&b));
        assert!(photo("x.png") != photo("y.png"));
    }

    #[test]
    fn test_add_tag_is_idempotent() {
        let mut p = photo("a.png");
        p.add_tag(Tag::new("person", "alice"));
        p.add_tag(Tag::new("Person", "ALICE"));

        assert_eq!(p.tags().len(), 1);
        // first spelling wins
        assert_eq!(p.tags()[0].name(), "person");
    }

    #[test]
    fn test_remove_tag_case_insensitive() {
        let mut p = photo("a.png");
        p.add_tag(Tag::new("person", "alice"));
        p.remove_tag(&Tag::new("PERSON", "Alice"));

        assert!(p.tags().is_empty());

        // removing an absent tag is a no-op
        p.remove_tag(&Tag::new("person", "bob"));
        assert!(p.tags().is_empty());
    }

    #[test]
    fn test_tag_order_preserved() {
        let mut p = photo("a.png");
        p.add_tag(Tag::new("person", "alice"));
        p.add_tag(Tag::new("location", "paris"));
        p.add_tag(Tag::new("person", "bob"));

        assert_eq!(
            p.tag_strings(),
            vec!["person=alice", "location=paris", "person=bob"]
        );
    }

    #[test]
    fn test_set_caption_overwrites() {
        let mut p = photo("a.png");
        p.set_caption("first");
        p.set_caption("second");
        assert_eq!(p.caption(), "second");
    }
}
