//! Search engine over a user's photos
//!
//! Flattens all photos across all of a user's albums (in album order, then
//! photo order, without de-duplicating photos that live in several albums)
//! and filters them by an inclusive date range plus up to two tag
//! constraints. The engine is pure: it validates, scans, and returns fresh
//! photo clones without touching the source albums.
//!
//! Date semantics: the 'from' day is normalized to 00:00:00.000 and the 'to'
//! day to 23:59:59.999, so both endpoint days are fully included.

pub mod error;
pub mod query;

pub use error::SearchError;
pub use query::{Combinator, Query, QueryBuilder, TagConstraint};

use crate::model::{Photo, Tag, User};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

/// First instant of a calendar day (00:00:00.000 UTC)
fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Last represented instant of a calendar day (23:59:59.999 UTC)
///
/// Saturates at the maximum representable timestamp for days at the edge of
/// chrono's range.
fn day_end(date: NaiveDate) -> DateTime<Utc> {
    day_start(date)
        .checked_add_signed(TimeDelta::days(1))
        .map_or(DateTime::<Utc>::MAX_UTC, |next| {
            next - TimeDelta::milliseconds(1)
        })
}

impl Query {
    /// Run the query against all of the user's albums
    ///
    /// Returns matching photos in flattening order: albums in creation
    /// order, photos in album order. A photo present in two albums appears
    /// twice. The result is a fresh sequence; no album is mutated.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::IncompleteTagConstraint` or
    /// `SearchError::InvalidDateRange` when validation fails.
    pub fn run(&self, user: &User) -> Result<Vec<Photo>, SearchError> {
        let tag_one = self.tag_one.resolve(1)?;
        let tag_two = self.tag_two.resolve(2)?;
        if let (Some(from), Some(to)) = (self.from_date, self.to_date)
            && from > to
        {
            return Err(SearchError::InvalidDateRange { from, to });
        }

        let window_start = self.from_date.map(day_start);
        let window_end = self.to_date.map(day_end);

        let mut matches = Vec::new();
        for album in user.albums() {
            for photo in album.photos() {
                if in_window(photo, window_start, window_end)
                    && matches_tags(photo, tag_one.as_ref(), tag_two.as_ref(), self.combinator)
                {
                    matches.push(photo.clone());
                }
            }
        }
        Ok(matches)
    }
}

fn in_window(
    photo: &Photo,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> bool {
    let taken = photo.taken();
    if let Some(start) = start
        && taken < start
    {
        return false;
    }
    if let Some(end) = end
        && taken > end
    {
        return false;
    }
    true
}

fn matches_tags(
    photo: &Photo,
    tag_one: Option<&Tag>,
    tag_two: Option<&Tag>,
    combinator: Combinator,
) -> bool {
    match (tag_one, tag_two) {
        (None, None) => true,
        (Some(tag), None) | (None, Some(tag)) => photo.has_tag(tag),
        (Some(one), Some(two)) => match combinator {
            Combinator::And => photo.has_tag(one) && photo.has_tag(two),
            Combinator::Or => photo.has_tag(one) || photo.has_tag(two),
        },
    }
}
