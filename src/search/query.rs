//! Query data structures and validation
//!
//! A [`Query`] carries an optional inclusive date range, up to two raw tag
//! constraints, and a combinator that only applies when both constraints are
//! supplied. Constraints arrive as free text (the way a search form delivers
//! them) and are validated when the query runs: a type without a value, or a
//! value without a type, is rejected rather than silently ignored.

use super::error::SearchError;
use crate::model::Tag;
use chrono::NaiveDate;

/// How two tag constraints are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Combinator {
    /// The photo must carry both tags
    #[default]
    And,
    /// The photo must carry at least one of the tags
    Or,
}

/// One raw `(type, value)` tag constraint; either or both halves may be empty
#[derive(Debug, Clone, Default)]
pub struct TagConstraint {
    name: String,
    value: String,
}

impl TagConstraint {
    /// Build a constraint from raw text; both halves are trimmed
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            value: value.trim().to_string(),
        }
    }

    /// Resolve the raw text into an optional concrete tag
    ///
    /// Both halves empty means "no constraint". `ordinal` identifies the
    /// constraint (1 or 2) in error messages.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::IncompleteTagConstraint` when exactly one half
    /// is supplied.
    pub fn resolve(&self, ordinal: u8) -> Result<Option<Tag>, SearchError> {
        match (self.name.is_empty(), self.value.is_empty()) {
            (true, true) => Ok(None),
            (false, false) => Ok(Some(Tag::new(self.name.clone(), self.value.clone()))),
            (false, true) => Err(SearchError::IncompleteTagConstraint {
                ordinal,
                missing: "value",
            }),
            (true, false) => Err(SearchError::IncompleteTagConstraint {
                ordinal,
                missing: "type",
            }),
        }
    }
}

/// A validated-on-run search over all of a user's photos
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub(super) from_date: Option<NaiveDate>,
    pub(super) to_date: Option<NaiveDate>,
    pub(super) tag_one: TagConstraint,
    pub(super) tag_two: TagConstraint,
    pub(super) combinator: Combinator,
}

impl Query {
    /// Create a new query builder
    #[must_use]
    pub fn builder() -> QueryBuilder {
        QueryBuilder::default()
    }

    /// Check date range and tag constraints without running the search
    ///
    /// # Errors
    ///
    /// Returns `SearchError::IncompleteTagConstraint` for a half-specified
    /// constraint, or `SearchError::InvalidDateRange` when the 'from' date
    /// falls after the 'to' date.
    pub fn validate(&self) -> Result<(), SearchError> {
        self.tag_one.resolve(1)?;
        self.tag_two.resolve(2)?;
        if let (Some(from), Some(to)) = (self.from_date, self.to_date)
            && from > to
        {
            return Err(SearchError::InvalidDateRange { from, to });
        }
        Ok(())
    }
}

/// Builder for [`Query`]
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    from_date: Option<NaiveDate>,
    to_date: Option<NaiveDate>,
    tag_one: TagConstraint,
    tag_two: TagConstraint,
    combinator: Combinator,
}

impl QueryBuilder {
    /// Earliest calendar day to include
    #[must_use]
    pub const fn from_date(mut self, date: NaiveDate) -> Self {
        self.from_date = Some(date);
        self
    }

    /// Latest calendar day to include
    #[must_use]
    pub const fn to_date(mut self, date: NaiveDate) -> Self {
        self.to_date = Some(date);
        self
    }

    /// First tag constraint, as raw `(type, value)` text
    #[must_use]
    pub fn tag_one(mut self, name: &str, value: &str) -> Self {
        self.tag_one = TagConstraint::new(name, value);
        self
    }

    /// Second tag constraint, as raw `(type, value)` text
    #[must_use]
    pub fn tag_two(mut self, name: &str, value: &str) -> Self {
        self.tag_two = TagConstraint::new(name, value);
        self
    }

    /// How to combine the two constraints when both are supplied
    #[must_use]
    pub const fn combinator(mut self, combinator: Combinator) -> Self {
        self.combinator = combinator;
        self
    }

    /// Build the query; validation happens when it runs
    #[must_use]
    pub fn build(self) -> Query {
        Query {
            from_date: self.from_date,
            to_date: self.to_date,
            tag_one: self.tag_one,
            tag_two: self.tag_two,
            combinator: self.combinator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_constraint_resolves_to_none() {
        assert_eq!(TagConstraint::new("", "  ").resolve(1), Ok(None));
    }

    #[test]
    fn test_full_constraint_resolves_to_tag() {
        let tag = TagConstraint::new(" person ", " alice ").resolve(1).unwrap();
        assert_eq!(tag, Some(Tag::new("person", "alice")));
    }

    #[test]
    fn test_half_constraints_rejected() {
        assert_eq!(
            TagConstraint::new("person", "").resolve(1),
            Err(SearchError::IncompleteTagConstraint {
                ordinal: 1,
                missing: "value"
            })
        );
        assert_eq!(
            TagConstraint::new("", "alice").resolve(2),
            Err(SearchError::IncompleteTagConstraint {
                ordinal: 2,
                missing: "type"
            })
        );
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let from = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let query = Query::builder().from_date(from).to_date(to).build();

        assert_eq!(
            query.validate(),
            Err(SearchError::InvalidDateRange { from, to })
        );
    }

    #[test]
    fn test_validate_accepts_open_ended_range() {
        let from = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert!(Query::builder().from_date(from).build().validate().is_ok());
        assert!(Query::builder().build().validate().is_ok());
    }
}
