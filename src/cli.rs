//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for photor using the
//! `clap` crate, plus small parsers for the argument formats the commands
//! share: `YYYY-MM-DD` dates, optional capture timestamps, and `TYPE=VALUE`
//! tag arguments.
//!
//! # Commands
//!
//! - **user**: Administer accounts (add, remove, list)
//! - **album**: Manage a user's albums (create, delete, rename, list)
//! - **photo**: Manage photos in an album (add, remove, caption, tag, untag, move)
//! - **search**: Filter a user's photos by date range and tag constraints

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI arguments
#[derive(Debug, Parser)]
#[command(name = "photor", about = "A photo album manager with tag-based search", version)]
pub struct Cli {
    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the user-store directory
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Administer user accounts
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Manage a user's albums
    Album {
        #[command(subcommand)]
        command: AlbumCommands,
    },
    /// Manage photos inside an album
    Photo {
        #[command(subcommand)]
        command: PhotoCommands,
    },
    /// Search a user's photos by date range and tags
    Search(SearchArgs),
}

#[derive(Debug, Subcommand)]
pub enum UserCommands {
    /// Create a new user account
    Add {
        /// Username for the new account
        username: String,
    },
    /// Delete a user account (the admin account is protected)
    Remove {
        /// Username of the account to delete
        username: String,
    },
    /// List all known usernames
    List,
    /// Manage a user's allowed tag types
    TagType {
        #[command(subcommand)]
        command: TagTypeCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum TagTypeCommands {
    /// Add an allowed tag type (stored lowercased, duplicates ignored)
    Add {
        #[arg(short, long)]
        user: String,
        /// The tag-type name, e.g. `event`
        tag_type: String,
    },
    /// List a user's allowed tag types
    List {
        #[arg(short, long)]
        user: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum AlbumCommands {
    /// Create an empty album
    Create {
        /// Owner of the album
        #[arg(short, long)]
        user: String,
        /// Name of the new album
        name: String,
    },
    /// Delete an album and its photo list
    Delete {
        #[arg(short, long)]
        user: String,
        /// Name of the album to delete
        name: String,
    },
    /// Rename an album
    Rename {
        #[arg(short, long)]
        user: String,
        /// Current album name
        name: String,
        /// New album name
        new_name: String,
    },
    /// List a user's albums with photo counts and date ranges
    List {
        #[arg(short, long)]
        user: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum PhotoCommands {
    /// Add a photo to an album
    Add {
        #[arg(short, long)]
        user: String,
        /// Album to add the photo to
        #[arg(short, long)]
        album: String,
        /// Path of the photo file
        path: PathBuf,
        /// Capture time, `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS` (default: now)
        #[arg(long, value_parser = parse_taken)]
        taken: Option<DateTime<Utc>>,
    },
    /// Remove a photo from an album
    Remove {
        #[arg(short, long)]
        user: String,
        #[arg(short, long)]
        album: String,
        path: PathBuf,
    },
    /// Set a photo's caption
    Caption {
        #[arg(short, long)]
        user: String,
        #[arg(short, long)]
        album: String,
        path: PathBuf,
        /// The new caption text
        caption: String,
    },
    /// Add a TYPE=VALUE tag to a photo
    Tag {
        #[arg(short, long)]
        user: String,
        #[arg(short, long)]
        album: String,
        path: PathBuf,
        /// Tag in `TYPE=VALUE` form, e.g. `person=alice`
        tag: String,
    },
    /// Remove a TYPE=VALUE tag from a photo
    Untag {
        #[arg(short, long)]
        user: String,
        #[arg(short, long)]
        album: String,
        path: PathBuf,
        /// Tag in `TYPE=VALUE` form
        tag: String,
    },
    /// Move a photo to another album of the same user
    Move {
        #[arg(short, long)]
        user: String,
        /// Album the photo currently lives in
        #[arg(long)]
        from: String,
        /// Album to move the photo into
        #[arg(long)]
        to: String,
        path: PathBuf,
    },
    /// Copy a photo into another album of the same user
    Copy {
        #[arg(short, long)]
        user: String,
        /// Album the photo currently lives in
        #[arg(long)]
        from: String,
        /// Album to copy the photo into
        #[arg(long)]
        to: String,
        path: PathBuf,
    },
    /// Show the photos of an album in order
    List {
        #[arg(short, long)]
        user: String,
        #[arg(short, long)]
        album: String,
    },
}

/// Parameters for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// User whose photos are searched
    #[arg(short, long)]
    pub user: String,

    /// Earliest day to include, `YYYY-MM-DD`
    #[arg(long, value_parser = parse_cli_date)]
    pub from: Option<NaiveDate>,

    /// Latest day to include, `YYYY-MM-DD`
    #[arg(long, value_parser = parse_cli_date)]
    pub to: Option<NaiveDate>,

    /// Tag constraint in `TYPE=VALUE` form; may be given twice
    #[arg(short = 't', long = "tag", value_name = "TYPE=VALUE")]
    pub tags: Vec<String>,

    /// Combine two tag constraints with OR instead of AND
    #[arg(long)]
    pub any: bool,
}

/// Parse a `YYYY-MM-DD` calendar date
///
/// # Errors
///
/// Returns a message suitable for clap when the text is not a valid date.
pub fn parse_cli_date(text: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{text}' (expected YYYY-MM-DD): {e}"))
}

/// Parse a capture timestamp, with or without a time of day
///
/// A bare date is taken at midnight UTC.
///
/// # Errors
///
/// Returns a message suitable for clap when the text matches neither format.
pub fn parse_taken(text: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Ok(datetime.and_utc());
    }
    parse_cli_date(text).map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Split a `TYPE=VALUE` tag argument at the first `=`
///
/// A missing `=` leaves the value empty; the search engine rejects the
/// half-specified constraint with a proper error instead of us guessing.
#[must_use]
pub fn split_tag_arg(text: &str) -> (&str, &str) {
    match text.split_once('=') {
        Some((name, value)) => (name, value),
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_cli_date() {
        assert_eq!(
            parse_cli_date("2024-01-31"),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
        );
        assert!(parse_cli_date("31/01/2024").is_err());
        assert!(parse_cli_date("2024-13-01").is_err());
    }

    #[test]
    fn test_parse_taken_both_formats() {
        let with_time = parse_taken("2024-01-31 14:30:00").unwrap();
        assert_eq!(with_time.hour(), 14);

        let bare = parse_taken("2024-01-31").unwrap();
        assert_eq!(bare.hour(), 0);

        assert!(parse_taken("yesterday").is_err());
    }

    #[test]
    fn test_split_tag_arg() {
        assert_eq!(split_tag_arg("person=alice"), ("person", "alice"));
        assert_eq!(split_tag_arg("note=a=b"), ("note", "a=b"));
        assert_eq!(split_tag_arg("person"), ("person", ""));
        assert_eq!(split_tag_arg("=alice"), ("", "alice"));
    }

    #[test]
    fn test_cli_parses_photo_copy_command() {
        let cli = Cli::try_parse_from([
            "photor", "photo", "copy", "-u", "alice", "--from", "trip", "--to", "best", "a.png",
        ])
        .unwrap();

        match cli.command {
            Commands::Photo {
                command: PhotoCommands::Copy { user, from, to, path },
            } => {
                assert_eq!(user, "alice");
                assert_eq!(from, "trip");
                assert_eq!(to, "best");
                assert_eq!(path, PathBuf::from("a.png"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_tag_type_command() {
        let cli = Cli::try_parse_from(["photor", "user", "tag-type", "add", "-u", "alice", "event"])
            .unwrap();

        match cli.command {
            Commands::User {
                command: UserCommands::TagType {
                    command: TagTypeCommands::Add { user, tag_type },
                },
            } => {
                assert_eq!(user, "alice");
                assert_eq!(tag_type, "event");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_search_command() {
        let cli = Cli::try_parse_from([
            "photor", "search", "-u", "alice", "--from", "2024-01-01", "--to", "2024-01-31",
            "-t", "person=alice", "-t", "location=paris", "--any",
        ])
        .unwrap();

        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.user, "alice");
                assert!(args.from.is_some());
                assert_eq!(args.tags.len(), 2);
                assert!(args.any);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
