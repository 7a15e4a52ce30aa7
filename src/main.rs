//! Photor CLI application entry point
//!
//! This is the main executable for the photor album manager. It drives the
//! library through short login/operate/logout cycles: every command logs the
//! named user in, performs its changes in memory, and saves the whole user
//! back on logout.
//!
//! # Usage
//!
//! ```bash
//! # Administer accounts
//! photor user add alice
//! photor user list
//! photor user tag-type add -u alice event
//!
//! # Manage albums
//! photor album create -u alice "Summer 2024"
//! photor album list -u alice
//!
//! # Manage photos
//! photor photo add -u alice -a "Summer 2024" beach.png --taken "2024-07-14 18:30:00"
//! photor photo tag -u alice -a "Summer 2024" beach.png person=bob
//! photor photo caption -u alice -a "Summer 2024" beach.png "Sunset at the beach"
//! photor photo move -u alice --from "Summer 2024" --to Favorites beach.png
//! photor photo copy -u alice --from "Summer 2024" --to Favorites boat.png
//!
//! # Search across all albums
//! photor search -u alice --from 2024-01-01 --to 2024-12-31 -t person=bob
//! photor search -u alice -t person=bob -t location=paris --any
//! ```
//!
//! # Configuration
//!
//! The store location and the default quiet flag live in
//! `~/.config/photor/config.toml`; `--data-dir` overrides the store path.

use chrono::Utc;
use photor::{
    PhotorError,
    cli::{
        AlbumCommands, Cli, Commands, PhotoCommands, SearchArgs, TagTypeCommands, UserCommands,
        split_tag_arg,
    },
    config::PhotorConfig,
    model::{ModelError, Photo, Tag},
    search::{Combinator, Query},
    session::Session,
};
use std::path::Path;

type Result<T> = std::result::Result<T, PhotorError>;

/// Handle the user command - administer accounts
///
/// # Errors
///
/// Returns `PhotorError` for duplicate usernames, unknown usernames, an
/// attempt to delete the admin account, or store failures.
fn handle_user_command(session: &mut Session, command: &UserCommands, quiet: bool) -> Result<()> {
    match command {
        UserCommands::Add { username } => {
            session.create_user(username)?;
            if !quiet {
                println!("Created user '{username}'");
            }
        }
        UserCommands::Remove { username } => {
            session.delete_user(username)?;
            if !quiet {
                println!("Deleted user '{username}'");
            }
        }
        UserCommands::List => {
            let users = session.list_users()?;
            if users.is_empty() {
                if !quiet {
                    println!("No users yet. Add one with: photor user add <username>");
                }
            } else {
                for username in users {
                    println!("{username}");
                }
            }
        }
        UserCommands::TagType { command } => match command {
            TagTypeCommands::Add { user, tag_type } => {
                session.login(user)?;
                session.current_mut()?.add_tag_type(tag_type);
                session.logout()?;
                if !quiet {
                    println!("Added tag type '{}' for user '{user}'", tag_type.to_lowercase());
                }
            }
            TagTypeCommands::List { user } => {
                session.login(user)?;
                let current = session.current()?;
                for tag_type in current.tag_types() {
                    if quiet || !current.is_tag_type_multiple(tag_type) {
                        println!("{tag_type}");
                    } else {
                        println!("{tag_type} (multi-valued)");
                    }
                }
                session.logout()?;
            }
        },
    }
    Ok(())
}

/// Handle the album command - create, delete, rename and list albums
///
/// # Errors
///
/// Returns `PhotorError` for unknown users, duplicate or missing album
/// names, or store failures.
fn handle_album_command(session: &mut Session, command: &AlbumCommands, quiet: bool) -> Result<()> {
    match command {
        AlbumCommands::Create { user, name } => {
            session.login(user)?;
            session.current_mut()?.create_album(name)?;
            session.logout()?;
            if !quiet {
                println!("Created album '{name}' for user '{user}'");
            }
        }
        AlbumCommands::Delete { user, name } => {
            session.login(user)?;
            let removed = session.current_mut()?.remove_album(name)?;
            session.logout()?;
            if !quiet {
                println!(
                    "Deleted album '{}' ({} photo(s))",
                    removed.name(),
                    removed.photo_count()
                );
            }
        }
        AlbumCommands::Rename { user, name, new_name } => {
            session.login(user)?;
            session.current_mut()?.rename_album(name, new_name)?;
            session.logout()?;
            if !quiet {
                println!("Renamed album '{name}' to '{new_name}'");
            }
        }
        AlbumCommands::List { user } => {
            session.login(user)?;
            let current = session.current()?;
            if current.albums().is_empty() {
                if !quiet {
                    println!("User '{user}' has no albums.");
                }
            } else {
                for album in current.albums() {
                    if quiet {
                        println!("{}", album.name());
                    } else {
                        println!(
                            "  {} ({} photo(s), {})",
                            album.name(),
                            album.photo_count(),
                            album.date_range()
                        );
                    }
                }
            }
            session.logout()?;
        }
    }
    Ok(())
}

/// Print one photo line for photo list and search output
fn print_photo(photo: &Photo, quiet: bool) {
    if quiet {
        println!("{}", photo.path().display());
    } else {
        let tags = photo.tag_strings();
        let tag_text = if tags.is_empty() {
            "no tags".to_string()
        } else {
            tags.join(", ")
        };
        println!(
            "  {} (taken {}, caption: '{}', {})",
            photo.path().display(),
            photo.taken().format("%Y-%m-%d %H:%M:%S"),
            photo.caption(),
            tag_text
        );
    }
}

/// Handle the photo command - manage the photos inside an album
///
/// # Errors
///
/// Returns `PhotorError` for unknown users/albums/photos, duplicate photos,
/// failed moves or copies, or store failures.
fn handle_photo_command(session: &mut Session, command: &PhotoCommands, quiet: bool) -> Result<()> {
    /// Look up an album or fail with the proper model error
    fn album_mut<'a>(
        session: &'a mut Session,
        name: &str,
    ) -> Result<&'a mut photor::model::Album> {
        Ok(session
            .current_mut()?
            .album_by_name_mut(name)
            .ok_or_else(|| ModelError::AlbumNotFound(name.to_string()))?)
    }

    fn photo_mut<'a>(
        session: &'a mut Session,
        album: &str,
        path: &Path,
    ) -> Result<&'a mut Photo> {
        Ok(album_mut(session, album)?
            .photo_mut(path)
            .ok_or_else(|| ModelError::PhotoNotFound(path.display().to_string()))?)
    }

    match command {
        PhotoCommands::Add { user, album, path, taken } => {
            session.login(user)?;
            let photo = Photo::new(path.clone(), taken.unwrap_or_else(Utc::now));
            album_mut(session, album)?.add_photo(photo)?;
            session.logout()?;
            if !quiet {
                println!("Added {} to album '{album}'", path.display());
            }
        }
        PhotoCommands::Remove { user, album, path } => {
            session.login(user)?;
            album_mut(session, album)?.remove_photo(path)?;
            session.logout()?;
            if !quiet {
                println!("Removed {} from album '{album}'", path.display());
            }
        }
        PhotoCommands::Caption { user, album, path, caption } => {
            session.login(user)?;
            album_mut(session, album)?.caption_photo(path, caption)?;
            session.logout()?;
            if !quiet {
                println!("Captioned {}", path.display());
            }
        }
        PhotoCommands::Tag { user, album, path, tag } => {
            let (name, value) = split_tag_arg(tag);
            if name.is_empty() || value.is_empty() {
                return Err(PhotorError::InvalidInput(format!(
                    "Invalid tag '{tag}': expected TYPE=VALUE"
                )));
            }
            session.login(user)?;
            photo_mut(session, album, path)?.add_tag(Tag::new(name, value));
            session.logout()?;
            if !quiet {
                println!("Tagged {} with {name}={value}", path.display());
            }
        }
        PhotoCommands::Untag { user, album, path, tag } => {
            let (name, value) = split_tag_arg(tag);
            session.login(user)?;
            photo_mut(session, album, path)?.remove_tag(&Tag::new(name, value));
            session.logout()?;
            if !quiet {
                println!("Removed tag {name}={value} from {}", path.display());
            }
        }
        PhotoCommands::Move { user, from, to, path } => {
            session.login(user)?;
            session.current_mut()?.move_photo(from, path, to)?;
            session.logout()?;
            if !quiet {
                println!("Moved {} from '{from}' to '{to}'", path.display());
            }
        }
        PhotoCommands::Copy { user, from, to, path } => {
            session.login(user)?;
            session.current_mut()?.copy_photo(from, path, to)?;
            session.logout()?;
            if !quiet {
                println!("Copied {} from '{from}' to '{to}'", path.display());
            }
        }
        PhotoCommands::List { user, album } => {
            session.login(user)?;
            let found = session
                .current()?
                .album_by_name(album)
                .ok_or_else(|| ModelError::AlbumNotFound(album.to_string()))?;
            if found.is_empty() {
                if !quiet {
                    println!("Album '{}' is empty.", found.name());
                }
            } else {
                if !quiet {
                    println!(
                        "Album '{}' ({} photo(s), {}):",
                        found.name(),
                        found.photo_count(),
                        found.date_range()
                    );
                }
                for photo in found.photos() {
                    print_photo(photo, quiet);
                }
            }
            session.logout()?;
        }
    }
    Ok(())
}

/// Handle the search command - filter a user's photos by date and tags
///
/// # Errors
///
/// Returns `PhotorError` for more than two tag constraints, invalid or
/// half-specified constraints, an inverted date range, or store failures.
fn handle_search_command(session: &mut Session, args: &SearchArgs, quiet: bool) -> Result<()> {
    if args.tags.len() > 2 {
        return Err(PhotorError::InvalidInput(
            "At most two tag constraints are supported".to_string(),
        ));
    }

    let mut builder = Query::builder();
    if let Some(from) = args.from {
        builder = builder.from_date(from);
    }
    if let Some(to) = args.to {
        builder = builder.to_date(to);
    }
    if let Some(tag) = args.tags.first() {
        let (name, value) = split_tag_arg(tag);
        builder = builder.tag_one(name, value);
    }
    if let Some(tag) = args.tags.get(1) {
        let (name, value) = split_tag_arg(tag);
        builder = builder.tag_two(name, value);
    }
    if args.any {
        builder = builder.combinator(Combinator::Or);
    }
    let query = builder.build();

    session.login(&args.user)?;
    let results = session.search(&query)?;
    session.logout()?;

    if results.is_empty() {
        if !quiet {
            println!("No photos matched.");
        }
    } else {
        if !quiet {
            println!("Found {} photo(s):", results.len());
        }
        for photo in &results {
            print_photo(photo, quiet);
        }
    }
    Ok(())
}

/// Main entry point for the photor application
///
/// Loads configuration, parses command-line arguments, opens the session
/// over the user store, and dispatches to the command handlers.
///
/// # Errors
///
/// Returns `PhotorError` if configuration loading fails, the store cannot
/// be opened, or any command handler returns an error.
fn main() -> Result<()> {
    let config = PhotorConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    let store_path = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => config.store_path()?,
    };
    let mut session = Session::open(store_path)?;

    match &cli.command {
        Commands::User { command } => handle_user_command(&mut session, command, quiet)?,
        Commands::Album { command } => handle_album_command(&mut session, command, quiet)?,
        Commands::Photo { command } => handle_photo_command(&mut session, command, quiet)?,
        Commands::Search(args) => handle_search_command(&mut session, args, quiet)?,
    }

    Ok(())
}
