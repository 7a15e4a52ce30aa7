//! Integration tests for photor
//!
//! These tests verify end-to-end functionality by creating temporary stores
//! and driving complete workflows through the session layer: account
//! administration, album and photo management, persistence across reopen,
//! and search.

use chrono::{TimeZone, Utc};
use photor::model::{Photo, Tag};
use photor::search::{Combinator, Query};
use photor::session::{Session, SessionError};
use photor::store::{StoreError, UserStore};
use std::path::Path;
use tempfile::TempDir;

/// Helper to open a session over a fresh temporary store
fn setup_session() -> (Session, TempDir) {
    let dir = TempDir::new().unwrap();
    let session = Session::open(dir.path().join("store")).unwrap();
    (session, dir)
}

fn photo_taken(path: &str, y: i32, m: u32, d: u32, h: u32) -> Photo {
    Photo::new(path, Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap())
}

#[test]
fn test_full_album_workflow() {
    let (mut session, _dir) = setup_session();

    session.create_user("alice").unwrap();
    session.login("alice").unwrap();

    let user = session.current_mut().unwrap();
    let album = user.create_album("Summer 2024").unwrap();
    album.add_photo(photo_taken("beach.png", 2024, 7, 14, 18)).unwrap();
    album.add_photo(photo_taken("boat.png", 2024, 7, 20, 9)).unwrap();
    album
        .caption_photo(Path::new("beach.png"), "Sunset at the beach")
        .unwrap();
    session.logout().unwrap();

    session.login("alice").unwrap();
    let album = session
        .current()
        .unwrap()
        .album_by_name("summer 2024")
        .unwrap();
    assert_eq!(album.photo_count(), 2);
    assert_eq!(album.date_range(), "7/14/2024 - 7/20/2024");
    assert_eq!(
        album.photo(Path::new("beach.png")).unwrap().caption(),
        "Sunset at the beach"
    );
}

#[test]
fn test_tags_survive_persistence() {
    let (mut session, _dir) = setup_session();

    session.create_user("alice").unwrap();
    session.login("alice").unwrap();
    let album = session.current_mut().unwrap().create_album("trip").unwrap();
    let mut photo = photo_taken("beach.png", 2024, 1, 10, 12);
    photo.add_tag(Tag::new("Person", "Bob"));
    photo.add_tag(Tag::new("location", "nice"));
    album.add_photo(photo).unwrap();
    session.logout().unwrap();

    session.login("alice").unwrap();
    let photo = session
        .current()
        .unwrap()
        .album_by_name("trip")
        .unwrap()
        .photo(Path::new("beach.png"))
        .unwrap();
    // tag comparison is case-insensitive on both fields
    assert!(photo.has_tag(&Tag::new("person", "bob")));
    assert!(photo.has_tag(&Tag::new("LOCATION", "Nice")));
    assert!(!photo.has_tag(&Tag::new("person", "carol")));
}

#[test]
fn test_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store");

    {
        let mut session = Session::open(&path).unwrap();
        session.create_user("alice").unwrap();
        session.login("alice").unwrap();
        session
            .current_mut()
            .unwrap()
            .create_album("trip")
            .unwrap()
            .add_photo(photo_taken("a.png", 2024, 3, 4, 10))
            .unwrap();
        session.logout().unwrap();
    }

    {
        let mut session = Session::open(&path).unwrap();
        session.login("alice").unwrap();
        let album = session.current().unwrap().album_by_name("trip").unwrap();
        assert_eq!(album.photo_count(), 1);
        assert_eq!(album.date_range(), "3/4/2024");
    }
}

#[test]
fn test_move_photo_workflow() {
    let (mut session, _dir) = setup_session();

    session.create_user("alice").unwrap();
    session.login("alice").unwrap();
    let user = session.current_mut().unwrap();
    user.create_album("inbox")
        .unwrap()
        .add_photo(photo_taken("a.png", 2024, 1, 1, 8))
        .unwrap();
    user.create_album("favorites").unwrap();

    user.move_photo("inbox", Path::new("a.png"), "favorites").unwrap();
    assert!(user.album_by_name("inbox").unwrap().is_empty());
    assert!(user.album_by_name("favorites").unwrap().contains(Path::new("a.png")));

    // moving back onto a copy that already exists must not lose the photo
    user.album_by_name_mut("inbox")
        .unwrap()
        .add_photo(photo_taken("a.png", 2024, 1, 1, 8))
        .unwrap();
    let result = user.move_photo("favorites", Path::new("a.png"), "inbox");
    assert!(result.is_err());
    assert!(user.album_by_name("favorites").unwrap().contains(Path::new("a.png")));
}

#[test]
fn test_copy_photo_workflow() {
    let (mut session, _dir) = setup_session();

    session.create_user("alice").unwrap();
    session.login("alice").unwrap();
    let user = session.current_mut().unwrap();
    let inbox = user.create_album("inbox").unwrap();
    let mut photo = photo_taken("a.png", 2024, 1, 1, 8);
    photo.set_caption("first snow");
    photo.add_tag(Tag::new("location", "oslo"));
    inbox.add_photo(photo).unwrap();
    user.create_album("favorites").unwrap();

    user.copy_photo("inbox", Path::new("a.png"), "favorites").unwrap();
    session.logout().unwrap();

    // both copies survive persistence, metadata included
    session.login("alice").unwrap();
    let user = session.current().unwrap();
    assert!(user.album_by_name("inbox").unwrap().contains(Path::new("a.png")));
    let copy = user
        .album_by_name("favorites")
        .unwrap()
        .photo(Path::new("a.png"))
        .unwrap();
    assert_eq!(copy.caption(), "first snow");
    assert!(copy.has_tag(&Tag::new("location", "oslo")));
}

#[test]
fn test_search_end_to_end() {
    let (mut session, _dir) = setup_session();

    session.create_user("alice").unwrap();
    session.login("alice").unwrap();
    let user = session.current_mut().unwrap();

    let trip = user.create_album("trip").unwrap();
    let mut beach = photo_taken("beach.png", 2024, 1, 10, 12);
    beach.add_tag(Tag::new("person", "bob"));
    beach.add_tag(Tag::new("location", "nice"));
    trip.add_photo(beach).unwrap();
    trip.add_photo(photo_taken("tower.png", 2024, 2, 5, 16)).unwrap();

    let work = user.create_album("work").unwrap();
    let mut desk = photo_taken("desk.png", 2024, 1, 20, 9);
    desk.add_tag(Tag::new("person", "carol"));
    work.add_photo(desk).unwrap();

    // date window only
    let january = Query::builder()
        .from_date(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().date_naive())
        .to_date(Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap().date_naive())
        .build();
    let results = session.search(&january).unwrap();
    let paths: Vec<_> = results.iter().map(|p| p.path().to_path_buf()).collect();
    assert_eq!(paths, [Path::new("beach.png"), Path::new("desk.png")]);

    // two tags ANDed
    let both = Query::builder()
        .tag_one("person", "bob")
        .tag_two("location", "nice")
        .build();
    assert_eq!(session.search(&both).unwrap().len(), 1);

    // two tags ORed
    let either = Query::builder()
        .tag_one("person", "bob")
        .tag_two("person", "carol")
        .combinator(Combinator::Or)
        .build();
    assert_eq!(session.search(&either).unwrap().len(), 2);
}

#[test]
fn test_search_keeps_duplicates_across_albums() {
    let (mut session, _dir) = setup_session();

    session.create_user("alice").unwrap();
    session.login("alice").unwrap();
    let user = session.current_mut().unwrap();
    user.create_album("trip")
        .unwrap()
        .add_photo(photo_taken("beach.png", 2024, 1, 10, 12))
        .unwrap();
    user.create_album("best of")
        .unwrap()
        .add_photo(photo_taken("beach.png", 2024, 1, 10, 12))
        .unwrap();

    // the same photo appearing in two albums is reported twice
    let query = Query::builder()
        .from_date(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().date_naive())
        .to_date(Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap().date_naive())
        .build();
    assert_eq!(session.search(&query).unwrap().len(), 2);
}

#[test]
fn test_search_rejects_bad_queries() {
    let (mut session, _dir) = setup_session();

    session.create_user("alice").unwrap();
    session.login("alice").unwrap();

    let half = Query::builder().tag_one("person", "").build();
    assert!(matches!(
        session.search(&half),
        Err(SessionError::Search(_))
    ));

    let inverted = Query::builder()
        .from_date(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap().date_naive())
        .to_date(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().date_naive())
        .build();
    assert!(matches!(
        session.search(&inverted),
        Err(SessionError::Search(_))
    ));
}

#[test]
fn test_user_administration() {
    let (mut session, _dir) = setup_session();

    session.create_user("admin").unwrap();
    session.create_user("alice").unwrap();
    session.create_user("bob").unwrap();
    assert_eq!(session.list_users().unwrap(), ["admin", "alice", "bob"]);

    let duplicate = session.create_user("alice");
    assert!(matches!(
        duplicate,
        Err(SessionError::Store(StoreError::UserExists(_)))
    ));

    session.delete_user("bob").unwrap();
    assert_eq!(session.list_users().unwrap(), ["admin", "alice"]);

    // the admin account is protected
    assert!(matches!(
        session.delete_user("admin"),
        Err(SessionError::ReservedUser)
    ));
}

#[test]
fn test_users_are_isolated() {
    let (mut session, _dir) = setup_session();

    session.create_user("alice").unwrap();
    session.create_user("bob").unwrap();

    session.login("alice").unwrap();
    session.current_mut().unwrap().create_album("trip").unwrap();
    session.logout().unwrap();

    session.login("bob").unwrap();
    assert!(!session.current().unwrap().has_album("trip"));
}

#[test]
fn test_store_direct_access() {
    let dir = TempDir::new().unwrap();
    let store = UserStore::open(dir.path().join("store")).unwrap();

    let mut user = store.create("alice").unwrap();
    user.create_album("trip").unwrap();
    store.save(&user).unwrap();
    store.flush().unwrap();

    assert_eq!(store.count(), 1);
    let loaded = store.load("alice").unwrap().unwrap();
    assert!(loaded.has_album("trip"));

    let all = store.load_all().unwrap();
    assert_eq!(all.len(), 1);
    assert!(all.contains_key("alice"));
}
