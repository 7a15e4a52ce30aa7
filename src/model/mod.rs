//! Core data model: tags, photos, albums and users
//!
//! The model is a plain in-memory object graph owned top-down: a `User` owns
//! its `Album`s, an `Album` owns an ordered list of `Photo`s, a `Photo` owns
//! its `Tag`s. Photo identity is by file path alone; tag equality is
//! case-insensitive on both name and value. All mutation is synchronous and
//! single-owner, there is no sharing discipline beyond reference passing.

pub mod album;
pub mod error;
pub mod photo;
pub mod tag;
pub mod user;

pub use album::Album;
pub use error::ModelError;
pub use photo::Photo;
pub use tag::Tag;
pub use user::User;
