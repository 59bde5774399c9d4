//! Repository module for document-store CRUD operations
//!
//! Provides the asynchronous repository contract for movie info records,
//! its MongoDB-backed implementation, and an in-memory implementation with
//! the same observable semantics.

pub mod in_memory;
pub mod movie_info;

pub use in_memory::InMemoryMovieInfoRepository;
pub use movie_info::{MongoMovieInfoRepository, MovieInfoRepository, MOVIE_INFO_COLLECTION};
