//! Movie info domain models for the Cine movies-info service.
//!
//! This module defines the movie record in its two lifecycle states:
//! a [`MovieDraft`] that has not been persisted yet and therefore has no
//! identifier, and a [`MovieInfo`] that carries the store-assigned (or
//! caller-chosen) identifier. The two are joined by [`MovieUpsert`], the
//! write type accepted by the repository layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A movie record that has not been persisted yet. No identifier: the
/// store assigns one when the draft is first saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MovieDraft {
    #[validate(length(min = 1, max = 255, message = "Movie name is required"))]
    pub name: String,
    #[validate(range(min = 1888, max = 2200, message = "Release year out of range"))]
    pub year: i32,
    pub cast: Vec<String>,
    pub release_date: NaiveDate,
}

/// A persisted movie record. The identifier is unique across the
/// collection and never changes after the first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MovieInfo {
    #[validate(length(min = 1, message = "Movie id is required"))]
    pub id: String,
    #[validate(length(min = 1, max = 255, message = "Movie name is required"))]
    pub name: String,
    #[validate(range(min = 1888, max = 2200, message = "Release year out of range"))]
    pub year: i32,
    pub cast: Vec<String>,
    pub release_date: NaiveDate,
}

/// Write request for the repository: either a draft to insert under a
/// fresh identifier, or an existing record to replace in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieUpsert {
    New(MovieDraft),
    Existing(MovieInfo),
}

impl MovieDraft {
    pub fn new(
        name: impl Into<String>,
        year: i32,
        cast: Vec<String>,
        release_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            year,
            cast,
            release_date,
        }
    }

    /// Promote the draft to a persisted record under the given identifier.
    pub fn into_movie(self, id: impl Into<String>) -> MovieInfo {
        MovieInfo {
            id: id.into(),
            name: self.name,
            year: self.year,
            cast: self.cast,
            release_date: self.release_date,
        }
    }
}

impl MovieInfo {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        year: i32,
        cast: Vec<String>,
        release_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            year,
            cast,
            release_date,
        }
    }
}

impl From<MovieDraft> for MovieUpsert {
    fn from(draft: MovieDraft) -> Self {
        Self::New(draft)
    }
}

impl From<MovieInfo> for MovieUpsert {
    fn from(movie: MovieInfo) -> Self {
        Self::Existing(movie)
    }
}
