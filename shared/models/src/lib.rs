//! # Cine Core Domain Models
//!
//! Core domain models for the Cine movies-info service. All models implement
//! serialization/deserialization with serde and validation with the validator
//! crate.
//!
//! ## Key Models
//!
//! - **MovieDraft**: a movie record before first persistence, no identifier
//! - **MovieInfo**: a persisted movie record with its unique identifier
//! - **MovieUpsert**: the write request accepted by the repository layer
//!
//! ## Validation
//!
//! - Movie name must be a non-empty display string
//! - Release year must fall in a plausible range
//! - Persisted records must carry a non-empty identifier

pub mod movie;

#[cfg(test)]
pub mod property_tests;

pub use movie::{MovieDraft, MovieInfo, MovieUpsert};
