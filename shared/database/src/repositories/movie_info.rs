//! Movie Info Repository
//!
//! Asynchronous CRUD operations for movie info records in the `movie_info`
//! collection. Multi-record results are delivered as lazy streams; absence
//! on read paths is an empty result, never an error.

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::stream::{self, BoxStream, StreamExt};
use mongodb::bson::doc;
use mongodb::options::ReplaceOptions;
use mongodb::Collection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cine_models::{MovieInfo, MovieUpsert};
use cine_utils::{validate_model, CineError, CineResult};

use crate::mongodb::MongoDatabase;

pub const MOVIE_INFO_COLLECTION: &str = "movie_info";

/// Asynchronous repository contract for the movie info collection.
///
/// `save` is an upsert: a draft is inserted under a fresh identifier, an
/// existing record fully replaces the stored document with the same id.
/// There is no separate update primitive; callers fetch by id, mutate in
/// memory, and `save` the result.
#[async_trait]
pub trait MovieInfoRepository: Send + Sync {
    /// Lazily enumerate every stored record. Enumeration order is whatever
    /// the store yields; callers must not rely on it.
    async fn find_all(&self) -> CineResult<BoxStream<'static, CineResult<MovieInfo>>>;

    /// Fetch the record with the given id, or `None` if no record matches.
    async fn find_by_id(&self, id: &str) -> CineResult<Option<MovieInfo>>;

    /// Persist one record and return it with its identifier assigned.
    /// Validation failures are reported before the store is contacted.
    async fn save(&self, movie: MovieUpsert) -> CineResult<MovieInfo>;

    /// Persist a batch, emitting each saved record in input order. The
    /// stream completes only after the whole batch has been persisted, so
    /// draining it is the batch completion signal.
    fn save_all(&self, movies: Vec<MovieUpsert>) -> BoxStream<'static, CineResult<MovieInfo>>;

    /// Remove the record with the given id. Completes successfully even if
    /// no record matched.
    async fn delete_by_id(&self, id: &str) -> CineResult<()>;

    /// Remove every record in the collection.
    async fn delete_all(&self) -> CineResult<()>;
}

/// Shared `save_all` plumbing: element N+1 is not dispatched until element
/// N has been persisted, which yields input-order emission and makes the
/// final emission the batch completion signal.
pub(crate) fn save_sequentially<R>(
    repository: R,
    movies: Vec<MovieUpsert>,
) -> BoxStream<'static, CineResult<MovieInfo>>
where
    R: MovieInfoRepository + Clone + 'static,
{
    stream::iter(movies)
        .then(move |movie| {
            let repository = repository.clone();
            async move { repository.save(movie).await }
        })
        .boxed()
}

/// MongoDB-backed implementation over the `movie_info` collection.
#[derive(Clone)]
pub struct MongoMovieInfoRepository {
    collection: Collection<MovieInfoDocument>,
}

impl MongoMovieInfoRepository {
    pub fn new(database: &MongoDatabase) -> Self {
        Self {
            collection: database.collection(MOVIE_INFO_COLLECTION),
        }
    }
}

#[async_trait]
impl MovieInfoRepository for MongoMovieInfoRepository {
    async fn find_all(&self) -> CineResult<BoxStream<'static, CineResult<MovieInfo>>> {
        let cursor = self.collection.find(doc! {}, None).await?;
        Ok(cursor
            .map(|result| result.map(MovieInfo::from).map_err(CineError::from))
            .boxed())
    }

    async fn find_by_id(&self, id: &str) -> CineResult<Option<MovieInfo>> {
        let document = self.collection.find_one(doc! {"_id": id}, None).await?;
        Ok(document.map(MovieInfo::from))
    }

    async fn save(&self, movie: MovieUpsert) -> CineResult<MovieInfo> {
        let movie = match movie {
            MovieUpsert::New(draft) => {
                validate_model(&draft)?;
                let movie = draft.into_movie(Uuid::new_v4().to_string());
                let document = MovieInfoDocument::from(movie.clone());
                self.collection.insert_one(&document, None).await?;
                movie
            }
            MovieUpsert::Existing(movie) => {
                validate_model(&movie)?;
                let document = MovieInfoDocument::from(movie.clone());
                let options = ReplaceOptions::builder().upsert(true).build();
                self.collection
                    .replace_one(doc! {"_id": movie.id.as_str()}, &document, options)
                    .await?;
                movie
            }
        };

        tracing::debug!(movie_id = %movie.id, "Persisted movie info");
        Ok(movie)
    }

    fn save_all(&self, movies: Vec<MovieUpsert>) -> BoxStream<'static, CineResult<MovieInfo>> {
        save_sequentially(self.clone(), movies)
    }

    async fn delete_by_id(&self, id: &str) -> CineResult<()> {
        // Idempotent: deleting an id that never existed is still a success.
        self.collection.delete_one(doc! {"_id": id}, None).await?;
        Ok(())
    }

    async fn delete_all(&self) -> CineResult<()> {
        self.collection.delete_many(doc! {}, None).await?;
        Ok(())
    }
}

/// Stored shape of a movie record; the identifier lives under `_id` as a
/// plain string so caller-chosen ids round-trip unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MovieInfoDocument {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    year: i32,
    cast: Vec<String>,
    release_date: NaiveDate,
}

impl From<MovieInfo> for MovieInfoDocument {
    fn from(movie: MovieInfo) -> Self {
        Self {
            id: movie.id,
            name: movie.name,
            year: movie.year,
            cast: movie.cast,
            release_date: movie.release_date,
        }
    }
}

impl From<MovieInfoDocument> for MovieInfo {
    fn from(document: MovieInfoDocument) -> Self {
        Self {
            id: document.id,
            name: document.name,
            year: document.year,
            cast: document.cast,
            release_date: document.release_date,
        }
    }
}
