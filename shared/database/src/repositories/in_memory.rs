//! In-memory movie info repository.
//!
//! Mirrors the observable semantics of the Mongo-backed repository over a
//! process-local map, for hermetic tests and local development without a
//! running store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::RwLock;
use uuid::Uuid;

use cine_models::{MovieInfo, MovieUpsert};
use cine_utils::{validate_model, CineError, CineResult};

use super::movie_info::{save_sequentially, MovieInfoRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryMovieInfoRepository {
    movies: Arc<RwLock<HashMap<String, MovieInfo>>>,
}

impl InMemoryMovieInfoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieInfoRepository for InMemoryMovieInfoRepository {
    async fn find_all(&self) -> CineResult<BoxStream<'static, CineResult<MovieInfo>>> {
        // Snapshot under the read lock; the stream itself holds no lock, so
        // abandoning it part-way cannot block or corrupt later operations.
        let snapshot: Vec<CineResult<MovieInfo>> = self
            .movies
            .read()
            .await
            .values()
            .cloned()
            .map(Ok)
            .collect();
        Ok(stream::iter(snapshot).boxed())
    }

    async fn find_by_id(&self, id: &str) -> CineResult<Option<MovieInfo>> {
        Ok(self.movies.read().await.get(id).cloned())
    }

    async fn save(&self, movie: MovieUpsert) -> CineResult<MovieInfo> {
        let movie = match movie {
            MovieUpsert::New(draft) => {
                validate_model(&draft)?;
                let movie = draft.into_movie(Uuid::new_v4().to_string());
                let mut movies = self.movies.write().await;
                if movies.contains_key(&movie.id) {
                    return Err(CineError::duplicate_key(format!(
                        "movie id '{}' already exists",
                        movie.id
                    )));
                }
                movies.insert(movie.id.clone(), movie.clone());
                movie
            }
            MovieUpsert::Existing(movie) => {
                validate_model(&movie)?;
                self.movies
                    .write()
                    .await
                    .insert(movie.id.clone(), movie.clone());
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
        self.movies.write().await.remove(id);
        Ok(())
    }

    async fn delete_all(&self) -> CineResult<()> {
        self.movies.write().await.clear();
        Ok(())
    }
}
