// In memory movie repository.
//
// Purpose
// - Serve the HTTP layer without a database.
//
// Responsibilities
// - Own a single MovieStore and serialize access to it from concurrent requests.

use crate::modules::movies::adapters::outbound::movie_repository::MovieRepository;
use crate::modules::movies::core::movie::{Movie, MovieId, MoviePatch, NewMovie};
use crate::modules::movies::core::movie_store::{MovieStore, MovieStoreError};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryMovieRepository {
    store: RwLock<MovieStore>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn create(&self, fields: NewMovie) -> Movie {
        let mut store = self.store.write().await;
        let movie = store.create(fields);
        tracing::info!(id = movie.id, total = store.len(), "movie created");
        movie
    }

    async fn get_all(&self) -> Vec<Movie> {
        let movies = self.store.read().await.get_all();
        tracing::debug!(count = movies.len(), "movies listed");
        movies
    }

    async fn get_one(&self, id: MovieId) -> Result<Movie, MovieStoreError> {
        self.store.read().await.get_one(id).inspect_err(|e| {
            tracing::warn!(id, error = %e, "movie lookup failed");
        })
    }

    async fn update(&self, id: MovieId, patch: MoviePatch) -> Result<Movie, MovieStoreError> {
        let movie = self.store.write().await.update(id, patch).inspect_err(|e| {
            tracing::warn!(id, error = %e, "movie update failed");
        })?;
        tracing::info!(id, "movie updated");
        Ok(movie)
    }

    async fn remove(&self, id: MovieId) -> Result<Movie, MovieStoreError> {
        let mut store = self.store.write().await;
        let movie = store.remove(id).inspect_err(|e| {
            tracing::warn!(id, error = %e, "movie removal failed");
        })?;
        tracing::info!(id, total = store.len(), "movie removed");
        Ok(movie)
    }
}
