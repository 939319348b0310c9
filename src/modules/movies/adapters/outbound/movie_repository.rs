use crate::modules::movies::core::movie::{Movie, MovieId, MoviePatch, NewMovie};
use crate::modules::movies::core::movie_store::MovieStoreError;
use async_trait::async_trait;

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn create(&self, fields: NewMovie) -> Movie;
    async fn get_all(&self) -> Vec<Movie>;
    async fn get_one(&self, id: MovieId) -> Result<Movie, MovieStoreError>;
    async fn update(&self, id: MovieId, patch: MoviePatch) -> Result<Movie, MovieStoreError>;
    async fn remove(&self, id: MovieId) -> Result<Movie, MovieStoreError>;
}
