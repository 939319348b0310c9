use crate::modules::movies::adapters::outbound::movie_repository::MovieRepository;
use crate::modules::movies::adapters::outbound::movie_repository_in_memory::InMemoryMovieRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<dyn MovieRepository + Send + Sync>,
}

impl AppState {
    pub fn new(movies: Arc<dyn MovieRepository + Send + Sync>) -> Self {
        Self { movies }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryMovieRepository::new()))
    }
}
