use crate::modules::movies::core::movie::{Movie, MovieId, MoviePatch, NewMovie};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MovieStoreError {
    #[error("Movie with ID {id} not found.")]
    NotFound { id: MovieId },
}

/// In-memory owner of every movie record.
///
/// Ids come from a monotonic counter and are never handed out twice, even
/// after the movie holding one is removed. Listing order is insertion order.
/// A failed operation leaves the collection as it was.
#[derive(Debug)]
pub struct MovieStore {
    movies: Vec<Movie>,
    next_id: MovieId,
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieStore {
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            next_id: 1,
        }
    }

    pub fn create(&mut self, fields: NewMovie) -> Movie {
        let movie = Movie::new(self.next_id, fields);
        self.next_id += 1;
        self.movies.push(movie.clone());
        movie
    }

    pub fn get_all(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    pub fn get_one(&self, id: MovieId) -> Result<Movie, MovieStoreError> {
        self.movies
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
            .ok_or(MovieStoreError::NotFound { id })
    }

    pub fn update(&mut self, id: MovieId, patch: MoviePatch) -> Result<Movie, MovieStoreError> {
        let movie = self
            .movies
            .iter_mut()
            .find(|movie| movie.id == id)
            .ok_or(MovieStoreError::NotFound { id })?;
        movie.apply(patch);
        Ok(movie.clone())
    }

    pub fn remove(&mut self, id: MovieId) -> Result<Movie, MovieStoreError> {
        let position = self
            .position(id)
            .ok_or(MovieStoreError::NotFound { id })?;
        Ok(self.movies.remove(position))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    fn position(&self, id: MovieId) -> Option<usize> {
        self.movies.iter().position(|movie| movie.id == id)
    }
}
