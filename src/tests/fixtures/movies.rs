// Shared test fixture for the NewMovie input.

use crate::modules::movies::core::movie::NewMovie;

pub struct NewMovieBuilder {
    inner: NewMovie,
}

impl Default for NewMovieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewMovieBuilder {
    pub fn new() -> Self {
        Self {
            inner: NewMovie {
                title: "Test Movie".to_string(),
                year: 2000,
                genres: vec!["test".to_string()],
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn year(mut self, v: i32) -> Self {
        self.inner.year = v;
        self
    }

    pub fn genres(mut self, v: Vec<String>) -> Self {
        self.inner.genres = v;
        self
    }

    pub fn build(self) -> NewMovie {
        self.inner
    }
}

#[cfg(test)]
mod new_movie_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        assert_eq!(NewMovieBuilder::default().build(), NewMovieBuilder::new().build());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = NewMovieBuilder::new()
            .title("Movie")
            .year(1999)
            .genres(vec!["Action".into(), "Drama".into()])
            .build();

        assert_eq!(custom.title, "Movie");
        assert_eq!(custom.year, 1999);
        assert_eq!(custom.genres, vec!["Action", "Drama"]);
    }
}
