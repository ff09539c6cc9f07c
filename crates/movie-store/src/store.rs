//! The `MovieStore` seam and its in-memory implementation.
//!
//! The handler only ever needs two reads:
//! 1. a point lookup of a movie by `id`
//! 2. a query for every cast record whose `movieId` matches
//!
//! `InMemoryMovieStore` answers both from `HashMap` indices and is what the
//! tests and the CLI's `--fixtures` mode run against.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::types::{CastRecord, MovieId, MovieRecord};

/// Read access to movie and cast records.
///
/// `Send + Sync` so a single store can be shared by reference across
/// every invocation handled by the process.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Fetch the movie whose primary key is `id`.
    ///
    /// `Ok(None)` means the table answered and there is no such movie.
    async fn get_movie(&self, id: MovieId) -> Result<Option<MovieRecord>>;

    /// Fetch every cast record whose `movieId` equals `movie_id`.
    async fn query_cast(&self, movie_id: MovieId) -> Result<Vec<CastRecord>>;
}

#[async_trait]
impl<S: MovieStore + ?Sized> MovieStore for std::sync::Arc<S> {
    async fn get_movie(&self, id: MovieId) -> Result<Option<MovieRecord>> {
        (**self).get_movie(id).await
    }

    async fn query_cast(&self, movie_id: MovieId) -> Result<Vec<CastRecord>> {
        (**self).query_cast(movie_id).await
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// Store backed by in-process maps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMovieStore {
    movies: HashMap<MovieId, MovieRecord>,
    cast: HashMap<MovieId, Vec<CastRecord>>,
}

/// On-disk fixture layout: `{"movies": [...], "cast": [...]}`
#[derive(Debug, Deserialize)]
struct Fixture {
    #[serde(default)]
    movies: Vec<MovieRecord>,
    #[serde(default)]
    cast: Vec<CastRecord>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load movies and cast records from a JSON fixture file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| StoreError::Fixture {
            path: display.clone(),
            reason: e.to_string(),
        })?;
        Self::from_json(&display, &contents)
    }

    /// Parse a fixture document. `source` names it in error messages.
    pub fn from_json(source: &str, contents: &str) -> Result<Self> {
        let fixture: Fixture = serde_json::from_str(contents).map_err(|e| StoreError::Fixture {
            path: source.to_string(),
            reason: e.to_string(),
        })?;

        let mut store = Self::new();
        for (idx, movie) in fixture.movies.into_iter().enumerate() {
            store.insert_movie(movie).map_err(|reason| StoreError::Fixture {
                path: source.to_string(),
                reason: format!("movies[{idx}]: {reason}"),
            })?;
        }
        for (idx, record) in fixture.cast.into_iter().enumerate() {
            store.insert_cast(record).map_err(|reason| StoreError::Fixture {
                path: source.to_string(),
                reason: format!("cast[{idx}]: {reason}"),
            })?;
        }

        let (movies, cast) = store.counts();
        debug!("Loaded fixture {} with {} movies and {} cast records", source, movies, cast);
        Ok(store)
    }

    /// Insert (or replace) a movie, keyed by its `id` attribute
    pub fn insert_movie(&mut self, movie: MovieRecord) -> std::result::Result<(), String> {
        let id = movie
            .id()
            .ok_or_else(|| "missing integer `id` attribute".to_string())?;
        self.movies.insert(id, movie);
        Ok(())
    }

    /// Append a cast record, indexed by its `movieId` attribute
    pub fn insert_cast(&mut self, record: CastRecord) -> std::result::Result<(), String> {
        let movie_id = record
            .movie_id()
            .ok_or_else(|| "missing integer `movieId` attribute".to_string())?;
        self.cast.entry(movie_id).or_default().push(record);
        Ok(())
    }

    /// (movies, cast records)
    pub fn counts(&self) -> (usize, usize) {
        (self.movies.len(), self.cast.values().map(Vec::len).sum())
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn get_movie(&self, id: MovieId) -> Result<Option<MovieRecord>> {
        Ok(self.movies.get(&id).cloned())
    }

    async fn query_cast(&self, movie_id: MovieId) -> Result<Vec<CastRecord>> {
        Ok(self.cast.get(&movie_id).cloned().unwrap_or_default())
    }
}
