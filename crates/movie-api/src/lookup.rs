//! # Movie Lookup Handler
//!
//! One invocation is a single linear pass:
//! 1. Parse `movieId` from the request (missing/invalid -> 404)
//! 2. Point lookup of the movie (no record -> 404)
//! 3. If `cast=true`, query the cast records and attach them
//! 4. Return the record (200)
//!
//! Store failures in steps 2-3 come back as `Err(StoreError)` and are
//! translated into a 500 by [`MovieLookupHandler::handle`]. Cast
//! enrichment is all-or-nothing: if the cast query fails the whole
//! request fails, even though the movie itself was found.

use std::time::Instant;

use movie_store::{MovieId, MovieRecord, MovieStore, StoreError};
use tracing::{debug, error, info};

use crate::request::{MovieIdParam, MovieRequest};
use crate::response::ApiResponse;

/// Outcome of a lookup that reached a decision without a store failure
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// `movieId` was absent or not a usable integer
    MissingId,
    /// The store has no movie with this id
    NotFound(MovieId),
    /// `movieId` has leading digits but no key can be that large
    OutOfRange,
    /// The movie, enriched with `cast` if it was requested
    Found(MovieRecord),
}

/// Answers "get movie by id" requests against a [`MovieStore`].
///
/// Holds no per-request state, so one handler (and the store client inside
/// it) is built at cold start and shared by every invocation.
#[derive(Debug, Clone)]
pub struct MovieLookupHandler<S> {
    store: S,
}

impl<S: MovieStore> MovieLookupHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run the lookup and report what happened.
    pub async fn lookup(&self, request: &MovieRequest) -> Result<Lookup, StoreError> {
        let movie_id = match request.movie_id_param() {
            MovieIdParam::Id(movie_id) => movie_id,
            MovieIdParam::Missing => return Ok(Lookup::MissingId),
            MovieIdParam::OutOfRange => return Ok(Lookup::OutOfRange),
        };

        let Some(movie) = self.store.get_movie(movie_id).await? else {
            return Ok(Lookup::NotFound(movie_id));
        };

        if !request.wants_cast() {
            return Ok(Lookup::Found(movie));
        }

        let cast = self.store.query_cast(movie_id).await?;
        debug!("Attaching {} cast records to movie {}", cast.len(), movie_id);
        Ok(Lookup::Found(movie.with_cast(cast)))
    }

    /// Run the lookup and translate the outcome into a response.
    pub async fn handle(&self, request: &MovieRequest) -> ApiResponse {
        let start_time = Instant::now();
        info!(
            movie_id = ?request.movie_id,
            cast = ?request.cast,
            "Handling movie lookup"
        );

        let response = match self.lookup(request).await {
            Ok(Lookup::MissingId) => {
                info!("Rejected request without a usable movie id");
                ApiResponse::missing_movie_id()
            }
            Ok(Lookup::NotFound(movie_id)) => {
                info!("Movie {} not found", movie_id);
                ApiResponse::invalid_movie_id()
            }
            Ok(Lookup::OutOfRange) => {
                info!("Movie id {:?} is out of range", request.movie_id);
                ApiResponse::invalid_movie_id()
            }
            Ok(Lookup::Found(movie)) => ApiResponse::ok(movie),
            Err(err) => {
                error!(kind = err.kind(), "Movie lookup failed: {}", err);
                ApiResponse::store_failure(&err)
            }
        };

        info!(
            status = response.status,
            "Movie lookup finished in {:.2?}",
            start_time.elapsed()
        );
        response
    }
}
