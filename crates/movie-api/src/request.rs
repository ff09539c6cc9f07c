//! Request descriptor extracted from the inbound event.

use lambda_http::{Request, RequestExt};
use movie_store::MovieId;

/// Path parameter carrying the movie key
pub const MOVIE_ID_PARAM: &str = "movieId";

/// Query flag that turns on cast enrichment
pub const CAST_PARAM: &str = "cast";

/// The two inputs a lookup depends on, still in their raw string form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieRequest {
    pub movie_id: Option<String>,
    pub cast: Option<String>,
}

impl MovieRequest {
    pub fn new(movie_id: impl Into<String>) -> Self {
        Self {
            movie_id: Some(movie_id.into()),
            cast: None,
        }
    }

    pub fn with_cast(mut self, cast: impl Into<String>) -> Self {
        self.cast = Some(cast.into());
        self
    }

    /// Pull `pathParameters.movieId` and `queryStringParameters.cast` out of
    /// an API Gateway request. Only the first `cast` value counts.
    pub fn from_lambda(request: &Request) -> Self {
        let movie_id = request
            .path_parameters_ref()
            .and_then(|params| params.first(MOVIE_ID_PARAM))
            .map(str::to_string);
        let cast = request
            .query_string_parameters_ref()
            .and_then(|params| params.first(CAST_PARAM))
            .map(str::to_string);

        Self { movie_id, cast }
    }

    /// How the `movieId` parameter reads as an integer.
    pub fn movie_id_param(&self) -> MovieIdParam {
        self.movie_id
            .as_deref()
            .map_or(MovieIdParam::Missing, parse_movie_id)
    }

    /// The parsed movie key, if it is usable and fits a [`MovieId`].
    pub fn movie_id(&self) -> Option<MovieId> {
        match self.movie_id_param() {
            MovieIdParam::Id(id) => Some(id),
            MovieIdParam::Missing | MovieIdParam::OutOfRange => None,
        }
    }

    /// Cast enrichment is on only for the exact string `"true"`.
    pub fn wants_cast(&self) -> bool {
        self.cast.as_deref() == Some("true")
    }
}

/// Outcome of reading the `movieId` path parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieIdParam {
    /// Absent, no leading digits, or zero
    Missing,
    /// Leading digits that no stored key can match
    OutOfRange,
    Id(MovieId),
}

/// Reads the leading integer the way `parseInt` does: leading whitespace,
/// an optional sign, an optional `0x` prefix, then the longest run of
/// digits. Whatever follows is ignored, so `"42abc"` is 42 and `"4.2"` is 4.
fn parse_movie_id(raw: &str) -> MovieIdParam {
    let raw = raw.trim_start();
    let negative = raw.starts_with('-');
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let (radix, body) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };

    let digits = body
        .chars()
        .take_while(|c| c.is_digit(radix))
        .count();
    if digits == 0 {
        return MovieIdParam::Missing;
    }

    match MovieId::from_str_radix(&body[..digits], radix) {
        Ok(0) => MovieIdParam::Missing,
        Ok(id) if negative => MovieIdParam::Id(-id),
        Ok(id) => MovieIdParam::Id(id),
        Err(_) => MovieIdParam::OutOfRange,
    }
}
