//! Movie API crate: the "get movie by id" handler.
//!
//! This crate contains the handler that turns an API Gateway request into
//! at most two store reads and a JSON response, plus the configuration and
//! `lambda_http` glue used by the `get-movie-by-id` binary.

pub mod config;
pub mod lambda;
pub mod lookup;
pub mod request;
pub mod response;

pub use config::{Config, ConfigError};
pub use lambda::{EventSummary, handle_request};
pub use lookup::{Lookup, MovieLookupHandler};
pub use request::{MovieIdParam, MovieRequest};
pub use response::ApiResponse;
