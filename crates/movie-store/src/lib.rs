//! # Movie Store Crate
//!
//! Read access to the movie and cast tables.
//!
//! ## Main Components
//!
//! - **types**: Opaque record types (MovieRecord, CastRecord, MovieId)
//! - **store**: The `MovieStore` trait and an in-memory implementation
//! - **dynamo**: The DynamoDB implementation
//! - **attributes**: DynamoDB attribute values to plain JSON
//! - **error**: Error types for store access
//!
//! ## Example Usage
//!
//! ```ignore
//! use movie_store::{InMemoryMovieStore, MovieStore};
//! use std::path::Path;
//!
//! let store = InMemoryMovieStore::load_from_file(Path::new("fixtures/movies.json"))?;
//!
//! if let Some(movie) = store.get_movie(42).await? {
//!     let cast = store.query_cast(42).await?;
//!     println!("{} has {} cast records", movie.id().unwrap_or_default(), cast.len());
//! }
//! ```

// Public modules
pub mod attributes;
pub mod dynamo;
pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use dynamo::DynamoMovieStore;
pub use error::{ErrorDetail, Result, StoreError};
pub use store::{InMemoryMovieStore, MovieStore};
pub use types::{
    // Type aliases
    Attributes,
    MovieId,
    // Core types
    CastRecord,
    MovieRecord,
    // Attribute names
    CAST_FIELD,
    CAST_KEY,
    MOVIE_KEY,
};
