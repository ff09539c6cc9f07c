//! Core domain types for movie and cast records.
//!
//! Records are stored schemaless, so the handler treats them as opaque
//! attribute maps. The only attributes this crate knows by name are the
//! key attributes below and the `cast` field added at response time.
//!
//! Key Rust concepts demonstrated here:
//! - Newtypes over `serde_json::Map` with `#[serde(transparent)]`
//! - Type aliases for domain clarity (MovieId)
//! - Builder-style methods that take `self` by value

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Type Aliases
// =============================================================================

/// Primary key of a movie record (a DynamoDB `N` attribute)
pub type MovieId = i64;

/// Attribute name to JSON value, exactly as stored
pub type Attributes = Map<String, Value>;

/// Primary key attribute of the movie table
pub const MOVIE_KEY: &str = "id";

/// Key attribute of the cast table
pub const CAST_KEY: &str = "movieId";

/// Field attached to a movie record when cast enrichment is requested
pub const CAST_FIELD: &str = "cast";

// =============================================================================
// Movie Record
// =============================================================================

/// A movie record retrieved verbatim from the store.
///
/// Serializes as the bare attribute map, so a record read from the table
/// is written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieRecord(Attributes);

impl MovieRecord {
    pub fn new(attributes: Attributes) -> Self {
        Self(attributes)
    }

    /// The `id` attribute, if present and integral
    pub fn id(&self) -> Option<MovieId> {
        self.0.get(MOVIE_KEY).and_then(Value::as_i64)
    }

    /// Look up a single attribute by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.0
    }

    pub fn into_attributes(self) -> Attributes {
        self.0
    }

    /// Attach cast records under the `cast` field.
    ///
    /// An empty list still produces `"cast": []`. A stored attribute that
    /// happens to be called `cast` is replaced.
    pub fn with_cast(mut self, cast: Vec<CastRecord>) -> Self {
        let cast = cast
            .into_iter()
            .map(|record| Value::Object(record.into_attributes()))
            .collect();
        self.0.insert(CAST_FIELD.to_string(), Value::Array(cast));
        self
    }
}

// =============================================================================
// Cast Record
// =============================================================================

/// One row of the cast table for a movie
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CastRecord(Attributes);

impl CastRecord {
    pub fn new(attributes: Attributes) -> Self {
        Self(attributes)
    }

    /// The `movieId` attribute, if present and integral
    pub fn movie_id(&self) -> Option<MovieId> {
        self.0.get(CAST_KEY).and_then(Value::as_i64)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn into_attributes(self) -> Attributes {
        self.0
    }
}
