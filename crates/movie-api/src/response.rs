//! Response envelope: status code plus JSON body.

use lambda_http::http::{self, header::CONTENT_TYPE};
use lambda_http::{Body, Response};
use movie_store::{MovieRecord, StoreError};
use serde_json::{Value, json};

pub const MISSING_MOVIE_ID: &str = "Missing movie Id";
pub const INVALID_MOVIE_ID: &str = "Invalid movie Id";

/// Every response carries this content type
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// 200 with the (possibly enriched) movie record
    pub fn ok(movie: MovieRecord) -> Self {
        Self {
            status: 200,
            body: Value::Object(movie.into_attributes()),
        }
    }

    /// 404 for an absent or unparseable `movieId`
    pub fn missing_movie_id() -> Self {
        Self {
            status: 404,
            body: json!({ "Message": MISSING_MOVIE_ID }),
        }
    }

    /// 404 for a well-formed id with no record behind it
    pub fn invalid_movie_id() -> Self {
        Self {
            status: 404,
            body: json!({ "Message": INVALID_MOVIE_ID }),
        }
    }

    /// 500 echoing the store failure
    pub fn store_failure(err: &StoreError) -> Self {
        Self {
            status: 500,
            body: json!({ "error": err.detail() }),
        }
    }

    pub fn into_lambda(self) -> Result<Response<Body>, http::Error> {
        Response::builder()
            .status(self.status)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(Body::from(self.body.to_string()))
    }
}
