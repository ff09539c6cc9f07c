//! DynamoDB-backed movie store.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use tracing::debug;

use crate::attributes::{item_to_attributes, key_value};
use crate::error::{Result, StoreError};
use crate::store::MovieStore;
use crate::types::{CAST_KEY, CastRecord, MOVIE_KEY, MovieId, MovieRecord};

/// Reads movies from one table and cast records from another.
///
/// Both names may point at the same table. The client is cheap to clone
/// and is meant to be built once per process.
#[derive(Debug, Clone)]
pub struct DynamoMovieStore {
    client: Client,
    movie_table: String,
    cast_table: String,
}

impl DynamoMovieStore {
    pub fn new(
        client: Client,
        movie_table: impl Into<String>,
        cast_table: impl Into<String>,
    ) -> Self {
        Self {
            client,
            movie_table: movie_table.into(),
            cast_table: cast_table.into(),
        }
    }
}

#[async_trait]
impl MovieStore for DynamoMovieStore {
    async fn get_movie(&self, id: MovieId) -> Result<Option<MovieRecord>> {
        debug!(table = %self.movie_table, id, "GetItem");

        let output = self
            .client
            .get_item()
            .table_name(&self.movie_table)
            .key(MOVIE_KEY, key_value(id))
            .send()
            .await
            .map_err(|e| StoreError::GetItem {
                table: self.movie_table.clone(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        output
            .item
            .map(|item| item_to_attributes(item).map(MovieRecord::new))
            .transpose()
    }

    async fn query_cast(&self, movie_id: MovieId) -> Result<Vec<CastRecord>> {
        debug!(table = %self.cast_table, movie_id, "Query");

        // Follows LastEvaluatedKey until the table has no more pages
        let items = self
            .client
            .query()
            .table_name(&self.cast_table)
            .key_condition_expression(format!("{CAST_KEY} = :m"))
            .expression_attribute_values(":m", key_value(movie_id))
            .into_paginator()
            .items()
            .send()
            .collect::<std::result::Result<Vec<_>, _>>()
            .await
            .map_err(|e| StoreError::Query {
                table: self.cast_table.clone(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        debug!(movie_id, count = items.len(), "Query returned cast records");

        items
            .into_iter()
            .map(|item| item_to_attributes(item).map(CastRecord::new))
            .collect()
    }
}
