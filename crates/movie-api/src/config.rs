//! Environment configuration for the handler.
//!
//! | Variable          | Required | Meaning                                   |
//! |-------------------|----------|-------------------------------------------|
//! | `TABLE_NAME`      | yes      | movie table, point lookups on `id`        |
//! | `CAST_TABLE_NAME` | no       | cast table, queries on `movieId`          |
//! | `REGION`          | no       | AWS region, else the SDK default chain    |

use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::Region;
use movie_store::DynamoMovieStore;
use thiserror::Error;
use tracing::info;

pub const TABLE_NAME_VAR: &str = "TABLE_NAME";
pub const CAST_TABLE_NAME_VAR: &str = "CAST_TABLE_NAME";
pub const REGION_VAR: &str = "REGION";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
    /// Falls back to `table_name` when unset
    pub cast_table_name: String,
    pub region: Option<String>,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any variable source. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let table_name = read(TABLE_NAME_VAR).ok_or(ConfigError::Missing(TABLE_NAME_VAR))?;
        let cast_table_name = read(CAST_TABLE_NAME_VAR).unwrap_or_else(|| table_name.clone());
        let region = read(REGION_VAR);

        Ok(Self {
            table_name,
            cast_table_name,
            region,
        })
    }

    /// Build the DynamoDB client. Meant to run once per process.
    pub async fn dynamo_client(&self) -> Client {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        info!(
            region = ?sdk_config.region(),
            "Initialised DynamoDB client"
        );
        Client::new(&sdk_config)
    }

    pub async fn build_store(&self) -> DynamoMovieStore {
        DynamoMovieStore::new(
            self.dynamo_client().await,
            self.table_name.clone(),
            self.cast_table_name.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_cast_table_defaults_to_movie_table() {
        let config = Config::from_lookup(lookup_from(&[("TABLE_NAME", "Movies")])).unwrap();

        assert_eq!(
            config,
            Config {
                table_name: "Movies".to_string(),
                cast_table_name: "Movies".to_string(),
                region: None,
            }
        );
    }

    #[test]
    fn test_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("TABLE_NAME", "Movies"),
            ("CAST_TABLE_NAME", "MovieCast"),
            ("REGION", "eu-west-1"),
        ]))
        .unwrap();

        assert_eq!(config.cast_table_name, "MovieCast");
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_missing_or_blank_table_name() {
        assert_eq!(
            Config::from_lookup(lookup_from(&[])),
            Err(ConfigError::Missing("TABLE_NAME"))
        );
        assert_eq!(
            Config::from_lookup(lookup_from(&[("TABLE_NAME", "  ")])),
            Err(ConfigError::Missing("TABLE_NAME"))
        );
    }
}
