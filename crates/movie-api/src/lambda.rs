//! Glue between `lambda_http` and the lookup handler.

use std::collections::BTreeMap;

use lambda_http::{Body, Error, Request, RequestExt, Response};
use movie_store::MovieStore;
use tracing::{debug, info};

use crate::lookup::MovieLookupHandler;
use crate::request::MovieRequest;

/// Parameters by name, every value kept in arrival order
pub type Params<'a> = BTreeMap<&'a str, Vec<&'a str>>;

/// The parts of an event worth logging on every invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub path_parameters: Params<'a>,
    pub query_parameters: Params<'a>,
}

impl<'a> EventSummary<'a> {
    pub fn from_request(event: &'a Request) -> Self {
        let path_parameters = event
            .path_parameters_ref()
            .map(|params| collect_params(params.iter()))
            .unwrap_or_default();
        let query_parameters = event
            .query_string_parameters_ref()
            .map(|params| collect_params(params.iter()))
            .unwrap_or_default();

        Self {
            method: event.method().as_str(),
            path: event.uri().path(),
            path_parameters,
            query_parameters,
        }
    }
}

fn collect_params<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> Params<'a> {
    let mut params = Params::new();
    for (name, value) in pairs {
        params.entry(name).or_default().push(value);
    }
    params
}

/// Serve one API Gateway event.
///
/// Every outcome, including store failures, becomes an HTTP response;
/// `Err` is only returned if the response itself cannot be built.
pub async fn handle_request<S: MovieStore>(
    handler: &MovieLookupHandler<S>,
    event: Request,
) -> Result<Response<Body>, Error> {
    let summary = EventSummary::from_request(&event);
    info!(
        method = summary.method,
        path = summary.path,
        path_parameters = ?summary.path_parameters,
        query_parameters = ?summary.query_parameters,
        "Event"
    );
    debug!(?event, "Full event");

    let request = MovieRequest::from_lambda(&event);
    let response = handler.handle(&request).await;
    Ok(response.into_lambda()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_summary_carries_path_and_parameters() {
        let mut event = Request::default()
            .with_path_parameters(HashMap::from([(
                "movieId".to_string(),
                "42".to_string(),
            )]))
            .with_query_string_parameters(HashMap::from([(
                "cast".to_string(),
                vec!["true".to_string(), "false".to_string()],
            )]));
        *event.uri_mut() = "/movies/42?cast=true&cast=false".parse().unwrap();

        let summary = EventSummary::from_request(&event);
        assert_eq!(summary.method, "GET");
        assert_eq!(summary.path, "/movies/42");
        assert_eq!(
            summary.path_parameters,
            Params::from([("movieId", vec!["42"])])
        );
        assert_eq!(
            summary.query_parameters,
            Params::from([("cast", vec!["true", "false"])])
        );
    }

    #[test]
    fn test_summary_without_parameters() {
        let event = Request::default();

        let summary = EventSummary::from_request(&event);
        assert!(summary.path_parameters.is_empty());
        assert!(summary.query_parameters.is_empty());
    }
}
