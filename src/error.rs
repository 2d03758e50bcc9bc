use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::models::restaurant::SearchResponse;

/// Everything that can sink a search request. The empty-filtered-set outcome
/// is deliberately not represented here: zero matches is a normal response,
/// not a failure.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid search settings: {0}")]
    Validation(String),

    #[error("Google Places API key not configured")]
    Configuration,

    #[error("{0}")]
    Provider(String),

    #[error("Failed to search for restaurants. Please try again.")]
    Transport(#[from] reqwest::Error),
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = match self {
            SearchError::Validation(_) => StatusCode::BAD_REQUEST,
            SearchError::Configuration
            | SearchError::Provider(_)
            | SearchError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = SearchResponse {
            restaurant: None,
            error: Some(self.to_string()),
        };
        (status, json!(&body).to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::SearchError;
    use crate::models::restaurant::SearchResponse;

    #[tokio::test]
    async fn configuration_error_becomes_a_well_formed_500_payload() {
        let response = SearchError::Configuration.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let payload: SearchResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(payload.restaurant.is_none());
        assert_eq!(
            payload.error.as_deref(),
            Some("Google Places API key not configured")
        );
    }

    #[tokio::test]
    async fn validation_error_maps_to_bad_request() {
        let response =
            SearchError::Validation(String::from("radius out of range")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let payload: SearchResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(payload.restaurant.is_none());
        assert_eq!(
            payload.error.as_deref(),
            Some("Invalid search settings: radius out of range")
        );
    }
}
