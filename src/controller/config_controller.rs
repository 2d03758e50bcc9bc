use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::Config;
use crate::controller::AppState;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(get_client_config))
        .route_layer(Extension(app_state.config))
}

/// What the frontend needs to bootstrap its map widget. The key may be an
/// empty string when nothing is configured upstream.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub google_maps_api_key: String,
}

pub async fn get_client_config(
    Extension(config): Extension<Config>,
) -> impl IntoResponse {
    let client_config = ClientConfig {
        google_maps_api_key: config.maps_api_key().to_string(),
    };

    (StatusCode::OK, json!(&client_config).to_string()).into_response()
}
