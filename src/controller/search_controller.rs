use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Extension, Json, Router};
use rand::Rng;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::controller::AppState;
use crate::error::SearchError;
use crate::models::restaurant::{Restaurant, SearchResponse};
use crate::models::settings::{DistanceUnit, SearchSettings};
use crate::repositories::google_places_repo::GooglePlacesRepo;

const METERS_PER_MILE: f64 = 1609.34;
const HIGH_RATING_THRESHOLD: f64 = 4.0;
const NO_RESULTS_MESSAGE: &str =
    "No restaurants found matching your criteria. Try adjusting your filters.";

pub fn router(app_state: AppState) -> Router {
    let places_repo = Arc::new(GooglePlacesRepo::new(
        app_state.http_client,
        app_state.config.places_api_key().map(String::from),
    ));

    Router::new()
        .route("/search", post(search_random_restaurant))
        .route_layer(Extension(places_repo))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchRequest {
    pub settings: SearchSettings,
}

pub async fn search_random_restaurant(
    Extension(places_repo): Extension<Arc<GooglePlacesRepo>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> impl IntoResponse {
    return match run_search(&places_repo, payload).await {
        Ok(response) => (StatusCode::OK, json!(&response).to_string()).into_response(),
        Err(e) => {
            warn!("Something went wrong searching for a restaurant due to: {}", e);
            e.into_response()
        }
    };
}

async fn run_search(
    places_repo: &GooglePlacesRepo,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<SearchResponse, SearchError> {
    // Key check comes first so a misconfigured deployment fails fast, even
    // for requests that would not parse.
    if !places_repo.is_configured() {
        return Err(SearchError::Configuration);
    }

    let Json(SearchRequest { settings }) =
        payload.map_err(|e| SearchError::Validation(e.to_string()))?;
    settings.validate()?;

    let radius_meters = radius_to_meters(settings.radius, settings.distance_unit);
    let query = build_search_query(&settings.cuisines);

    let candidates = places_repo
        .text_search(&query, &settings.location, radius_meters, settings.open_now)
        .await?;

    Ok(pick_from_candidates(&settings, candidates))
}

fn radius_to_meters(radius: f64, unit: DistanceUnit) -> u32 {
    let meters = match unit {
        DistanceUnit::Miles => radius * METERS_PER_MILE,
        DistanceUnit::Kilometers => radius * 1000.0,
    };
    meters.round() as u32
}

/// Best-effort text query: cuisine identifiers OR-ed together in front of the
/// fixed "restaurant" token. Precision is traded for simplicity.
fn build_search_query(cuisines: &[String]) -> String {
    if cuisines.is_empty() {
        String::from("restaurant")
    } else {
        format!("{} restaurant", cuisines.join(" OR "))
    }
}

/// In-process filters on top of whatever the provider already applied, in
/// fixed order: price first, then rating. Either one may empty the set.
fn apply_filters(settings: &SearchSettings, mut candidates: Vec<Restaurant>) -> Vec<Restaurant> {
    // Selecting all four levels disables the price filter entirely, which
    // also keeps venues with an unknown price level.
    if settings.price_level.len() < 4 {
        candidates.retain(|candidate| {
            candidate
                .price_level
                .map_or(false, |level| settings.price_level.contains(&level))
        });
    }

    if settings.high_rating {
        candidates.retain(|candidate| {
            candidate
                .rating
                .map_or(false, |rating| rating >= HIGH_RATING_THRESHOLD)
        });
    }

    candidates
}

fn pick_from_candidates(
    settings: &SearchSettings,
    candidates: Vec<Restaurant>,
) -> SearchResponse {
    let mut survivors = apply_filters(settings, candidates);

    if survivors.is_empty() {
        return SearchResponse {
            restaurant: None,
            error: Some(String::from(NO_RESULTS_MESSAGE)),
        };
    }

    let index = pick_random_index(survivors.len());
    SearchResponse {
        restaurant: Some(survivors.swap_remove(index)),
        error: None,
    }
}

// Uniform integer draw; every survivor has the same 1/n chance.
fn pick_random_index(len: usize) -> usize {
    rand::thread_rng().gen_range(0..len)
}
