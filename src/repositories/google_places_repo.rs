use std::time::Duration;

use serde::Deserialize;

use crate::error::SearchError;
use crate::models::restaurant::{Location, Restaurant};

/// Upper bound on one provider round trip; expiry surfaces as a transport
/// failure and the user re-taps to retry.
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(5);

const TEXT_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";

#[derive(Clone, Deserialize, Debug)]
pub struct TextSearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<Restaurant>,
    pub error_message: Option<String>,
}

pub struct GooglePlacesRepo {
    http_client: reqwest::Client,
    api_key: Option<String>,
}

impl GooglePlacesRepo {
    pub fn new(
        http_client: reqwest::Client,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http_client,
            api_key,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// One text-search round trip. No retries: the caller is expected to
    /// retry via user action.
    pub async fn text_search(
        &self,
        query: &str,
        location: &Location,
        radius_meters: u32,
        open_now: bool,
    ) -> Result<Vec<Restaurant>, SearchError> {
        let api_key = self.api_key.as_deref().ok_or(SearchError::Configuration)?;

        let mut params = vec![
            ("query", query.to_string()),
            ("location", format!("{},{}", location.lat, location.lng)),
            ("radius", radius_meters.to_string()),
            ("type", String::from("restaurant")),
            ("key", api_key.to_string()),
        ];
        if open_now {
            params.push(("opennow", String::from("true")));
        }

        let payload = self
            .http_client
            .get(TEXT_SEARCH_URL)
            .query(&params)
            .timeout(PROVIDER_TIMEOUT)
            .send()
            .await?
            .json::<TextSearchResponse>()
            .await?;

        parse_text_search_response(payload)
    }
}

fn parse_text_search_response(
    payload: TextSearchResponse,
) -> Result<Vec<Restaurant>, SearchError> {
    if payload.status != "OK" {
        let mut message = format!("Google Places API error: {}", payload.status);
        if let Some(detail) = payload.error_message {
            message.push_str(" - ");
            message.push_str(&detail);
        }
        return Err(SearchError::Provider(message));
    }

    Ok(payload.results)
}
