use serde::{Deserialize, Serialize};

/// One venue as returned to the client, projected from a Google Places
/// text-search result. Fields the provider omitted stay absent in the
/// serialized payload.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Restaurant {
    pub place_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<OpeningHours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<Photo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<u32>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Geometry {
    pub location: Location,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct OpeningHours {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Photo {
    pub photo_reference: String,
}

/// Wire shape of a search outcome. `restaurant` is always present (null on
/// the empty and failure paths), `error` only when something went wrong or
/// nothing matched.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchResponse {
    pub restaurant: Option<Restaurant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
