use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::models::restaurant::Location;

pub const MIN_RADIUS: f64 = 0.5;
pub const MAX_RADIUS: f64 = 10.0;

/// User search preferences, shared between the persisted client blob and the
/// search request body. Wire names are camelCase to match the frontend.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchSettings {
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default)]
    pub distance_unit: DistanceUnit,
    #[serde(default = "default_price_levels")]
    pub price_level: Vec<u8>,
    #[serde(default)]
    pub price_display_mode: PriceDisplayMode,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default = "default_open_now")]
    pub open_now: bool,
    #[serde(default)]
    pub high_rating: bool,
    pub location: Location,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceDisplayMode {
    #[default]
    Symbols,
    Descriptive,
}

/// Partial update to `SearchSettings`. Also the on-disk shape: saving strips
/// `location`, so a stored blob normally carries everything else.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_display_mode: Option<PriceDisplayMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisines: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_rating: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            distance_unit: DistanceUnit::Miles,
            price_level: default_price_levels(),
            price_display_mode: PriceDisplayMode::Symbols,
            cuisines: Vec::new(),
            open_now: default_open_now(),
            high_rating: false,
            location: Location { lat: 0.0, lng: 0.0 },
        }
    }
}

impl SearchSettings {
    /// Bounds check before any search work happens.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(MIN_RADIUS..=MAX_RADIUS).contains(&self.radius) {
            return Err(SearchError::Validation(format!(
                "radius must be between {} and {}, got {}",
                MIN_RADIUS, MAX_RADIUS, self.radius
            )));
        }
        if let Some(level) = self.price_level.iter().find(|level| !(1..=4).contains(*level)) {
            return Err(SearchError::Validation(format!(
                "price level must be between 1 and 4, got {}",
                level
            )));
        }
        Ok(())
    }

    /// Shallow field replacement: every field the patch carries wins over the
    /// current value, everything else is left alone.
    pub fn merged(mut self, patch: SettingsPatch) -> SearchSettings {
        if let Some(radius) = patch.radius {
            self.radius = radius;
        }
        if let Some(distance_unit) = patch.distance_unit {
            self.distance_unit = distance_unit;
        }
        if let Some(price_level) = patch.price_level {
            self.price_level = price_level;
        }
        if let Some(price_display_mode) = patch.price_display_mode {
            self.price_display_mode = price_display_mode;
        }
        if let Some(cuisines) = patch.cuisines {
            self.cuisines = cuisines;
        }
        if let Some(open_now) = patch.open_now {
            self.open_now = open_now;
        }
        if let Some(high_rating) = patch.high_rating {
            self.high_rating = high_rating;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        self
    }

    /// The persistable projection, with `location` dropped for privacy.
    pub fn to_stored(&self) -> SettingsPatch {
        SettingsPatch {
            radius: Some(self.radius),
            distance_unit: Some(self.distance_unit),
            price_level: Some(self.price_level.clone()),
            price_display_mode: Some(self.price_display_mode),
            cuisines: Some(self.cuisines.clone()),
            open_now: Some(self.open_now),
            high_rating: Some(self.high_rating),
            location: None,
        }
    }
}

fn default_radius() -> f64 {
    2.0
}

fn default_price_levels() -> Vec<u8> {
    vec![1, 2, 3, 4]
}

fn default_open_now() -> bool {
    true
}
