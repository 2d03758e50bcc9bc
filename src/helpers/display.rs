use crate::models::restaurant::Location;
use crate::models::settings::{DistanceUnit, PriceDisplayMode};

const EARTH_RADIUS_MILES: f64 = 3959.0;
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between the user and a venue, in the requested unit.
pub fn haversine_distance(user: &Location, venue: &Location, unit: DistanceUnit) -> f64 {
    let earth_radius = match unit {
        DistanceUnit::Miles => EARTH_RADIUS_MILES,
        DistanceUnit::Kilometers => EARTH_RADIUS_KM,
    };

    let d_lat = (venue.lat - user.lat).to_radians();
    let d_lng = (venue.lng - user.lng).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + user.lat.to_radians().cos()
            * venue.lat.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    earth_radius * c
}

pub fn distance_from_user(user: &Location, venue: &Location, unit: DistanceUnit) -> String {
    let distance = haversine_distance(user, venue, unit);
    let suffix = match unit {
        DistanceUnit::Miles => "mi",
        DistanceUnit::Kilometers => "km",
    };
    format!("{distance:.1} {suffix} away")
}

pub fn price_display(price_level: Option<u8>, mode: PriceDisplayMode) -> String {
    let Some(level) = price_level else {
        return String::from("Price not available");
    };

    match mode {
        PriceDisplayMode::Symbols => "$".repeat(level as usize),
        PriceDisplayMode::Descriptive => String::from(match level {
            1 => "Budget",
            2 => "Moderate",
            3 => "Expensive",
            4 => "Luxury",
            _ => "Unknown",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Location {
        Location { lat: 0.0, lng: 0.0 }
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator_in_miles() {
        let venue = Location { lat: 0.0, lng: 1.0 };
        let distance = haversine_distance(&origin(), &venue, DistanceUnit::Miles);
        assert!((distance - 69.0).abs() < 0.5, "got {distance}");

        let formatted = distance_from_user(&origin(), &venue, DistanceUnit::Miles);
        assert_eq!(formatted, "69.1 mi away");
    }

    #[test]
    fn kilometers_use_the_metric_earth_radius() {
        let venue = Location { lat: 0.0, lng: 1.0 };
        let distance = haversine_distance(&origin(), &venue, DistanceUnit::Kilometers);
        assert!((distance - 111.2).abs() < 0.5, "got {distance}");

        let formatted = distance_from_user(&origin(), &venue, DistanceUnit::Kilometers);
        assert!(formatted.ends_with(" km away"));
    }

    #[test]
    fn zero_distance_formats_cleanly() {
        let formatted = distance_from_user(&origin(), &origin(), DistanceUnit::Miles);
        assert_eq!(formatted, "0.0 mi away");
    }

    #[test]
    fn symbols_mode_repeats_dollar_signs() {
        assert_eq!(price_display(Some(1), PriceDisplayMode::Symbols), "$");
        assert_eq!(price_display(Some(4), PriceDisplayMode::Symbols), "$$$$");
    }

    #[test]
    fn descriptive_mode_uses_the_fixed_lookup() {
        assert_eq!(price_display(Some(1), PriceDisplayMode::Descriptive), "Budget");
        assert_eq!(price_display(Some(2), PriceDisplayMode::Descriptive), "Moderate");
        assert_eq!(price_display(Some(3), PriceDisplayMode::Descriptive), "Expensive");
        assert_eq!(price_display(Some(4), PriceDisplayMode::Descriptive), "Luxury");
    }

    #[test]
    fn absent_price_level_has_a_fallback_in_both_modes() {
        assert_eq!(price_display(None, PriceDisplayMode::Symbols), "Price not available");
        assert_eq!(
            price_display(None, PriceDisplayMode::Descriptive),
            "Price not available"
        );
    }
}
