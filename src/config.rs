use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    /// Key for the Places text-search API. Falls back to GOOGLE_API_KEY.
    #[clap(env, long)]
    pub google_places_api_key: Option<String>,

    /// Key handed to the frontend for the maps widget. Falls back to GOOGLE_API_KEY.
    #[clap(env, long)]
    pub google_maps_api_key: Option<String>,

    /// Shared key used when the dedicated ones above are absent.
    #[clap(env, long)]
    pub google_api_key: Option<String>,

    /// Comma-separated list of allowed CORS origins.
    #[clap(env, long, default_value = "http://localhost:5173")]
    pub origin_urls: String,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,
}

impl Config {
    pub fn places_api_key(&self) -> Option<&str> {
        non_empty(self.google_places_api_key.as_deref())
            .or_else(|| non_empty(self.google_api_key.as_deref()))
    }

    pub fn maps_api_key(&self) -> &str {
        non_empty(self.google_maps_api_key.as_deref())
            .or_else(|| non_empty(self.google_api_key.as_deref()))
            .unwrap_or("")
    }
}

// An env var set to the empty string counts as unset.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
