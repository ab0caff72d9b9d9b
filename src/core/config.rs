//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Canonical public URL of the site
    /// Example: https://velix.example.com
    pub public_url: Option<String>,

    /// Brotli/gzip response compression (VELIX_COMPRESSION, on unless disabled)
    pub compression: bool,

    /// Serve the page motion schedule at `/motion-schedule.json` (VELIX_EXPOSE_SCHEDULE)
    pub expose_schedule: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            public_url: lookup("VELIX_PUBLIC_URL").filter(|url| !url.trim().is_empty()),
            compression: lookup("VELIX_COMPRESSION")
                .map(|value| parse_flag(&value))
                .unwrap_or(true),
            expose_schedule: lookup("VELIX_EXPOSE_SCHEDULE")
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
        }
    }

    /// Check if a public URL is configured
    pub fn has_public_url(&self) -> bool {
        self.public_url.is_some()
    }
}

/// Anything other than an explicit "off" value counts as enabled
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}
