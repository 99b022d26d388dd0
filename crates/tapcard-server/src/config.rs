//! Application configuration loaded from environment variables.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Path to the SQLite database file.
    pub db_path: String,

    /// Directory where uploaded profile images are stored.
    pub media_dir: String,

    /// Base URL for this service (used in card links, OG tags, and the QR
    /// code payload). e.g., "https://cards.example.com"
    pub base_url: String,

    /// Site name shown in OG tags and page titles.
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `TAPCARD_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `TAPCARD_DB_PATH`: SQLite database path (default: "tapcard.db")
    /// - `TAPCARD_MEDIA_DIR`: Upload directory (default: "media")
    /// - `TAPCARD_BASE_URL`: Base URL for links/QR payloads (default: "http://localhost:8080")
    /// - `TAPCARD_SITE_NAME`: Site name (default: "Tapcard")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("TAPCARD_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let db_path = std::env::var("TAPCARD_DB_PATH").unwrap_or_else(|_| "tapcard.db".to_string());

        let media_dir = std::env::var("TAPCARD_MEDIA_DIR").unwrap_or_else(|_| "media".to_string());

        let base_url = std::env::var("TAPCARD_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name = std::env::var("TAPCARD_SITE_NAME").unwrap_or_else(|_| "Tapcard".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            db_path = %db_path,
            media_dir = %media_dir,
            base_url = %base_url,
            site_name = %site_name,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            db_path,
            media_dir,
            base_url,
            site_name,
        })
    }

    /// Absolute URL of a card page, the payload encoded into its QR code.
    pub fn card_url(&self, slug: &str) -> String {
        format!("{}/{}", self.base_url, slug)
    }
}
