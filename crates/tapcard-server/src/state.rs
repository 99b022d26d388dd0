//! Application state shared across all request handlers.

use std::sync::Arc;

use moka::future::Cache;

use crate::config::Config;
use crate::media::MediaStore;
use crate::store::ProfileStore;

/// Type alias for the QR SVG cache (slug -> rendered SVG document).
pub type QrCache = Cache<String, String>;

/// QR cache capacity. Each SVG is a few KB, so 10K entries stay well under
/// 100MB.
const QR_CACHE_CAPACITY: u64 = 10_000;

/// QR cache TTL. A card's QR payload only changes when the base URL does,
/// so this mostly bounds memory for dead slugs.
const QR_CACHE_TTL: std::time::Duration = std::time::Duration::from_secs(3600);

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Profile database handle.
    pub store: ProfileStore,

    /// Upload storage handle.
    pub media: MediaStore,

    /// Application configuration.
    pub config: Arc<Config>,

    /// In-memory cache of rendered QR SVGs keyed by slug.
    pub qr_cache: QrCache,
}

impl AppState {
    /// Create application state from configuration, opening the database
    /// and the media directory it names.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = ProfileStore::open(&config.db_path)?;
        let media = MediaStore::new(&config.media_dir)?;
        Ok(Self::with_stores(config, store, media))
    }

    /// Assemble state from already-open handles. Tests use this with an
    /// in-memory store and a temp media directory.
    pub fn with_stores(config: Config, store: ProfileStore, media: MediaStore) -> Self {
        let qr_cache = Cache::builder()
            .max_capacity(QR_CACHE_CAPACITY)
            .time_to_live(QR_CACHE_TTL)
            .build();

        tracing::info!(
            qr_cache_capacity = QR_CACHE_CAPACITY,
            qr_cache_ttl_secs = QR_CACHE_TTL.as_secs(),
            "application state initialized"
        );

        Self {
            store,
            media,
            config: Arc::new(config),
            qr_cache,
        }
    }
}
