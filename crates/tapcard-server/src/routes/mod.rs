//! Route definitions for the card server.
//!
//! ## Routes
//!
//! - `GET /` - Landing page with card finder
//! - `GET /find?slug=...` - Redirect to a card by slug
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions
//! - `GET /create` / `POST /create` - Card creation form
//! - `GET /edit/{token}` / `POST /edit/{token}` - Token-authorized editing
//! - `GET /{slug}` - Public card page (counts a visit)
//! - `GET /{slug}/vcard` - vCard download
//! - `GET /{slug}/qr.svg` - QR code pointing at the card page
//! - `POST /{slug}/scan` - QR tap tracking
//! - `/media/*` - Uploaded profile photos

mod card;
mod create;
mod edit;
mod health;
mod home;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use maud::Markup;
use tower_http::services::ServeDir;

use crate::render::components::CSP_HEADER;
use crate::state::AppState;

/// Body size cap for the multipart form posts carrying photo uploads.
const BODY_LIMIT: usize = 8 * 1024 * 1024;

/// Build the complete card service router.
pub fn router(state: AppState) -> Router {
    let media_dir = state.media.dir().to_path_buf();

    Router::new()
        .route("/", get(home::home_page))
        .route("/find", get(home::find_card))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .route("/create", get(create::create_form).post(create::create_card))
        .route("/edit/{token}", get(edit::edit_form).post(edit::update_card))
        .route("/{slug}", get(card::card_page))
        .route("/{slug}/vcard", get(card::vcard_download))
        .route("/{slug}/qr.svg", get(card::qr_image))
        .route("/{slug}/scan", post(card::track_scan))
        .nest_service("/media", ServeDir::new(media_dir))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}

/// Serve robots.txt. Card pages are welcome in search results; edit pages
/// hold the secret tokens and stay out.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\nDisallow: /edit/\n",
    )
}

/// Build an HTML response with security headers.
///
/// Pages are served uncached: card pages count views on the server and
/// form pages carry edit tokens, so intermediaries must not replay them.
pub(crate) fn html_page(markup: Markup) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    (StatusCode::OK, headers, markup.into_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::media::MediaStore;
    use crate::store::ProfileStore;

    // Conflicting path registrations panic inside Router::route, so simply
    // assembling the router checks the whole table.
    #[test]
    fn router_assembles_all_routes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            bind_addr: "127.0.0.1:0".to_string(),
            db_path: ":memory:".to_string(),
            media_dir: dir.path().to_str().unwrap().to_string(),
            base_url: "https://cards.example.com".to_string(),
            site_name: "Tapcard".to_string(),
        };
        let store = ProfileStore::open_in_memory().unwrap();
        let media = MediaStore::new(&config.media_dir).unwrap();
        let state = AppState::with_stores(config, store, media);

        let _app = router(state);
    }

    #[test]
    fn html_page_sets_security_headers() {
        let response = html_page(maud::html! { p { "hello" } });
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            response.headers().get(header::X_FRAME_OPTIONS).unwrap(),
            "DENY"
        );
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );
        assert!(response.headers().contains_key(header::CONTENT_SECURITY_POLICY));
    }
}
