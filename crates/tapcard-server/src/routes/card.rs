//! Public card routes: the card page itself, the vCard download, the QR
//! image, and QR tap tracking.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tapcard_core::{Profile, vcard, vcard_filename};

use crate::error::CardError;
use crate::qr;
use crate::render;
use crate::state::AppState;

/// Handle `GET /{slug}`: look up the card, count the visit, render.
///
/// The counter bump is fire-and-forget; a card that exists must render
/// even if the write fails under load.
pub async fn card_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, CardError> {
    let profile = lookup(&state, &slug)?;

    if let Err(error) = state.store.increment_visits(&profile.id) {
        tracing::debug!(%error, slug = %profile.slug, "visit not recorded");
    }

    let markup = render::card::render(&profile, &state.config.base_url, &state.config.site_name);
    Ok(super::html_page(markup))
}

/// Handle `GET /{slug}/vcard`: the card's contact data as a downloadable
/// vCard 3.0 file.
pub async fn vcard_download(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, CardError> {
    let profile = lookup(&state, &slug)?;
    let body = vcard(&profile);

    // Quotes and backslashes would break the quoted filename parameter.
    let filename: String = vcard_filename(&profile.full_name)
        .chars()
        .filter(|c| *c != '"' && *c != '\\')
        .collect();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/vcard; charset=utf-8"),
    );
    let disposition = format!("attachment; filename=\"{filename}\"");
    match HeaderValue::from_str(&disposition) {
        Ok(value) => {
            headers.insert(header::CONTENT_DISPOSITION, value);
        }
        Err(_) => {
            headers.insert(
                header::CONTENT_DISPOSITION,
                HeaderValue::from_static("attachment; filename=\"card.vcf\""),
            );
        }
    }
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    Ok((StatusCode::OK, headers, body).into_response())
}

/// Handle `GET /{slug}/qr.svg`: the QR code encoding the card's public
/// URL.
///
/// Rendered SVGs are cached in-process per slug, and the response carries
/// an ETag so repeat visitors get a 304 instead of the body.
pub async fn qr_image(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    request_headers: HeaderMap,
) -> Result<Response, CardError> {
    let profile = lookup(&state, &slug)?;

    let svg = match state.qr_cache.get(&profile.slug).await {
        Some(cached) => {
            tracing::debug!(slug = %profile.slug, "qr cache hit");
            cached
        }
        None => {
            let url = state.config.card_url(&profile.slug);
            let svg = qr::qr_svg(&url)?;
            state
                .qr_cache
                .insert(profile.slug.clone(), svg.clone())
                .await;
            svg
        }
    };

    let hash = xxhash_rust::xxh3::xxh3_64(svg.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("image/svg+xml"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=3600, s-maxage=86400"),
    );
    if let Ok(value) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, value);
    }

    let not_modified = request_headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == etag);
    if not_modified {
        return Ok((StatusCode::NOT_MODIFIED, headers).into_response());
    }

    Ok((StatusCode::OK, headers, svg).into_response())
}

/// Handle `POST /{slug}/scan`: record one QR tap.
///
/// Fired by the card page when the QR image is tapped. Unlike the visit
/// counter this error propagates, because recording the tap is the whole
/// point of the request.
pub async fn track_scan(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode, CardError> {
    let profile = lookup(&state, &slug)?;
    state.store.increment_qr_scans(&profile.id)?;
    tracing::debug!(slug = %profile.slug, "qr scan recorded");
    Ok(StatusCode::NO_CONTENT)
}

fn lookup(state: &AppState, slug: &str) -> Result<Profile, CardError> {
    state
        .store
        .get_by_slug(slug.trim())?
        .ok_or(CardError::NotFound)
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use tapcard_core::{CustomTheme, NewProfile, SocialLinks};

    use super::*;
    use crate::config::Config;
    use crate::media::MediaStore;
    use crate::store::ProfileStore;

    fn test_state() -> (AppState, tempfile::TempDir) {
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
        (AppState::with_stores(config, store, media), dir)
    }

    fn seed(state: &AppState) -> Profile {
        let new = NewProfile {
            slug: "ada-lovelace".to_string(),
            edit_token: "tok_ada_1234".to_string(),
            full_name: "Ada Lovelace".to_string(),
            job_title: "Engineer".to_string(),
            company: "Analytical Engines".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 0000 0000".to_string(),
            bio: "First programmer.".to_string(),
            website: Some("https://ada.example".to_string()),
            profile_image: None,
            social_links: SocialLinks::new(),
            custom_theme: CustomTheme::default(),
        };
        state.store.create(&new).unwrap();
        state.store.get_by_slug("ada-lovelace").unwrap().unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn card_page_renders_and_counts_visit() {
        let (state, _dir) = test_state();
        seed(&state);

        let response = card_page(State(state.clone()), Path("ada-lovelace".to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("/ada-lovelace/vcard"));
        assert!(html.contains("/ada-lovelace/qr.svg"));

        let after = state.store.get_by_slug("ada-lovelace").unwrap().unwrap();
        assert_eq!(after.visits, 1);
        assert_eq!(after.qr_code_scans, 0);
    }

    #[tokio::test]
    async fn card_page_unknown_slug_is_not_found() {
        let (state, _dir) = test_state();
        let err = card_page(State(state), Path("nobody".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, CardError::NotFound));
    }

    #[tokio::test]
    async fn vcard_download_matches_contact_data() {
        let (state, _dir) = test_state();
        let profile = seed(&state);

        let response = vcard_download(State(state), Path("ada-lovelace".to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/vcard; charset=utf-8"
        );
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains("Ada_Lovelace.vcf"));

        assert_eq!(body_text(response).await, vcard(&profile));
    }

    #[tokio::test]
    async fn qr_image_serves_svg_with_etag() {
        let (state, _dir) = test_state();
        seed(&state);

        let response = qr_image(
            State(state.clone()),
            Path("ada-lovelace".to_string()),
            HeaderMap::new(),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );
        let etag = response.headers().get(header::ETAG).unwrap().clone();

        let html = body_text(response).await;
        assert!(html.contains("<svg"));

        // A conditional request with the same tag short-circuits to 304.
        let mut conditional = HeaderMap::new();
        conditional.insert(header::IF_NONE_MATCH, etag);
        let response = qr_image(State(state), Path("ada-lovelace".to_string()), conditional)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }

    #[tokio::test]
    async fn qr_image_unknown_slug_is_not_found() {
        let (state, _dir) = test_state();
        let err = qr_image(State(state), Path("nobody".to_string()), HeaderMap::new())
            .await
            .unwrap_err();
        assert!(matches!(err, CardError::NotFound));
    }

    #[tokio::test]
    async fn track_scan_increments_only_scans() {
        let (state, _dir) = test_state();
        seed(&state);

        let status = track_scan(State(state.clone()), Path("ada-lovelace".to_string()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let after = state.store.get_by_slug("ada-lovelace").unwrap().unwrap();
        assert_eq!(after.qr_code_scans, 1);
        assert_eq!(after.visits, 0);
    }

    #[tokio::test]
    async fn track_scan_unknown_slug_is_not_found() {
        let (state, _dir) = test_state();
        let err = track_scan(State(state), Path("nobody".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, CardError::NotFound));
    }
}
