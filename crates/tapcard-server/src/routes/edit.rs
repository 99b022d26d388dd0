//! Token-authorized card editing.
//!
//! Possession of the edit token is the whole authorization model: the
//! token in the URL either looks up a card or it doesn't. Unknown tokens
//! get the same not-found page as unknown slugs, so the endpoint leaks
//! nothing about which tokens exist.

use axum::extract::{Multipart, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use tapcard_core::{Profile, validate_update};

use crate::error::CardError;
use crate::render::forms::{CardForm, edit_page};
use crate::state::AppState;

/// Render the edit form for the card owning this token, pre-filled with
/// the stored values and showing the private visit/scan counters.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Response, CardError> {
    let profile = authorize(&state, &token)?;
    let form = CardForm::from_profile(&profile);
    Ok(super::html_page(edit_page(
        &profile,
        &form,
        None,
        &state.config.base_url,
        &state.config.site_name,
    )))
}

/// Handle an edit submit.
///
/// Re-authorizes against the token from the URL, never from the form
/// body. A missing photo field keeps the current photo.
pub async fn update_card(
    State(state): State<AppState>,
    Path(token): Path<String>,
    multipart: Multipart,
) -> Result<Response, CardError> {
    let profile = authorize(&state, &token)?;
    let (form, upload) = super::create::read_card_form(multipart).await?;

    let draft = form.profile_update(profile.profile_image.clone());
    if let Err(err) = validate_update(&draft) {
        return Ok(rerender(&state, &profile, &form, &err.to_string()));
    }

    let profile_image = match &upload {
        Some(upload) => Some(state.media.save(upload.filename.as_deref(), &upload.bytes).await?),
        None => profile.profile_image.clone(),
    };

    let update = form.profile_update(profile_image);
    state.store.update(&profile.id, &update)?;
    tracing::info!(slug = %profile.slug, "card updated");

    Ok(Redirect::to(&format!("/{}", profile.slug)).into_response())
}

fn authorize(state: &AppState, token: &str) -> Result<Profile, CardError> {
    state
        .store
        .get_by_edit_token(token.trim())?
        .ok_or(CardError::NotFound)
}

fn rerender(state: &AppState, profile: &Profile, form: &CardForm, message: &str) -> Response {
    super::html_page(edit_page(
        profile,
        form,
        Some(message),
        &state.config.base_url,
        &state.config.site_name,
    ))
}
