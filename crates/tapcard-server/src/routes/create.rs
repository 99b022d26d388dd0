//! Card creation form and submission handler.
//!
//! The creation form posts as `multipart/form-data` so the profile photo
//! rides along with the text fields. Validation failures and slug
//! conflicts re-render the form with the submitted values intact instead
//! of bouncing through an error page.

use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Redirect, Response};
use tapcard_core::{SocialPlatform, new_edit_token, validate_new_profile};

use crate::error::CardError;
use crate::render::forms::{CardForm, create_page};
use crate::state::AppState;
use crate::store::StoreError;

/// An uploaded photo, held in memory until the rest of the form validates.
pub(super) struct Upload {
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

/// Render the empty creation form with a freshly generated edit token
/// pre-filled, so the token is on screen before the card exists.
pub async fn create_form(State(state): State<AppState>) -> Response {
    let form = CardForm {
        edit_token: new_edit_token(),
        ..CardForm::default()
    };
    super::html_page(create_page(
        &form,
        None,
        &state.config.base_url,
        &state.config.site_name,
    ))
}

/// Handle a creation submit.
///
/// Validates before touching disk so a rejected form never leaves an
/// orphaned upload behind. On success the browser lands on the new card.
pub async fn create_card(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, CardError> {
    let (form, upload) = read_card_form(multipart).await?;

    let draft = form.new_profile(None);
    if let Err(err) = validate_new_profile(&draft) {
        return Ok(rerender(&state, &form, &err.to_string()));
    }

    let profile_image = match &upload {
        Some(upload) => Some(state.media.save(upload.filename.as_deref(), &upload.bytes).await?),
        None => None,
    };

    let new = form.new_profile(profile_image);
    match state.store.create(&new) {
        Ok(id) => {
            tracing::info!(slug = %new.slug, id = %id, "card created");
            Ok(Redirect::to(&format!("/{}", new.slug)).into_response())
        }
        Err(StoreError::SlugTaken(slug)) => {
            let message = format!("The address \"{slug}\" is already taken. Pick another one.");
            Ok(rerender(&state, &form, &message))
        }
        Err(StoreError::TokenTaken) => {
            let message = "That edit token is already in use. Choose a different one.";
            Ok(rerender(&state, &form, message))
        }
        Err(err) => Err(err.into()),
    }
}

fn rerender(state: &AppState, form: &CardForm, message: &str) -> Response {
    super::html_page(create_page(
        form,
        Some(message),
        &state.config.base_url,
        &state.config.site_name,
    ))
}

/// Read a card form out of a multipart body.
///
/// Text fields land in the [`CardForm`] by name; field names matching a
/// social platform key collect into the social map, so unsupported
/// platforms never get past this point. The photo is buffered separately
/// and an empty file part counts as "no upload".
pub(super) async fn read_card_form(
    mut multipart: Multipart,
) -> Result<(CardForm, Option<Upload>), CardError> {
    let mut form = CardForm::default();
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "photo" {
            let filename = field.file_name().map(str::to_string);
            let bytes = field.bytes().await?;
            if !bytes.is_empty() {
                upload = Some(Upload {
                    filename,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field.text().await?;
        if let Ok(platform) = name.parse::<SocialPlatform>() {
            form.social.insert(platform, value);
            continue;
        }

        match name.as_str() {
            "slug" => form.slug = value,
            "edit_token" => form.edit_token = value,
            "full_name" => form.full_name = value,
            "job_title" => form.job_title = value,
            "company" => form.company = value,
            "email" => form.email = value,
            "phone" => form.phone = value,
            "website" => form.website = value,
            "bio" => form.bio = value,
            "primary_color" => form.primary_color = value,
            _ => tracing::debug!(field = %name, "ignoring unknown form field"),
        }
    }

    Ok((form, upload))
}
