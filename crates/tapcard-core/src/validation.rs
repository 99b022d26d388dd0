//! Boundary validation for profile payloads.
//!
//! Everything that enters the store passes through here first, so stored
//! rows never need re-checking: slugs are normalized, required fields are
//! non-empty, URLs carry an http(s) scheme, and single-line values contain
//! no control characters (they are embedded raw into the vCard block and
//! response headers).

use crate::error::{Error, Result};
use crate::profile::{CustomTheme, NewProfile, ProfileUpdate};
use crate::slug::is_valid_slug;
use crate::social::SocialLinks;
use crate::{MAX_BIO_LEN, MAX_FIELD_LEN};

/// Validates a creation payload, including slug and edit token.
pub fn validate_new_profile(new: &NewProfile) -> Result<()> {
    if !is_valid_slug(&new.slug) {
        return Err(Error::InvalidField {
            field: "slug",
            reason: "must be non-empty lowercase letters, digits, and hyphens".to_string(),
        });
    }
    check_edit_token(&new.edit_token)?;
    check_identity_fields(
        &new.full_name,
        &new.job_title,
        &new.company,
        &new.email,
        &new.phone,
    )?;
    check_bio(&new.bio)?;
    check_optional_url("website", new.website.as_deref())?;
    check_social_links(&new.social_links)?;
    check_theme(&new.custom_theme)?;
    Ok(())
}

/// Validates an update payload. Identity (slug, token) is not part of an
/// update and is not checked here.
pub fn validate_update(update: &ProfileUpdate) -> Result<()> {
    check_identity_fields(
        &update.full_name,
        &update.job_title,
        &update.company,
        &update.email,
        &update.phone,
    )?;
    check_bio(&update.bio)?;
    check_optional_url("website", update.website.as_deref())?;
    check_social_links(&update.social_links)?;
    check_theme(&update.custom_theme)?;
    Ok(())
}

fn check_identity_fields(
    full_name: &str,
    job_title: &str,
    company: &str,
    email: &str,
    phone: &str,
) -> Result<()> {
    require_line("full_name", full_name)?;
    require_line("job_title", job_title)?;
    require_line("company", company)?;
    require_line("email", email)?;
    if !has_email_shape(email) {
        return Err(Error::InvalidField {
            field: "email",
            reason: "must look like an email address".to_string(),
        });
    }
    require_line("phone", phone)?;
    Ok(())
}

/// Edit tokens travel in URL paths, so they are restricted to URL-safe
/// characters and a length that rules out trivially guessable values.
fn check_edit_token(token: &str) -> Result<()> {
    let ok = token.len() >= 8
        && token.len() <= 64
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !ok {
        return Err(Error::InvalidField {
            field: "edit_token",
            reason: "must be 8-64 letters, digits, hyphens, or underscores".to_string(),
        });
    }
    Ok(())
}

/// A required single-line field: non-empty after trimming, within the
/// length cap, and free of control characters.
fn require_line(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidField {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(Error::InvalidField {
            field,
            reason: format!("must be at most {MAX_FIELD_LEN} characters"),
        });
    }
    if value.chars().any(char::is_control) {
        return Err(Error::InvalidField {
            field,
            reason: "must not contain control characters".to_string(),
        });
    }
    Ok(())
}

/// The bio may span lines but is still length-capped and otherwise
/// control-free.
fn check_bio(bio: &str) -> Result<()> {
    if bio.chars().count() > MAX_BIO_LEN {
        return Err(Error::InvalidField {
            field: "bio",
            reason: format!("must be at most {MAX_BIO_LEN} characters"),
        });
    }
    if bio
        .chars()
        .any(|c| c.is_control() && c != '\n' && c != '\r' && c != '\t')
    {
        return Err(Error::InvalidField {
            field: "bio",
            reason: "must not contain control characters".to_string(),
        });
    }
    Ok(())
}

fn check_optional_url(field: &'static str, value: Option<&str>) -> Result<()> {
    let Some(url) = value else {
        return Ok(());
    };
    require_line(field, url)?;
    if !is_http_url(url) {
        return Err(Error::InvalidField {
            field,
            reason: "must start with http:// or https://".to_string(),
        });
    }
    Ok(())
}

fn check_social_links(links: &SocialLinks) -> Result<()> {
    for (platform, url) in links {
        require_line("social_links", url)?;
        if !is_http_url(url) {
            return Err(Error::InvalidField {
                field: "social_links",
                reason: format!("{} link must start with http:// or https://", platform.key()),
            });
        }
    }
    Ok(())
}

fn check_theme(theme: &CustomTheme) -> Result<()> {
    let Some(color) = theme.primary_color.as_deref() else {
        return Ok(());
    };
    let ok = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !ok {
        return Err(Error::InvalidField {
            field: "primary_color",
            reason: "must be a #rrggbb hex color".to_string(),
        });
    }
    Ok(())
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn has_email_shape(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
