//! Core types, validation, and shared utilities for tapcard digital business cards.
//!
//! This crate provides:
//! - The `Profile` data model and its create/update payloads
//! - Slug normalization and validation
//! - The closed set of supported social platforms
//! - vCard 3.0 generation for the "Save Contact" flow
//! - Edit-token and profile-id generation
//! - Shared error types

mod error;
mod profile;
mod slug;
mod social;
mod token;
mod validation;
mod vcard;

// ═══════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════

/// Accent color used when a profile has no custom theme.
pub const DEFAULT_ACCENT_COLOR: &str = "#3b82f6";

/// Upper bound on single-line profile fields (name, title, company, ...).
pub const MAX_FIELD_LEN: usize = 200;

/// Upper bound on the free-form bio.
pub const MAX_BIO_LEN: usize = 2000;

pub use error::{Error, Result};
pub use profile::{CustomTheme, NewProfile, Profile, ProfileUpdate};
pub use slug::{is_valid_slug, normalize_slug};
pub use social::{SocialLinks, SocialPlatform};
pub use token::{new_edit_token, new_profile_id};
pub use validation::{validate_new_profile, validate_update};
pub use vcard::{vcard, vcard_filename};
