//! The profile data model: the stored record plus its create/update payloads.

use serde::{Deserialize, Serialize};

use crate::DEFAULT_ACCENT_COLOR;
use crate::social::SocialLinks;

/// A stored business-card profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Opaque record id (UUIDv4 hex).
    pub id: String,
    /// URL identity, unique, always in normalized form.
    pub slug: String,
    /// Possession token authorizing edits, unique, never rendered on the
    /// public card.
    pub edit_token: String,
    pub full_name: String,
    pub job_title: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    /// Free-form text, empty when the owner left it blank.
    pub bio: String,
    pub website: Option<String>,
    /// Public URL of the uploaded avatar, if any.
    pub profile_image: Option<String>,
    pub social_links: SocialLinks,
    pub custom_theme: CustomTheme,
    /// Times the card page has been served.
    pub visits: i64,
    /// Times the embedded QR code has been tapped (not camera scans).
    pub qr_code_scans: i64,
    /// Unix seconds at creation.
    pub created_at: i64,
}

/// Theme overrides stored per profile as a JSON object.
///
/// An absent or empty object means "use the defaults"; today the only
/// override is the accent color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
}

impl CustomTheme {
    /// The accent color to render with, falling back to the default.
    pub fn accent(&self) -> &str {
        self.primary_color
            .as_deref()
            .unwrap_or(DEFAULT_ACCENT_COLOR)
    }

    pub fn is_empty(&self) -> bool {
        self.primary_color.is_none()
    }
}

/// Payload for creating a profile. The store assigns the id, the creation
/// timestamp, and zeroed counters.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub slug: String,
    pub edit_token: String,
    pub full_name: String,
    pub job_title: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub website: Option<String>,
    pub profile_image: Option<String>,
    pub social_links: SocialLinks,
    pub custom_theme: CustomTheme,
}

/// Payload for replacing a profile's mutable fields.
///
/// Identity never changes through this path: slug, edit token, counters,
/// and the creation timestamp are untouched by updates.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub job_title: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub website: Option<String>,
    pub profile_image: Option<String>,
    pub social_links: SocialLinks,
    pub custom_theme: CustomTheme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_defaults() {
        let theme = CustomTheme::default();
        assert!(theme.is_empty());
        assert_eq!(theme.accent(), DEFAULT_ACCENT_COLOR);
    }

    #[test]
    fn test_accent_override() {
        let theme = CustomTheme {
            primary_color: Some("#10b981".to_string()),
        };
        assert!(!theme.is_empty());
        assert_eq!(theme.accent(), "#10b981");
    }

    #[test]
    fn test_empty_theme_serializes_to_empty_object() {
        let json = serde_json::to_string(&CustomTheme::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_theme_roundtrip() {
        let theme = CustomTheme {
            primary_color: Some("#aabbcc".to_string()),
        };
        let json = serde_json::to_string(&theme).unwrap();
        assert_eq!(json, r##"{"primary_color":"#aabbcc"}"##);
        let back: CustomTheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }

    #[test]
    fn test_theme_ignores_unknown_keys() {
        let theme: CustomTheme =
            serde_json::from_str(r##"{"primary_color":"#123456","font":"serif"}"##).unwrap();
        assert_eq!(theme.primary_color.as_deref(), Some("#123456"));
    }
}
