//! The closed set of social platforms a card can link to.
//!
//! Platform identifiers are validated against this enumeration at the
//! boundary; stored profiles never contain keys outside it. The creation
//! form only collects the first four, but the renderer displays any
//! platform present in stored data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Links keyed by platform, ordered for stable rendering.
pub type SocialLinks = BTreeMap<SocialPlatform, String>;

/// A supported social platform.
///
/// The derived `FromStr`/`Display` round-trip through the lowercase
/// identifier used as the JSON key in `social_links`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Linkedin,
    Twitter,
    Github,
    Instagram,
    Mastodon,
    Bluesky,
    Whatsapp,
    Signal,
    Telegram,
}

impl SocialPlatform {
    /// Human-readable platform name for labels and tooltips.
    pub fn label(self) -> &'static str {
        match self {
            Self::Linkedin => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::Github => "GitHub",
            Self::Instagram => "Instagram",
            Self::Mastodon => "Mastodon",
            Self::Bluesky => "Bluesky",
            Self::Whatsapp => "WhatsApp",
            Self::Signal => "Signal",
            Self::Telegram => "Telegram",
        }
    }

    /// The JSON key / form field name for this platform.
    pub fn key(self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Github => "github",
            Self::Instagram => "instagram",
            Self::Mastodon => "mastodon",
            Self::Bluesky => "bluesky",
            Self::Whatsapp => "whatsapp",
            Self::Signal => "signal",
            Self::Telegram => "telegram",
        }
    }

    /// Platforms collected by the creation and edit forms.
    pub const FORM_PLATFORMS: [SocialPlatform; 4] = [
        SocialPlatform::Linkedin,
        SocialPlatform::Twitter,
        SocialPlatform::Github,
        SocialPlatform::Instagram,
    ];
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_from_str_lowercase_keys() {
        assert_eq!(
            SocialPlatform::from_str("linkedin").unwrap(),
            SocialPlatform::Linkedin
        );
        assert_eq!(
            SocialPlatform::from_str("bluesky").unwrap(),
            SocialPlatform::Bluesky
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!(SocialPlatform::from_str("myspace").is_err());
        assert!(SocialPlatform::from_str("").is_err());
        // Case matters: stored keys are always lowercase.
        assert!(SocialPlatform::from_str("LinkedIn").is_err());
    }

    #[test]
    fn test_display_matches_key() {
        for platform in SocialPlatform::iter() {
            assert_eq!(platform.to_string(), platform.key());
        }
    }

    #[test]
    fn test_serializes_as_lowercase_map_key() {
        let mut links = SocialLinks::new();
        links.insert(
            SocialPlatform::Github,
            "https://github.com/ada".to_string(),
        );
        let json = serde_json::to_string(&links).unwrap();
        assert_eq!(json, r#"{"github":"https://github.com/ada"}"#);

        let back: SocialLinks = serde_json::from_str(&json).unwrap();
        assert_eq!(back, links);
    }

    #[test]
    fn test_form_platforms_are_the_original_four() {
        let keys: Vec<&str> = SocialPlatform::FORM_PLATFORMS
            .iter()
            .map(|p| p.key())
            .collect();
        assert_eq!(keys, ["linkedin", "twitter", "github", "instagram"]);
    }

    #[test]
    fn test_ordering_is_declaration_order() {
        let mut links = SocialLinks::new();
        links.insert(SocialPlatform::Telegram, "t".to_string());
        links.insert(SocialPlatform::Linkedin, "l".to_string());
        links.insert(SocialPlatform::Github, "g".to_string());
        let order: Vec<SocialPlatform> = links.keys().copied().collect();
        assert_eq!(
            order,
            [
                SocialPlatform::Linkedin,
                SocialPlatform::Github,
                SocialPlatform::Telegram
            ]
        );
    }
}
