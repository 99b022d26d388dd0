//! Creation and edit form pages.
//!
//! Both forms render from a [`CardForm`], the flat field state that also
//! carries re-submitted values back into the inputs when validation or a
//! slug conflict rejects a post. Conversion into store payloads (with slug
//! normalization and empty-to-absent field handling) lives here too, so
//! handlers only move bytes.

use maud::{Markup, html};
use tapcard_core::{
    CustomTheme, DEFAULT_ACCENT_COLOR, NewProfile, Profile, ProfileUpdate, SocialLinks,
    SocialPlatform, normalize_slug,
};

use super::components::{OpenGraphData, page_shell};

/// Flat form state: raw strings exactly as typed (or as stored, when
/// editing). Social values are keyed by platform; only the form platforms
/// get inputs.
#[derive(Debug, Clone, Default)]
pub struct CardForm {
    pub slug: String,
    pub edit_token: String,
    pub full_name: String,
    pub job_title: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub bio: String,
    pub social: SocialLinks,
    pub primary_color: String,
}

impl CardForm {
    /// Prefill from a stored profile, for the edit page.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            slug: profile.slug.clone(),
            edit_token: profile.edit_token.clone(),
            full_name: profile.full_name.clone(),
            job_title: profile.job_title.clone(),
            company: profile.company.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            website: profile.website.clone().unwrap_or_default(),
            bio: profile.bio.clone(),
            social: profile.social_links.clone(),
            primary_color: profile.custom_theme.accent().to_string(),
        }
    }

    /// Build the creation payload: slug normalized, fields trimmed, empty
    /// optionals dropped.
    pub fn new_profile(&self, profile_image: Option<String>) -> NewProfile {
        NewProfile {
            slug: normalize_slug(&self.slug),
            edit_token: self.edit_token.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            job_title: self.job_title.trim().to_string(),
            company: self.company.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            bio: self.bio.trim().to_string(),
            website: non_empty(&self.website),
            profile_image,
            social_links: self.social_links(),
            custom_theme: self.custom_theme(),
        }
    }

    /// Build the update payload with the same trimming rules.
    pub fn profile_update(&self, profile_image: Option<String>) -> ProfileUpdate {
        ProfileUpdate {
            full_name: self.full_name.trim().to_string(),
            job_title: self.job_title.trim().to_string(),
            company: self.company.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            bio: self.bio.trim().to_string(),
            website: non_empty(&self.website),
            profile_image,
            social_links: self.social_links(),
            custom_theme: self.custom_theme(),
        }
    }

    fn social_links(&self) -> SocialLinks {
        self.social
            .iter()
            .filter(|(_, url)| !url.trim().is_empty())
            .map(|(platform, url)| (*platform, url.trim().to_string()))
            .collect()
    }

    /// A color input always submits something; the default accent counts
    /// as "not customized" and yields the empty theme.
    fn custom_theme(&self) -> CustomTheme {
        let color = self.primary_color.trim();
        if color.is_empty() || color.eq_ignore_ascii_case(DEFAULT_ACCENT_COLOR) {
            CustomTheme::default()
        } else {
            CustomTheme {
                primary_color: Some(color.to_string()),
            }
        }
    }

    fn social_value(&self, platform: SocialPlatform) -> &str {
        self.social.get(&platform).map(String::as_str).unwrap_or("")
    }

    fn color_value(&self) -> &str {
        if self.primary_color.trim().is_empty() {
            DEFAULT_ACCENT_COLOR
        } else {
            &self.primary_color
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Render the creation form page.
pub fn create_page(
    form: &CardForm,
    error: Option<&str>,
    base_url: &str,
    site_name: &str,
) -> Markup {
    let title = format!("Create Your Card · {site_name}");
    let canonical = format!("{base_url}/create");
    let og = OpenGraphData {
        title: "Create Your Card",
        description: "Make a digital business card with its own link and QR code.",
        og_type: "website",
        image: None,
        twitter_card_type: "summary",
    };

    let slug_preview = if form.slug.is_empty() {
        "your-name".to_string()
    } else {
        normalize_slug(&form.slug)
    };

    let body = html! {
        div class="card" {
            h1 class="card-name" { "Create Your Card" }

            @if let Some(message) = error {
                div class="form-error" { (message) }
            }

            form method="post" action="/create" enctype="multipart/form-data" {
                div class="field" {
                    label for="photo" { "Profile Photo" }
                    input type="file" id="photo" name="photo" accept="image/*";
                }

                div class="field" {
                    label for="slug" { "Slug (URL path)" }
                    input type="text" id="slug" name="slug" required
                        placeholder="your-name" value=(form.slug);
                    p class="field-hint" { "Your card will be at: " (base_url) "/" (slug_preview) }
                }

                div class="field" {
                    label for="edit_token" { "Edit Token" }
                    input type="text" id="edit_token" name="edit_token" required
                        value=(form.edit_token);
                    p class="field-hint" {
                        "Keep this safe. Anyone holding it can edit your card at "
                        (base_url) "/edit/{token}."
                    }
                }

                div class="form-grid" {
                    (text_field("Full Name", "full_name", "text", &form.full_name, true))
                    (text_field("Job Title", "job_title", "text", &form.job_title, true))
                }
                div class="form-grid" {
                    (text_field("Company", "company", "text", &form.company, true))
                    (text_field("Email", "email", "email", &form.email, true))
                }
                div class="form-grid" {
                    (text_field("Phone", "phone", "tel", &form.phone, true))
                    (text_field("Website", "website", "url", &form.website, false))
                }

                div class="field" {
                    label for="bio" { "Bio" }
                    textarea id="bio" name="bio" rows="3" { (form.bio) }
                }

                (social_fieldset(form))

                div class="field" {
                    label for="primary_color" { "Primary Color" }
                    input type="color" id="primary_color" name="primary_color"
                        value=(form.color_value());
                }

                button class="btn" type="submit" { "Create My Card" }
            }
        }
    };

    page_shell(&title, "Create a digital business card.", &canonical, og, body, site_name)
}

/// Render the edit form page, including the private stats strip.
pub fn edit_page(
    profile: &Profile,
    form: &CardForm,
    error: Option<&str>,
    base_url: &str,
    site_name: &str,
) -> Markup {
    let title = format!("Edit Your Card · {site_name}");
    let canonical = format!("{base_url}/edit/{}", profile.edit_token);
    let og = OpenGraphData {
        title: "Edit Your Card",
        description: "Update your digital business card.",
        og_type: "website",
        image: None,
        twitter_card_type: "summary",
    };

    let body = html! {
        div class="card" {
            h1 class="card-name" { "Edit Your Card" }

            div class="stats" {
                span { b { (profile.visits) } " visits" }
                span { b { (profile.qr_code_scans) } " QR scans" }
            }
            p { a href=(format!("/{}", profile.slug)) { "View your card" } }

            @if let Some(message) = error {
                div class="form-error" { (message) }
            }

            form method="post" action=(format!("/edit/{}", profile.edit_token))
                enctype="multipart/form-data" {
                div class="field" {
                    label { "Address" }
                    p class="field-hint" { (base_url) "/" (profile.slug) " (cannot be changed)" }
                }

                div class="field" {
                    label for="photo" { "Profile Photo" }
                    input type="file" id="photo" name="photo" accept="image/*";
                    p class="field-hint" { "Leave empty to keep the current photo." }
                }

                div class="form-grid" {
                    (text_field("Full Name", "full_name", "text", &form.full_name, true))
                    (text_field("Job Title", "job_title", "text", &form.job_title, true))
                }
                div class="form-grid" {
                    (text_field("Company", "company", "text", &form.company, true))
                    (text_field("Email", "email", "email", &form.email, true))
                }
                div class="form-grid" {
                    (text_field("Phone", "phone", "tel", &form.phone, true))
                    (text_field("Website", "website", "url", &form.website, false))
                }

                div class="field" {
                    label for="bio" { "Bio" }
                    textarea id="bio" name="bio" rows="3" { (form.bio) }
                }

                (social_fieldset(form))

                div class="field" {
                    label for="primary_color" { "Primary Color" }
                    input type="color" id="primary_color" name="primary_color"
                        value=(form.color_value());
                }

                button class="btn" type="submit" { "Save Changes" }
            }
        }
    };

    page_shell(&title, "Update your digital business card.", &canonical, og, body, site_name)
}

fn text_field(label: &str, name: &str, input_type: &str, value: &str, required: bool) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type=(input_type) id=(name) name=(name) value=(value) required[required];
        }
    }
}

fn social_fieldset(form: &CardForm) -> Markup {
    html! {
        fieldset {
            legend { "Social Links" }
            @for platform in SocialPlatform::FORM_PLATFORMS {
                div class="field" {
                    input type="url" name=(platform.key())
                        placeholder=(platform.label())
                        aria-label=(platform.label())
                        value=(form.social_value(platform));
                }
            }
        }
    }
}
