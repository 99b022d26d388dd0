//! Public card page renderer.
//!
//! Renders a profile as its business-card page: avatar, identity block,
//! contact rows, social chips, save/share actions, and the QR panel.

use maud::{Markup, PreEscaped, html};
use tapcard_core::Profile;

use super::components::{
    ICON_DOWNLOAD, ICON_GLOBE, ICON_MAIL, ICON_PHONE, ICON_SHARE, OpenGraphData, initial_letter,
    is_safe_url, page_shell, social_icon, truncate,
};

/// Render a card page.
pub fn render(profile: &Profile, base_url: &str, site_name: &str) -> Markup {
    let name = profile.full_name.as_str();
    let title = format!("{name}'s Digital Card");
    let description = if profile.bio.is_empty() {
        format!("{} at {}", profile.job_title, profile.company)
    } else {
        truncate(&profile.bio, 200)
    };
    let canonical = format!("{base_url}/{}", profile.slug);

    // OG images must be absolute; uploaded avatars are site-relative paths.
    let og_image = profile
        .profile_image
        .as_deref()
        .filter(|url| is_safe_url(url))
        .map(|url| {
            if url.starts_with('/') {
                format!("{base_url}{url}")
            } else {
                url.to_string()
            }
        });

    let og = OpenGraphData {
        title: &title,
        description: &description,
        og_type: "profile",
        image: og_image.as_deref(),
        twitter_card_type: "summary",
    };

    let initial = initial_letter(name);
    let accent_style = format!("--accent:{}", profile.custom_theme.accent());
    let share_onclick = share_handler(name, &canonical);
    let scan_onclick = format!(
        "fetch('/{}/scan',{{method:'POST'}}).catch(function(){{}})",
        profile.slug
    );

    let body = html! {
        div class="card" style=(accent_style) {
            div class="avatar" {
                (initial.as_str())
                @if let Some(image_url) = profile.profile_image.as_deref() {
                    @if is_safe_url(image_url) {
                        img src=(image_url) alt=(name) loading="lazy" onerror="this.style.display='none'";
                    }
                }
            }

            h1 class="card-name" { (name) }
            p class="card-role" { (profile.job_title) }
            p class="card-company" { (profile.company) }

            @if !profile.bio.is_empty() {
                p class="card-bio" { (profile.bio) }
            }

            div class="contact" {
                a class="contact-row" href=(format!("mailto:{}", profile.email)) {
                    (PreEscaped(ICON_MAIL)) span { (profile.email) }
                }
                a class="contact-row" href=(format!("tel:{}", profile.phone)) {
                    (PreEscaped(ICON_PHONE)) span { (profile.phone) }
                }
                @if let Some(website) = profile.website.as_deref() {
                    @if is_safe_url(website) {
                        a class="contact-row" href=(website) rel="noopener noreferrer" target="_blank" {
                            (PreEscaped(ICON_GLOBE)) span { (website) }
                        }
                    }
                }
            }

            @if !profile.social_links.is_empty() {
                div class="socials" {
                    @for (platform, url) in &profile.social_links {
                        @if is_safe_url(url) {
                            a class="social-chip" href=(url) rel="noopener noreferrer"
                                target="_blank" title=(platform.label())
                                aria-label=(platform.label()) {
                                (PreEscaped(social_icon(*platform)))
                            }
                        }
                    }
                }
            }

            div class="actions" {
                a class="btn" href=(format!("/{}/vcard", profile.slug)) {
                    (PreEscaped(ICON_DOWNLOAD)) " Save Contact"
                }
                button class="btn btn-quiet" type="button" onclick=(share_onclick)
                    aria-label="Share this card" {
                    (PreEscaped(ICON_SHARE))
                }
            }

            div class="qr-panel" {
                img src=(format!("/{}/qr.svg", profile.slug)) alt="QR code for this card"
                    width="150" height="150" onclick=(scan_onclick);
                p class="qr-hint" { "Scan to save this contact" }
            }
        }
    };

    page_shell(&title, &description, &canonical, og, body, site_name)
}

/// Inline handler for the share button: native share when the platform has
/// it, a console note otherwise. Share failures (including the user backing
/// out) are logged and swallowed.
fn share_handler(name: &str, url: &str) -> String {
    let name = js_string(name);
    format!(
        "if(navigator.share){{navigator.share({{title:'{name}\\'s Digital Card',\
         text:'Check out {name}\\'s digital business card!',url:'{url}'}})\
         .catch(function(err){{console.log('Share failed:',err)}})}}\
         else{{console.log('Share not supported')}}"
    )
}

/// Escape a value for embedding inside a single-quoted JS string literal.
fn js_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
