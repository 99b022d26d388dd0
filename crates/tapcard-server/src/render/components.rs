//! Shared HTML components used across all card pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{Markup, PreEscaped, html};
use tapcard_core::SocialPlatform;

/// Inline CSS for all card pages.
///
/// Flat, modern design. Light/dark themes are CSS variables switched by the
/// `data-theme` attribute on `<html>`; when no explicit choice is stored the
/// `prefers-color-scheme` media query supplies the dark palette. The accent
/// color defaults here and is overridden per card via an inline `--accent`.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--fg3:#999;--accent:#3b82f6;--surface:#fff;--border:rgba(0,0,0,.1);--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
:root[data-theme="dark"]{--bg:#0a0a0f;--fg:#e5e5e5;--fg2:#a0a0a0;--fg3:#666;--surface:#111118;--border:rgba(255,255,255,.12)}
@media(prefers-color-scheme:dark){
:root:not([data-theme="light"]){--bg:#0a0a0f;--fg:#e5e5e5;--fg2:#a0a0a0;--fg3:#666;--surface:#111118;--border:rgba(255,255,255,.12)}
}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:520px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
img{max-width:100%;height:auto}
svg.icon{width:20px;height:20px;fill:none;stroke:currentColor;stroke-width:2;stroke-linecap:round;stroke-linejoin:round;vertical-align:-4px;flex-shrink:0}

.topbar{width:100%;max-width:520px;display:flex;align-items:center;justify-content:space-between;margin-bottom:1.25rem}
.topbar-brand{font-weight:700;letter-spacing:-.01em;color:var(--fg);font-size:1.05rem}
.topbar-brand:hover{text-decoration:none;color:var(--accent)}
.icon-btn{background:none;border:1px solid var(--border);border-radius:8px;cursor:pointer;color:var(--fg2);padding:.4rem .5rem;display:flex;align-items:center}
.icon-btn:hover{color:var(--accent);border-color:var(--accent)}
.icon-sun{display:none}
:root[data-theme="dark"] .icon-sun{display:inline}
:root[data-theme="dark"] .icon-moon{display:none}
@media(prefers-color-scheme:dark){
:root:not([data-theme="light"]) .icon-sun{display:inline}
:root:not([data-theme="light"]) .icon-moon{display:none}
}

.card{padding:2rem 1.5rem;border:1px solid var(--border);border-radius:14px;background:var(--surface);text-align:center}
.avatar{width:96px;height:96px;border-radius:50%;background:var(--accent);margin:0 auto 1rem;display:flex;align-items:center;justify-content:center;color:#fff;font-weight:700;font-size:2.2rem;text-transform:uppercase;overflow:hidden;position:relative}
.avatar img{position:absolute;inset:0;width:100%;height:100%;object-fit:cover}
.card-name{font-size:1.6rem;font-weight:700;letter-spacing:-.02em}
.card-role{color:var(--fg2);font-size:1rem}
.card-company{color:var(--accent);font-size:.95rem;font-weight:500}
.card-bio{margin:1rem 0;white-space:pre-wrap;word-break:break-word;color:var(--fg2);line-height:1.65;text-align:left}

.contact{margin:1.25rem 0;display:flex;flex-direction:column;gap:.5rem;text-align:left}
.contact-row{display:flex;align-items:center;gap:.6rem;color:var(--fg);font-size:.95rem;padding:.45rem .6rem;border-radius:8px;border:1px solid var(--border);word-break:break-all}
.contact-row:hover{text-decoration:none;border-color:var(--accent)}
.contact-row svg.icon{color:var(--accent)}

.socials{display:flex;justify-content:center;gap:.6rem;flex-wrap:wrap;margin:1rem 0}
.social-chip{display:flex;align-items:center;justify-content:center;width:42px;height:42px;border-radius:50%;border:1px solid var(--border);color:var(--fg2)}
.social-chip:hover{color:var(--accent);border-color:var(--accent);text-decoration:none}

.actions{display:flex;gap:.6rem;justify-content:center;flex-wrap:wrap;margin-top:1.25rem}
.btn{display:inline-flex;align-items:center;gap:.5rem;padding:.55rem 1.1rem;background:var(--accent);color:#fff;border:none;border-radius:8px;font-size:.9rem;font-weight:500;text-decoration:none;cursor:pointer;font-family:inherit}
.btn:hover{opacity:.9;text-decoration:none}
.btn svg.icon{stroke:#fff;width:16px;height:16px}
.btn-quiet{background:none;color:var(--fg2);border:1px solid var(--border)}
.btn-quiet svg.icon{stroke:currentColor}
.btn-quiet:hover{color:var(--accent);border-color:var(--accent);opacity:1}

.qr-panel{margin-top:1.5rem;padding-top:1.25rem;border-top:1px solid var(--border)}
.qr-panel img{width:150px;height:150px;cursor:pointer;border-radius:8px;background:#fff;padding:6px}
.qr-hint{font-size:.8rem;color:var(--fg3);margin-top:.4rem}

.stats{display:flex;justify-content:center;gap:1.5rem;margin:1rem 0;font-size:.9rem;color:var(--fg3)}
.stats b{color:var(--fg)}

.hero{text-align:center;padding:2.5rem 0 1.5rem}
.hero h1{font-size:2rem;letter-spacing:-.02em;margin-bottom:.5rem}
.hero p{color:var(--fg2);max-width:390px;margin:0 auto 1.5rem}
.find-form{display:flex;gap:.5rem;justify-content:center;margin:1rem 0}
.find-form input{flex:1;max-width:260px}

form .field{margin-bottom:1rem;text-align:left}
form label{display:block;font-size:.85rem;font-weight:600;color:var(--fg2);margin-bottom:.3rem}
input,textarea{width:100%;padding:.55rem .7rem;border:1px solid var(--border);border-radius:8px;background:var(--bg);color:var(--fg);font-family:inherit;font-size:.95rem}
input:focus,textarea:focus{outline:2px solid var(--accent);border-color:transparent}
input[type=color]{padding:.15rem;height:2.4rem;max-width:5rem}
input[type=file]{border:none;padding:.3rem 0;background:none}
.field-hint{font-size:.78rem;color:var(--fg3);margin-top:.25rem}
.form-error{background:rgba(220,38,38,.08);border:1px solid rgba(220,38,38,.35);color:#dc2626;border-radius:8px;padding:.6rem .8rem;margin-bottom:1rem;font-size:.9rem}
.form-grid{display:grid;grid-template-columns:1fr 1fr;gap:0 1rem}
@media(max-width:480px){.form-grid{grid-template-columns:1fr}}
fieldset{border:none;margin:1.25rem 0 0;padding:1rem 0 0;border-top:1px solid var(--border)}
legend{font-size:.9rem;font-weight:600;color:var(--fg2);padding-right:.5rem}

.footer{text-align:center;margin-top:1.5rem;padding-top:.75rem;font-size:.8rem;color:var(--fg3);letter-spacing:.01em;width:100%;max-width:520px}
.footer a{color:var(--accent)}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#fafafa;color:#1a1a2e;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#666;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#3b82f6;display:inline-block;margin:0 .5rem}
.error-page a.cta{background:#3b82f6;color:#fff;border-radius:8px;padding:.5rem 1rem;text-decoration:none}
@media(prefers-color-scheme:dark){
body{background:#0f0f17;color:#e0e0e8}
.error-page p{color:#aaa}
.error-page a{color:#93b4f8}
.error-page a.cta{color:#fff}
}
"#;

/// Content-Security-Policy header value.
///
/// Allows inline styles and the small inline scripts for the theme toggle,
/// share, and QR tap tracking. Form posts and fetches stay same-origin;
/// images may come from this origin (uploads) or HTTPS avatars.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; script-src 'unsafe-inline'; img-src 'self' https: data:; connect-src 'self'; form-action 'self'; frame-ancestors 'none'";

/// Theme bootstrap + toggle script, inlined into `<head>`.
///
/// Applies the stored choice before first paint so pages never flash the
/// wrong theme; without a stored choice the CSS media query decides.
const THEME_SCRIPT: &str = r#"
(function(){try{var t=localStorage.getItem('tapcard-theme');if(t==='dark'||t==='light'){document.documentElement.setAttribute('data-theme',t);}}catch(e){}})();
function tapcardToggleTheme(){
var root=document.documentElement;
var current=root.getAttribute('data-theme');
if(!current){current=window.matchMedia&&window.matchMedia('(prefers-color-scheme: dark)').matches?'dark':'light';}
var next=current==='dark'?'light':'dark';
root.setAttribute('data-theme',next);
try{localStorage.setItem('tapcard-theme',next);}catch(e){}
}
"#;

/// Render the full HTML page shell with `<head>`, OG tags, top bar with
/// theme toggle, and body content.
pub fn page_shell(
    title: &str,
    description: &str,
    canonical_url: &str,
    og: OpenGraphData<'_>,
    body_content: Markup,
    site_name: &str,
) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                link rel="canonical" href=(canonical_url);

                // Open Graph
                meta property="og:title" content=(og.title);
                meta property="og:description" content=(og.description);
                meta property="og:url" content=(canonical_url);
                meta property="og:site_name" content=(site_name);
                meta property="og:type" content=(og.og_type);
                @if let Some(image) = og.image {
                    meta property="og:image" content=(image);
                }

                // Twitter Card
                meta name="twitter:card" content=(og.twitter_card_type);
                meta name="twitter:title" content=(og.title);
                meta name="twitter:description" content=(og.description);
                @if let Some(image) = og.image {
                    meta name="twitter:image" content=(image);
                }

                script { (PreEscaped(THEME_SCRIPT)) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                header class="topbar" {
                    a class="topbar-brand" href="/" { (site_name) }
                    (theme_toggle())
                }
                main { (body_content) }
                footer class="footer" {
                    a href="/create" { "Create your own card" }
                }
            }
        }
    }
}

/// The light/dark toggle button shown in the top bar of every page.
pub fn theme_toggle() -> Markup {
    html! {
        button class="icon-btn" type="button" onclick="tapcardToggleTheme()"
            aria-label="Toggle theme" title="Toggle theme" {
            span class="icon-sun" { (PreEscaped(ICON_SUN)) }
            span class="icon-moon" { (PreEscaped(ICON_MOON)) }
        }
    }
}

/// Open Graph metadata for a page.
pub struct OpenGraphData<'a> {
    /// OG title.
    pub title: &'a str,
    /// OG description.
    pub description: &'a str,
    /// OG type (e.g., "profile", "website").
    pub og_type: &'a str,
    /// OG image URL.
    pub image: Option<&'a str>,
    /// Twitter card type ("summary", "summary_large_image").
    pub twitter_card_type: &'a str,
}

// -- Lucide-style stroke icon SVGs --

/// Sun icon, shown in dark theme.
const ICON_SUN: &str = r#"<svg class="icon" viewBox="0 0 24 24"><circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/></svg>"#;

/// Moon icon, shown in light theme.
const ICON_MOON: &str = r#"<svg class="icon" viewBox="0 0 24 24"><path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/></svg>"#;

/// Envelope icon for the email row.
pub const ICON_MAIL: &str = r#"<svg class="icon" viewBox="0 0 24 24"><rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/></svg>"#;

/// Handset icon for the phone row.
pub const ICON_PHONE: &str = r#"<svg class="icon" viewBox="0 0 24 24"><path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/></svg>"#;

/// Globe icon for the website row.
pub const ICON_GLOBE: &str = r#"<svg class="icon" viewBox="0 0 24 24"><circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/></svg>"#;

/// Download icon for the "Save Contact" button.
pub const ICON_DOWNLOAD: &str = r#"<svg class="icon" viewBox="0 0 24 24"><path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" x2="12" y1="15" y2="3"/></svg>"#;

/// Share icon for the share button.
pub const ICON_SHARE: &str = r#"<svg class="icon" viewBox="0 0 24 24"><circle cx="18" cy="5" r="3"/><circle cx="6" cy="12" r="3"/><circle cx="18" cy="19" r="3"/><line x1="8.59" x2="15.42" y1="13.51" y2="6.49"/><line x1="15.41" x2="8.59" y1="17.49" y2="10.51"/></svg>"#;

const ICON_LINKEDIN: &str = r#"<svg class="icon" viewBox="0 0 24 24"><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/></svg>"#;

const ICON_TWITTER: &str = r#"<svg class="icon" viewBox="0 0 24 24"><path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/></svg>"#;

const ICON_GITHUB: &str = r#"<svg class="icon" viewBox="0 0 24 24"><path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5a5.403 5.403 0 0 0-1 3.5c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/></svg>"#;

const ICON_INSTAGRAM: &str = r#"<svg class="icon" viewBox="0 0 24 24"><rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/></svg>"#;

/// Generic chain-link icon for platforms without a dedicated glyph.
const ICON_LINK: &str = r#"<svg class="icon" viewBox="0 0 24 24"><path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"/><path d="M14 11a5 5 0 0 0-7.54.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"/></svg>"#;

/// The icon for a social platform chip.
pub fn social_icon(platform: SocialPlatform) -> &'static str {
    match platform {
        SocialPlatform::Linkedin => ICON_LINKEDIN,
        SocialPlatform::Twitter => ICON_TWITTER,
        SocialPlatform::Github => ICON_GITHUB,
        SocialPlatform::Instagram => ICON_INSTAGRAM,
        _ => ICON_LINK,
    }
}

/// Check if a URL is safe to use in `src` or `href` attributes: absolute
/// http(s), or a site-relative path (uploaded media).
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://")
        || url.starts_with("http://")
        || (url.starts_with('/') && !url.starts_with("//"))
}

/// Uppercased first character of a name, for the avatar fallback.
pub fn initial_letter(name: &str) -> String {
    name.chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string()
}

/// Truncate a string to a maximum length, appending "..." if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len;
        while !s.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- truncate() tests --

    #[test]
    fn truncate_empty_string() {
        assert_eq!(truncate("", 10), "");
    }

    #[test]
    fn truncate_shorter_than_max() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn truncate_exact_length() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn truncate_longer_than_max() {
        assert_eq!(truncate("hello world", 5), "hello...");
    }

    #[test]
    fn truncate_respects_char_boundary() {
        // Multi-byte char straddling the cut point must not panic.
        let s = "héllo wörld";
        let out = truncate(s, 2);
        assert!(out.ends_with("..."));
    }

    // -- is_safe_url() tests --

    #[test]
    fn safe_url_accepts_http_and_https() {
        assert!(is_safe_url("https://example.com/a.png"));
        assert!(is_safe_url("http://example.com"));
    }

    #[test]
    fn safe_url_accepts_site_relative() {
        assert!(is_safe_url("/media/abc123.png"));
    }

    #[test]
    fn safe_url_rejects_other_schemes() {
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("data:text/html,x"));
        assert!(!is_safe_url("//evil.example/x.png"));
        assert!(!is_safe_url("ftp://example.com"));
    }

    // -- initial_letter() tests --

    #[test]
    fn initial_letter_uppercases() {
        assert_eq!(initial_letter("ada"), "A");
        assert_eq!(initial_letter("Ada Lovelace"), "A");
    }

    #[test]
    fn initial_letter_empty_fallback() {
        assert_eq!(initial_letter(""), "?");
    }

    // -- icon tests --

    #[test]
    fn social_icons_are_svg_fragments() {
        use strum::IntoEnumIterator;
        for platform in SocialPlatform::iter() {
            let icon = social_icon(platform);
            assert!(icon.starts_with("<svg"));
            assert!(icon.contains(r#"class="icon""#));
        }
    }

    // -- page_shell() tests --

    #[test]
    fn page_shell_includes_og_and_theme() {
        let og = OpenGraphData {
            title: "Ada Lovelace",
            description: "Engineer at Analytical Engines",
            og_type: "profile",
            image: Some("https://example.com/ada.png"),
            twitter_card_type: "summary",
        };
        let markup = page_shell(
            "Ada Lovelace",
            "Engineer at Analytical Engines",
            "https://cards.example.com/ada-lovelace",
            og,
            html! { p { "body" } },
            "Tapcard",
        );
        let rendered = markup.into_string();
        assert!(rendered.contains("<!DOCTYPE html>"));
        assert!(rendered.contains(r#"property="og:title" content="Ada Lovelace""#));
        assert!(rendered.contains(r#"property="og:image" content="https://example.com/ada.png""#));
        assert!(rendered.contains("tapcard-theme"));
        assert!(rendered.contains("tapcardToggleTheme"));
        assert!(rendered.contains(r#"link rel="canonical" href="https://cards.example.com/ada-lovelace""#));
    }

    #[test]
    fn page_shell_escapes_titles() {
        let og = OpenGraphData {
            title: "x",
            description: "x",
            og_type: "website",
            image: None,
            twitter_card_type: "summary",
        };
        let rendered = page_shell(
            "<script>alert(1)</script>",
            "d",
            "https://cards.example.com/",
            og,
            html! {},
            "Tapcard",
        )
        .into_string();
        assert!(!rendered.contains("<script>alert(1)</script>"));
        assert!(rendered.contains("&lt;script&gt;"));
    }
}
