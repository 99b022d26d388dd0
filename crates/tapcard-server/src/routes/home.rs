//! Landing page and the find-a-card redirect.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use maud::html;
use serde::Deserialize;
use tapcard_core::normalize_slug;

use crate::render::components::{OpenGraphData, page_shell};
use crate::state::AppState;

/// Render the landing page: what the service is, a finder form, and the
/// creation call to action.
pub async fn home_page(State(state): State<AppState>) -> Response {
    let site_name = &state.config.site_name;
    let og = OpenGraphData {
        title: site_name,
        description: "Digital business cards with their own link and QR code.",
        og_type: "website",
        image: None,
        twitter_card_type: "summary",
    };

    let markup = page_shell(
        site_name,
        "Create a digital business card, share it with one link, and let people scan it straight into their contacts.",
        &state.config.base_url,
        og,
        html! {
            div class="hero" {
                h1 { (site_name) }
                p {
                    "One link for who you are. A digital business card with your "
                    "contact details, social profiles, and a QR code that saves "
                    "straight to a phone."
                }
                a class="btn" href="/create" { "Create your card" }
            }
            div class="card" {
                p { "Looking for someone's card?" }
                form class="find-form" action="/find" method="get" {
                    input type="text" name="slug" placeholder="your-name"
                        aria-label="Card address";
                    button class="btn" type="submit" { "Find" }
                }
                p class="field-hint" {
                    "Cards live at " (state.config.base_url) "/their-address"
                }
            }
        },
        site_name,
    );

    super::html_page(markup)
}

/// Query parameters for the finder form.
#[derive(Debug, Deserialize)]
pub struct FindParams {
    #[serde(default)]
    slug: String,
}

/// Redirect `/find?slug=...` to the card page for the normalized slug.
/// An empty query goes back home.
pub async fn find_card(Query(params): Query<FindParams>) -> impl IntoResponse {
    let slug = normalize_slug(&params.slug);
    if slug.is_empty() {
        Redirect::to("/")
    } else {
        Redirect::to(&format!("/{slug}"))
    }
}
