//! Error types for the card server.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service. The not-found page doubles
//! as the empty state for unclaimed slugs and invites the visitor to
//! create a card.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

use crate::store::StoreError;

/// Card service error type.
#[derive(Debug, thiserror::Error)]
pub enum CardError {
    /// No card exists at the requested slug or edit token.
    #[error("card not found")]
    NotFound,

    /// The multipart form upload could not be read.
    #[error("upload error: {0}")]
    Upload(#[from] axum::extract::multipart::MultipartError),

    /// Profile store failure.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Filesystem error (media writes).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error (rendering, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for CardError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                "Card Not Found",
                "No card lives at this address yet. It may have been mistyped, or it is \
                 still waiting for someone to claim it."
                    .to_string(),
            ),
            Self::Upload(err) => (
                StatusCode::BAD_REQUEST,
                "Upload Failed",
                format!("The submitted form could not be read: {err}"),
            ),
            Self::Store(StoreError::SlugTaken(slug)) => (
                StatusCode::CONFLICT,
                "Address Taken",
                format!("The address \"{slug}\" already belongs to another card."),
            ),
            Self::Store(StoreError::TokenTaken) => (
                StatusCode::CONFLICT,
                "Token In Use",
                "That edit token already belongs to another card. Choose another one.".to_string(),
            ),
            Self::Store(err) => {
                tracing::error!(error = %err, "store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Service Unavailable",
                    "The card store is temporarily unavailable. Please try again later."
                        .to_string(),
                )
            }
            Self::Io(err) => {
                tracing::error!(error = %err, "I/O error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) " · Tapcard" }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        @if matches!(self, Self::NotFound) {
                            a class="cta" href="/create" { "Create your card" }
                        }
                        a href="/" { "Back home" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_not_found() {
        assert_eq!(CardError::NotFound.to_string(), "card not found");
    }

    #[test]
    fn error_display_internal() {
        let err = CardError::Internal(anyhow::anyhow!("something broke"));
        assert_eq!(err.to_string(), "internal error: something broke");
    }

    #[test]
    fn error_into_response_not_found() {
        let response = CardError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_into_response_slug_taken() {
        let err = CardError::Store(StoreError::SlugTaken("ada".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn error_into_response_internal() {
        let err = CardError::Internal(anyhow::anyhow!("boom"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
