//! Tapcard - digital business cards behind one short link.
//!
//! This crate provides an HTTP server where anyone can claim a slug,
//! fill in their contact details, and get a shareable card page with a
//! vCard download and a QR code. Editing is authorized purely by a
//! secret token handed out at creation time.
//!
//! # Architecture
//!
//! - **Store**: Profiles in a single SQLite table behind a shared
//!   connection, with slug/token uniqueness enforced by the schema
//! - **Render**: HTML pages via maud (compile-time templates), one shell
//!   shared by the card, form, and landing pages
//! - **Media**: Uploaded photos on the local filesystem, served under
//!   `/media`
//! - **QR**: SVG codes generated on demand and held in a moka cache
//!
//! # URL Pattern
//!
//! ```text
//! GET  /{slug}          public card page (counts a visit)
//! GET  /{slug}/vcard    downloadable vCard 3.0
//! GET  /{slug}/qr.svg   QR code pointing at the card page
//! POST /{slug}/scan     QR tap tracking
//! GET  /edit/{token}    token-authorized edit form
//! ```
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud
//! - Stored URLs are validated (HTTPS/HTTP only) before use in attributes
//! - Content-Security-Policy allows only the inline theme/share scripts
//! - Edit tokens never appear on public pages and are excluded from
//!   crawling via robots.txt

pub mod config;
pub mod error;
pub mod media;
pub mod qr;
pub mod render;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
