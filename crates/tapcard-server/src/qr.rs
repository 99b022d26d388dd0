//! QR code generation for card URLs.
//!
//! Each card embeds a QR code whose payload is the card's own absolute
//! URL. Codes are rendered as standalone SVG documents at error-correction
//! level H with a quiet zone, so they stay scannable at small sizes and on
//! tinted backgrounds.

use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

/// Minimum rendered side length in SVG user units.
pub const QR_MIN_SIDE: u32 = 150;

/// Renders a QR code SVG document encoding `url`.
pub fn qr_svg(url: &str) -> anyhow::Result<String> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::H)
        .map_err(|e| anyhow::anyhow!("QR encoding failed: {e}"))?;
    let svg = code
        .render::<svg::Color>()
        .min_dimensions(QR_MIN_SIDE, QR_MIN_SIDE)
        .quiet_zone(true)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_svg_document() {
        let svg = qr_svg("https://cards.example.com/ada-lovelace").unwrap();
        assert!(svg.starts_with("<?xml") || svg.starts_with("<svg"));
        assert!(svg.contains("<svg"));
        assert!(svg.contains("http://www.w3.org/2000/svg"));
    }

    #[test]
    fn deterministic_for_same_url() {
        let a = qr_svg("https://cards.example.com/ada-lovelace").unwrap();
        let b = qr_svg("https://cards.example.com/ada-lovelace").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn differs_across_urls() {
        let a = qr_svg("https://cards.example.com/ada-lovelace").unwrap();
        let b = qr_svg("https://cards.example.com/grace-hopper").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn handles_long_urls() {
        let url = format!("https://cards.example.com/{}", "a-".repeat(80));
        assert!(qr_svg(&url).is_ok());
    }
}
