//! Theme-derived styling: font request strings, icon color slug, and the
//! background/overlay branch used by the document assembler.

use crate::models::portfolio::Theme;

/// Stylesheet URL for the configured web font (weights 300–700).
pub fn font_stylesheet_url(theme: &Theme) -> String {
    format!(
        "https://fonts.googleapis.com/css2?family={}:wght@300;400;500;600;700&display=swap",
        theme.font.query()
    )
}

/// CSS font-family declaration with the generic fallback.
pub fn font_family_decl(theme: &Theme) -> String {
    format!("'{}', sans-serif", theme.font.family())
}

/// Primary color in the form the icon CDN expects: no leading `#`,
/// lowercase hex digits.
pub fn icon_color_slug(theme: &Theme) -> String {
    theme.primary_color.trim_start_matches('#').to_ascii_lowercase()
}

/// Body background declarations. A non-empty `background_image` wins and is
/// applied fixed, cover-fit and centered; otherwise the flat color applies.
pub fn body_background(theme: &Theme) -> String {
    if theme.background_image.is_empty() {
        format!("background-color: {};", theme.background_color)
    } else {
        format!(
            "background-image: url('{}'); background-size: cover; \
             background-position: center; background-attachment: fixed;",
            theme.background_image
        )
    }
}

/// Overlay color/opacity declarations, present only on the image branch.
/// `None` means the overlay element is omitted entirely.
pub fn overlay_style(theme: &Theme) -> Option<String> {
    if theme.background_image.is_empty() {
        None
    } else {
        Some(format!(
            "background-color: {}; opacity: {};",
            theme.background_color, theme.background_overlay
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{Font, PortfolioState};

    fn theme() -> Theme {
        PortfolioState::sample().theme
    }

    #[test]
    fn test_font_stylesheet_url_uses_plus_separator() {
        let mut t = theme();
        t.font = Font::PlayfairDisplay;
        assert_eq!(
            font_stylesheet_url(&t),
            "https://fonts.googleapis.com/css2?family=Playfair+Display:wght@300;400;500;600;700&display=swap"
        );
    }

    #[test]
    fn test_font_family_has_sans_serif_fallback() {
        let mut t = theme();
        t.font = Font::SpaceGrotesk;
        assert_eq!(font_family_decl(&t), "'Space Grotesk', sans-serif");
    }

    #[test]
    fn test_icon_color_slug_strips_hash_and_lowercases() {
        let mut t = theme();
        t.primary_color = "#4F46E5".to_string();
        assert_eq!(icon_color_slug(&t), "4f46e5");
    }

    #[test]
    fn test_flat_background_when_no_image() {
        let t = theme();
        assert_eq!(body_background(&t), "background-color: #f8fafc;");
        assert_eq!(overlay_style(&t), None);
    }

    #[test]
    fn test_image_background_is_fixed_cover_centered() {
        let mut t = theme();
        t.background_image = "https://example.com/bg.jpg".to_string();
        let bg = body_background(&t);
        assert!(bg.contains("background-image: url('https://example.com/bg.jpg')"));
        assert!(bg.contains("background-size: cover"));
        assert!(bg.contains("background-attachment: fixed"));
    }

    #[test]
    fn test_overlay_carries_background_color_and_opacity() {
        let mut t = theme();
        t.background_image = "linear-gradient(to right, #000, #fff)".to_string();
        t.background_overlay = 0.9;
        let overlay = overlay_style(&t).unwrap();
        assert!(overlay.contains("background-color: #f8fafc"));
        assert!(overlay.contains("opacity: 0.9"));
    }
}
