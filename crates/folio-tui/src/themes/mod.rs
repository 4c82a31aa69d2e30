//! Palette registry and loader
//!
//! Each palette family ships a dark and a light variant; the variant follows
//! the site's theme mode and user overrides apply on top.

pub(crate) mod ocean;
pub(crate) mod violet;

use folio_core::config::{ThemeColorOverrides, ThemeConfig};
use folio_core::ThemeMode;
use ratatui::style::Color;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load the palette named in config for the given mode
pub fn load_theme(config: &ThemeConfig, mode: ThemeMode) -> Theme {
    let base = match (config.name.to_lowercase().as_str(), mode) {
        ("ocean", ThemeMode::Dark) => ocean::dark(),
        ("ocean", ThemeMode::Light) => ocean::light(),
        ("violet", ThemeMode::Light) => violet::light(),
        ("violet", ThemeMode::Dark) => violet::dark(),
        (other, mode) => {
            tracing::warn!(palette = other, "unknown palette, falling back to violet");
            match mode {
                ThemeMode::Dark => violet::dark(),
                ThemeMode::Light => violet::light(),
            }
        }
    };

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base palette
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 9] = [
        (&overrides.bg, &mut theme.bg),
        (&overrides.card, &mut theme.card),
        (&overrides.text, &mut theme.text),
        (&overrides.muted, &mut theme.muted),
        (&overrides.accent, &mut theme.accent),
        (&overrides.border, &mut theme.border),
        (&overrides.disabled, &mut theme.disabled),
        (&overrides.success, &mut theme.success),
        (&overrides.error, &mut theme.error),
    ];

    for (hex, slot) in slots {
        if let Some(color) = hex.as_deref().and_then(parse_hex_color) {
            *slot = color;
        }
    }

    theme
}

/// Get list of available palette names
pub fn available_themes() -> Vec<&'static str> {
    vec!["violet", "ocean"]
}
