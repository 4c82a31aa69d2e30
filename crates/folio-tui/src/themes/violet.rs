//! Violet palette, the site's default look

use ratatui::style::Color;
use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme {
        bg: Color::Rgb(0x0f, 0x0f, 0x14),
        card: Color::Rgb(0x1a, 0x1a, 0x24),
        border: Color::Rgb(0x2d, 0x2d, 0x3a),
        selection: Color::Rgb(0x2e, 0x25, 0x4a),
        text: Color::Rgb(0xf4, 0xf4, 0xf5),
        muted: Color::Rgb(0xa1, 0xa1, 0xaa),
        accent: Color::Rgb(0x8b, 0x5c, 0xf6), // rgba(139, 92, 246)
        disabled: Color::Rgb(0x52, 0x52, 0x5b),
        success: Color::Rgb(0x22, 0xc5, 0x5e),
        error: Color::Rgb(0xef, 0x44, 0x44),
    }
}

pub fn light() -> Theme {
    Theme {
        bg: Color::Rgb(0xfa, 0xfa, 0xfa),
        card: Color::Rgb(0xff, 0xff, 0xff),
        border: Color::Rgb(0xe4, 0xe4, 0xe7),
        selection: Color::Rgb(0xed, 0xe9, 0xfe),
        text: Color::Rgb(0x18, 0x18, 0x1b),
        muted: Color::Rgb(0x71, 0x71, 0x7a),
        accent: Color::Rgb(0x7c, 0x3a, 0xed),
        disabled: Color::Rgb(0xd4, 0xd4, 0xd8),
        success: Color::Rgb(0x16, 0xa3, 0x4a),
        error: Color::Rgb(0xdc, 0x26, 0x26),
    }
}
