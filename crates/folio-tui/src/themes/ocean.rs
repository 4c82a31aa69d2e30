//! Ocean palette

use ratatui::style::Color;
use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme {
        bg: Color::Rgb(0x0b, 0x12, 0x20),
        card: Color::Rgb(0x11, 0x1c, 0x30),
        border: Color::Rgb(0x1e, 0x2d, 0x4a),
        selection: Color::Rgb(0x16, 0x3a, 0x5c),
        text: Color::Rgb(0xe2, 0xe8, 0xf0),
        muted: Color::Rgb(0x94, 0xa3, 0xb8),
        accent: Color::Rgb(0x38, 0xbd, 0xf8),
        disabled: Color::Rgb(0x47, 0x55, 0x69),
        success: Color::Rgb(0x34, 0xd3, 0x99),
        error: Color::Rgb(0xf8, 0x71, 0x71),
    }
}

pub fn light() -> Theme {
    Theme {
        bg: Color::Rgb(0xf0, 0xf9, 0xff),
        card: Color::Rgb(0xff, 0xff, 0xff),
        border: Color::Rgb(0xba, 0xe6, 0xfd),
        selection: Color::Rgb(0xe0, 0xf2, 0xfe),
        text: Color::Rgb(0x0c, 0x1a, 0x2b),
        muted: Color::Rgb(0x47, 0x55, 0x69),
        accent: Color::Rgb(0x02, 0x84, 0xc7),
        disabled: Color::Rgb(0xcb, 0xd5, 0xe1),
        success: Color::Rgb(0x05, 0x96, 0x69),
        error: Color::Rgb(0xdc, 0x26, 0x26),
    }
}
