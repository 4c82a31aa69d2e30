use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

const HELP_LINES: &[(&str, &str)] = &[
    ("j / k", "move between projects"),
    ("gg / G", "jump to top / bottom"),
    ("C-e / C-y", "scroll without moving"),
    ("Enter", "project details"),
    ("o", "open GitHub repository"),
    ("b", "open live demo"),
    ("Tab", "featured / all projects"),
    ("t", "toggle dark / light mode"),
    ("c", "contact form"),
    ("Esc", "close overlay"),
    ("q", "quit"),
];

pub struct PopupWidget;

impl PopupWidget {
    /// Key reference overlay
    pub fn render_help(frame: &mut Frame, theme: &Theme) {
        let area = frame.area();
        let height = (HELP_LINES.len() as u16 + 2).min(area.height);
        let popup_area = centered_rect(46u16.min(area.width), height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.card));

        let lines: Vec<Line> = HELP_LINES
            .iter()
            .map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<10}", keys),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*what, Style::default().fg(theme.text)),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Truncate to `max_width` terminal columns, marking the cut with an ellipsis
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(10, 4, Rect::new(0, 0, 30, 10));
        assert_eq!(rect, Rect::new(10, 3, 10, 4));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("Yad B Yad", 5), "Yad …");
        // Wide characters take two columns
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }
}
