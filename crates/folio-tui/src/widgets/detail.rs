use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

use super::gallery::link_span;
use super::popup::centered_rect;

/// Project detail overlay, drawn over the gallery while a modal is open
pub struct DetailWidget;

impl DetailWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let Some(view) = app.site.modal().top() else {
            return;
        };
        let theme = &app.theme;

        let width = (area.width * 3 / 4).max(30).min(area.width);
        let height = (area.height * 3 / 4).max(10).min(area.height);
        let popup_area = centered_rect(width, height, area);

        frame.render_widget(Clear, popup_area);

        // Border brightens once the fade-in has finished
        let border = if view.is_fully_visible(app.now_ms()) {
            theme.accent
        } else {
            theme.muted
        };

        let block = Block::default()
            .title(format!(" {} ", view.title))
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(" Esc close  o source  b demo ").right_aligned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme.card));

        let mut lines = vec![
            Line::from(Span::styled(
                format!("🖼  {}", view.image),
                Style::default().fg(theme.muted),
            )),
            Line::default(),
            Line::from(Span::styled(view.description.clone(), Style::default().fg(theme.text))),
            Line::default(),
            Line::from(Span::styled(
                "Technologies:",
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
        ];
        lines.extend(view.technologies.iter().map(|tech| {
            Line::from(vec![
                Span::styled("  • ", Style::default().fg(theme.accent)),
                Span::styled(tech.clone(), Style::default().fg(theme.text)),
            ])
        }));
        lines.push(Line::default());
        lines.push(Line::from(vec![
            link_span(&view.github, theme),
            Span::raw("  "),
            link_span(&view.live, theme),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, popup_area);
    }
}
