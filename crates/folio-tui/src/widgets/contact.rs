use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use folio_core::contact::{FormField, SubmitState};

use crate::app::App;
use crate::theme::Theme;

use super::popup::centered_rect;

pub struct ContactWidget;

impl ContactWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let form = app.site.contact();

        let height = (form.fields().len() as u16 * 3 + 4).min(area.height);
        let popup_area = centered_rect(60u16.min(area.width), height, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Get in touch ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.card));

        let mut lines: Vec<Line> = form
            .fields()
            .iter()
            .flat_map(|field| field_lines(field, theme))
            .collect();

        let button_style = if form.is_submit_disabled() {
            Style::default().fg(theme.disabled)
        } else {
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(format!(" {} ", form.button_label()), button_style),
            Span::styled("  Ctrl+S send  Tab next  Esc close", Style::default().fg(theme.muted)),
        ]));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Floating-label field: label sits above the value once focused or filled
fn field_lines<'a>(field: &'a FormField, theme: &Theme) -> Vec<Line<'a>> {
    let label_style = if field.focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.muted)
    };
    let required = if field.required { "*" } else { "" };

    let (label_line, value_line) = if field.is_floating() {
        let cursor = if field.focused { "▏" } else { "" };
        (
            Line::from(Span::styled(format!(" {}{}", field.label, required), label_style)),
            Line::from(vec![
                Span::raw(" "),
                Span::styled(field.value.as_str(), Style::default().fg(theme.text)),
                Span::styled(cursor, Style::default().fg(theme.accent)),
            ]),
        )
    } else {
        (
            Line::default(),
            Line::from(Span::styled(format!(" {}{}", field.label, required), label_style)),
        )
    };

    let rule = if field.multiline { "═" } else { "─" };
    vec![
        label_line,
        value_line,
        Line::from(Span::styled(
            format!(" {}", rule.repeat(56)),
            Style::default().fg(if field.focused { theme.accent } else { theme.border }),
        )),
    ]
}

/// Whether the status bar should show a sending indicator
pub fn is_sending(app: &App) -> bool {
    app.site.contact().state() == SubmitState::Sending
}
