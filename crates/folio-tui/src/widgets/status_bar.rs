use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use folio_core::notify::NotificationKind;

use crate::app::{App, Mode};

use super::contact::is_sending;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match &app.mode {
            Mode::Normal if app.details_open() => "DETAILS",
            Mode::Normal => "NORMAL",
            Mode::Contact(_) => "CONTACT",
            Mode::Help => "HELP",
        };

        // Toasts outrank transient status messages
        let (status_text, fg) = if let Some(toast) = app.site.notifications().latest() {
            let color = match toast.kind {
                NotificationKind::Success => theme.success,
                NotificationKind::Error | NotificationKind::Warning => theme.error,
                NotificationKind::Info => theme.text,
            };
            (format!(" {}", toast.message), color)
        } else if let Some(msg) = &app.status_message {
            (format!(" {}", msg), theme.text)
        } else if is_sending(app) {
            (" Sending...".to_string(), theme.muted)
        } else {
            (
                format!(
                    " {} | {} | {} | {} projects",
                    mode_str,
                    app.site.page().as_str(),
                    app.site.theme(),
                    app.cards().len()
                ),
                theme.text,
            )
        };

        let help_hint = " q:quit j/k:move Enter:details t:theme ?:help ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(fg).bg(theme.card)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.card)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.card)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
