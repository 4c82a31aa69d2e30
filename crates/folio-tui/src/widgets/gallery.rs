use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use folio_core::render::{ActionLink, RenderedCard};
use folio_core::PageContext;

use crate::app::App;
use crate::theme::Theme;

use super::popup::truncate_to_width;

pub struct GalleryWidget;

impl GalleryWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let title = match app.site.page() {
            PageContext::Home => " Featured Projects ",
            PageContext::Projects => " All Projects ",
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.bg));

        // Columns inside the borders
        let inner_width = area.width.saturating_sub(2) as usize;
        let lines: Vec<Line> = app
            .cards()
            .iter()
            .enumerate()
            .flat_map(|(i, card)| {
                let description = app
                    .site
                    .catalog()
                    .find_by_id(&card.project_id)
                    .map(|record| record.description.as_str())
                    .unwrap_or_default();
                let state = CardState {
                    selected: i == app.selected,
                    revealed: app.is_revealed(card),
                };
                card_lines(card, description, state, inner_width, theme)
            })
            .collect();

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((app.scroll_row(), 0));
        frame.render_widget(paragraph, area);
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct CardState {
    selected: bool,
    /// Scrolled into view at least once
    revealed: bool,
}

/// One card as exactly `CARD_HEIGHT` lines, text clipped to `width` columns
fn card_lines<'a>(
    card: &'a RenderedCard,
    description: &str,
    state: CardState,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'a>> {
    // Two-column gutter for the selection marker
    let text_width = width.saturating_sub(2);
    let title_fg = if state.revealed { theme.text } else { theme.muted };
    let (marker, title_style) = if state.selected {
        (
            "▌ ",
            Style::default()
                .fg(theme.accent)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(title_fg).add_modifier(Modifier::BOLD))
    };

    let tags: Vec<Span> = card
        .technologies
        .iter()
        .flat_map(|tech| {
            [
                Span::styled(format!("[{}]", tech), Style::default().fg(theme.accent)),
                Span::raw(" "),
            ]
        })
        .collect();

    vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.accent)),
            Span::styled(truncate_to_width(&card.title, text_width), title_style),
        ]),
        Line::from(Span::styled(
            format!("  {}", truncate_to_width(description, text_width)),
            Style::default().fg(theme.muted),
        )),
        Line::from([vec![Span::raw("  ")], tags].concat()),
        Line::from(vec![
            Span::raw("  "),
            link_span(&card.github, theme),
            Span::raw("  "),
            link_span(&card.live, theme),
        ]),
        Line::default(),
    ]
}

/// Link button; disabled links are dimmed and struck through
pub fn link_span(link: &ActionLink, theme: &Theme) -> Span<'static> {
    let label = format!("⟨{}⟩", link.kind.label());
    if link.is_disabled() {
        Span::styled(
            label,
            Style::default()
                .fg(theme.disabled)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        Span::styled(label, Style::default().fg(theme.success))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::CARD_HEIGHT;
    use folio_core::catalog::ProjectRecord;

    fn card(live: &str) -> RenderedCard {
        let record = ProjectRecord {
            id: "a".to_string(),
            title: "Alpha".to_string(),
            image: "a.png".to_string(),
            description: "desc".to_string(),
            technologies: vec!["Rust".to_string()],
            live: live.to_string(),
            github: "https://github.com/example/a".to_string(),
        };
        RenderedCard::from_record(&record, 0)
    }

    #[test]
    fn test_card_fills_fixed_height() {
        let card = card("#");
        let lines = card_lines(&card, "desc", CardState::default(), 40, &Theme::default());
        assert_eq!(lines.len(), CARD_HEIGHT as usize);
    }

    #[test]
    fn test_unrevealed_title_is_muted() {
        let theme = Theme::default();
        let card = card("#");
        let hidden = card_lines(&card, "desc", CardState::default(), 40, &theme);
        assert_eq!(hidden[0].spans[1].style.fg, Some(theme.muted));

        let shown = CardState { selected: false, revealed: true };
        let lines = card_lines(&card, "desc", shown, 40, &theme);
        assert_eq!(lines[0].spans[1].style.fg, Some(theme.text));
    }

    #[test]
    fn test_wide_description_fits_card_width() {
        let card = card("#");
        let description = "日本語のポートフォリオ説明文がここに入ります";
        let state = CardState { selected: true, revealed: true };
        let lines = card_lines(&card, description, state, 20, &Theme::default());
        assert!(lines[1].width() <= 20);
        assert!(lines[1].to_string().ends_with('…'));

        // Accented text is measured in columns, not bytes
        let lines = card_lines(&card, "Développé à Paris", state, 20, &Theme::default());
        assert_eq!(lines[1].to_string(), "  Développé à Paris");
    }

    #[test]
    fn test_disabled_link_is_dimmed() {
        let theme = Theme::default();
        let card = card("#");
        assert_eq!(link_span(&card.live, &theme).style.fg, Some(theme.disabled));
        assert_eq!(link_span(&card.github, &theme).style.fg, Some(theme.success));
    }
}
