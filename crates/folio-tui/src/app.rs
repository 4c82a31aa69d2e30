use std::time::{Duration, Instant};

use folio_core::contact::Submission;
use folio_core::notify::Notification;
use folio_core::render::{DelegatedEvent, GalleryAction, LinkKind, RenderedCard};
use folio_core::scroll::timing::to_rows;
use folio_core::scroll::Viewport;
use folio_core::{PageContext, Site};

use tokio::sync::mpsc;

use crate::theme::Theme;
use crate::themes::load_theme;

/// Terminal rows one gallery card occupies
pub const CARD_HEIGHT: u16 = 5;

/// Rows at the bottom of the gallery that don't count toward revealing a card
pub const REVEAL_MARGIN_ROWS: f64 = 1.0;

/// Vertical scroll position of the gallery panel, in rows
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GalleryViewport {
    pub y: f64,
}

impl Viewport for GalleryViewport {
    fn scroll_y(&self) -> f64 {
        self.y
    }

    fn set_scroll_y(&mut self, y: f64) {
        self.y = y;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Editing the contact form; index of the focused field
    Contact(usize),
    Help,
}

pub struct App {
    pub site: Site,
    pub theme: Theme,
    pub mode: Mode,
    /// Index of the highlighted card
    pub selected: usize,
    pub viewport: GalleryViewport,
    /// Rows available to the gallery panel, updated on every draw
    pub viewport_height: u16,
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// First key of a two-key sequence (e.g. 'g' of "gg")
    pub pending_key: Option<char>,
    started: Instant,
}

impl App {
    pub fn new(mut site: Site, page: PageContext) -> Self {
        site.mount(page);
        site.reveal_mut().set_bottom_margin(REVEAL_MARGIN_ROWS);
        let theme = load_theme(&site.config().ui.theme, site.theme());
        let mut app = Self {
            site,
            theme,
            mode: Mode::Normal,
            selected: 0,
            viewport: GalleryViewport::default(),
            viewport_height: 0,
            status_message: None,
            should_quit: false,
            pending_key: None,
            started: Instant::now(),
        };
        app.observe_cards();
        app
    }

    /// Register every card's rows with the reveal tracker
    fn observe_cards(&mut self) {
        let ids: Vec<String> = self.cards().iter().map(|c| c.project_id.clone()).collect();
        for (i, id) in ids.into_iter().enumerate() {
            let top = i as f64 * CARD_HEIGHT as f64;
            self.site.observe_element(id, top, CARD_HEIGHT as f64);
        }
    }

    /// Frame timestamp in milliseconds since the app started
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    pub fn cards(&self) -> &[RenderedCard] {
        self.site.container().cards()
    }

    pub fn selected_card(&self) -> Option<&RenderedCard> {
        self.cards().get(self.selected)
    }

    pub fn max_scroll(&self) -> u16 {
        (self.cards().len() as u16 * CARD_HEIGHT).saturating_sub(self.viewport_height)
    }

    /// Row offset to draw the gallery at
    pub fn scroll_row(&self) -> u16 {
        to_rows(self.viewport.y, self.max_scroll())
    }

    pub fn details_open(&self) -> bool {
        self.site.modal().is_open()
    }

    /// Advance animations, expire toasts and reveal cards scrolled into view
    pub fn on_tick(&mut self) {
        let now = self.now_ms();
        self.site.on_frame(now, &mut self.viewport);
        self.reveal_visible();
    }

    /// Reveal the cards the gallery panel currently shows
    pub fn reveal_visible(&mut self) {
        // Height is unknown until the first draw
        if self.viewport_height == 0 {
            return;
        }
        let top = self.scroll_row() as f64;
        self.site.on_scroll(top, self.viewport_height as f64);
    }

    pub fn is_revealed(&self, card: &RenderedCard) -> bool {
        self.site.reveal().is_revealed(&card.project_id)
    }

    pub fn needs_fast_tick(&self) -> bool {
        self.site.scroll().needs_frame()
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.cards().len() {
            self.selected += 1;
            self.ensure_selected_visible();
        }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.ensure_selected_visible();
        }
    }

    pub fn jump_to_top(&mut self) {
        self.selected = 0;
        if let Err(e) = self.site.scroll_to_top(&mut self.viewport) {
            self.report(e);
        }
    }

    pub fn jump_to_bottom(&mut self) {
        if self.cards().is_empty() {
            return;
        }
        self.selected = self.cards().len() - 1;
        let target = self.max_scroll() as f64;
        if let Err(e) = self.site.animate_scroll(&mut self.viewport, target) {
            self.report(e);
        }
    }

    /// Free-scroll the gallery by the configured row step, leaving the selection alone
    pub fn scroll_by_lines(&mut self, down: bool) {
        let step = self.site.config().scroll.scroll_lines;
        let current = self.scroll_row();
        let target = if down {
            current.saturating_add(step).min(self.max_scroll())
        } else {
            current.saturating_sub(step)
        };
        if let Err(e) = self.site.animate_scroll(&mut self.viewport, target as f64) {
            self.report(e);
        }
    }

    /// Smooth-scroll just far enough to bring the selected card on screen
    fn ensure_selected_visible(&mut self) {
        let top = self.selected as u16 * CARD_HEIGHT;
        let bottom = top + CARD_HEIGHT;
        let view_top = self.scroll_row();
        let view_bottom = view_top + self.viewport_height;

        let target = if top < view_top {
            top
        } else if bottom > view_bottom {
            bottom.saturating_sub(self.viewport_height)
        } else {
            return;
        };

        let target = target.min(self.max_scroll()) as f64;
        if let Err(e) = self.site.animate_scroll(&mut self.viewport, target) {
            self.report(e);
        }
    }

    /// Open the detail overlay for the selected card via the gallery's click routing
    pub fn open_details(&mut self) {
        let Some(id) = self.selected_card().map(|card| card.project_id.clone()) else {
            return;
        };
        let now = self.now_ms();
        if self.site.handle_event(&DelegatedEvent::details(id), now).is_none() {
            self.set_status("Project details unavailable");
        }
    }

    pub fn close_details(&mut self) {
        self.site.close_modal();
    }

    /// URL behind one of the selected card's link buttons, if it isn't disabled
    pub fn link_target(&mut self, kind: LinkKind) -> Option<String> {
        let id = self.selected_card()?.project_id.clone();
        let now = self.now_ms();
        match self.site.handle_event(&DelegatedEvent::new(kind.action(), id), now) {
            Some(GalleryAction::OpenLink(url)) => Some(url),
            _ => {
                self.set_status(format!("{} not available for this project", kind.label()));
                None
            }
        }
    }

    /// Follow a link button on the selected card in the system browser
    pub fn open_link(&mut self, kind: LinkKind) {
        let Some(url) = self.link_target(kind) else {
            return;
        };
        match open::that(&url) {
            Ok(()) => self.set_status(format!("Opened {}", url)),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "failed to open link");
                self.set_status(format!("Failed to open {}: {}", url, e));
            }
        }
    }

    pub fn toggle_theme(&mut self) {
        match self.site.toggle_theme() {
            Ok(mode) => self.set_status(format!("Switched to {} mode", mode)),
            Err(e) => self.report(e),
        }
        self.theme = load_theme(&self.site.config().ui.theme, self.site.theme());
    }

    /// Switch between the home page (featured projects) and the full list
    pub fn toggle_page(&mut self) {
        let next = match self.site.page() {
            PageContext::Home => PageContext::Projects,
            PageContext::Projects => PageContext::Home,
        };
        self.site.mount(next);
        self.selected = 0;
        self.viewport = GalleryViewport::default();
        self.observe_cards();
    }

    pub fn open_contact(&mut self) {
        self.mode = Mode::Contact(0);
        self.focus_contact_field(0);
    }

    pub fn next_contact_field(&mut self) {
        if let Mode::Contact(idx) = self.mode {
            let next = (idx + 1) % self.site.contact().fields().len();
            self.mode = Mode::Contact(next);
            self.focus_contact_field(next);
        }
    }

    fn focus_contact_field(&mut self, idx: usize) {
        let Some(name) = self.site.contact().fields().get(idx).map(|field| field.name) else {
            return;
        };
        if let Err(e) = self.site.contact_mut().focus(name) {
            self.report(e);
        }
    }

    fn edit_focused_field(&mut self, edit: impl FnOnce(&mut String)) {
        let Mode::Contact(idx) = self.mode else {
            return;
        };
        let Some(field) = self.site.contact().fields().get(idx) else {
            return;
        };
        let name = field.name;
        let mut value = field.value.clone();
        edit(&mut value);
        if let Err(e) = self.site.contact_mut().set_value(name, value) {
            self.report(e);
        }
    }

    pub fn contact_input(&mut self, c: char) {
        self.edit_focused_field(|value| value.push(c));
    }

    pub fn contact_backspace(&mut self) {
        self.edit_focused_field(|value| {
            value.pop();
        });
    }

    pub fn close_contact(&mut self) {
        self.site.contact_mut().blur();
        self.mode = Mode::Normal;
    }

    /// Validate and lock the form; the caller runs the returned submission
    pub fn begin_contact_submit(&mut self) -> Option<Submission> {
        match self.site.contact_mut().begin_submit() {
            Ok(submission) => {
                self.close_contact();
                Some(submission)
            }
            Err(e) => {
                self.report(e);
                None
            }
        }
    }

    /// Start a contact submission in the background; the result arrives on `tx`
    pub fn submit_contact(&mut self, tx: &mpsc::UnboundedSender<Notification>) {
        let Some(submission) = self.begin_contact_submit() else {
            return;
        };
        let delay = Duration::from_millis(self.site.config().contact.submit_delay_ms);
        let tx = tx.clone();
        tokio::spawn(async move {
            let notification = submission.send(delay).await;
            if tx.send(notification).is_err() {
                tracing::debug!("contact result dropped, app already closed");
            }
        });
    }

    /// Reset the form and show the outcome of a finished submission
    pub fn finish_contact_submit(&mut self, notification: Notification) {
        self.site.contact_mut().finish_submit();
        let now = self.now_ms();
        self.site.notify(notification, now);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, Mode::Contact(_))
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    /// Surface an error as a toast and in the log
    pub fn report(&mut self, error: folio_core::Error) {
        tracing::warn!(error = %error, "ui action failed");
        let now = self.now_ms();
        self.site.notify_error(&error, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::theme::MemoryStore;
    use folio_core::{AppConfig, Catalog};

    fn app(page: PageContext) -> App {
        let site = Site::new(
            AppConfig::default(),
            Catalog::builtin().unwrap(),
            Box::new(MemoryStore::default()),
        );
        let mut app = App::new(site, page);
        app.viewport_height = 10;
        app
    }

    #[test]
    fn test_home_page_has_featured_cards() {
        let app = app(PageContext::Home);
        assert_eq!(app.cards().len(), 6);
    }

    #[test]
    fn test_toggle_page_resets_selection() {
        let mut app = app(PageContext::Home);
        app.move_down();
        app.toggle_page();
        assert_eq!(app.cards().len(), 10);
        assert_eq!(app.selected, 0);
        assert_eq!(app.viewport.y, 0.0);
    }

    #[test]
    fn test_moving_past_viewport_starts_scroll() {
        let mut app = app(PageContext::Projects);
        app.move_down();
        assert!(!app.needs_fast_tick());
        app.move_down();
        assert!(app.needs_fast_tick());
    }

    #[test]
    fn test_scroll_by_lines_uses_configured_step() {
        let mut app = app(PageContext::Projects);
        app.scroll_by_lines(true);
        app.site.on_frame(0.0, &mut app.viewport);
        app.site.on_frame(800.0, &mut app.viewport);
        assert_eq!(app.scroll_row(), 3);
        assert_eq!(app.selected, 0);

        app.scroll_by_lines(false);
        app.scroll_by_lines(false);
        app.site.on_frame(1_000.0, &mut app.viewport);
        app.site.on_frame(1_800.0, &mut app.viewport);
        assert_eq!(app.scroll_row(), 0);
    }

    #[test]
    fn test_cards_reveal_once_scrolled_into_view() {
        let mut app = app(PageContext::Projects);
        app.reveal_visible();
        let revealed = |app: &App| -> Vec<bool> {
            app.cards().iter().map(|card| app.is_revealed(card)).collect()
        };
        // Rows 0..9 count; the second card shows four of five rows
        assert_eq!(&revealed(&app)[..3], &[true, true, false]);

        app.jump_to_bottom();
        app.site.on_frame(0.0, &mut app.viewport);
        app.site.on_frame(800.0, &mut app.viewport);
        app.reveal_visible();
        let after = revealed(&app);
        assert!(after[8] && after[9]);
        assert!(!after[5]);

        app.jump_to_top();
        app.site.on_frame(1_000.0, &mut app.viewport);
        app.site.on_frame(1_800.0, &mut app.viewport);
        app.reveal_visible();
        assert!(revealed(&app)[9]);

        app.toggle_page();
        assert!(app.cards().iter().all(|card| !app.is_revealed(card)));
    }

    #[test]
    fn test_open_and_close_details() {
        let mut app = app(PageContext::Home);
        app.open_details();
        assert!(app.details_open());
        assert_eq!(app.site.modal().top().unwrap().project_id, "law-counsel");
        app.close_details();
        assert!(!app.details_open());
    }

    #[test]
    fn test_disabled_link_reports_status() {
        let mut app = app(PageContext::Home);
        app.move_down(); // yad-b-yad has no live deployment
        assert_eq!(app.link_target(LinkKind::Live), None);
        assert!(app.status_message.is_some());
        assert!(app.link_target(LinkKind::Github).is_some());
    }

    #[test]
    fn test_contact_editing() {
        let mut app = app(PageContext::Home);
        app.open_contact();
        app.contact_input('A');
        app.contact_input('x');
        app.contact_backspace();
        assert_eq!(app.site.contact().field("name").unwrap().value, "A");

        app.next_contact_field();
        assert_eq!(app.mode, Mode::Contact(1));
        assert!(app.site.contact().field("email").unwrap().focused);

        // Missing required fields: stays in the form and raises a toast
        assert!(app.begin_contact_submit().is_none());
        assert!(!app.site.notifications().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_contact_submit_round_trip() {
        let mut app = app(PageContext::Home);
        for (name, value) in [("name", "Ada"), ("email", "ada@example.com"), ("message", "Hi")] {
            app.site.contact_mut().set_value(name, value).unwrap();
        }
        app.open_contact();

        let (tx, mut rx) = mpsc::unbounded_channel();
        app.submit_contact(&tx);
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.site.contact().is_submit_disabled());

        let notification = rx.recv().await.unwrap();
        app.finish_contact_submit(notification);
        assert!(!app.site.contact().is_submit_disabled());
        assert!(app.site.contact().field("name").unwrap().value.is_empty());
        assert_eq!(
            app.site.notifications().latest().unwrap().message,
            folio_core::contact::SUCCESS_MESSAGE
        );
    }
}
