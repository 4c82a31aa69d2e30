//! Page-level state for one mounted portfolio page
//!
//! `Site` owns every piece of UI state for the lifetime of a page. Hosts
//! create one per page load, feed it events and frame timestamps, and drop it
//! on navigation.

use crate::catalog::Catalog;
use crate::contact::ContactForm;
use crate::notify::{Notification, NotificationCenter};
use crate::page::PageContext;
use crate::render::{
    escape_html, Container, DelegatedEvent, GalleryAction, GalleryRenderer, ModalLayer, ModalView,
};
use crate::scroll::{RevealTracker, ScrollDriver, Viewport};
use crate::theme::{FileStore, PreferenceStore, ThemeController, ThemeMode};
use crate::{AppConfig, Error, Result};

pub struct Site {
    config: AppConfig,
    catalog: Catalog,
    page: PageContext,
    renderer: GalleryRenderer,
    container: Container,
    modal: ModalLayer,
    scroll: ScrollDriver,
    reveal: RevealTracker,
    theme: ThemeController,
    notifications: NotificationCenter,
    contact: ContactForm,
}

impl Site {
    /// Build a site over an already-loaded catalog; reads the theme preference once
    pub fn new(config: AppConfig, catalog: Catalog, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            renderer: GalleryRenderer::new(config.site.stagger_step_ms),
            container: Container::projects(),
            modal: ModalLayer::new(config.modal.clone()),
            scroll: ScrollDriver::new(config.scroll.clone()),
            reveal: RevealTracker::new(
                config.site.reveal_threshold,
                config.site.reveal_bottom_margin,
            ),
            theme: ThemeController::load(store),
            notifications: NotificationCenter::new(config.contact.notification_ms),
            contact: ContactForm::default(),
            page: PageContext::Home,
            catalog,
            config,
        }
    }

    /// Configured catalog and the on-disk preference store
    pub fn open(config: AppConfig) -> Result<Self> {
        let catalog = Catalog::load(&config)?;
        let store = FileStore::new(config.preferences_path());
        Ok(Self::new(config, catalog, Box::new(store)))
    }

    /// Replace the gallery contents with the records `page` shows
    ///
    /// Mounting tears down the previous page: open overlays, in-flight
    /// scroll animations and reveal state are dropped.
    pub fn mount(&mut self, page: PageContext) {
        self.page = page;
        self.scroll.cancel_all();
        self.reveal.clear();
        self.modal.clear();
        self.container.clear();
        let records = page.select(&self.catalog, self.config.site.home_limit);
        self.renderer.render(records, &mut self.container);
        tracing::info!(page = page.as_str(), cards = self.container.len(), "gallery mounted");
    }

    pub fn mount_path(&mut self, path: &str) {
        self.mount(PageContext::from_path(path));
    }

    /// Route a click that reached the gallery container
    ///
    /// Details clicks open the overlay; an id the catalog doesn't know is
    /// logged and otherwise ignored. Link clicks are returned for the host to follow.
    pub fn handle_event(&mut self, event: &DelegatedEvent, now_ms: f64) -> Option<GalleryAction> {
        let action = self.container.dispatch(event)?;
        if let GalleryAction::OpenDetails(id) = &action {
            if let Err(e) = self.modal.open_details(&self.catalog, id, now_ms) {
                tracing::warn!(error = %e, "details not shown");
                return None;
            }
        }
        Some(action)
    }

    /// Open the overlay for `id` directly
    pub fn open_details(&mut self, id: &str, now_ms: f64) -> Result<&ModalView> {
        self.modal.open_details(&self.catalog, id, now_ms)
    }

    pub fn close_modal(&mut self) -> Option<ModalView> {
        self.modal.close()
    }

    /// Smooth-scroll to an absolute offset over the configured duration
    pub fn animate_scroll<V: Viewport + ?Sized>(
        &mut self,
        viewport: &mut V,
        target: f64,
    ) -> Result<()> {
        let duration = self.scroll.default_duration_ms();
        self.scroll.animate_scroll_to(viewport, target, duration)
    }

    /// Smooth-scroll so a section's top lands just under the fixed header
    pub fn scroll_to_section<V: Viewport + ?Sized>(
        &mut self,
        viewport: &mut V,
        offset_top: f64,
    ) -> Result<()> {
        let target = (offset_top - self.config.site.header_offset).max(0.0);
        self.animate_scroll(viewport, target)
    }

    pub fn scroll_to_top<V: Viewport + ?Sized>(&mut self, viewport: &mut V) -> Result<()> {
        self.animate_scroll(viewport, 0.0)
    }

    /// Per-frame work: advance scroll animations and expire toasts
    pub fn on_frame<V: Viewport + ?Sized>(&mut self, now_ms: f64, viewport: &mut V) {
        self.scroll.on_frame(now_ms, viewport);
        self.notifications.prune(now_ms);
    }

    /// Place an element for scroll-triggered reveal, in scroll-offset units
    pub fn observe_element(&mut self, id: impl Into<String>, top: f64, height: f64) {
        self.reveal.observe(id, top, height);
    }

    /// Scroll hook: reveal whatever the viewport now shows; returns the newly revealed ids
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64) -> Vec<String> {
        self.reveal.update(scroll_y, viewport_height)
    }

    pub fn needs_frame(&self) -> bool {
        self.scroll.needs_frame() || !self.notifications.is_empty()
    }

    /// Whether the scroll-to-top button should show at this offset
    pub fn scroll_top_visible(&self, scroll_y: f64) -> bool {
        scroll_y > self.config.site.scroll_top_threshold
    }

    /// Vertical translation for parallax layers
    pub fn parallax_offset(&self, scroll_y: f64) -> f64 {
        -(scroll_y * self.config.site.parallax_speed)
    }

    pub fn toggle_theme(&mut self) -> Result<ThemeMode> {
        self.theme.toggle()
    }

    pub fn notify(&mut self, notification: Notification, now_ms: f64) {
        self.notifications.push(notification, now_ms);
    }

    /// Report a failure to the user as an error toast
    pub fn notify_error(&mut self, error: &Error, now_ms: f64) {
        self.notify(
            Notification::new(error.to_string(), crate::notify::NotificationKind::Error),
            now_ms,
        );
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn page(&self) -> PageContext {
        self.page
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn modal(&self) -> &ModalLayer {
        &self.modal
    }

    pub fn scroll(&self) -> &ScrollDriver {
        &self.scroll
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn reveal_mut(&mut self) -> &mut RevealTracker {
        &mut self.reveal
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    /// Standalone HTML document for the mounted page
    pub fn render_page_html(&self, now_ms: f64) -> String {
        let theme = self.theme.mode();
        let heading = match self.page {
            PageContext::Home => "Featured Projects",
            PageContext::Projects => "All Projects",
        };
        format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n",
                "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
                "<title>{heading}</title>\n</head>\n",
                "<body class=\"{body_class}\">\n",
                "<button id=\"themeToggle\" aria-label=\"Toggle dark/light mode\" role=\"button\" ",
                "tabindex=\"0\"><i class=\"{icon}\"></i></button>\n",
                "<section class=\"projects-section\"><h2>{heading}</h2>\n{gallery}\n</section>\n",
                "{modal}{toasts}\n</body>\n</html>\n",
            ),
            heading = escape_html(heading),
            body_class = theme.body_class(),
            icon = theme.icon(),
            gallery = self.container.to_html_with(|id| self.reveal.is_revealed(id)),
            modal = self.modal.to_html(now_ms),
            toasts = self.notifications.to_html(),
        )
    }
}

impl std::fmt::Debug for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site")
            .field("page", &self.page)
            .field("cards", &self.container.len())
            .field("overlays", &self.modal.len())
            .field("theme", &self.theme.mode())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProjectRecord, NO_LINK};
    use crate::scroll::{ease_in_out_cubic, StaticViewport};
    use crate::theme::MemoryStore;

    fn record(id: &str, title: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: title.to_string(),
            image: format!("{}.png", id),
            description: String::new(),
            technologies: vec![],
            live: NO_LINK.to_string(),
            github: NO_LINK.to_string(),
        }
    }

    fn site_with(n: usize) -> Site {
        let records = (0..n)
            .map(|i| record(&format!("p{}", i), &format!("Project {}", i)))
            .collect();
        Site::new(
            AppConfig::default(),
            Catalog::new(records).unwrap(),
            Box::new(MemoryStore::default()),
        )
    }

    #[test]
    fn test_home_shows_first_six() {
        let mut site = site_with(10);
        site.mount_path("/index.html");
        assert_eq!(site.page(), PageContext::Home);
        assert_eq!(site.container().len(), 6);

        site.mount_path("/projects.html");
        assert_eq!(site.container().len(), 10);
    }

    #[test]
    fn test_remount_does_not_duplicate() {
        let mut site = site_with(3);
        site.mount(PageContext::Home);
        site.mount(PageContext::Home);
        assert_eq!(site.container().len(), 3);
    }

    #[test]
    fn test_details_scenario() {
        let catalog = Catalog::new(vec![record("a", "Alpha"), record("b", "Beta")]).unwrap();
        let mut site = Site::new(AppConfig::default(), catalog, Box::new(MemoryStore::default()));
        site.mount(PageContext::Projects);

        let action = site.handle_event(&DelegatedEvent::details("a"), 0.0);
        assert_eq!(action, Some(GalleryAction::OpenDetails("a".to_string())));
        assert_eq!(site.modal().top().unwrap().title, "Alpha");

        let before = site.modal().len();
        assert!(site.open_details("missing", 1.0).is_err());
        assert_eq!(site.modal().len(), before);

        site.close_modal();
        assert!(!site.modal().is_open());
    }

    #[test]
    fn test_scroll_to_section_accounts_for_header() {
        let mut site = site_with(1);
        let mut viewport = StaticViewport::at(0.0);
        site.scroll_to_section(&mut viewport, 1_080.0).unwrap();

        site.on_frame(0.0, &mut viewport);
        site.on_frame(400.0, &mut viewport);
        assert_eq!(viewport.y, ease_in_out_cubic(400.0, 0.0, 1_000.0, 800.0));

        site.on_frame(800.0, &mut viewport);
        assert_eq!(viewport.y, 1_000.0);
        assert!(!site.needs_frame());
    }

    #[test]
    fn test_scroll_to_top_and_button_visibility() {
        let mut site = site_with(1);
        let mut viewport = StaticViewport::at(1_200.0);
        assert!(site.scroll_top_visible(viewport.y));
        site.scroll_to_top(&mut viewport).unwrap();
        site.on_frame(0.0, &mut viewport);
        site.on_frame(800.0, &mut viewport);
        assert_eq!(viewport.y, 0.0);
        assert!(!site.scroll_top_visible(viewport.y));
        assert!(!site.scroll_top_visible(300.0));
    }

    #[test]
    fn test_parallax() {
        let site = site_with(1);
        assert_eq!(site.parallax_offset(200.0), -100.0);
    }

    #[test]
    fn test_theme_toggle_reflected_in_markup() {
        let mut site = site_with(2);
        site.mount(PageContext::Home);
        assert!(site.render_page_html(0.0).contains(r#"<body class="dark-mode">"#));

        site.toggle_theme().unwrap();
        let html = site.render_page_html(0.0);
        assert!(html.contains(r#"<body class="light-mode">"#));
        assert!(html.contains("fas fa-sun"));
        assert!(html.contains(r#"id="projects-container""#));
    }

    #[test]
    fn test_toasts_expire_on_frame() {
        let mut site = site_with(1);
        let mut viewport = StaticViewport::default();
        site.notify(Notification::success("done"), 0.0);
        assert!(site.needs_frame());
        site.on_frame(5_000.0, &mut viewport);
        assert!(site.notifications().is_empty());
    }

    #[test]
    fn test_cards_reveal_as_scroll_reaches_them() {
        let mut site = site_with(3);
        site.mount(PageContext::Projects);
        for i in 0..3 {
            site.observe_element(format!("p{}", i), i as f64 * 400.0, 300.0);
        }

        // 0..600 with the bottom 50 trimmed: p1 shows 150 of 300 rows
        assert_eq!(site.on_scroll(0.0, 600.0), ["p0", "p1"]);
        let html = site.render_page_html(0.0);
        let revealed = r#"class="work-card aos-animate" data-aos="fade-up" data-project-id="p1""#;
        assert!(html.contains(revealed));
        assert!(html.contains(r#"class="work-card" data-aos="fade-up" data-project-id="p2""#));

        let mut viewport = StaticViewport::at(0.0);
        site.animate_scroll(&mut viewport, 600.0).unwrap();
        site.on_frame(0.0, &mut viewport);
        site.on_frame(800.0, &mut viewport);
        assert_eq!(site.on_scroll(viewport.y, 600.0), ["p2"]);

        // Scrolling back up keeps everything revealed
        assert!(site.on_scroll(0.0, 600.0).is_empty());
        assert_eq!(site.reveal().revealed_count(), 3);

        site.mount(PageContext::Projects);
        assert!(site.reveal().entries().is_empty());
    }
}
