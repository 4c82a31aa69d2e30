use crate::catalog::{Catalog, ProjectRecord};
use crate::config::ModalConfig;
use crate::scroll::timing::{lerp, progress};
use crate::{Error, Result};

use super::markup::{escape_html, technology_tags, ActionLink, LinkKind};

/// Detail overlay for one project
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub project_id: String,
    pub title: String,
    pub image: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: ActionLink,
    pub live: ActionLink,
    /// Host timestamp at mount
    opened_at_ms: f64,
    fade_in_delay_ms: f64,
    fade_duration_ms: f64,
}

impl ModalView {
    fn from_record(record: &ProjectRecord, opened_at_ms: f64, config: &ModalConfig) -> Self {
        Self {
            project_id: record.id.clone(),
            title: record.title.clone(),
            image: record.image.clone(),
            description: record.description.clone(),
            technologies: record.technologies.clone(),
            // Same disabled treatment as the summary cards
            github: ActionLink::new(LinkKind::Github, record.github_link()),
            live: ActionLink::new(LinkKind::Live, record.live_link()),
            opened_at_ms,
            fade_in_delay_ms: config.fade_in_delay_ms as f64,
            fade_duration_ms: config.fade_duration_ms as f64,
        }
    }

    /// Overlay opacity at `now_ms`: transparent at mount, then a linear fade to 1
    pub fn opacity(&self, now_ms: f64) -> f64 {
        let since_fade = now_ms - self.opened_at_ms - self.fade_in_delay_ms;
        if since_fade < 0.0 {
            return 0.0;
        }
        lerp(0.0, 1.0, progress(since_fade, self.fade_duration_ms))
    }

    pub fn is_fully_visible(&self, now_ms: f64) -> bool {
        self.opacity(now_ms) >= 1.0
    }

    pub fn to_html(&self, now_ms: f64) -> String {
        let title = escape_html(&self.title);
        format!(
            concat!(
                r#"<div class="project-modal" data-project-id="{id}" "#,
                r#"role="dialog" aria-modal="true" "#,
                r#"style="opacity: {opacity:.2}">"#,
                r#"<div class="modal-content">"#,
                r#"<div class="modal-header"><h2>{title}</h2>"#,
                r#"<button class="modal-close" data-action="close" aria-label="Close">"#,
                r#"<i class="fas fa-times"></i></button></div>"#,
                r#"<div class="modal-body">"#,
                r#"<div class="project-preview"><img src="{image}" alt="{title}" /></div>"#,
                r#"<div class="project-info"><p>{description}</p><h4>Technologies:</h4>{tech}"#,
                r#"<div class="work-actions-links">{github}{live}</div>"#,
                "</div></div></div></div>",
            ),
            id = escape_html(&self.project_id),
            opacity = self.opacity(now_ms),
            title = title,
            image = escape_html(&self.image),
            description = escape_html(&self.description),
            tech = technology_tags(&self.technologies),
            github = self.github.to_html(),
            live = self.live.to_html(),
        )
    }
}

/// Stack of open detail overlays
#[derive(Debug, Clone, Default)]
pub struct ModalLayer {
    overlays: Vec<ModalView>,
    config: ModalConfig,
}

impl ModalLayer {
    pub fn new(config: ModalConfig) -> Self {
        Self {
            overlays: Vec::new(),
            config,
        }
    }

    /// Look up `id` and mount its overlay
    ///
    /// An unknown id leaves the layer untouched and returns
    /// [`Error::ProjectNotFound`]. With `single_instance` set, an open overlay
    /// is replaced instead of stacked.
    pub fn open_details(&mut self, catalog: &Catalog, id: &str, now_ms: f64) -> Result<&ModalView> {
        let record = catalog
            .find_by_id(id)
            .ok_or_else(|| Error::ProjectNotFound(id.to_string()))?;

        if self.config.single_instance {
            self.overlays.clear();
        }
        let top = self.overlays.len();
        self.overlays.push(ModalView::from_record(record, now_ms, &self.config));
        tracing::debug!(project = id, open = top + 1, "details opened");

        Ok(&self.overlays[top])
    }

    /// Remove the topmost overlay
    pub fn close(&mut self) -> Option<ModalView> {
        self.overlays.pop()
    }

    pub fn clear(&mut self) {
        self.overlays.clear();
    }

    /// Remove every overlay showing `id`; true when something was removed
    pub fn close_project(&mut self, id: &str) -> bool {
        let before = self.overlays.len();
        self.overlays.retain(|view| view.project_id != id);
        before != self.overlays.len()
    }

    pub fn top(&self) -> Option<&ModalView> {
        self.overlays.last()
    }

    pub fn overlays(&self) -> &[ModalView] {
        &self.overlays
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_open(&self) -> bool {
        !self.overlays.is_empty()
    }

    pub fn to_html(&self, now_ms: f64) -> String {
        self.overlays.iter().map(|view| view.to_html(now_ms)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NO_LINK;

    fn catalog() -> Catalog {
        let record = |id: &str, title: &str| ProjectRecord {
            id: id.to_string(),
            title: title.to_string(),
            image: format!("{}.png", id),
            description: format!("All about {}", title),
            technologies: vec!["Next.js".to_string(), "Firebase".to_string()],
            live: NO_LINK.to_string(),
            github: "https://github.com/example/repo".to_string(),
        };
        Catalog::new(vec![record("a", "Alpha"), record("b", "Beta")]).unwrap()
    }

    fn stacking() -> ModalLayer {
        ModalLayer::new(ModalConfig {
            single_instance: false,
            ..Default::default()
        })
    }

    #[test]
    fn test_open_details_shows_record() {
        let catalog = catalog();
        let mut layer = ModalLayer::default();
        let view = layer.open_details(&catalog, "a", 0.0).unwrap();
        assert_eq!(view.title, "Alpha");
        assert_eq!(view.technologies, ["Next.js", "Firebase"]);
        assert!(view.live.is_disabled());
        assert!(!view.github.is_disabled());
        assert_eq!(layer.len(), 1);
    }

    #[test]
    fn test_missing_id_leaves_overlays_unchanged() {
        let catalog = catalog();
        let mut layer = stacking();
        layer.open_details(&catalog, "a", 0.0).unwrap();

        let result = layer.open_details(&catalog, "missing", 5.0);
        assert!(matches!(result, Err(Error::ProjectNotFound(id)) if id == "missing"));
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.top().unwrap().project_id, "a");
    }

    #[test]
    fn test_single_instance_replaces() {
        let catalog = catalog();
        let mut layer = ModalLayer::default();
        layer.open_details(&catalog, "a", 0.0).unwrap();
        layer.open_details(&catalog, "b", 1.0).unwrap();
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.top().unwrap().title, "Beta");
    }

    #[test]
    fn test_stacking_when_not_single_instance() {
        let catalog = catalog();
        let mut layer = stacking();
        layer.open_details(&catalog, "a", 0.0).unwrap();
        layer.open_details(&catalog, "a", 1.0).unwrap();
        assert_eq!(layer.len(), 2);

        assert!(layer.close_project("a"));
        assert!(!layer.is_open());
        assert!(!layer.close_project("a"));
    }

    #[test]
    fn test_open_details_returns_new_top() {
        let catalog = catalog();
        let mut layer = stacking();
        layer.open_details(&catalog, "a", 0.0).unwrap();
        let view = layer.open_details(&catalog, "b", 7.0).unwrap();
        assert_eq!(view.project_id, "b");
        assert_eq!(view.opened_at_ms, 7.0);
        assert_eq!(layer.top().unwrap().project_id, "b");
    }

    #[test]
    fn test_close_removes_overlay() {
        let catalog = catalog();
        let mut layer = ModalLayer::default();
        layer.open_details(&catalog, "b", 0.0).unwrap();
        let closed = layer.close().unwrap();
        assert_eq!(closed.project_id, "b");
        assert!(!layer.is_open());
        assert!(layer.close().is_none());
        assert_eq!(layer.to_html(0.0), "");
    }

    #[test]
    fn test_fade_in() {
        let catalog = catalog();
        let mut layer = ModalLayer::default();
        let view = layer.open_details(&catalog, "a", 1_000.0).unwrap();
        assert_eq!(view.opacity(1_000.0), 0.0);
        assert_eq!(view.opacity(1_010.0), 0.0);
        assert!((view.opacity(1_160.0) - 0.5).abs() < 1e-9);
        assert!(view.is_fully_visible(1_310.0));
        assert_eq!(view.opacity(5_000.0), 1.0);
    }

    #[test]
    fn test_modal_markup() {
        let catalog = catalog();
        let mut layer = ModalLayer::default();
        layer.open_details(&catalog, "a", 0.0).unwrap();
        let html = layer.to_html(0.0);
        assert!(html.contains("<h2>Alpha</h2>"));
        assert!(html.contains("All about Alpha"));
        assert!(html.contains(r#"style="opacity: 0.00""#));
        assert!(html.contains(r#"href="https://github.com/example/repo""#));
        assert!(html.contains("action-btn disabled"));
    }
}
