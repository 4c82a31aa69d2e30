use std::fmt::Write;

use crate::catalog::ProjectRecord;

use super::markup::{escape_html, technology_tags, ActionLink, LinkKind};

/// Element id of the gallery mount point
pub const PROJECTS_CONTAINER_ID: &str = "projects-container";

/// `data-action` value carried by every card's Details button
pub const DETAILS_ACTION: &str = "details";

/// `data-aos` effect name on every card
pub const REVEAL_EFFECT: &str = "fade-up";

/// Summary view of one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub project_id: String,
    pub title: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub github: ActionLink,
    pub live: ActionLink,
    /// Entrance animation delay, staggered by position
    pub animation_delay_ms: u64,
}

impl RenderedCard {
    pub fn from_record(record: &ProjectRecord, animation_delay_ms: u64) -> Self {
        Self {
            project_id: record.id.clone(),
            title: record.title.clone(),
            image: record.image.clone(),
            technologies: record.technologies.clone(),
            github: ActionLink::new(LinkKind::Github, record.github_link()),
            live: ActionLink::new(LinkKind::Live, record.live_link()),
            animation_delay_ms,
        }
    }

    fn link(&self, kind: LinkKind) -> &ActionLink {
        match kind {
            LinkKind::Github => &self.github,
            LinkKind::Live => &self.live,
        }
    }

    pub fn to_html(&self) -> String {
        self.to_html_revealed(false)
    }

    /// Card markup; revealed cards carry the `aos-animate` class
    pub fn to_html_revealed(&self, revealed: bool) -> String {
        let id = escape_html(&self.project_id);
        let title = escape_html(&self.title);
        let class = if revealed { "work-card aos-animate" } else { "work-card" };
        format!(
            concat!(
                r#"<div class="{class}" data-aos="{aos}" data-project-id="{id}" "#,
                r#"style="animation-delay: {delay:.1}s">"#,
                r#"<div class="work-image">"#,
                r#"<img src="{image}" alt="{title}" class="work-thumbnail"></div>"#,
                r#"<h3 class="work-title">{title}</h3>"#,
                "{tech}",
                r#"<div class="work-actions"><div class="work-actions-links">{github}{live}</div>"#,
                r#"<button class="details-btn" data-action="{details}" "#,
                r#"data-project-id="{id}">Details</button>"#,
                "</div></div>",
            ),
            class = class,
            aos = REVEAL_EFFECT,
            id = id,
            delay = self.animation_delay_ms as f64 / 1000.0,
            image = escape_html(&self.image),
            title = title,
            tech = technology_tags(&self.technologies),
            github = self.github.to_html(),
            live = self.live.to_html(),
            details = DETAILS_ACTION,
        )
    }
}

/// A click that bubbled up to the gallery container
///
/// Mirrors the `data-action` / `data-project-id` attributes of the clicked element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegatedEvent {
    pub action: String,
    pub project_id: Option<String>,
}

impl DelegatedEvent {
    pub fn new(action: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            project_id: Some(project_id.into()),
        }
    }

    pub fn details(project_id: impl Into<String>) -> Self {
        Self::new(DETAILS_ACTION, project_id)
    }
}

/// What a delegated click resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryAction {
    OpenDetails(String),
    OpenLink(String),
}

/// Mount point holding rendered cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
    cards: Vec<RenderedCard>,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cards: Vec::new(),
        }
    }

    /// The `projects-container` mount point
    pub fn projects() -> Self {
        Self::new(PROJECTS_CONTAINER_ID)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn cards(&self) -> &[RenderedCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn append(&mut self, card: RenderedCard) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Single listener for every card: resolve the click by its data attributes
    pub fn dispatch(&self, event: &DelegatedEvent) -> Option<GalleryAction> {
        let project_id = event.project_id.as_deref()?;
        let card = self.cards.iter().find(|card| card.project_id == project_id)?;

        match event.action.as_str() {
            DETAILS_ACTION => Some(GalleryAction::OpenDetails(card.project_id.clone())),
            action => {
                let kind = [LinkKind::Github, LinkKind::Live]
                    .into_iter()
                    .find(|kind| kind.action() == action)?;
                card.link(kind).href.clone().map(GalleryAction::OpenLink)
            }
        }
    }

    pub fn to_html(&self) -> String {
        self.to_html_with(|_| false)
    }

    /// Container markup, asking `revealed` which cards have scrolled into view
    pub fn to_html_with(&self, revealed: impl Fn(&str) -> bool) -> String {
        let mut out = String::new();
        let _ = write!(out, r#"<div id="{}" class="projects-grid">"#, escape_html(&self.id));
        for card in &self.cards {
            out.push_str(&card.to_html_revealed(revealed(&card.project_id)));
        }
        out.push_str("</div>");
        out
    }
}

/// Turns project records into summary cards
#[derive(Debug, Clone, Copy)]
pub struct GalleryRenderer {
    stagger_step_ms: u64,
}

impl Default for GalleryRenderer {
    fn default() -> Self {
        Self::new(100)
    }
}

impl GalleryRenderer {
    pub fn new(stagger_step_ms: u64) -> Self {
        Self { stagger_step_ms }
    }

    /// Append one card per record, in input order
    ///
    /// Appends rather than replaces; clear the container first to re-render.
    pub fn render(&self, records: &[ProjectRecord], container: &mut Container) {
        for record in records {
            let delay = container.len() as u64 * self.stagger_step_ms;
            container.append(RenderedCard::from_record(record, delay));
        }
        tracing::debug!(container = container.id(), rendered = records.len(), "gallery rendered");
    }
}

/// Render with the default stagger
pub fn render_gallery(records: &[ProjectRecord], container: &mut Container) {
    GalleryRenderer::default().render(records, container);
}
