//! Markup primitives shared by the gallery and the modal

use std::fmt::Write;

/// Escape text for use in HTML element content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Which external destination an action button points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Github,
    Live,
}

impl LinkKind {
    pub fn icon(&self) -> &'static str {
        match self {
            LinkKind::Github => "fab fa-github",
            LinkKind::Live => "fas fa-external-link-alt",
        }
    }

    /// Value of the `data-action` attribute
    pub fn action(&self) -> &'static str {
        match self {
            LinkKind::Github => "github",
            LinkKind::Live => "live",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Github => "Source code",
            LinkKind::Live => "Live demo",
        }
    }
}

/// An external-link button; disabled when the project has no such link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    pub kind: LinkKind,
    pub href: Option<String>,
}

impl ActionLink {
    pub fn new(kind: LinkKind, href: Option<&str>) -> Self {
        Self {
            kind,
            href: href.map(str::to_string),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.href.is_none()
    }

    /// Disabled links carry no `href`, so they cannot navigate
    pub fn to_html(&self) -> String {
        match &self.href {
            Some(href) => format!(
                concat!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="action-btn" "#,
                    r#"data-action="{}" aria-label="{}"><i class="{}"></i></a>"#,
                ),
                escape_html(href),
                self.kind.action(),
                self.kind.label(),
                self.kind.icon(),
            ),
            None => format!(
                concat!(
                    r#"<a class="action-btn disabled" data-action="{}" "#,
                    r#"aria-label="{} unavailable" "#,
                    r#"aria-disabled="true" tabindex="-1"><i class="{}"></i></a>"#,
                ),
                self.kind.action(),
                self.kind.label(),
                self.kind.icon(),
            ),
        }
    }
}

/// Technology tags in display order; empty input yields an empty tag row
pub fn technology_tags(technologies: &[String]) -> String {
    let mut out = String::from(r#"<div class="work-tech">"#);
    for tech in technologies {
        let _ = write!(out, r#"<span class="technologies">{}</span>"#, escape_html(tech));
    }
    out.push_str("</div>");
    out
}
