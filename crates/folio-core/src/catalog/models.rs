use serde::{Deserialize, Serialize};

/// Placeholder stored in `live`/`github` when a project has no such link
pub const NO_LINK: &str = "#";

/// A single portfolio entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub image: String,
    pub description: String,
    /// Display order matters
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default = "no_link")]
    pub live: String,
    #[serde(default = "no_link")]
    pub github: String,
}

fn no_link() -> String {
    NO_LINK.to_string()
}

/// Treat the sentinel and blank strings as "no link"
fn link(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NO_LINK {
        None
    } else {
        Some(trimmed)
    }
}

impl ProjectRecord {
    /// Source repository URL, if the project has one
    pub fn github_link(&self) -> Option<&str> {
        link(&self.github)
    }

    /// Deployed instance URL, if the project has one
    pub fn live_link(&self) -> Option<&str> {
        link(&self.live)
    }

    pub fn has_github(&self) -> bool {
        self.github_link().is_some()
    }

    pub fn has_live(&self) -> bool {
        self.live_link().is_some()
    }
}
