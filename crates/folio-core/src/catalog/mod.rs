//! Static, ordered project catalog
//!
//! Built once at startup (from the embedded data or a configured file) and
//! only ever read afterwards. Subsets are borrowed slices of the same records.

mod models;

use std::collections::HashSet;
use std::path::Path;

pub use models::{ProjectRecord, NO_LINK};

use crate::{Error, Result};

const BUILTIN_PROJECTS: &str = include_str!("../../data/projects.json");

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

#[derive(serde::Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(Error::DuplicateProject(record.id.clone()));
            }
            warn_on_bad_link(record, "github", record.github_link());
            warn_on_bad_link(record, "live", record.live_link());
        }

        tracing::debug!(count = records.len(), "catalog loaded");
        Ok(Self { records })
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_PROJECTS)
    }

    /// Parse a JSON array of projects
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Parse a TOML document made of `[[projects]]` tables
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.projects)
    }

    /// Load a catalog file, picking the format by extension (`.toml`, otherwise JSON)
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        if is_toml {
            Self::from_toml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    /// Configured catalog file, or the built-in one when none is set
    pub fn load(config: &crate::AppConfig) -> Result<Self> {
        match config.catalog_path() {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading project catalog");
                Self::from_path(&path)
            }
            None => Self::builtin(),
        }
    }

    /// Full ordered sequence
    pub fn all(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Record with the given id, or `None`
    pub fn find_by_id(&self, id: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Ordered prefix of length `min(n, len)`
    pub fn first_n(&self, n: usize) -> &[ProjectRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn warn_on_bad_link(record: &ProjectRecord, field: &str, link: Option<&str>) {
    if let Some(raw) = link {
        if let Err(e) = url::Url::parse(raw) {
            tracing::warn!(
                project = %record.id,
                field,
                url = raw,
                error = %e,
                "link is not an absolute URL"
            );
        }
    }
}
