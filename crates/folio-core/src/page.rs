use crate::catalog::{Catalog, ProjectRecord};

/// Which page the gallery is mounted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageContext {
    /// Landing page: only the first few projects
    Home,
    /// Dedicated projects page: the whole catalog
    Projects,
}

impl PageContext {
    /// Classify a document path. `/`, `*index.html` and anything mentioning
    /// "index" (case-insensitive) count as the home page.
    pub fn from_path(path: &str) -> Self {
        if path == "/" || path.ends_with("index.html") || path.to_lowercase().contains("index") {
            PageContext::Home
        } else {
            PageContext::Projects
        }
    }

    /// The records this page shows
    pub fn select<'a>(&self, catalog: &'a Catalog, home_limit: usize) -> &'a [ProjectRecord] {
        match self {
            PageContext::Home => catalog.first_n(home_limit),
            PageContext::Projects => catalog.all(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageContext::Home => "home",
            PageContext::Projects => "projects",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(PageContext::from_path("/"), PageContext::Home);
        assert_eq!(PageContext::from_path("/index.html"), PageContext::Home);
        assert_eq!(PageContext::from_path("/site/INDEX.htm"), PageContext::Home);
        assert_eq!(PageContext::from_path("/projects.html"), PageContext::Projects);
        assert_eq!(PageContext::from_path(""), PageContext::Projects);
    }

    #[test]
    fn test_select() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(PageContext::Home.select(&catalog, 6).len(), 6);
        assert_eq!(PageContext::Projects.select(&catalog, 6).len(), catalog.len());
        assert_eq!(PageContext::Home.select(&catalog, 6)[0].id, catalog.all()[0].id);
    }
}
