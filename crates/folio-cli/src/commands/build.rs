use std::path::Path;

use anyhow::{Context, Result};

use folio_core::{AppConfig, Site};

/// Mount `page` and write its markup, without any open overlays
pub fn run(config: AppConfig, page: &str, output: Option<&Path>) -> Result<()> {
    let mut site = Site::open(config)?;
    site.mount_path(page);
    let html = site.render_page_html(0.0);

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "Wrote {} ({} projects) to {}",
                site.page().as_str(),
                site.container().len(),
                path.display()
            );
        }
        None => print!("{}", html),
    }

    Ok(())
}
