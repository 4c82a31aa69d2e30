use anyhow::Result;

use folio_core::{AppConfig, Catalog, PageContext};

pub fn run(config: &AppConfig, page: &str) -> Result<()> {
    let catalog = Catalog::load(config)?;
    let page = PageContext::from_path(page);
    let records = page.select(&catalog, config.site.home_limit);

    if records.is_empty() {
        println!("No projects in the catalog.");
        return Ok(());
    }

    println!("Projects on the {} page ({}):\n", page.as_str(), records.len());

    for record in records {
        println!("  {} - {}", record.id, record.title);
        if !record.technologies.is_empty() {
            println!("    Tech: {}", record.technologies.join(", "));
        }
        println!(
            "    Source: {}  Live: {}",
            record.github_link().unwrap_or("(none)"),
            record.live_link().unwrap_or("(none)"),
        );
        println!();
    }

    Ok(())
}
