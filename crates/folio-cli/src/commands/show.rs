use anyhow::Result;

use folio_core::{AppConfig, Catalog, Error};

pub fn run(config: &AppConfig, id: &str) -> Result<()> {
    let catalog = Catalog::load(config)?;
    let record = catalog
        .find_by_id(id)
        .ok_or_else(|| Error::ProjectNotFound(id.to_string()))?;

    println!("{}\n", record.title);
    println!("{}\n", record.description);
    println!("Image:  {}", record.image);
    if !record.technologies.is_empty() {
        println!("Tech:   {}", record.technologies.join(", "));
    }
    println!("Source: {}", record.github_link().unwrap_or("not available"));
    println!("Live:   {}", record.live_link().unwrap_or("not available"));

    Ok(())
}
