use anyhow::Result;

use folio_core::theme::{FileStore, ThemeController};
use folio_core::AppConfig;
use folio_tui::available_themes;

fn controller(config: &AppConfig) -> ThemeController {
    ThemeController::load(Box::new(FileStore::new(config.preferences_path())))
}

pub fn show(config: &AppConfig) -> Result<()> {
    println!("{}", controller(config).mode());
    Ok(())
}

/// Print every palette, marking the one `ui.theme` selects
pub fn palettes(config: &AppConfig) -> Result<()> {
    let configured = config.ui.theme.name.to_lowercase();
    for name in available_themes() {
        let marker = if name == configured { "*" } else { " " };
        println!("{} {}", marker, name);
    }
    Ok(())
}

pub fn toggle(config: &AppConfig) -> Result<()> {
    let mode = controller(config).toggle()?;
    println!("Switched to {} mode", mode);
    Ok(())
}
