pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod notify;
pub mod page;
pub mod render;
pub mod scroll;
pub mod site;
pub mod theme;

pub use catalog::{Catalog, ProjectRecord, NO_LINK};
pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use page::PageContext;
pub use site::Site;
pub use theme::ThemeMode;
