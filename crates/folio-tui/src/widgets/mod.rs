mod contact;
mod detail;
mod gallery;
mod popup;
mod status_bar;

pub use contact::ContactWidget;
pub use detail::DetailWidget;
pub use gallery::GalleryWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
