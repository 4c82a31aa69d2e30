//! Gallery cards, detail overlays and the markup they produce

pub mod gallery;
pub mod markup;
pub mod modal;

pub use gallery::{
    render_gallery, Container, DelegatedEvent, GalleryAction, GalleryRenderer, RenderedCard,
    DETAILS_ACTION, PROJECTS_CONTAINER_ID,
};
pub use markup::{escape_html, ActionLink, LinkKind};
pub use modal::{ModalLayer, ModalView};
