//! Smooth in-page scrolling
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (ease-in-out cubic plus ease-out variants)
//! - `timing` - Frame timestamp arithmetic and interpolation
//!
//! ## L3 Molecular Layer
//! - `driver` - Frame-driven animation over a [`Viewport`]
//! - `reveal` - One-way visibility latch for scroll-triggered entrances
//!
//! # Usage
//!
//! ```
//! use folio_core::scroll::{ScrollDriver, StaticViewport};
//! use folio_core::ScrollConfig;
//!
//! let mut driver = ScrollDriver::new(ScrollConfig::default());
//! let mut viewport = StaticViewport::at(0.0);
//! driver.animate_scroll_to(&mut viewport, 1000.0, 800.0).unwrap();
//!
//! // The host calls this from its frame callback
//! let mut now = 0.0;
//! while driver.needs_frame() {
//!     driver.on_frame(now, &mut viewport);
//!     now += 16.0;
//! }
//! assert_eq!(viewport.y, 1000.0);
//! ```

// L4 Atomic Layer
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod driver;
pub mod reveal;

pub use driver::{ScrollAnimation, ScrollDriver, StaticViewport, Viewport};
pub use reveal::RevealTracker;
pub use easing::{ease_in_out_cubic, EasingType, EasingTypeExt};
