//! L3 Molecular Layer: Frame-driven scroll animation
//!
//! The host owns the frame clock. It calls [`ScrollDriver::on_frame`] once per
//! frame with a monotonically increasing timestamp for as long as
//! [`ScrollDriver::needs_frame`] is true.

use crate::config::ScrollConfig;
use crate::{Error, Result};

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{elapsed_ms, is_complete};

/// Anything with a vertical scroll offset the driver can read and move
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    fn set_scroll_y(&mut self, y: f64);
}

/// In-memory viewport, used by headless hosts and tests
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StaticViewport {
    pub y: f64,
}

impl StaticViewport {
    pub fn at(y: f64) -> Self {
        Self { y }
    }
}

impl Viewport for StaticViewport {
    fn scroll_y(&self) -> f64 {
        self.y
    }

    fn set_scroll_y(&mut self, y: f64) {
        self.y = y;
    }
}

/// One in-flight scroll animation
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    /// Scroll offset captured when the animation was requested
    start: f64,
    /// `target - start`
    distance: f64,
    duration_ms: f64,
    /// Timestamp of the first frame this animation saw
    epoch: Option<f64>,
}

impl ScrollAnimation {
    pub fn target(&self) -> f64 {
        self.start + self.distance
    }

    /// Advance to `now`, returning the position to write and whether to keep running
    fn step(&mut self, now: f64, easing: EasingType) -> (f64, bool) {
        let epoch = *self.epoch.get_or_insert(now);
        let elapsed = elapsed_ms(epoch, now);
        let position = easing.sample(elapsed, self.start, self.distance, self.duration_ms);
        (position, !is_complete(elapsed, self.duration_ms))
    }
}

/// Drives smooth in-page scrolling
///
/// Requests never cancel each other: every active animation writes the
/// viewport on every frame, in request order, so the newest one wins.
#[derive(Debug, Clone, Default)]
pub struct ScrollDriver {
    animations: Vec<ScrollAnimation>,
    config: ScrollConfig,
}

impl ScrollDriver {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animations: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Duration used by callers that don't pick one
    pub fn default_duration_ms(&self) -> f64 {
        self.config.animation_duration_ms as f64
    }

    /// Whether the host should schedule another frame
    #[inline]
    pub fn needs_frame(&self) -> bool {
        !self.animations.is_empty()
    }

    pub fn active(&self) -> &[ScrollAnimation] {
        &self.animations
    }

    /// Start animating `viewport` from its current offset to `target`
    ///
    /// The start offset is captured now; nothing moves until the next
    /// [`on_frame`](Self::on_frame). With smooth scrolling disabled the
    /// viewport jumps immediately.
    pub fn animate_scroll_to<V: Viewport + ?Sized>(
        &mut self,
        viewport: &mut V,
        target: f64,
        duration_ms: f64,
    ) -> Result<()> {
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(Error::InvalidDuration(duration_ms));
        }

        if !self.config.smooth_enabled {
            viewport.set_scroll_y(target);
            return Ok(());
        }

        let start = viewport.scroll_y();
        tracing::trace!(start, target, duration_ms, "scroll animation requested");
        self.animations.push(ScrollAnimation {
            start,
            distance: target - start,
            duration_ms,
            epoch: None,
        });
        Ok(())
    }

    /// Advance every active animation to frame timestamp `now` (milliseconds)
    pub fn on_frame<V: Viewport + ?Sized>(&mut self, now: f64, viewport: &mut V) {
        let easing = self.config.easing;
        let clamp = self.config.clamp_to_target;

        self.animations.retain_mut(|animation| {
            let (position, running) = animation.step(now, easing);
            if !running && clamp {
                viewport.set_scroll_y(animation.target());
            } else {
                viewport.set_scroll_y(position);
            }
            running
        });
    }

    /// Drop all in-flight animations, leaving the viewport where it is
    pub fn cancel_all(&mut self) {
        self.animations.clear();
    }
}
