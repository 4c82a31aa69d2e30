use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Terminal event poller
///
/// Idle pages tick at the configured rate; while a scroll animation is in
/// flight the loop asks for frame-rate ticks instead.
pub struct EventHandler {
    tick_rate: Duration,
    frame_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, animation_fps: u32) -> Self {
        let frame_ms = 1000 / u64::from(animation_fps.max(1));
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            frame_rate: Duration::from_millis(frame_ms.max(1)),
        }
    }

    /// Poll for the next event, waiting at most one tick (or one frame when `animating`)
    pub fn next(&self, animating: bool) -> Result<Option<AppEvent>> {
        let timeout = if animating { self.frame_rate } else { self.tick_rate };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Release events arrive on some platforms
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_rate_from_fps() {
        let handler = EventHandler::new(100, 60);
        assert_eq!(handler.frame_rate, Duration::from_millis(16));
        assert_eq!(handler.tick_rate, Duration::from_millis(100));

        let zero = EventHandler::new(100, 0);
        assert_eq!(zero.frame_rate, Duration::from_millis(1000));
    }
}
