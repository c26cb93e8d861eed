//! Sidebar slide animation.
//!
//! `Tween` interpolates a single scalar over a fixed duration and is sampled
//! on demand with the current instant. `VisibilityAnimator` drives one tween
//! between the shown offset `0` and the hidden offset `-width` whenever the
//! visibility flag flips.

use log::*;
use std::time::{Duration, Instant};

/// Default slide duration in milliseconds.
///
pub const DEFAULT_DURATION_MS: u64 = 300;

/// Progress curve applied to a tween.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    ///
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    from: f32,
    started_at: Instant,
    duration: Duration,
}

/// A restartable interpolation of one scalar value.
///
#[derive(Debug, Clone)]
pub struct Tween {
    target: f32,
    segment: Option<Segment>,
    easing: Easing,
}

impl Tween {
    /// Return a tween resting at `value`.
    ///
    pub fn new(value: f32, easing: Easing) -> Self {
        Tween {
            target: value,
            segment: None,
            easing,
        }
    }

    /// Start moving towards `target` from wherever the value is at `now`.
    /// A running interpolation is replaced.
    ///
    pub fn start(&mut self, target: f32, duration: Duration, now: Instant) {
        let from = self.value(now);
        self.target = target;
        self.segment = if duration.is_zero() {
            None
        } else {
            Some(Segment {
                from,
                started_at: now,
                duration,
            })
        };
    }

    /// Stop the interpolation, freezing the value it had at `now`.
    ///
    pub fn cancel(&mut self, now: Instant) {
        self.target = self.value(now);
        self.segment = None;
    }

    /// Return the value at `now`.
    ///
    pub fn value(&self, now: Instant) -> f32 {
        match self.segment {
            None => self.target,
            Some(segment) => {
                let progress = self.progress(&segment, now);
                segment.from + (self.target - segment.from) * self.easing.apply(progress)
            }
        }
    }

    /// Return the value the tween is moving towards or resting at.
    ///
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_running(&self, now: Instant) -> bool {
        match self.segment {
            None => false,
            Some(segment) => self.progress(&segment, now) < 1.0,
        }
    }

    fn progress(&self, segment: &Segment, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(segment.started_at);
        (elapsed.as_secs_f32() / segment.duration.as_secs_f32()).min(1.0)
    }
}

/// Icon shown on the sidebar toggle.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Open,
    Close,
}

impl ToggleIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ToggleIcon::Open => "☰",
            ToggleIcon::Close => "✕",
        }
    }
}

/// Slides the sidebar panel in and out.
///
#[derive(Debug, Clone)]
pub struct VisibilityAnimator {
    visible: bool,
    width: u16,
    duration: Duration,
    tween: Tween,
}

impl VisibilityAnimator {
    /// Return an animator at rest in the given visibility for a panel of
    /// `width` columns.
    ///
    pub fn new(visible: bool, width: u16, duration: Duration) -> Self {
        let offset = if visible { 0.0 } else { -f32::from(width) };
        VisibilityAnimator {
            visible,
            width,
            duration,
            tween: Tween::new(offset, Easing::EaseInOut),
        }
    }

    /// Replace the easing curve used for subsequent slides.
    ///
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.tween.easing = easing;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Set visibility. A slide starts unless the panel is already at or
    /// heading to the matching end, so a cancelled slide resumes.
    ///
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        let target = self.endpoint(visible);
        if visible == self.visible && self.tween.target() == target {
            return;
        }
        self.visible = visible;
        if self.tween.is_running(now) {
            debug!("Sidebar slide reversed mid-way towards {}", target);
        }
        self.tween.start(target, self.duration, now);
        debug!(
            "Sidebar sliding {} over {:?}",
            if visible { "in" } else { "out" },
            self.duration
        );
    }

    /// Flip visibility and return the new value.
    ///
    pub fn toggle(&mut self, now: Instant) -> bool {
        self.set_visible(!self.visible, now);
        self.visible
    }

    /// Stop the slide where it is. A later `set_visible` or `toggle` moves
    /// on from the frozen offset.
    ///
    pub fn cancel(&mut self, now: Instant) {
        self.tween.cancel(now);
    }

    /// Horizontal offset of the panel at `now`, from `-width` to `0`.
    ///
    pub fn offset(&self, now: Instant) -> f32 {
        self.tween.value(now)
    }

    /// Columns of the panel on screen at `now`.
    ///
    pub fn visible_width(&self, now: Instant) -> u16 {
        let width = f32::from(self.width);
        (width + self.offset(now)).round().clamp(0.0, width) as u16
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.tween.is_running(now)
    }

    fn endpoint(&self, visible: bool) -> f32 {
        if visible {
            0.0
        } else {
            -f32::from(self.width)
        }
    }

    pub fn toggle_icon(&self) -> ToggleIcon {
        if self.visible {
            ToggleIcon::Close
        } else {
            ToggleIcon::Open
        }
    }
}
