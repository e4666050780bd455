// SPDX-License-Identifier: MPL-2.0
//! Input translation for the viewer: keys, wheel deltas, and the search
//! debouncer.
//!
//! Nothing here touches viewer state directly. Each helper turns raw input
//! into an optional [`ViewerCommand`] (or a pending search term) that the
//! session dispatches; that keeps every input path sharing one transition
//! code path.

use std::time::{Duration, Instant};

/// Direction of a sequential navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

/// Commands the presentation layer can issue against an open viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    ShowPrevious,
    ShowNext,
    Close,
}

/// Keyboard keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Maps a key press to a viewer command. Keys are ignored while the viewer
/// is closed.
#[must_use]
pub fn command_for_key(key: Key, viewer_open: bool) -> Option<ViewerCommand> {
    if !viewer_open {
        return None;
    }
    match key {
        Key::ArrowLeft => Some(ViewerCommand::ShowPrevious),
        Key::ArrowRight => Some(ViewerCommand::ShowNext),
        Key::Escape => Some(ViewerCommand::Close),
    }
}

/// Scroll geometry of the metadata region under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRegion {
    /// Current scroll offset from the top.
    pub scroll_top: f32,
    /// Visible height of the region.
    pub viewport_height: f32,
    /// Total content height.
    pub content_height: f32,
}

impl ScrollRegion {
    /// Whether the content overflows the viewport at all.
    #[must_use]
    pub fn has_overflow(&self) -> bool {
        self.content_height > self.viewport_height
    }

    /// Whether the region is scrolled to the very top.
    #[must_use]
    pub fn at_top(&self) -> bool {
        self.scroll_top <= 0.0
    }

    /// Whether the region is scrolled to the bottom (within one pixel, to
    /// absorb fractional scroll positions).
    #[must_use]
    pub fn at_bottom(&self) -> bool {
        self.scroll_top + self.viewport_height >= self.content_height - 1.0
    }
}

/// Decides whether a wheel event should drive viewer navigation or be left
/// to the metadata region's native scrolling.
///
/// Navigation is allowed when the pointer is outside the metadata region,
/// when the region has no overflow, or when the wheel pushes past the
/// boundary the region is already at (up at the top, down at the bottom).
#[must_use]
pub fn wheel_should_navigate(over_metadata: bool, region: Option<&ScrollRegion>, delta: f32) -> bool {
    if !over_metadata {
        return true;
    }
    let Some(region) = region else {
        return true;
    };
    if !region.has_overflow() {
        return true;
    }
    let scrolling_up = delta < 0.0;
    let scrolling_down = delta > 0.0;
    (scrolling_up && region.at_top()) || (scrolling_down && region.at_bottom())
}

/// Accumulates wheel deltas and emits one navigation step per threshold
/// crossing.
///
/// A single notch of a fast wheel can report several small deltas; gating
/// on an accumulated magnitude keeps one physical gesture from skipping
/// multiple items. The accumulator resets to zero after every emitted step.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelAccumulator {
    accumulated: f32,
    threshold: f32,
}

impl WheelAccumulator {
    /// Creates an accumulator with the given trigger threshold.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            accumulated: 0.0,
            threshold,
        }
    }

    /// Feeds one wheel delta. Positive deltas scroll down (next), negative
    /// scroll up (previous). Returns a direction once the accumulated
    /// magnitude crosses the threshold.
    pub fn accumulate(&mut self, delta: f32) -> Option<NavDirection> {
        self.accumulated += delta;
        if self.accumulated > self.threshold {
            self.accumulated = 0.0;
            Some(NavDirection::Next)
        } else if self.accumulated < -self.threshold {
            self.accumulated = 0.0;
            Some(NavDirection::Previous)
        } else {
            None
        }
    }

    /// Drops any partial accumulation (e.g. when the viewer closes).
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

/// Coalesces rapid search keystrokes into one criteria change.
///
/// Every keystroke replaces the pending term and restarts the quiet-period
/// clock; [`SearchDebouncer::poll`] releases the term once the period has
/// elapsed. Time is passed in explicitly so behavior is deterministic.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    pending: Option<String>,
    deadline: Option<Instant>,
    quiet_period: Duration,
}

impl SearchDebouncer {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            pending: None,
            deadline: None,
            quiet_period,
        }
    }

    /// Records a keystroke's resulting term and restarts the quiet period.
    pub fn input(&mut self, term: &str, now: Instant) {
        self.pending = Some(term.to_string());
        self.deadline = Some(now + self.quiet_period);
    }

    /// Releases the pending term if the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Releases the pending term immediately (e.g. on submit).
    pub fn flush(&mut self) -> Option<String> {
        self.deadline = None;
        self.pending.take()
    }

    /// Whether a term is waiting for its quiet period to elapse.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
