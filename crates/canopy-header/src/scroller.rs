//! # Scroll and reference inputs
//!
//! The two raw inputs of the header engine:
//!
//! - `ScrollTracker`: current vertical scroll offset of the content, as an
//!   observable `Signal<f32>`.
//! - `LayoutReferenceCapture`: the title's screen position, recorded from
//!   its first layout pass and frozen afterwards.
//!
//! The reference must not follow the title around: once the header collapses
//! the title itself moves, and a moving reference would make the collapse
//! threshold depend on its own outcome.

use std::cell::Cell;

use canopy_core::{Signal, SubId, signal};

/// Vertical scroll offset, in px, as reported by the scrollable surface.
pub struct ScrollTracker {
    offset: Signal<f32>,
    max_offset: Cell<Option<f32>>,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self {
            offset: signal(0.0),
            max_offset: Cell::new(None),
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    pub fn signal(&self) -> &Signal<f32> {
        &self.offset
    }

    pub fn subscribe(&self, f: impl Fn(&f32) + 'static) -> SubId {
        self.offset.subscribe(f)
    }

    /// Records the position reported by the surface as is. Returns whether
    /// the offset changed; non-finite positions are dropped.
    pub fn set_offset(&self, offset: f32) -> bool {
        if !offset.is_finite() {
            log::warn!("scroll: ignoring non-finite offset {offset}");
            return false;
        }
        self.offset.set_if_changed(offset)
    }

    /// Tells the tracker how far the surface can scroll.
    pub fn set_extents(&self, viewport_height: f32, content_height: f32) {
        let max_off = (content_height - viewport_height).max(0.0);
        self.max_offset.set(Some(max_off));
        let current = self.offset.get();
        if current > max_off {
            self.offset.set(max_off);
        }
    }

    pub fn max_offset(&self) -> Option<f32> {
        self.max_offset.get()
    }

    /// Consume `dy` (pixels) the way the surface does: clamped to
    /// `[0, max_offset]` when extents are known. Returns the leftover.
    pub fn scroll_by(&self, dy: f32) -> f32 {
        if !dy.is_finite() {
            log::warn!("scroll: ignoring non-finite delta {dy}");
            return 0.0;
        }
        let before = self.offset.get();
        let upper = self.max_offset.get().unwrap_or(f32::INFINITY);
        let new_off = (before + dy).clamp(0.0, upper);
        self.offset.set_if_changed(new_off);
        dy - (new_off - before)
    }
}

/// Position of the reference element, or `Unset` before its first layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ReferencePosition {
    #[default]
    Unset,
    At(f32),
}

impl ReferencePosition {
    pub fn value(self) -> Option<f32> {
        match self {
            ReferencePosition::Unset => None,
            ReferencePosition::At(y) => Some(y),
        }
    }

    pub fn is_set(self) -> bool {
        matches!(self, ReferencePosition::At(_))
    }
}

#[derive(Debug, Default)]
pub struct LayoutReferenceCapture {
    position: ReferencePosition,
}

impl LayoutReferenceCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `position` if nothing was recorded yet. Later calls are
    /// ignored; returns whether this call recorded.
    pub fn on_first_layout(&mut self, position: f32) -> bool {
        if self.position.is_set() {
            return false;
        }
        if !position.is_finite() {
            log::warn!("reference: ignoring non-finite title position {position}");
            return false;
        }
        log::debug!("reference: title first laid out at y={position}");
        self.position = ReferencePosition::At(position);
        true
    }

    pub fn position(&self) -> ReferencePosition {
        self.position
    }
}
