use canopy_core::{AnimatedValue, AnimationSpec};
use web_time::Instant;

use crate::toolbar::ToolbarState;

/// Opacity of the two header layers. `header` covers the hero image and its
/// floating actions, `bar` the compact toolbar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionAlphas {
    pub header: f32,
    pub bar: f32,
}

impl TransitionAlphas {
    pub fn for_state(state: ToolbarState) -> Self {
        match state {
            ToolbarState::Hidden => Self {
                header: 1.0,
                bar: 0.0,
            },
            ToolbarState::Shown => Self {
                header: 0.0,
                bar: 1.0,
            },
        }
    }
}

/// Crossfade between the image header and the compact bar.
///
/// Both alphas are retargeted together on every state change, from wherever
/// they currently are. If sampling stops (frame clock stalled, screen torn
/// down) they keep their last sampled values.
#[derive(Clone, Debug)]
pub struct TransitionAnimator {
    state: ToolbarState,
    header: AnimatedValue<f32>,
    bar: AnimatedValue<f32>,
}

impl TransitionAnimator {
    pub fn new(initial: ToolbarState, spec: AnimationSpec) -> Self {
        let alphas = TransitionAlphas::for_state(initial);
        Self {
            state: initial,
            header: AnimatedValue::new(alphas.header, spec),
            bar: AnimatedValue::new(alphas.bar, spec),
        }
    }

    /// Returns true if `state` differs from the current target and a
    /// transition was started.
    pub fn set_state(&mut self, state: ToolbarState, now: Instant) -> bool {
        if state == self.state {
            return false;
        }
        self.state = state;
        let target = TransitionAlphas::for_state(state);
        self.header.set_target(target.header, now);
        self.bar.set_target(target.bar, now);
        true
    }

    /// Jumps straight to `state`'s alphas with nothing left to sample.
    pub fn snap_to_state(&mut self, state: ToolbarState) {
        self.state = state;
        let target = TransitionAlphas::for_state(state);
        self.header.snap_to(target.header);
        self.bar.snap_to(target.bar);
    }

    /// Samples both alphas at `now`. Returns true while either is running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let header = self.header.update(now);
        let bar = self.bar.update(now);
        header || bar
    }

    /// Current alphas, clamped so a bouncy spring never leaves `[0, 1]`.
    pub fn alphas(&self) -> TransitionAlphas {
        TransitionAlphas {
            header: self.header.get().clamp(0.0, 1.0),
            bar: self.bar.get().clamp(0.0, 1.0),
        }
    }

    pub fn state(&self) -> ToolbarState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.header.is_animating() || self.bar.is_animating()
    }
}
