use bitflags::bitflags;
use canopy_core::{Density, PaddingValues};

bitflags! {
    /// Which edges take the system-bar insets as padding.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Sides: u8 {
        const LEFT   = 1 << 0;
        const TOP    = 1 << 1;
        const RIGHT  = 1 << 2;
        const BOTTOM = 1 << 3;
    }
}

/// System-bar inset rectangle in px, as handed over by the window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SystemBarInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl SystemBarInsets {
    /// Inset padding in dp for the selected `sides`; the rest is zero.
    pub fn padding(&self, sides: Sides, density: Density) -> PaddingValues {
        let pick = |side: Sides, px: f32| {
            if sides.contains(side) {
                density.px_to_dp(px).0
            } else {
                0.0
            }
        };
        PaddingValues {
            left: pick(Sides::LEFT, self.left),
            right: pick(Sides::RIGHT, self.right),
            top: pick(Sides::TOP, self.top),
            bottom: pick(Sides::BOTTOM, self.bottom),
        }
    }
}
