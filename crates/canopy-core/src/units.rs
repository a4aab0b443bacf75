//! # Units
//!
//! Scroll offsets and layout measurements arrive in physical pixels, while
//! header dimensions are authored in density-independent pixels (dp). The
//! conversion factor is carried explicitly in a [`LayoutContext`] handed to
//! whatever needs it; nothing reads it from ambient state.
//!
//! ```rust
//! use canopy_core::units::{Density, Dp};
//!
//! let density = Density { scale: 2.0 };
//! assert_eq!(Dp(28.0).to_px(density), 56.0);
//! assert_eq!(density.px_to_dp(56.0), Dp(28.0));
//! ```

/// density‑independent pixels (dp)
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Dp = Dp(0.0);

    pub fn to_px(self, density: Density) -> f32 {
        self.0 * density.scale
    }
}

impl std::ops::Add for Dp {
    type Output = Dp;
    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Dp {
    type Output = Dp;
    fn sub(self, rhs: Dp) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl std::ops::Div<f32> for Dp {
    type Output = Dp;
    fn div(self, rhs: f32) -> Dp {
        Dp(self.0 / rhs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Density {
    pub scale: f32, // dp→px multiplier
}

impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Density {
    pub fn px_to_dp(self, px: f32) -> Dp {
        Dp(px / self.scale)
    }
}

/// Per-screen conversion context, threaded into every offset calculation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutContext {
    pub density: Density,
}

impl LayoutContext {
    pub fn new(density: Density) -> Self {
        Self { density }
    }
}
