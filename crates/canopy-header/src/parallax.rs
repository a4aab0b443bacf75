//! # Parallax and FAB placement
//!
//! The hero image gets a downward top padding of `scroll / factor`, so it
//! drifts at a fraction of the content's speed. The FAB hangs off the
//! image's bottom edge, which moves with both the image height and that
//! padding:
//!
//! ```rust
//! use canopy_core::Dp;
//! use canopy_header::parallax::{fab_offset, parallax_offset};
//!
//! let parallax = parallax_offset(300.0, 2.0);
//! assert_eq!(parallax, 150.0);
//! assert_eq!(fab_offset(Dp(278.0), Dp(parallax), Dp(56.0)), Dp(400.0));
//! ```
//!
//! The image height comes from the image's own layout callback, which runs
//! after the scroll offset for that frame was applied. The FAB can therefore
//! be positioned against a one-frame-old height right after the height
//! changes; that frame is accepted as is.

use canopy_core::{Density, Dp};

use crate::toolbar::ToolbarState;

pub fn parallax_offset(scroll_offset: f32, factor: f32) -> f32 {
    scroll_offset / factor
}

pub fn parallax_offset_dp(scroll_offset: f32, factor: f32, density: Density) -> Dp {
    density.px_to_dp(parallax_offset(scroll_offset, factor))
}

/// Vertical offset that centers a FAB of `diameter` on the image's bottom edge.
pub fn fab_offset(image_height: Dp, parallax: Dp, diameter: Dp) -> Dp {
    image_height + parallax - diameter / 2.0
}

/// Where to draw the FAB: `top` from the header's top edge, pinned to the
/// trailing edge with `end_padding`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FabPlacement {
    pub top: Dp,
    pub end_padding: Dp,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct FabInputs {
    /// `None` until the image has been measured.
    pub image_height_px: Option<f32>,
    pub parallax: Dp,
    pub diameter: Dp,
    pub end_padding: Dp,
    pub is_added: bool,
    pub toolbar_state: ToolbarState,
    pub alpha: f32,
}

/// `None` means the FAB is not rendered at all: the item was already added,
/// the compact bar is in charge, or the image has no height yet.
pub fn place_fab(inputs: FabInputs, density: Density) -> Option<FabPlacement> {
    if inputs.is_added || inputs.toolbar_state == ToolbarState::Shown {
        return None;
    }
    let height = inputs.image_height_px.filter(|h| *h != 0.0)?;
    Some(FabPlacement {
        top: fab_offset(density.px_to_dp(height), inputs.parallax, inputs.diameter),
        end_padding: inputs.end_padding,
        alpha: inputs.alpha,
    })
}
