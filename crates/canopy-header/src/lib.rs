//! # Collapsing header
//!
//! A detail screen with a large hero image that gives way to a compact
//! toolbar as the content scrolls up. Everything the host draws is derived
//! from two inputs: the scroll offset, and the position the title had on its
//! first layout pass.
//!
//! - `toolbar::resolve`: bar shown once the scroll passes
//!   `title + threshold`; pure, no hysteresis.
//! - `TransitionAnimator`: crossfade of the image layer and the bar,
//!   restarted in place on every state flip.
//! - `parallax`: top padding that makes the image scroll at half speed,
//!   and the FAB offset that keeps the button centered on the image's
//!   bottom edge.
//! - `MeasuredPlaceholder`: empty spacer of the last measured size for
//!   hidden content, so the layout does not jump.
//! - `CollapsingHeader`: one screen instance wiring all of the above,
//!   mounted on a `canopy_core::Scope`.
//!
//! Dimensions are converted with the `LayoutContext` the screen was mounted
//! with:
//!
//! ```rust
//! use canopy_core::{Density, Dp};
//! use canopy_header::parallax::parallax_offset_dp;
//!
//! let offset = parallax_offset_dp(300.0, 2.0, Density { scale: 3.0 });
//! assert_eq!(offset, Dp(50.0));
//! ```

pub mod config;
pub mod error;
pub mod hide;
pub mod insets;
pub mod parallax;
pub mod screen;
pub mod scroller;
pub mod snackbar;
pub mod tests;
pub mod toolbar;
pub mod transition;

pub use config::HeaderConfig;
pub use error::ConfigError;
pub use hide::{MeasuredPlaceholder, Placeholder};
pub use insets::{Sides, SystemBarInsets};
pub use parallax::FabPlacement;
pub use screen::{CollapsingHeader, HeaderCallbacks, HeaderFrame, HeaderVariant, ImageHeader};
pub use scroller::{LayoutReferenceCapture, ReferencePosition, ScrollTracker};
pub use snackbar::SnackbarTimer;
pub use toolbar::ToolbarState;
pub use transition::{TransitionAlphas, TransitionAnimator};
