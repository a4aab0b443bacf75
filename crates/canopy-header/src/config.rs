use canopy_core::{AnimationSpec, Density, Dp, Easing};
use web_time::Duration;

use crate::error::ConfigError;

/// Extra scroll distance past the title before the bar takes over, in px.
pub const HEADER_TRANSITION_OFFSET: f32 = 150.0;
/// Hero image scrolls at `1 / PARALLAX_FACTOR` of the content speed.
pub const PARALLAX_FACTOR: f32 = 2.0;
pub const FAB_DIAMETER: Dp = Dp(56.0);

/// Constants a collapsing header is mounted with.
///
/// Scroll-space values (`threshold_offset`) are physical pixels, the same
/// space the scroll offset and title position are reported in. Everything
/// authored for layout is in dp.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeaderConfig {
    pub threshold_offset: f32,
    pub parallax_factor: f32,
    pub fab_diameter: Dp,
    /// Gap between the FAB and the trailing edge of the image.
    pub fab_end_padding: Dp,
    pub header_height: Dp,
    pub toolbar_icon_padding: Dp,
    pub transition: AnimationSpec,
    pub snackbar_duration: Duration,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            threshold_offset: HEADER_TRANSITION_OFFSET,
            parallax_factor: PARALLAX_FACTOR,
            fab_diameter: FAB_DIAMETER,
            fab_end_padding: Dp(8.0),
            header_height: Dp(278.0),
            toolbar_icon_padding: Dp(16.0),
            transition: AnimationSpec::tween(Duration::from_millis(250), Easing::EaseInOut),
            snackbar_duration: Duration::from_millis(5000),
        }
    }
}

impl HeaderConfig {
    /// Low-stiffness, non-bouncy spring instead of the default tween.
    pub fn with_spring_transition(mut self) -> Self {
        self.transition = AnimationSpec::spring(1.0, 200.0, Duration::from_millis(600));
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.parallax_factor.is_finite() || self.parallax_factor <= 1.0 {
            return Err(ConfigError::ParallaxFactor(self.parallax_factor));
        }
        if !self.threshold_offset.is_finite() || self.threshold_offset < 0.0 {
            return Err(ConfigError::ThresholdOffset(self.threshold_offset));
        }
        if !(self.fab_diameter.0.is_finite() && self.fab_diameter.0 > 0.0) {
            return Err(ConfigError::FabDiameter(self.fab_diameter.0));
        }
        if !(self.header_height.0.is_finite() && self.header_height.0 > 0.0) {
            return Err(ConfigError::HeaderHeight(self.header_height.0));
        }
        if self.transition.duration.is_zero() {
            return Err(ConfigError::ZeroTransition);
        }
        if let Easing::Spring {
            damping_ratio,
            stiffness,
        } = self.transition.easing
        {
            let positive = |v: f32| v.is_finite() && v > 0.0;
            if !(positive(damping_ratio) && positive(stiffness)) {
                return Err(ConfigError::Spring {
                    damping_ratio,
                    stiffness,
                });
            }
        }
        Ok(())
    }
}

pub fn validate_density(density: Density) -> Result<(), ConfigError> {
    if density.scale.is_finite() && density.scale > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Density(density.scale))
    }
}
