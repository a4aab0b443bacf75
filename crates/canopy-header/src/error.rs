use thiserror::Error;

/// Rejected header configuration. Runtime inputs never fail; only the
/// constants a screen is mounted with are validated.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("parallax factor must be a finite number greater than 1, got {0}")]
    ParallaxFactor(f32),
    #[error("threshold offset must be finite and non-negative, got {0}px")]
    ThresholdOffset(f32),
    #[error("FAB diameter must be positive, got {0}dp")]
    FabDiameter(f32),
    #[error("header height must be positive, got {0}dp")]
    HeaderHeight(f32),
    #[error(
        "transition spring needs a finite positive damping ratio and stiffness, got {damping_ratio} and {stiffness}"
    )]
    Spring { damping_ratio: f32, stiffness: f32 },
    #[error("toolbar transition duration must be non-zero")]
    ZeroTransition,
    #[error("density scale must be finite and positive, got {0}")]
    Density(f32),
}
