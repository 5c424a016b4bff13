use thiserror::Error;

/// Validation failures for the blue-noise sampler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    /// `minimum_distance` must be strictly positive.
    #[error("minimum distance must be positive, got {0}")]
    NonPositiveDistance(f32),

    /// The sampling rectangle has zero (or negative) extent in some axis.
    #[error("sampling region must have positive area, got {width} x {height}")]
    DegenerateRegion { width: f32, height: f32 },
}
