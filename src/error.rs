use thiserror::Error;

/// Rejected calculator input.
///
/// Every calculator fails on the first precondition it finds violated and
/// never returns a partial result. The `Display` text is what the console
/// shows the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// BMI needs a positive weight and a positive height.
    #[error("weight and height must be > 0")]
    NonPositiveBodyMetrics,

    #[error("weight must be > 0")]
    NonPositiveWeight,

    /// Carries the name exactly as the user typed it, before normalization.
    #[error("Unknown planet: {0}")]
    UnknownPlanet(String),
}
