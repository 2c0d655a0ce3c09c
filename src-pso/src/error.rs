//! Error type shared by the swarm, its particles and the recorder

/// Errors raised while configuring or running a particle swarm
#[derive(Debug, thiserror::Error)]
pub enum PsoError {
    #[error("{0} is not a valid mode, accepted values: 'min' or 'max'")]
    InvalidMode(String),

    #[error("invalid bounds [{lower}, {upper}]: need finite lower <= upper with a finite width")]
    InvalidBounds { lower: f64, upper: f64 },

    #[error("coefficient {name} must be finite, got {value}")]
    InvalidCoefficient { name: &'static str, value: f64 },

    #[error("dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("{name} must be strictly positive")]
    NonPositive { name: &'static str },

    #[error("I/O error while recording: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error while recording: {0}")]
    Csv(#[from] csv::Error),
}
