use thiserror::Error;

/// Errors for the few inputs that come from outside the rig: runtime
/// configuration and catalog lookups.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KineticError {
    #[error("bone length `{name}` must be finite and positive, got {value}")]
    InvalidBoneLength { name: &'static str, value: f32 },

    #[error("IK extension epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f32),

    #[error("bend direction must be +1 or -1, got {0}")]
    InvalidBend(f32),

    #[error("unknown difficulty `{0}`")]
    UnknownDifficulty(String),
}

pub type Result<T> = std::result::Result<T, KineticError>;
