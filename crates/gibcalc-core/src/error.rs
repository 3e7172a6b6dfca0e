//! Error type shared by every gibcalc crate.

/// Error type for Gibonacci computations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GibError {
    /// Modulus outside the accepted range.
    #[error("modulus {modulus} out of range [{min}, {max}]")]
    ModulusOutOfRange { modulus: u64, min: u64, max: u64 },

    /// An input value was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Work was cancelled before completion.
    #[error("computation cancelled")]
    Cancelled,
}

impl GibError {
    /// Whether the error stems from user-supplied values.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ModulusOutOfRange { .. } | Self::InvalidInput(_) | Self::Config(_)
        )
    }
}

/// Validate `modulus` against `[min, max]`.
pub fn check_modulus(modulus: u64, min: u64, max: u64) -> Result<(), GibError> {
    if modulus < min || modulus > max {
        return Err(GibError::ModulusOutOfRange { modulus, min, max });
    }
    Ok(())
}
