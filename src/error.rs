//! Error types for Predecir operations.
//!
//! Every fallible operation in the crate returns one of these variants;
//! the presentation layer distinguishes user-correctable input problems
//! from server misconfiguration via [`PredecirError::is_user_error`].

use std::fmt;

/// Main error type for Predecir operations.
///
/// Validation failures name the offending field so the caller can
/// highlight it; artifact failures carry the path that could not be
/// loaded, since they abort process start and are read by an operator.
///
/// # Examples
///
/// ```
/// use predecir::error::PredecirError;
///
/// let err = PredecirError::MissingField {
///     field: "FFMC".to_string(),
/// };
/// assert!(err.to_string().contains("FFMC"));
/// assert!(err.is_user_error());
/// ```
#[derive(Debug)]
pub enum PredecirError {
    /// A required feature was absent from the raw input mapping.
    MissingField {
        /// Feature name from the contract
        field: String,
    },

    /// A feature was present but did not parse as a finite number.
    InvalidNumber {
        /// Feature name from the contract
        field: String,
        /// The raw text that failed to parse
        value: String,
    },

    /// Input width disagrees with what the fitted artifacts expect.
    ///
    /// Should be unreachable for vectors built by the validator; a hit
    /// here means the artifacts drifted from the serving schema.
    ShapeMismatch {
        /// Width the artifacts were fitted with
        expected: usize,
        /// Width actually presented
        actual: usize,
    },

    /// An artifact was missing, unreadable, or failed to deserialize.
    ///
    /// Fatal at process start; without artifacts no request can succeed.
    ArtifactLoad {
        /// Path of the offending artifact
        path: String,
        /// Underlying failure description
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Serialization/deserialization error.
    Serialization(String),
}

impl PredecirError {
    /// Returns true for errors the end user can correct by editing
    /// their input, false for configuration or schema-drift faults.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            PredecirError::MissingField { .. } | PredecirError::InvalidNumber { .. }
        )
    }
}

impl fmt::Display for PredecirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredecirError::MissingField { field } => {
                write!(f, "Missing required field: {field}")
            }
            PredecirError::InvalidNumber { field, value } => {
                write!(f, "Invalid number for field {field}: {value:?}")
            }
            PredecirError::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "Shape mismatch: artifacts expect {expected} features, got {actual}"
                )
            }
            PredecirError::ArtifactLoad { path, message } => {
                write!(f, "Failed to load artifact {path}: {message}")
            }
            PredecirError::Io(e) => write!(f, "I/O error: {e}"),
            PredecirError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for PredecirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PredecirError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PredecirError {
    fn from(err: std::io::Error) -> Self {
        PredecirError::Io(err)
    }
}

impl From<serde_json::Error> for PredecirError {
    fn from(err: serde_json::Error) -> Self {
        PredecirError::Serialization(err.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PredecirError>;
