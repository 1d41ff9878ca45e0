//! Error types for the beacon-model crate.

use thiserror::Error;

/// Errors that can occur when constructing or validating model values.
///
/// The derived properties of an [`Alert`](crate::Alert) (name, fingerprint,
/// status) are total functions and never produce these errors; only the
/// opt-in construction, parsing, and validation surface does.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Label name violates the label-name grammar.
    #[error("invalid label name: {name:?}")]
    InvalidLabelName {
        /// The offending label name.
        name: String,
    },

    /// Textual fingerprint could not be parsed.
    #[error("invalid fingerprint: {value:?}")]
    InvalidFingerprint {
        /// The text that failed to parse.
        value: String,
    },

    /// Alert failed producer-side validation.
    #[error("invalid alert: {reason}")]
    InvalidAlert {
        /// The reason the alert is invalid.
        reason: String,
    },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
