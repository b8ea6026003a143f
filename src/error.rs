//! Error types for evaluation, scenario lookup, export and rendering.
//!
//! Every fallible operation in the crate returns [`Result<T>`], an alias over
//! [`CoolingError`]. Validation errors are raised before any sample is
//! computed, so a caller never receives a partial curve.

use std::path::PathBuf;

use thiserror::Error;

use crate::physics::ParameterField;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CoolingError>;

/// Errors reported by the cooling core.
#[derive(Debug, Error)]
pub enum CoolingError {
    /// A parameter violates its constraint (e.g. `k must be > 0`).
    #[error("Invalid parameter: {field} {constraint}")]
    InvalidParameter {
        field: ParameterField,
        constraint: String,
    },

    /// The requested scenario name is not in the table.
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    /// Writing an export file failed.
    #[error("Export to {} failed: {source}", path.display())]
    ExportFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a previously exported file failed.
    #[error("Import from {} failed: {source}", path.display())]
    ImportFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An exported file does not have the expected layout.
    #[error("Malformed export at line {line}: {reason}")]
    MalformedExport { line: usize, reason: String },

    /// The plotting backend failed.
    #[error("Rendering to {} failed: {reason}", path.display())]
    RenderFailure { path: PathBuf, reason: String },

    /// Export was requested for a curve without samples.
    #[error("Nothing to export: run an evaluation first")]
    EmptyCurve,
}

impl CoolingError {
    /// Build an `InvalidParameter` error.
    pub fn invalid(field: ParameterField, constraint: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            constraint: constraint.into(),
        }
    }

    /// Offending field, for `InvalidParameter` errors.
    pub fn field(&self) -> Option<ParameterField> {
        match self {
            Self::InvalidParameter { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Short message without the error-kind prefix.
    ///
    /// For `InvalidParameter` this is `"<field> <constraint>"`, e.g. `"k must be > 0"`,
    /// which is what an input form shows next to the offending field.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidParameter { field, constraint } => format!("{field} {constraint}"),
            Self::UnknownScenario(name) => name.clone(),
            other => other.to_string(),
        }
    }
}
