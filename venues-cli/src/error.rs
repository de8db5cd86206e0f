//! Error handling for the venues CLI

use std::path::PathBuf;

use colored::Colorize;
use minions_entity::EntityError;
use minions_fields::{FieldError, FieldsError};
use thiserror::Error;

/// Process exit code for success
pub const EXIT_SUCCESS: i32 = 0;
/// Process exit code for any failure
pub const EXIT_ERROR: i32 = 1;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown type: {name}")]
    UnknownType {
        name: String,
        /// Slugs or ids the user could have meant
        available: Vec<String>,
    },

    #[error("Minion not found: {id}")]
    NotFound { id: String },

    #[error("Invalid JSON in {origin}: {message}")]
    MalformedInput { origin: String, message: String },

    #[error("Validation failed for {type_name} ({} error(s))", .errors.len())]
    ValidationFailed {
        type_name: String,
        errors: Vec<FieldError>,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Entity(#[from] EntityError),

    #[error(transparent)]
    Fields(#[from] FieldsError),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn unknown_type(name: impl Into<String>, available: Vec<String>) -> Self {
        Self::UnknownType {
            name: name.into(),
            available,
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn malformed(origin: impl Into<String>, message: impl ToString) -> Self {
        Self::MalformedInput {
            origin: origin.into(),
            message: message.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        EXIT_ERROR
    }

    /// Lines written to stderr after the headline message
    pub fn details(&self) -> Vec<String> {
        match self {
            Self::UnknownType { available, .. } if !available.is_empty() => {
                vec![format!("Available: {}", available.join(", "))]
            }
            Self::ValidationFailed { errors, .. } => errors
                .iter()
                .map(|e| format!("  • {}: {}", e.field, e.message))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Print an error to stderr and map the result to an exit code.
pub fn result_to_exit(result: CliResult<()>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}", format!("✘ {e}").red());
            for line in e.details() {
                eprintln!("{}", line.dimmed());
            }
            e.exit_code()
        }
    }
}
