//! Error types for the fields registry

use thiserror::Error;

/// Result type for fields operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur in type registry operations
#[derive(Debug, Error)]
pub enum FieldsError {
    /// A type with this id is already registered
    #[error("duplicate type id: {id}")]
    DuplicateTypeId { id: String },

    /// A type with this slug is already registered
    #[error("duplicate type slug: {slug}")]
    DuplicateSlug { slug: String },

    /// Two fields in one schema share a name
    #[error("duplicate field name '{field}' in type {type_id}")]
    DuplicateFieldName { type_id: String, field: String },
}
