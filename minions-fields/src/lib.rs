//! Field definitions and type registry for Minions
//!
//! `minions-fields` is the schema half of the Minions entity model. It knows
//! nothing about storage or about any particular domain; consumers declare
//! their own [`MinionType`] values and register them at startup.
//!
//! # Architecture
//!
//! - **Schema-only**: Owns field definitions and type schemas, not field values
//! - **Immutable registry**: [`TypeRegistry`] is built once and passed around by reference
//! - **Lenient validation**: Only fields named in a schema are checked; extra fields pass

pub mod error;
pub mod registry;
pub mod types;
pub mod validation;

pub use error::{FieldsError, Result};
pub use registry::TypeRegistry;
pub use types::{FieldDef, FieldKind, MinionType};
pub use validation::{validate_fields, FieldError, ValidationResult};
