//! Minion entities and file-backed storage
//!
//! A [`Minion`] is a generic record whose `fields` are shaped by a
//! [`minions_fields::MinionType`]. This crate owns the entity lifecycle
//! (create, update, soft delete) and the [`StorageAdapter`] seam, with
//! [`JsonFileStorage`] as the on-disk implementation.
//!
//! ## Storage Structure
//!
//! ```text
//! <root>/
//! └── 3f/
//!     └── 2a/
//!         └── 3f2a9c1e-....json   # one pretty-printed JSON document per entity
//! ```
//!
//! The two directory levels are the first four characters of the id with
//! hyphens removed. Writes go to a temp file in the same directory and are
//! renamed into place.

mod error;
pub mod json_file;
pub mod operations;
pub mod storage;
pub mod types;

pub use error::{EntityError, Result};
pub use json_file::JsonFileStorage;
pub use operations::{create_minion, generate_id, soft_delete, update_minion};
pub use storage::{StorageAdapter, StorageFilter};
pub use types::{CreateMinionInput, Minion, MinionPatch, MinionPriority, MinionStatus};
