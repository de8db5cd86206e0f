//! TypeRegistry: lookup of registered `MinionType` schemas by id and slug.
//!
//! The registry is populated once at startup and then only read. Types keep
//! their registration order, which is the order commands display them in.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{FieldsError, Result};
use crate::types::MinionType;

/// Registered types indexed by id (ordered) and by slug.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, MinionType>,
    slug_index: HashMap<String, String>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of types, failing on the first conflict.
    pub fn from_types<I>(types: I) -> Result<Self>
    where
        I: IntoIterator<Item = MinionType>,
    {
        let mut registry = Self::new();
        for t in types {
            registry.register(t)?;
        }
        Ok(registry)
    }

    /// Register a type. Ids, slugs, and field names within the schema must be unique.
    pub fn register(&mut self, t: MinionType) -> Result<()> {
        if self.types.contains_key(&t.id) {
            return Err(FieldsError::DuplicateTypeId { id: t.id });
        }
        if self.slug_index.contains_key(&t.slug) {
            return Err(FieldsError::DuplicateSlug { slug: t.slug });
        }

        let mut seen = std::collections::HashSet::new();
        for field in &t.schema {
            if !seen.insert(field.name.as_str()) {
                return Err(FieldsError::DuplicateFieldName {
                    type_id: t.id.clone(),
                    field: field.name.clone(),
                });
            }
        }

        debug!(id = %t.id, slug = %t.slug, fields = t.schema.len(), "registered type");
        self.slug_index.insert(t.slug.clone(), t.id.clone());
        self.types.insert(t.id.clone(), t);
        Ok(())
    }

    /// Look up a type by its id
    pub fn get(&self, id: &str) -> Option<&MinionType> {
        self.types.get(id)
    }

    /// Look up a type by its slug
    pub fn get_by_slug(&self, slug: &str) -> Option<&MinionType> {
        self.slug_index.get(slug).and_then(|id| self.types.get(id))
    }

    /// All types in registration order
    pub fn types(&self) -> impl Iterator<Item = &MinionType> {
        self.types.values()
    }

    /// Registered slugs in registration order
    pub fn slugs(&self) -> Vec<&str> {
        self.types.values().map(|t| t.slug.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
