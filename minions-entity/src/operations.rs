//! Entity lifecycle operations
//!
//! These are pure value transformations; persisting the result is the
//! caller's job via a [`crate::StorageAdapter`].

use chrono::Utc;
use minions_fields::{validate_fields, MinionType, ValidationResult};
use serde_json::Value;
use uuid::Uuid;

use crate::types::{CreateMinionInput, Minion, MinionPatch};

/// Generate a new unique minion id
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Build a new minion of the given type.
///
/// Field validation is reported alongside the minion rather than enforced,
/// so callers decide whether invalid fields are fatal.
pub fn create_minion(input: CreateMinionInput, minion_type: &MinionType) -> (Minion, ValidationResult) {
    let validation = validate_fields(&Value::Object(input.fields.clone()), &minion_type.schema);

    let now = Utc::now();
    let minion = Minion {
        id: generate_id(),
        title: input.title,
        minion_type_id: minion_type.id.clone(),
        fields: input.fields,
        status: input.status,
        priority: input.priority,
        tags: input.tags,
        description: None,
        created_at: now,
        updated_at: now,
        created_by: input.created_by,
        updated_by: None,
        deleted_at: None,
        deleted_by: None,
    };

    (minion, validation)
}

/// Apply a partial update, returning the new minion.
pub fn update_minion(minion: &Minion, patch: MinionPatch) -> Minion {
    let mut updated = minion.clone();

    if let Some(title) = patch.title {
        updated.title = title;
    }
    if let Some(fields) = patch.fields {
        updated.fields = fields;
    }
    if let Some(status) = patch.status {
        updated.status = Some(status);
    }
    if let Some(priority) = patch.priority {
        updated.priority = Some(priority);
    }
    if let Some(tags) = patch.tags {
        updated.tags = tags;
    }

    updated.updated_at = Utc::now();
    updated.updated_by = patch.updated_by;
    updated
}

/// Mark a minion as deleted without removing it.
pub fn soft_delete(minion: &Minion, actor: impl Into<String>) -> Minion {
    let now = Utc::now();
    let actor = actor.into();
    let mut deleted = minion.clone();
    deleted.deleted_at = Some(now);
    deleted.deleted_by = Some(actor.clone());
    deleted.updated_at = now;
    deleted.updated_by = Some(actor);
    deleted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MinionPriority, MinionStatus};
    use minions_fields::{FieldDef, FieldKind};
    use serde_json::{json, Map};

    fn tent_type() -> MinionType {
        MinionType {
            id: "venues-tent".into(),
            name: "Tent".into(),
            slug: "tent".into(),
            description: String::new(),
            icon: "🎪".into(),
            schema: vec![
                FieldDef::labeled("name", FieldKind::String),
                FieldDef::labeled("totalSeats", FieldKind::Number),
            ],
        }
    }

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn generate_id_is_unique_uuid() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn create_assigns_identity_and_type() {
        let input = CreateMinionInput::new("Augustiner-Festhalle")
            .with_fields(fields(json!({"name": "Augustiner-Festhalle", "totalSeats": 6000})))
            .with_status(MinionStatus::Active)
            .with_tags(vec!["augustiner".into()])
            .created_by("cli");

        let (minion, validation) = create_minion(input, &tent_type());

        assert!(validation.valid);
        assert_eq!(minion.minion_type_id, "venues-tent");
        assert_eq!(minion.title, "Augustiner-Festhalle");
        assert_eq!(minion.fields["totalSeats"], 6000);
        assert_eq!(minion.status, Some(MinionStatus::Active));
        assert_eq!(minion.created_by.as_deref(), Some("cli"));
        assert_eq!(minion.created_at, minion.updated_at);
        assert!(!minion.is_deleted());
    }

    #[test]
    fn create_reports_invalid_fields_without_failing() {
        let input = CreateMinionInput::new("Bad").with_fields(fields(json!({"totalSeats": "lots"})));
        let (minion, validation) = create_minion(input, &tent_type());
        assert!(!validation.valid);
        assert_eq!(validation.errors[0].field, "totalSeats");
        assert_eq!(minion.fields["totalSeats"], "lots");
    }

    #[test]
    fn update_only_touches_supplied_parts() {
        let input = CreateMinionInput::new("Tent")
            .with_fields(fields(json!({"name": "X", "totalSeats": 400})))
            .with_priority(Some(MinionPriority::Low));
        let (minion, _) = create_minion(input, &tent_type());

        let updated = update_minion(
            &minion,
            MinionPatch::new()
                .with_status(MinionStatus::Completed)
                .updated_by("cli"),
        );

        assert_eq!(updated.id, minion.id);
        assert_eq!(updated.fields, minion.fields);
        assert_eq!(updated.title, minion.title);
        assert_eq!(updated.priority, Some(MinionPriority::Low));
        assert_eq!(updated.status, Some(MinionStatus::Completed));
        assert_eq!(updated.updated_by.as_deref(), Some("cli"));
        assert!(updated.updated_at >= minion.updated_at);
        assert_eq!(updated.created_at, minion.created_at);
    }

    #[test]
    fn update_replaces_fields_and_tags() {
        let (minion, _) = create_minion(
            CreateMinionInput::new("Tent").with_tags(vec!["a".into()]),
            &tent_type(),
        );
        let updated = update_minion(
            &minion,
            MinionPatch::new()
                .with_fields(fields(json!({"name": "Y"})))
                .with_tags(vec!["b".into(), "c".into()])
                .with_title("Renamed"),
        );
        assert_eq!(updated.fields, fields(json!({"name": "Y"})));
        assert_eq!(updated.tags, vec!["b", "c"]);
        assert_eq!(updated.title, "Renamed");
    }

    #[test]
    fn soft_delete_sets_tombstone() {
        let (minion, _) = create_minion(CreateMinionInput::new("Tent"), &tent_type());
        let deleted = soft_delete(&minion, "cli");

        assert!(deleted.is_deleted());
        assert_eq!(deleted.deleted_by.as_deref(), Some("cli"));
        assert_eq!(deleted.updated_at, deleted.deleted_at.unwrap());
        assert_eq!(deleted.fields, minion.fields);
        assert!(!minion.is_deleted(), "input left untouched");
    }
}
