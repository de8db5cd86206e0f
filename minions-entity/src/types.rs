//! Entity types: Minion, its status/priority, and the create/update inputs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{EntityError, Result};

/// Workflow status of a minion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MinionStatus {
    Active,
    Todo,
    InProgress,
    Completed,
    Cancelled,
}

impl MinionStatus {
    pub const ALL: [MinionStatus; 5] = [
        MinionStatus::Active,
        MinionStatus::Todo,
        MinionStatus::InProgress,
        MinionStatus::Completed,
        MinionStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MinionStatus::Active => "active",
            MinionStatus::Todo => "todo",
            MinionStatus::InProgress => "in_progress",
            MinionStatus::Completed => "completed",
            MinionStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for MinionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MinionStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown status '{}', expected one of: {}",
                    s,
                    Self::ALL.map(|v| v.as_str()).join(", ")
                )
            })
    }
}

/// Priority of a minion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MinionPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl MinionPriority {
    pub const ALL: [MinionPriority; 4] = [
        MinionPriority::Low,
        MinionPriority::Medium,
        MinionPriority::High,
        MinionPriority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MinionPriority::Low => "low",
            MinionPriority::Medium => "medium",
            MinionPriority::High => "high",
            MinionPriority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for MinionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MinionPriority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown priority '{}', expected one of: {}",
                    s,
                    Self::ALL.map(|v| v.as_str()).join(", ")
                )
            })
    }
}

/// A stored entity instance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Minion {
    pub id: String,
    pub title: String,
    pub minion_type_id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MinionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<MinionPriority>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    /// Tombstone. Set by soft delete; the record stays on disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<String>,
}

impl Minion {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Sharded location of this minion's file under `root`
    pub fn shard_path(&self, root: &Path) -> Result<PathBuf> {
        shard_path(root, &self.id)
    }

    /// Lowercased text that `search` matches against
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<String> = vec![self.title.clone()];
        if let Some(desc) = &self.description {
            parts.push(desc.clone());
        }
        parts.extend(self.tags.iter().cloned());
        for value in self.fields.values() {
            match value {
                Value::String(s) => parts.push(s.clone()),
                Value::Number(n) => parts.push(n.to_string()),
                Value::Bool(b) => parts.push(b.to_string()),
                _ => {}
            }
        }
        parts.join("\n").to_lowercase()
    }
}

/// Compute `<root>/<h[0:2]>/<h[2:4]>/<id>.json` where `h` is the id without hyphens.
///
/// Ids are restricted to ASCII alphanumerics, `-` and `_` so they can never
/// escape the root directory.
pub fn shard_path(root: &Path, id: &str) -> Result<PathBuf> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    let compact: String = id.chars().filter(|c| *c != '-').collect();
    if !valid || compact.len() < 4 {
        return Err(EntityError::invalid_id(id));
    }

    Ok(root
        .join(&compact[0..2])
        .join(&compact[2..4])
        .join(format!("{id}.json")))
}

/// Input for creating a new minion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateMinionInput {
    pub title: String,
    pub fields: Map<String, Value>,
    pub status: Option<MinionStatus>,
    pub priority: Option<MinionPriority>,
    pub tags: Vec<String>,
    pub created_by: Option<String>,
}

impl CreateMinionInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the field values
    pub fn with_fields(mut self, fields: Map<String, Value>) -> Self {
        self.fields = fields;
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: MinionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Option<MinionPriority>) -> Self {
        self.priority = priority;
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Attribute the creation to an actor
    pub fn created_by(mut self, actor: impl Into<String>) -> Self {
        self.created_by = Some(actor.into());
        self
    }
}

/// Partial update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MinionPatch {
    pub title: Option<String>,
    /// Replaces the whole `fields` map. Callers merge beforehand if needed.
    pub fields: Option<Map<String, Value>>,
    pub status: Option<MinionStatus>,
    pub priority: Option<MinionPriority>,
    pub tags: Option<Vec<String>>,
    pub updated_by: Option<String>,
}

impl MinionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace all field values
    pub fn with_fields(mut self, fields: Map<String, Value>) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: MinionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: MinionPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replace all tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Attribute the update to an actor
    pub fn updated_by(mut self, actor: impl Into<String>) -> Self {
        self.updated_by = Some(actor.into());
        self
    }

    /// True when no entity attribute would change
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.fields.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.tags.is_none()
    }
}
