//! JSON file storage adapter with sharded directories and atomic writes

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{EntityError, Result};
use crate::storage::{StorageAdapter, StorageFilter};
use crate::types::{shard_path, Minion};

/// Stores each minion as `<root>/<h[0:2]>/<h[2:4]>/<id>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    root: PathBuf,
}

impl JsonFileStorage {
    /// Open storage rooted at `root`, creating the directory if needed.
    ///
    /// This is idempotent - safe to call on an existing store.
    pub async fn create(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        debug!(root = %root.display(), "opened json file storage");
        Ok(Self { root })
    }

    /// The storage root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a minion with this id is stored at
    pub fn path_for(&self, id: &str) -> Result<PathBuf> {
        shard_path(&self.root, id)
    }

    async fn read_minion(path: &Path) -> Result<Minion> {
        let content = fs::read_to_string(path).await?;
        serde_json::from_str(&content).map_err(|e| EntityError::Corrupt {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load every minion under the root. Unreadable files are skipped.
    async fn load_all(&self) -> Result<Vec<Minion>> {
        let mut minions = Vec::new();
        if !self.root.exists() {
            return Ok(minions);
        }

        for shard in subdirectories(&self.root).await? {
            for leaf in subdirectories(&shard).await? {
                let mut entries = fs::read_dir(&leaf).await?;
                while let Some(entry) = entries.next_entry().await? {
                    let path = entry.path();
                    if path.extension().and_then(|e| e.to_str()) != Some("json") {
                        continue;
                    }
                    match Self::read_minion(&path).await {
                        Ok(minion) => minions.push(minion),
                        Err(e) => {
                            // Keep going so one bad file doesn't hide the rest
                            warn!("Failed to load minion from {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Ok(minions)
    }
}

#[async_trait]
impl StorageAdapter for JsonFileStorage {
    async fn get(&self, id: &str) -> Result<Option<Minion>> {
        let Ok(path) = self.path_for(id) else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        match Self::read_minion(&path).await {
            Ok(minion) => Ok(Some(minion)),
            Err(EntityError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set(&self, minion: &Minion) -> Result<()> {
        let path = self.path_for(&minion.id)?;
        let content = serde_json::to_string_pretty(minion)?;
        atomic_write(&path, content.as_bytes()).await?;
        debug!(id = %minion.id, path = %path.display(), "wrote minion");
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let path = self.path_for(id)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(id = %id, "removed minion file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self, filter: &StorageFilter) -> Result<Vec<Minion>> {
        let mut minions: Vec<Minion> = self
            .load_all()
            .await?
            .into_iter()
            .filter(|m| filter.matches(m))
            .collect();

        // Newest first, id as tie-breaker for a stable order
        minions.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        if let Some(limit) = filter.limit {
            minions.truncate(limit);
        }
        Ok(minions)
    }

    async fn search(&self, query: &str) -> Result<Vec<Minion>> {
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let live = self.list(&StorageFilter::new()).await?;
        Ok(live
            .into_iter()
            .filter(|m| {
                let text = m.searchable_text();
                terms.iter().all(|t| text.contains(t.as_str()))
            })
            .collect())
    }
}

async fn subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Atomic write via temp file and rename
async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    // Unique temp name so concurrent writers never share one
    let temp_path = path.with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
    fs::write(&temp_path, content).await?;

    // Rename (atomic on same filesystem)
    if let Err(e) = fs::rename(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(e.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{create_minion, soft_delete};
    use crate::types::{CreateMinionInput, MinionStatus};
    use chrono::{Duration, Utc};
    use minions_fields::{FieldDef, FieldKind, MinionType};
    use serde_json::json;
    use tempfile::TempDir;

    fn tent_type() -> MinionType {
        MinionType {
            id: "venues-tent".into(),
            name: "Tent".into(),
            slug: "tent".into(),
            description: String::new(),
            icon: "🎪".into(),
            schema: vec![FieldDef::labeled("name", FieldKind::String)],
        }
    }

    fn area_type() -> MinionType {
        MinionType {
            id: "venues-tent-area".into(),
            name: "Tent area".into(),
            slug: "tent-area".into(),
            ..tent_type()
        }
    }

    fn make(title: &str, t: &MinionType) -> Minion {
        let mut fields = serde_json::Map::new();
        fields.insert("name".into(), json!(title));
        create_minion(
            CreateMinionInput::new(title)
                .with_fields(fields)
                .with_status(MinionStatus::Active),
            t,
        )
        .0
    }

    async fn setup() -> (TempDir, JsonFileStorage) {
        let temp = TempDir::new().unwrap();
        let storage = JsonFileStorage::create(temp.path().join(".minions"))
            .await
            .unwrap();
        (temp, storage)
    }

    #[tokio::test]
    async fn test_create_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("store");
        JsonFileStorage::create(&root).await.unwrap();
        let storage = JsonFileStorage::create(&root).await.unwrap();
        assert!(storage.root().is_dir());
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let (_temp, storage) = setup().await;
        let minion = make("Hofbräu Festzelt", &tent_type());

        storage.set(&minion).await.unwrap();

        let path = storage.path_for(&minion.id).unwrap();
        assert!(path.exists());
        let compact = minion.id.replace('-', "");
        assert!(path.ends_with(format!("{}/{}/{}.json", &compact[0..2], &compact[2..4], minion.id)));

        let loaded = storage.get(&minion.id).await.unwrap().unwrap();
        assert_eq!(loaded, minion);
    }

    #[tokio::test]
    async fn test_set_leaves_no_temp_files() {
        let (_temp, storage) = setup().await;
        let minion = make("Tent", &tent_type());
        storage.set(&minion).await.unwrap();
        storage.set(&minion).await.unwrap();

        let dir = storage.path_for(&minion.id).unwrap();
        let names: Vec<_> = std::fs::read_dir(dir.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec![format!("{}.json", minion.id)]);
    }

    #[tokio::test]
    async fn test_get_missing_and_invalid_ids() {
        let (_temp, storage) = setup().await;
        assert!(storage.get("00000000-dead-beef").await.unwrap().is_none());
        assert!(storage.get("../../etc/passwd").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_returns_soft_deleted() {
        let (_temp, storage) = setup().await;
        let minion = make("Tent", &tent_type());
        storage.set(&soft_delete(&minion, "cli")).await.unwrap();

        let loaded = storage.get(&minion.id).await.unwrap().unwrap();
        assert!(loaded.is_deleted());
    }

    #[tokio::test]
    async fn test_hard_delete() {
        let (_temp, storage) = setup().await;
        let minion = make("Tent", &tent_type());
        storage.set(&minion).await.unwrap();

        storage.delete(&minion.id).await.unwrap();
        assert!(storage.get(&minion.id).await.unwrap().is_none());

        // Deleting again is fine
        storage.delete(&minion.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_filters_by_type_and_status() {
        let (_temp, storage) = setup().await;
        let tent = make("Tent", &tent_type());
        let area = make("Box", &area_type());
        let mut todo = make("Other tent", &tent_type());
        todo.status = Some(MinionStatus::Todo);
        for m in [&tent, &area, &todo] {
            storage.set(m).await.unwrap();
        }

        let all = storage.list(&StorageFilter::new()).await.unwrap();
        assert_eq!(all.len(), 3);

        let tents = storage
            .list(&StorageFilter::new().with_type("venues-tent"))
            .await
            .unwrap();
        assert_eq!(tents.len(), 2);

        let active_tents = storage
            .list(
                &StorageFilter::new()
                    .with_type("venues-tent")
                    .with_status(MinionStatus::Active),
            )
            .await
            .unwrap();
        assert_eq!(active_tents.len(), 1);
        assert_eq!(active_tents[0].id, tent.id);
    }

    #[tokio::test]
    async fn test_list_newest_first_with_limit() {
        let (_temp, storage) = setup().await;
        let base = Utc::now();
        let mut ids = Vec::new();
        for i in 0..3 {
            let mut m = make(&format!("Tent {i}"), &tent_type());
            m.created_at = base + Duration::seconds(i);
            storage.set(&m).await.unwrap();
            ids.push(m.id);
        }

        let listed = storage.list(&StorageFilter::new()).await.unwrap();
        let titles: Vec<_> = listed.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Tent 2", "Tent 1", "Tent 0"]);

        let limited = storage
            .list(&StorageFilter::new().with_limit(2))
            .await
            .unwrap();
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].id, ids[2]);
    }

    #[tokio::test]
    async fn test_list_excludes_tombstoned_by_default() {
        let (_temp, storage) = setup().await;
        let live = make("Live", &tent_type());
        let gone = make("Gone", &tent_type());
        storage.set(&live).await.unwrap();
        storage.set(&soft_delete(&gone, "cli")).await.unwrap();

        let listed = storage.list(&StorageFilter::new()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, live.id);

        let with_deleted = storage
            .list(&StorageFilter::new().including_deleted())
            .await
            .unwrap();
        assert_eq!(with_deleted.len(), 2);
    }

    #[tokio::test]
    async fn test_list_skips_corrupt_files() {
        let (_temp, storage) = setup().await;
        let good = make("Good", &tent_type());
        storage.set(&good).await.unwrap();

        let bad_dir = storage.root().join("ff").join("ff");
        std::fs::create_dir_all(&bad_dir).unwrap();
        std::fs::write(bad_dir.join("ffff-bad.json"), "{ not json").unwrap();

        let listed = storage.list(&StorageFilter::new()).await.unwrap();
        assert_eq!(listed.len(), 1);

        let err = storage.get("ffff-bad").await.unwrap_err();
        assert!(matches!(err, EntityError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn test_list_on_empty_store() {
        let (_temp, storage) = setup().await;
        assert!(storage.list(&StorageFilter::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search() {
        let (_temp, storage) = setup().await;
        let hofbraeu = make("Hofbräu Festzelt", &tent_type());
        let mut schotten = make("Schottenhamel", &tent_type());
        schotten.tags = vec!["opening".into()];
        let gone = make("Hofbräu Box", &area_type());
        storage.set(&hofbraeu).await.unwrap();
        storage.set(&schotten).await.unwrap();
        storage.set(&soft_delete(&gone, "cli")).await.unwrap();

        let results = storage.search("hofbräu").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, hofbraeu.id);

        let by_tag = storage.search("OPENING").await.unwrap();
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].id, schotten.id);

        assert!(storage.search("hofbräu schottenhamel").await.unwrap().is_empty());
        assert!(storage.search("   ").await.unwrap().is_empty());
    }
}
