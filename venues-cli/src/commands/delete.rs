use colored::Colorize;
use minions_entity::{soft_delete, EntityError, StorageAdapter};

use super::CLI_ACTOR;
use crate::context::CliContext;
use crate::error::{CliError, CliResult};

/// Soft-delete by default; `hard` removes the file for good, even when it no
/// longer parses.
pub async fn run_delete(ctx: &CliContext, id: &str, hard: bool) -> CliResult<()> {
    let storage = ctx.storage().await?;
    let existing = match storage.get(id).await {
        Err(EntityError::Corrupt { path, message }) if hard => {
            tracing::warn!(path = %path.display(), %message, "removing unreadable minion");
            return hard_delete(storage, id).await;
        }
        result => result?.ok_or_else(|| CliError::not_found(id))?,
    };

    if hard {
        return hard_delete(storage, id).await;
    }

    let deleted = soft_delete(&existing, CLI_ACTOR);
    storage.set(&deleted).await?;
    tracing::debug!(id, "minion soft-deleted");
    println!(
        "\n  {} Soft-deleted {}",
        "✔".yellow(),
        deleted.title.bold()
    );
    println!("  {}\n", "Use --hard to permanently remove".dimmed());
    Ok(())
}

async fn hard_delete(storage: &dyn StorageAdapter, id: &str) -> CliResult<()> {
    storage.delete(id).await?;
    tracing::debug!(id, "minion removed");
    println!("\n  {} Permanently deleted {}\n", "🗑 ".red(), id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{StoreConfig, StoreSource};
    use minions_entity::JsonFileStorage;
    use tempfile::TempDir;

    const ID: &str = "abcd1234-0000-4000-8000-000000000000";

    async fn corrupt_store() -> (TempDir, CliContext, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("store");
        let path = JsonFileStorage::create(&dir).await.unwrap().path_for(ID).unwrap();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        let ctx = CliContext::new(
            StoreConfig {
                dir,
                source: StoreSource::Flag,
            },
            false,
        )
        .unwrap();
        (temp, ctx, path)
    }

    #[tokio::test]
    async fn test_hard_delete_removes_unreadable_file() {
        let (_temp, ctx, path) = corrupt_store().await;
        run_delete(&ctx, ID, true).await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_soft_delete_of_unreadable_file_fails() {
        let (_temp, ctx, path) = corrupt_store().await;
        let result = run_delete(&ctx, ID, false).await;
        assert!(matches!(
            result,
            Err(CliError::Entity(EntityError::Corrupt { .. }))
        ));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let (_temp, ctx, _) = corrupt_store().await;
        let result = run_delete(&ctx, "ffff0000-0000-4000-8000-000000000000", true).await;
        assert!(matches!(result, Err(CliError::NotFound { .. })));
    }
}
