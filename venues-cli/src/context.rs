//! CLI Context
//!
//! Holds the venue type registry, the resolved store directory and the
//! storage handle. Unless one is injected, a `JsonFileStorage` is opened on
//! first use.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use minions_entity::{EntityError, JsonFileStorage, StorageAdapter};
use minions_fields::{MinionType, TypeRegistry};
use tokio::sync::OnceCell;
use venues_sdk::{create_client, ClientOptions, VenuesClient};

use crate::config::StoreConfig;
use crate::error::{CliError, CliResult};

pub struct CliContext {
    client: VenuesClient,
    store_dir: PathBuf,
    storage: OnceCell<Arc<dyn StorageAdapter>>,
}

impl CliContext {
    pub fn new(store: StoreConfig, debug: bool) -> CliResult<Self> {
        let client = create_client(ClientOptions {
            store_dir: Some(store.dir.clone()),
            debug,
        })?;
        Ok(Self {
            client,
            store_dir: store.dir,
            storage: OnceCell::new(),
        })
    }

    /// Context backed by an existing storage adapter instead of the file store.
    pub fn with_storage(
        store: StoreConfig,
        debug: bool,
        storage: Arc<dyn StorageAdapter>,
    ) -> CliResult<Self> {
        let mut ctx = Self::new(store, debug)?;
        ctx.storage = OnceCell::new_with(Some(storage));
        Ok(ctx)
    }

    pub fn client(&self) -> &VenuesClient {
        &self.client
    }

    pub fn registry(&self) -> &TypeRegistry {
        self.client.registry()
    }

    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    /// Storage handle; the default file store creates its directory the first time this is called.
    pub async fn storage(&self) -> CliResult<&dyn StorageAdapter> {
        let storage = self
            .storage
            .get_or_try_init(|| async {
                let storage = JsonFileStorage::create(self.store_dir.clone()).await?;
                Ok::<_, EntityError>(Arc::new(storage) as Arc<dyn StorageAdapter>)
            })
            .await?;
        Ok(storage.as_ref())
    }

    /// Look up a type by slug, failing with the list of known slugs.
    pub fn find_type(&self, slug: &str) -> CliResult<&MinionType> {
        self.registry().get_by_slug(slug).ok_or_else(|| {
            CliError::unknown_type(
                slug,
                self.registry().slugs().into_iter().map(String::from).collect(),
            )
        })
    }

    /// Look up a type by id, failing with the list of known ids.
    pub fn find_type_by_id(&self, id: &str) -> CliResult<&MinionType> {
        self.registry().get(id).ok_or_else(|| {
            CliError::unknown_type(id, self.registry().types().map(|t| t.id.clone()).collect())
        })
    }
}
