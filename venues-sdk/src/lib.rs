//! Minions Venues SDK
//!
//! Tent definitions, capacities, reservation rules, and opening schedules for
//! Oktoberfest, declared as [`MinionType`](minions_fields::MinionType) schemas on top of `minions-fields`.
//!
//! ```rust
//! use venues_sdk::{create_client, ClientOptions};
//!
//! let client = create_client(ClientOptions::default()).unwrap();
//! assert_eq!(client.version(), venues_sdk::VERSION);
//! assert!(client.registry().get_by_slug("tent").is_some());
//! ```

pub mod schemas;

use std::path::PathBuf;

use minions_fields::{Result, TypeRegistry};
use serde::Serialize;

pub use schemas::{
    custom_types, opening_schedule_type, reservation_rule_type, tent_area_type, tent_type,
};

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Human-readable project name
pub const PROJECT_NAME: &str = "Minions Venues";

/// One-line project description
pub const DESCRIPTION: &str =
    "Tent definitions, capacities, reservation rules, and opening schedules for Oktoberfest";

/// Default storage directory when nothing else is configured
pub const DEFAULT_STORE_DIR: &str = ".minions";

/// Options accepted by [`create_client`]
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ClientOptions {
    /// Storage root; `None` means [`DEFAULT_STORE_DIR`]
    pub store_dir: Option<PathBuf>,
    pub debug: bool,
}

/// Entry point bundling the SDK version, options and the venue type registry.
#[derive(Debug, Clone)]
pub struct VenuesClient {
    options: ClientOptions,
    registry: TypeRegistry,
}

impl VenuesClient {
    pub fn version(&self) -> &'static str {
        VERSION
    }

    pub fn debug(&self) -> bool {
        self.options.debug
    }

    /// Resolved storage root
    pub fn store_dir(&self) -> PathBuf {
        self.options
            .store_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR))
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }
}

/// Create a client with the venue types registered.
pub fn create_client(options: ClientOptions) -> Result<VenuesClient> {
    let registry = TypeRegistry::from_types(custom_types())?;
    tracing::debug!(types = registry.len(), "venues client created");
    Ok(VenuesClient { options, registry })
}
