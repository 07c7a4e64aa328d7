//! Typed access to the networks registry, a versioned JSON document of
//! blockchain network metadata.
//!
//! Documents are decoded through a schema-directed transform engine
//! ([`convert`]) driven by a hand-authored type table ([`type_map`]): the
//! engine walks the parsed JSON against declarative descriptors, maps wire
//! keys to record keys, coerces dates, and fails with path-aware
//! diagnostics. The same engine runs in reverse to re-emit wire-format
//! JSON. On top of that sit the typed records, file/URL loading, and
//! convenience lookups.
//!
//! ```
//! use networks_registry::NetworksRegistry;
//!
//! # fn main() -> Result<(), networks_registry::Error> {
//! let registry = NetworksRegistry::from_json(r#"{
//!     "$schema": "https://networks-registry.thegraph.com/TheGraphNetworksRegistrySchema_v0_7.json",
//!     "version": "0.7.0",
//!     "title": "Example",
//!     "description": "Example",
//!     "updatedAt": "2025-01-01T00:00:00Z",
//!     "networks": [{
//!         "id": "mainnet",
//!         "fullName": "Ethereum Mainnet",
//!         "shortName": "Ethereum",
//!         "caip2Id": "eip155:1",
//!         "networkType": "mainnet",
//!         "issuanceRewards": true,
//!         "services": {}
//!     }]
//! }"#)?;
//!
//! let mainnet = registry.network_by_caip2_id("eip155:1");
//! assert_eq!(mainnet.map(|n| n.id.as_str()), Some("mainnet"));
//! # Ok(())
//! # }
//! ```

mod client;
pub mod convert;
pub mod datum;
pub mod env;
mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
mod path_de;
pub mod schema;
pub mod type_map;
mod types;
pub mod version;

pub use datum::Datum;
pub use env::apply_env_vars;
pub use error::Error;
pub use type_map::{registry_type_map, REGISTRY_ROOT, REGISTRY_TYPES};
pub use types::*;
pub use version::RegistryVersion;
