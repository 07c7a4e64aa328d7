//! Loading registry documents and looking networks up.

use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::convert;
use crate::datum::Datum;
use crate::error::Error;
use crate::path_de;
use crate::type_map::{REGISTRY_ROOT, REGISTRY_TYPES};
use crate::types::{Network, NetworksRegistry};
use crate::version::RegistryVersion;

impl FromStr for NetworksRegistry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

impl NetworksRegistry {
    /// Decode a registry document: schema-validate the JSON text against
    /// the registry type map, then materialize the typed records.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let datum = convert::decode(json, REGISTRY_ROOT, &REGISTRY_TYPES)?;
        path_de::from_value_with_path(datum.into_value())
    }

    /// Read and decode a registry document from a local file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        debug!(path = %path.as_ref().display(), "loading registry from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Render this registry back to wire-format JSON: camelCase keys,
    /// canonical dates, 2-space indentation.
    pub fn to_json(&self) -> Result<String, Error> {
        let value = serde_json::to_value(self).map_err(Error::Parse)?;
        convert::encode(&Datum::from(value), REGISTRY_ROOT, &REGISTRY_TYPES)
    }

    /// Fetch and decode the latest compatible registry version. A 0.7.x
    /// build reads the latest 0.7.y registry even when 0.8.z exists.
    #[cfg(feature = "fetch")]
    pub fn from_latest_version() -> Result<Self, Error> {
        crate::fetch::fetch_registry(RegistryVersion::Latest)
    }

    /// Fetch and decode a specific registry version, e.g. "0.7.0".
    #[cfg(feature = "fetch")]
    pub fn from_exact_version(version: &str) -> Result<Self, Error> {
        crate::fetch::fetch_registry(RegistryVersion::Exact(version))
    }

    /// URL of the latest compatible registry document.
    pub fn latest_version_url() -> String {
        RegistryVersion::Latest.primary_url()
    }

    /// URL of a specific registry version, e.g. "0.7.0".
    pub fn exact_version_url(version: &str) -> String {
        RegistryVersion::Exact(version).primary_url()
    }

    /// Find a network by its established id. Linear scan; a miss is a
    /// `None`, not an error.
    pub fn network_by_id(&self, id: &str) -> Option<&Network> {
        self.networks.iter().find(|network| network.id == id)
    }

    /// Find a network by its id or one of its aliases.
    pub fn network_by_alias(&self, alias: &str) -> Option<&Network> {
        self.networks.iter().find(|network| {
            network.id == alias
                || network
                    .aliases
                    .as_ref()
                    .is_some_and(|aliases| aliases.iter().any(|a| a == alias))
        })
    }

    /// Unified lookup by graph id: matches either the established id or an
    /// alias.
    pub fn network_by_graph_id(&self, id: &str) -> Option<&Network> {
        self.network_by_alias(id)
    }

    /// Find a network by CAIP-2 chain id, `namespace:reference` form
    /// (e.g. "eip155:1").
    pub fn network_by_caip2_id(&self, caip2_id: &str) -> Option<&Network> {
        if !caip2_id.contains(':') {
            warn!(
                chain_id = caip2_id,
                "CAIP-2 chain id should be namespace:reference, e.g. eip155:1"
            );
            return None;
        }
        self.networks.iter().find(|network| network.caip2_id == caip2_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NetworkType;
    use std::io::Write;

    const REGISTRY_JSON: &str = r#"{
        "$schema": "https://networks-registry.thegraph.com/TheGraphNetworksRegistrySchema_v0_7.json",
        "version": "0.7.0",
        "title": "Test Registry",
        "description": "Test Registry",
        "updatedAt": "2025-01-01T00:00:00Z",
        "networks": [
            {
                "id": "mainnet",
                "fullName": "Ethereum Mainnet",
                "shortName": "Ethereum",
                "caip2Id": "eip155:1",
                "networkType": "mainnet",
                "aliases": ["ethereum", "eth"],
                "issuanceRewards": true,
                "services": {}
            }
        ]
    }"#;

    #[test]
    fn parses_and_exposes_typed_records() {
        let registry = NetworksRegistry::from_json(REGISTRY_JSON).expect("parse registry");
        assert_eq!(registry.version, "0.7.0");
        assert_eq!(registry.networks.len(), 1);
        assert_eq!(registry.networks[0].network_type, NetworkType::Mainnet);
        assert_eq!(registry.updated_at.to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn from_str_delegates_to_from_json() {
        let registry: NetworksRegistry = REGISTRY_JSON.parse().expect("parse registry");
        assert_eq!(registry.networks[0].id, "mainnet");
    }

    #[test]
    fn lookups_by_id_alias_and_graph_id() {
        let registry = NetworksRegistry::from_json(REGISTRY_JSON).unwrap();

        assert_eq!(registry.network_by_id("mainnet").map(|n| n.id.as_str()), Some("mainnet"));
        assert!(registry.network_by_id("eth").is_none());

        for alias in ["mainnet", "ethereum", "eth"] {
            let network = registry.network_by_alias(alias);
            assert_eq!(network.map(|n| n.id.as_str()), Some("mainnet"), "alias {alias}");
            assert_eq!(registry.network_by_graph_id(alias).map(|n| n.id.as_str()), Some("mainnet"));
        }

        assert!(registry.network_by_alias("nonexistent").is_none());
        assert!(registry.network_by_graph_id("nonexistent").is_none());
    }

    #[test]
    fn caip2_lookup_requires_the_two_part_form() {
        let registry = NetworksRegistry::from_json(REGISTRY_JSON).unwrap();
        assert_eq!(
            registry.network_by_caip2_id("eip155:1").map(|n| n.id.as_str()),
            Some("mainnet")
        );
        assert!(registry.network_by_caip2_id("eip155:2").is_none());
        // Colon-less input is malformed, not merely absent.
        assert!(registry.network_by_caip2_id("eip155").is_none());
    }

    #[test]
    fn file_round_trip_with_tempfile() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(REGISTRY_JSON.as_bytes()).unwrap();
        let registry = NetworksRegistry::from_file(file.path()).expect("load registry");
        assert_eq!(registry.networks.len(), 1);
    }

    #[test]
    fn io_errors_are_distinct() {
        assert!(matches!(
            NetworksRegistry::from_file("/non/existent/path.json"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn parse_and_validation_errors_are_distinct() {
        assert!(matches!(NetworksRegistry::from_json("{invalid"), Err(Error::Parse(_))));

        let off_schema = REGISTRY_JSON.replace(
            "\"networks\": [",
            "\"networks\": \"not-an-array\", \"unused\": [",
        );
        match NetworksRegistry::from_json(&off_schema) {
            Err(Error::Convert(e)) => {
                let msg = e.to_string();
                assert!(msg.contains("for key \"networks\""), "{msg}");
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn to_json_restores_wire_format() {
        let registry = NetworksRegistry::from_json(REGISTRY_JSON).unwrap();
        let text = registry.to_json().expect("encode registry");
        assert!(text.contains("\"$schema\""));
        assert!(text.contains("\"updatedAt\": \"2025-01-01T00:00:00Z\""));
        assert!(!text.contains("updated_at"));

        let again = NetworksRegistry::from_json(&text).expect("reparse encoded registry");
        assert_eq!(registry, again);
    }

    #[test]
    fn version_url_helpers() {
        assert!(NetworksRegistry::latest_version_url()
            .ends_with(&format!("TheGraphNetworksRegistry_v{}_{}_x.json", env!("CARGO_PKG_VERSION_MAJOR"), env!("CARGO_PKG_VERSION_MINOR"))));
        assert!(NetworksRegistry::exact_version_url("1.2.3").ends_with("TheGraphNetworksRegistry_v1_2_3.json"));
    }
}
