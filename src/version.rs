//! Registry version selection and URL construction.
//!
//! Published documents are versioned by the registry schema's major.minor
//! pair, which this crate tracks in its own version: a 0.7.x build reads
//! the latest 0.7.y registry even when 0.8.z exists.

use crate::error::Error;

const REGISTRY_BASE_URL: &str = "https://networks-registry.thegraph.com";
const FALLBACK_BASE_URL: &str =
    "https://raw.githubusercontent.com/graphprotocol/networks-registry/refs/heads/main/public";

#[derive(Debug, Clone, Copy)]
pub enum RegistryVersion<'a> {
    /// Latest compatible version, v{major}.{minor}.x.
    Latest,
    /// Specific version, e.g. "0.7.0" (no leading `v`).
    Exact(&'a str),
}

impl RegistryVersion<'_> {
    pub fn primary_url(&self) -> String {
        self.url_for(REGISTRY_BASE_URL)
    }

    /// Backup location used when the primary host is unavailable.
    pub fn fallback_url(&self) -> String {
        self.url_for(FALLBACK_BASE_URL)
    }

    fn url_for(&self, base: &str) -> String {
        match self {
            RegistryVersion::Latest => format!(
                "{base}/TheGraphNetworksRegistry_v{}_{}_x.json",
                env!("CARGO_PKG_VERSION_MAJOR"),
                env!("CARGO_PKG_VERSION_MINOR"),
            ),
            RegistryVersion::Exact(version) => format!(
                "{base}/TheGraphNetworksRegistry_v{}.json",
                version.replace('.', "_"),
            ),
        }
    }
}

/// Exact versions must be `major.minor[.patch]` with purely numeric parts.
pub fn validate_version(version: &str) -> Result<(), Error> {
    let parts: Vec<&str> = version.split('.').collect();
    let well_formed = (2..=3).contains(&parts.len())
        && parts.iter().all(|p| !p.is_empty() && p.parse::<u32>().is_ok());
    if well_formed {
        Ok(())
    } else {
        Err(Error::Version(format!(
            "expected major.minor[.patch] with numeric parts, got {version:?}"
        )))
    }
}
