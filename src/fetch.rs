//! Versioned retrieval with a primary and a backup endpoint.

use tracing::{debug, warn};

use crate::error::Error;
use crate::types::NetworksRegistry;
use crate::version::{validate_version, RegistryVersion};

/// Fetch and decode a registry document. Tries the primary host first and
/// falls back to the backup host on any failure, HTTP or decode alike. If
/// both fail, the primary's error is the one reported.
pub fn fetch_registry(version: RegistryVersion<'_>) -> Result<NetworksRegistry, Error> {
    if let RegistryVersion::Exact(v) = version {
        validate_version(v)?;
    }

    let primary = version.primary_url();
    debug!(url = %primary, "fetching registry");
    match fetch_from(&primary) {
        Ok(registry) => Ok(registry),
        Err(primary_err) => {
            let fallback = version.fallback_url();
            warn!(url = %fallback, error = %primary_err, "primary fetch failed, trying fallback");
            fetch_from(&fallback).map_err(|_| primary_err)
        }
    }
}

fn fetch_from(url: &str) -> Result<NetworksRegistry, Error> {
    // ureq turns non-2xx statuses into errors on its own.
    let mut response = ureq::get(url).call().map_err(|e| Error::Http(Box::new(e)))?;
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| Error::Http(Box::new(e)))?;
    NetworksRegistry::from_json(&body)
}
