//! Load a registry document from JSON and run the lookup helpers.
//!
//! ```sh
//! cargo run --example basic
//! ```

use networks_registry::{apply_env_vars, NetworksRegistry};

const SAMPLE: &str = r#"{
  "$schema": "https://networks-registry.thegraph.com/TheGraphNetworksRegistrySchema_v0_7.json",
  "description": "Sample registry",
  "networks": [
    {
      "aliases": ["ethereum", "eth"],
      "caip2Id": "eip155:1",
      "fullName": "Ethereum Mainnet",
      "id": "mainnet",
      "issuanceRewards": true,
      "networkType": "mainnet",
      "rpcUrls": ["https://eth.example.com/rpc/{CUSTOM_API_KEY}"],
      "services": {},
      "shortName": "Ethereum"
    }
  ],
  "title": "Sample",
  "updatedAt": "2025-01-01T00:00:00Z",
  "version": "0.7.0"
}"#;

fn main() -> Result<(), networks_registry::Error> {
    let registry = NetworksRegistry::from_json(SAMPLE)?;
    println!("registry v{} with {} network(s)", registry.version, registry.networks.len());

    for query in ["mainnet", "eth", "nope"] {
        match registry.network_by_graph_id(query) {
            Some(network) => println!("{query} -> {} ({})", network.id, network.full_name),
            None => println!("{query} -> not found"),
        }
    }

    if let Some(network) = registry.network_by_caip2_id("eip155:1") {
        for url in network.rpc_urls.iter().flatten() {
            match apply_env_vars(url) {
                Some(resolved) => println!("rpc: {resolved}"),
                None => println!("rpc: {url} (set CUSTOM_API_KEY to use this endpoint)"),
            }
        }
    }

    println!("{}", registry.to_json()?);
    Ok(())
}
