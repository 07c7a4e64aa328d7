//! Fetch the latest published registry and print a few entries.
//!
//! ```sh
//! cargo run --example fetch --features fetch
//! ```

use networks_registry::NetworksRegistry;

fn main() -> Result<(), networks_registry::Error> {
    let registry = NetworksRegistry::from_latest_version()?;
    println!(
        "registry v{} updated {} with {} networks",
        registry.version,
        registry.updated_at,
        registry.networks.len()
    );

    for network in registry.networks.iter().take(10) {
        println!("{:24} {:10?} {}", network.id, network.network_type, network.caip2_id);
    }
    Ok(())
}
