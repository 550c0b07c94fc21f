use std::collections::HashMap;

use crate::client::BootstrapNode;
use crate::config::genesis::{
    MAINNET_GENESIS_HASH, MAINNET_NAME, TESTNET_GENESIS_HASH, TESTNET_NAME,
};
use crate::core::GenesisHash;

/// Root key of the public DNS-based node list trees.
const DNS_PREFIX: &str = "enrtree://AKA3AM6LPBYEUDMVNU3BSVQJ5AD45Y7YPOHJLEF6W26QOE4VTUDPE@";

lazy_static! {
    /// Entry points into the main network, tried in order by the discovery
    /// subsystem when no other peers are known.
    pub static ref MAINNET_BOOTSTRAP_NODES: Vec<BootstrapNode> = vec![
        "enode://f9b3ec3d42b111092051c97d3ea82192a7d2fc836e6b46c7a71add04e3f1acf3c34d57ff7c30fbaaf49a5645caa763795bf6ec664f90f8b80ffd2c12c5a08cbc@43.198.15.188:30305"
            .parse()
            .unwrap(),
    ];

    /// Entry points into the test network.
    pub static ref TESTNET_BOOTSTRAP_NODES: Vec<BootstrapNode> = vec![
        "enode://c68f52a3ae56eeaecb09696ca0fad791749f7115d8cb9c3f2082187fd137de495ac0b262ac51133981d3e75bd95bfc8dd1be4a2b7b6cd7f177f6e9bea3272c64@18.162.51.194:30305"
            .parse()
            .unwrap(),
    ];

    /// No static entry points for the v5 discovery variant; peers come from
    /// DNS discovery only.
    pub static ref V5_BOOTSTRAP_NODES: Vec<BootstrapNode> = Vec::new();

    static ref KNOWN_DNS_NETWORKS: HashMap<GenesisHash, &'static str> = [
        (*MAINNET_GENESIS_HASH, MAINNET_NAME),
        (*TESTNET_GENESIS_HASH, TESTNET_NAME),
    ]
    .into_iter()
    .collect();
}

/// Returns the address of the public DNS-based node list for the given
/// genesis hash and protocol, or an empty string if no list is known for
/// that network.
pub fn known_dns_network(genesis: GenesisHash, protocol: &str) -> String {
    match KNOWN_DNS_NETWORKS.get(&genesis) {
        Some(name) => format!("{}{}.{}.ethdisco.net", DNS_PREFIX, protocol, name),
        None => {
            log::debug!("no known dns node list for genesis {}", genesis);
            String::new()
        }
    }
}
