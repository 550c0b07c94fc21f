use crate::core::GenesisHash;

/// Canonical network names, as used in DNS discovery list domains.
pub const MAINNET_NAME: &str = "mainnet";
pub const TESTNET_NAME: &str = "testnet";

lazy_static! {
    pub static ref MAINNET_GENESIS_HASH: GenesisHash =
        "d4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3"
            .parse()
            .unwrap();
    pub static ref TESTNET_GENESIS_HASH: GenesisHash =
        "41941023680923e0fe4d74a34bdac8141f2540e3ae90623718e47d66d1ca4a2d"
            .parse()
            .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_hashes_distinct() {
        assert_ne!(*MAINNET_GENESIS_HASH, *TESTNET_GENESIS_HASH);
        assert_ne!(*MAINNET_GENESIS_HASH, GenesisHash::default());
        assert_ne!(*TESTNET_GENESIS_HASH, GenesisHash::default());
    }
}
