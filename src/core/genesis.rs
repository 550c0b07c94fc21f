use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Genesis hash of a network, used as an opaque key distinguishing one
/// network variant from another.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GenesisHash([u8; 32]);

impl GenesisHash {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for GenesisHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

#[derive(Error, Debug)]
pub enum ParseGenesisHashError {
    #[error("genesis hash invalid")]
    Invalid,
}

impl std::fmt::Display for GenesisHash {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for GenesisHash {
    type Err = ParseGenesisHashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|_| ParseGenesisHashError::Invalid)?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| ParseGenesisHashError::Invalid)?;
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_hash_hex_roundtrip() {
        let h: GenesisHash = "d4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3"
            .parse()
            .unwrap();
        assert_eq!(
            h.to_string(),
            "d4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3"
        );
    }

    #[test]
    fn test_genesis_hash_accepts_0x_prefix() {
        let plain: GenesisHash =
            "d4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3"
                .parse()
                .unwrap();
        let prefixed: GenesisHash =
            "0xd4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3"
                .parse()
                .unwrap();
        assert_eq!(plain, prefixed);
    }

    #[test]
    fn test_genesis_hash_rejects_bad_input() {
        assert!("".parse::<GenesisHash>().is_err());
        assert!("d4e567".parse::<GenesisHash>().is_err());
        assert!(
            "zze56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3"
                .parse::<GenesisHash>()
                .is_err()
        );
        assert!(
            "d4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3ff"
                .parse::<GenesisHash>()
                .is_err()
        );
    }
}
