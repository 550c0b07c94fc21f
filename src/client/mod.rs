use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{NodeId, ParseNodeIdError};

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeerAddress(pub SocketAddr); // ip, port

impl PeerAddress {
    pub fn ip(&self) -> IpAddr {
        self.0.ip()
    }
    pub fn port(&self) -> u16 {
        self.0.port()
    }
}

impl std::fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum ParsePeerAddressError {
    #[error("peer address invalid")]
    Invalid,
}

impl FromStr for PeerAddress {
    type Err = ParsePeerAddressError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            s.parse().map_err(|_| ParsePeerAddressError::Invalid)?,
        ))
    }
}

/// A known entry point into the network, written as an enode URL:
/// `enode://<128-hex node id>@<ip>:<port>`
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BootstrapNode {
    pub id: NodeId,
    pub address: PeerAddress,
}

#[derive(Error, Debug)]
pub enum ParseBootstrapNodeError {
    #[error("enode scheme missing")]
    Scheme,
    #[error("enode url invalid")]
    Invalid,
    #[error("node id invalid")]
    NodeId(#[from] ParseNodeIdError),
    #[error("peer address invalid")]
    Address(#[from] ParsePeerAddressError),
}

impl std::fmt::Display for BootstrapNode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "enode://{}@{}", self.id, self.address)
    }
}

impl FromStr for BootstrapNode {
    type Err = ParseBootstrapNodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix("enode://")
            .ok_or(ParseBootstrapNodeError::Scheme)?;
        let (id, address) = rest.split_once('@').ok_or(ParseBootstrapNodeError::Invalid)?;
        Ok(Self {
            id: id.parse()?,
            address: address.parse()?,
        })
    }
}
