mod genesis;
mod node_id;

pub use genesis::{GenesisHash, ParseGenesisHashError};
pub use node_id::{NodeId, ParseNodeIdError};
