pub mod bootstrap;
pub mod genesis;
