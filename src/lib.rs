#[macro_use]
extern crate lazy_static;

pub mod client;
pub mod config;
pub mod core;
