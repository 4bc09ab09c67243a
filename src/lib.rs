// Public module exports for the pitboard binary
pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod logging;
pub mod roster;
pub mod store;
