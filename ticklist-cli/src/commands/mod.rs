//! Command implementations for the ticklist CLI

pub mod serve;

pub use serve::run_serve;
