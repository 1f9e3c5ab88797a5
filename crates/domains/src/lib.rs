//! # domains
//!
//! Core entities of the board (threads and their embedded replies), the
//! client-facing views, and the storage port every adapter implements.

pub mod errors;
pub mod models;
pub mod ports;

// Re-exporting for easier access in other crates
pub use errors::*;
pub use models::*;
pub use ports::*;
