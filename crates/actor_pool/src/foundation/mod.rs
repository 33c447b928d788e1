//! Foundation utilities shared by the pool and the bundled world
//!
//! Contains logging setup, ordered collections and math aliases.

pub mod collections;
pub mod logging;
pub mod math;
