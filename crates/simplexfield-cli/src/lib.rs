//! simplexfield CLI library.
//!
//! Command implementations behind the `simplexfield` binary.

pub mod commands;
pub mod logging;
