//! Library crate root re-exporting the launcher and its configuration.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod config;
pub mod launcher;
