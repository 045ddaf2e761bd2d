//! Library crate root re-exporting launcher modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod launcher;
