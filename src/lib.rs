//! Loopy (workspace facade crate).
//!
//! Re-exports the puzzle crates under `loopy::{core,input,term,types}` and
//! owns the binary's runtime configuration.

pub mod config;

pub use loopy_core as core;
pub use loopy_input as input;
pub use loopy_term as term;
pub use loopy_types as types;

pub use config::{Config, Mode};
