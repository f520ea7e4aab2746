//! Run configuration for the `solve` command.
//!
//! Values are merged in increasing precedence: built-in defaults, the optional TOML
//! file, `-S KEY=VALUE` edits to the file layer, then explicit command-line flags.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::build_config;
