//! Configuration model for arrow-launcher.
//!
//! This module defines the `Config` struct loaded from an optional YAML file
//! passed with `--config`. It supports forward-compatible YAML parsing
//! (unknown fields are ignored), defaults for every field, and validation of
//! config values.

mod model;
mod operations;


pub use model::Config;
