//! Run configuration
//!
//! Paths arrive either as three positionals or as flags (which clap also fills
//! from the environment). [`resolve`] applies precedence once at startup and
//! produces the [`MergeConfig`] every later stage reads.

pub mod resolve;

pub use resolve::{resolve, ConfigError, MergeConfig, PathSources};
