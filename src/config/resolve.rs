//! Path resolution: positionals > flags/env

use crate::merge::MergeOptions;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("you must specify the paths to both kubeconfig files and the output file")]
    MissingPaths,

    #[error("expected 3 positional paths (kubeconfig1, kubeconfig2, output), got {0}")]
    PartialPositional(usize),
}

/// Everything a merge run needs, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    pub first: PathBuf,
    pub second: PathBuf,
    pub output: PathBuf,
    pub options: MergeOptions,
}

/// Raw path inputs before precedence is applied.
#[derive(Debug, Clone, Default)]
pub struct PathSources {
    /// Positional paths in command-line order.
    pub positional: Vec<PathBuf>,
    pub first: Option<PathBuf>,
    pub second: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Build a [`MergeConfig`] from the given sources.
///
/// Three positionals override the flags. Empty paths count as missing.
pub fn resolve(sources: PathSources, options: MergeOptions) -> Result<MergeConfig, ConfigError> {
    let PathSources { positional, first, second, output } = sources;
    let positional: Vec<PathBuf> =
        positional.into_iter().filter(|p| !p.as_os_str().is_empty()).collect();

    let (first, second, output) = match <[PathBuf; 3]>::try_from(positional) {
        Ok([first, second, output]) => (Some(first), Some(second), Some(output)),
        Err(rest) if rest.is_empty() => (first, second, output),
        Err(rest) => return Err(ConfigError::PartialPositional(rest.len())),
    };

    let present = |p: Option<PathBuf>| p.filter(|p| !p.as_os_str().is_empty());
    match (present(first), present(second), present(output)) {
        (Some(first), Some(second), Some(output)) => {
            tracing::debug!(
                first = %first.display(),
                second = %second.display(),
                output = %output.display(),
                "resolved paths"
            );
            Ok(MergeConfig { first, second, output, options })
        }
        _ => Err(ConfigError::MissingPaths),
    }
}
