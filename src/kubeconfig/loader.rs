//! Kubeconfig file loading

use super::codec::decode;
use super::error::KubeconfigError;
use crate::domain::Kubeconfig;
use std::fs;
use std::path::Path;

/// Read and decode the kubeconfig at `path`.
pub fn load(path: &Path) -> Result<Kubeconfig, KubeconfigError> {
    let bytes = fs::read(path).map_err(|source| KubeconfigError::io("read", path, source))?;

    let config = decode(&bytes)
        .map_err(|source| KubeconfigError::Decode { path: path.to_path_buf(), source })?;

    tracing::debug!(
        path = %path.display(),
        clusters = config.clusters.len(),
        users = config.auth_infos.len(),
        contexts = config.contexts.len(),
        "loaded kubeconfig"
    );
    Ok(config)
}
