//! Kubeconfig file writing
//!
//! Output may carry tokens and private keys, so on Unix the file is created
//! (or truncated) with mode `0600`.

use super::codec::encode;
use super::error::KubeconfigError;
use crate::domain::Kubeconfig;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Permission bits applied to every written kubeconfig.
#[cfg(unix)]
pub const OUTPUT_MODE: u32 = 0o600;

/// Encode `config` and write it to `path`, replacing any existing content.
pub fn save(config: &Kubeconfig, path: &Path) -> Result<(), KubeconfigError> {
    let text = encode(config)
        .map_err(|source| KubeconfigError::Encode { path: path.to_path_buf(), source })?;

    write_private(path, text.as_bytes())
        .map_err(|source| KubeconfigError::io("write", path, source))?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote kubeconfig");
    Ok(())
}

#[cfg(unix)]
fn write_private(path: &Path, bytes: &[u8]) -> io::Result<()> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new().write(true).create(true).mode(OUTPUT_MODE).open(path)?;
    // `mode` only applies on creation. Tighten pre-existing files first so a
    // failed chmod leaves their contents intact.
    file.set_permissions(fs::Permissions::from_mode(OUTPUT_MODE))?;
    file.set_len(0)?;
    file.write_all(bytes)?;
    file.flush()
}

#[cfg(not(unix))]
fn write_private(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
    file.write_all(bytes)?;
    file.flush()
}
