//! Kubeconfig I/O errors

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KubeconfigError {
    /// The file could not be read or written.
    #[error("cannot {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bytes are not a well-formed kubeconfig.
    #[error("{} is not a valid kubeconfig", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document could not be serialized.
    #[error("cannot encode kubeconfig for {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl KubeconfigError {
    pub(crate) fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io { action, path: path.to_path_buf(), source }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    pub fn is_encode(&self) -> bool {
        matches!(self, Self::Encode { .. })
    }

    /// Path of the file involved in the failure.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Decode { path, .. } | Self::Encode { path, .. } => path,
        }
    }
}
