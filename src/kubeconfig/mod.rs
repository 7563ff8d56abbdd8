//! Reading and writing kubeconfig files
//!
//! [`codec`] turns bytes into a [`Kubeconfig`](crate::domain::Kubeconfig) and back;
//! [`loader`] and [`writer`] add the file I/O around it.

pub mod codec;
pub mod error;
pub mod loader;
pub mod writer;

pub use codec::{decode, encode};
pub use error::KubeconfigError;
pub use loader::load;
pub use writer::save;
