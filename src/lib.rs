//! kubeconfig-merge: merge two kubeconfig files into one
//!
//! Clusters, users and contexts are unioned by name; on a collision the entry
//! from the second file replaces the one from the first.

pub mod cli;
pub mod config;
pub mod domain;
pub mod kubeconfig;
pub mod merge;
pub mod pipeline;

pub use domain::{AuthInfo, Cluster, Context, Kubeconfig};
pub use kubeconfig::{load, save, KubeconfigError};
pub use merge::{merge, merge_with, CurrentContextPolicy, MergeOptions};
