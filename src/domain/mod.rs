//! Kubeconfig document model
//!
//! Named entries are held in ordered maps keyed by entry name. The on-disk
//! list layout (`- name: x\n  cluster: {...}`) lives in [`wire`].

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

mod wire;

pub use wire::SchemaError;

/// The only `apiVersion` this tool reads and writes.
pub const API_VERSION: &str = "v1";

/// The only `kind` this tool reads and writes.
pub const KIND: &str = "Config";

/// A complete kubeconfig document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kubeconfig {
    /// Opaque `preferences` block.
    pub preferences: Mapping,
    pub clusters: BTreeMap<String, Cluster>,
    /// Credentials, serialized under `users`.
    pub auth_infos: BTreeMap<String, AuthInfo>,
    pub contexts: BTreeMap<String, Context>,
    /// Name of the active context. Empty means unset.
    pub current_context: String,
    /// Top-level named extensions, kept as raw YAML.
    pub extensions: BTreeMap<String, Value>,
}

impl Kubeconfig {
    /// True when the document has no clusters, users or contexts.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty() && self.auth_infos.is_empty() && self.contexts.is_empty()
    }
}

/// Connection details for one API server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Cluster {
    #[serde(default)]
    pub server: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_server_name: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub insecure_skip_tls_verify: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_authority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_authority_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    /// Keys this model does not name, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Cluster {
    pub fn new(server: impl Into<String>) -> Self {
        Self { server: server.into(), ..Self::default() }
    }
}

/// Authentication material for one user. Treated as an indivisible value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AuthInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_certificate_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_key_data: Option<String>,
    /// Exec credential plugin configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exec: Option<Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl AuthInfo {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()), ..Self::default() }
    }
}

/// Binds a cluster name to a user name. References are not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Context {
    #[serde(default)]
    pub cluster: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Context {
    pub fn new(cluster: impl Into<String>, user: impl Into<String>) -> Self {
        Self { cluster: cluster.into(), user: user.into(), ..Self::default() }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
