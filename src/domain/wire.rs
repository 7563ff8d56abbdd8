//! On-disk layout of a kubeconfig.
//!
//! Files store each category as a list of `{name, <category>}` objects; the
//! in-memory model keys the same entries by name. Decoding rejects repeated
//! names within one list and any `kind`/`apiVersion` other than `Config`/`v1`.

use super::{AuthInfo, Cluster, Context, Kubeconfig, API_VERSION, KIND};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_yaml::{Mapping, Value};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use thiserror::Error;

/// Schema violations found after the YAML itself parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unsupported kind {0:?}, expected \"Config\"")]
    UnsupportedKind(String),

    #[error("unsupported apiVersion {0:?}, expected \"v1\"")]
    UnsupportedApiVersion(String),

    #[error("duplicate name {name:?} in {list}")]
    DuplicateName { list: &'static str, name: String },
}

macro_rules! named_entry {
    ($owned:ident, $borrowed:ident, $field:ident, $ty:ty) => {
        #[derive(Deserialize)]
        struct $owned {
            name: String,
            #[serde(default)]
            $field: $ty,
        }

        impl $owned {
            fn into_pair(self) -> (String, $ty) {
                (self.name, self.$field)
            }
        }

        #[derive(Serialize)]
        struct $borrowed<'a> {
            name: &'a str,
            $field: &'a $ty,
        }

        impl<'a> From<(&'a String, &'a $ty)> for $borrowed<'a> {
            fn from((name, $field): (&'a String, &'a $ty)) -> Self {
                Self { name, $field }
            }
        }
    };
}

named_entry!(NamedCluster, NamedClusterRef, cluster, Cluster);
named_entry!(NamedAuthInfo, NamedAuthInfoRef, user, AuthInfo);
named_entry!(NamedContext, NamedContextRef, context, Context);
named_entry!(NamedExtension, NamedExtensionRef, extension, Value);

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawKubeconfig {
    #[serde(default, rename = "apiVersion")]
    api_version: Option<String>,
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    preferences: Option<Mapping>,
    #[serde(default)]
    clusters: Option<Vec<NamedCluster>>,
    #[serde(default)]
    users: Option<Vec<NamedAuthInfo>>,
    #[serde(default)]
    contexts: Option<Vec<NamedContext>>,
    #[serde(default)]
    current_context: Option<String>,
    #[serde(default)]
    extensions: Option<Vec<NamedExtension>>,
}

/// Field order follows what `kubectl config view` prints.
#[derive(Serialize)]
struct RawKubeconfigRef<'a> {
    #[serde(rename = "apiVersion")]
    api_version: &'static str,
    clusters: Vec<NamedClusterRef<'a>>,
    contexts: Vec<NamedContextRef<'a>>,
    #[serde(rename = "current-context")]
    current_context: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extensions: Vec<NamedExtensionRef<'a>>,
    kind: &'static str,
    preferences: &'a Mapping,
    users: Vec<NamedAuthInfoRef<'a>>,
}

impl TryFrom<RawKubeconfig> for Kubeconfig {
    type Error = SchemaError;

    fn try_from(raw: RawKubeconfig) -> Result<Self, Self::Error> {
        if let Some(kind) = raw.kind.filter(|k| !k.is_empty()) {
            if kind != KIND {
                return Err(SchemaError::UnsupportedKind(kind));
            }
        }
        if let Some(version) = raw.api_version.filter(|v| !v.is_empty()) {
            if version != API_VERSION {
                return Err(SchemaError::UnsupportedApiVersion(version));
            }
        }

        Ok(Self {
            preferences: raw.preferences.unwrap_or_default(),
            clusters: index_by_name("clusters", raw.clusters, NamedCluster::into_pair)?,
            auth_infos: index_by_name("users", raw.users, NamedAuthInfo::into_pair)?,
            contexts: index_by_name("contexts", raw.contexts, NamedContext::into_pair)?,
            current_context: raw.current_context.unwrap_or_default(),
            extensions: index_by_name("extensions", raw.extensions, NamedExtension::into_pair)?,
        })
    }
}

fn index_by_name<N, T>(
    list: &'static str,
    entries: Option<Vec<N>>,
    into_pair: fn(N) -> (String, T),
) -> Result<BTreeMap<String, T>, SchemaError> {
    let mut map = BTreeMap::new();
    for (name, value) in entries.into_iter().flatten().map(into_pair) {
        match map.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(slot) => {
                return Err(SchemaError::DuplicateName { list, name: slot.key().clone() });
            }
        }
    }
    Ok(map)
}

impl<'de> Deserialize<'de> for Kubeconfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawKubeconfig::deserialize(deserializer)?;
        Kubeconfig::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Kubeconfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawKubeconfigRef {
            api_version: API_VERSION,
            clusters: self.clusters.iter().map(Into::into).collect(),
            contexts: self.contexts.iter().map(Into::into).collect(),
            current_context: &self.current_context,
            extensions: self.extensions.iter().map(Into::into).collect(),
            kind: KIND,
            preferences: &self.preferences,
            users: self.auth_infos.iter().map(Into::into).collect(),
        }
        .serialize(serializer)
    }
}
