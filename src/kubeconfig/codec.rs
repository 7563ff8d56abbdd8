//! YAML codec for kubeconfig documents

use crate::domain::Kubeconfig;
use serde_yaml::Value;

/// Decode a kubeconfig from raw bytes.
///
/// Empty input (or a document that is only `null`) yields an empty
/// [`Kubeconfig`], the same as `kubectl` does for a blank file. Merge keys
/// (`<<: *anchor`) are expanded before the schema is applied.
pub fn decode(bytes: &[u8]) -> Result<Kubeconfig, serde_yaml::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Kubeconfig::default());
    }
    let mut value = serde_yaml::from_slice::<Value>(bytes)?;
    if value.is_null() {
        return Ok(Kubeconfig::default());
    }
    value.apply_merge()?;
    serde_yaml::from_value(value)
}

/// Encode a kubeconfig as YAML text.
pub fn encode(config: &Kubeconfig) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(config)
}
