//! Kubeconfig merging
//!
//! Merging is a key-wise union of clusters, users and contexts where the
//! second document wins on a name collision. A winning entry replaces the
//! losing one whole; fields are never combined.

use crate::domain::Kubeconfig;
use clap::ValueEnum;
use std::collections::BTreeMap;

/// How the merged document's `current-context` is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CurrentContextPolicy {
    /// Leave it empty, as a freshly created kubeconfig has it.
    #[default]
    Unset,
    /// The first document's value, or the second's when the first has none.
    PreferFirst,
    /// The second document's value, or the first's when the second has none.
    PreferSecond,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOptions {
    pub current_context: CurrentContextPolicy,
}

/// Merge `second` over `first` with default options.
pub fn merge(first: &Kubeconfig, second: &Kubeconfig) -> Kubeconfig {
    merge_with(first, second, &MergeOptions::default())
}

/// Merge `second` over `first`.
///
/// The result starts empty; `preferences` and `extensions` of the inputs are
/// not carried over. Entries are cloned, so the result never shares state with
/// either input.
pub fn merge_with(first: &Kubeconfig, second: &Kubeconfig, options: &MergeOptions) -> Kubeconfig {
    let mut merged = Kubeconfig::default();

    for source in [first, second] {
        union_into(&mut merged.clusters, &source.clusters);
        union_into(&mut merged.auth_infos, &source.auth_infos);
        union_into(&mut merged.contexts, &source.contexts);
    }

    merged.current_context = match options.current_context {
        CurrentContextPolicy::Unset => String::new(),
        CurrentContextPolicy::PreferFirst => {
            first_non_empty(&first.current_context, &second.current_context)
        }
        CurrentContextPolicy::PreferSecond => {
            first_non_empty(&second.current_context, &first.current_context)
        }
    };

    tracing::debug!(
        clusters = merged.clusters.len(),
        users = merged.auth_infos.len(),
        contexts = merged.contexts.len(),
        current_context = %merged.current_context,
        "merged kubeconfigs"
    );
    merged
}

fn union_into<T: Clone>(target: &mut BTreeMap<String, T>, source: &BTreeMap<String, T>) {
    for (name, entry) in source {
        target.insert(name.clone(), entry.clone());
    }
}

fn first_non_empty(preferred: &str, fallback: &str) -> String {
    let chosen = if preferred.is_empty() { fallback } else { preferred };
    chosen.to_string()
}
