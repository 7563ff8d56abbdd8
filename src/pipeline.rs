//! Load, merge and save in one pass

use crate::config::MergeConfig;
use crate::kubeconfig::{load, save};
use crate::merge::merge_with;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub output: PathBuf,
    pub clusters: usize,
    pub users: usize,
    pub contexts: usize,
    pub current_context: String,
}

/// Merge `config.second` over `config.first` and write the result to
/// `config.output`. The output file is only touched once both inputs loaded.
pub fn run(config: &MergeConfig) -> Result<MergeSummary> {
    let first = load(&config.first).context("failed to read kubeconfig1")?;
    let second = load(&config.second).context("failed to read kubeconfig2")?;

    let merged = merge_with(&first, &second, &config.options);

    save(&merged, &config.output).context("failed to write merged kubeconfig")?;

    Ok(MergeSummary {
        output: config.output.clone(),
        clusters: merged.clusters.len(),
        users: merged.auth_infos.len(),
        contexts: merged.contexts.len(),
        current_context: merged.current_context,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kubeconfig::KubeconfigError;
    use crate::merge::{CurrentContextPolicy, MergeOptions};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const FIRST: &str = r#"apiVersion: v1
kind: Config
current-context: ctx1
clusters:
- name: cluster1
  cluster:
    server: https://cluster1.example.com
users:
- name: user1
  user:
    token: token1
contexts:
- name: ctx1
  context:
    cluster: cluster1
    user: user1
"#;

    const SECOND: &str = r#"apiVersion: v1
kind: Config
current-context: ctx2
clusters:
- name: cluster2
  cluster:
    server: https://cluster2.example.com
users:
- name: user2
  user:
    token: token2
contexts:
- name: ctx1
  context:
    cluster: cluster2
    user: user2
- name: ctx2
  context:
    cluster: cluster2
    user: user2
"#;

    fn setup(first: &str, second: &str) -> (TempDir, MergeConfig) {
        let tmp = TempDir::new().expect("tmp");
        let config = MergeConfig {
            first: tmp.path().join("a.yaml"),
            second: tmp.path().join("b.yaml"),
            output: tmp.path().join("merged.yaml"),
            options: MergeOptions::default(),
        };
        fs::write(&config.first, first).expect("write a");
        fs::write(&config.second, second).expect("write b");
        (tmp, config)
    }

    fn kubeconfig_error(err: &anyhow::Error) -> &KubeconfigError {
        err.downcast_ref::<KubeconfigError>().expect("kubeconfig error")
    }

    #[test]
    fn merges_overlapping_contexts() {
        let (_tmp, config) = setup(FIRST, SECOND);

        let summary = run(&config).expect("run");
        assert_eq!(summary.clusters, 2);
        assert_eq!(summary.users, 2);
        assert_eq!(summary.contexts, 2);
        assert_eq!(summary.current_context, "");

        let merged = load(&config.output).expect("load merged");
        assert_eq!(merged.contexts["ctx1"].cluster, "cluster2");
        assert_eq!(merged.contexts["ctx1"].user, "user2");
        assert_eq!(merged.contexts["ctx2"].cluster, "cluster2");
        assert!(merged.clusters.contains_key("cluster1"));
        assert!(merged.auth_infos.contains_key("user1"));
    }

    #[test]
    fn current_context_policy_is_applied() {
        let (_tmp, mut config) = setup(FIRST, SECOND);
        config.options.current_context = CurrentContextPolicy::PreferFirst;

        let summary = run(&config).expect("run");
        assert_eq!(summary.current_context, "ctx1");
        assert_eq!(load(&config.output).expect("load").current_context, "ctx1");
    }

    #[test]
    fn missing_second_input_leaves_output_alone() {
        let (_tmp, config) = setup(FIRST, SECOND);
        fs::remove_file(&config.second).expect("remove");

        let err = run(&config).expect_err("missing input");
        assert!(err.to_string().contains("kubeconfig2"));
        assert!(kubeconfig_error(&err).is_io());
        assert!(!config.output.exists());
    }

    #[test]
    fn malformed_input_leaves_existing_output_untouched() {
        let (_tmp, config) = setup("clusters: [\n", SECOND);
        fs::write(&config.output, "previous contents").expect("write output");

        let err = run(&config).expect_err("malformed input");
        assert!(err.to_string().contains("kubeconfig1"));
        assert!(kubeconfig_error(&err).is_decode());
        assert_eq!(fs::read_to_string(&config.output).expect("read"), "previous contents");
    }

    #[test]
    fn unwritable_output_is_io_error() {
        let (tmp, mut config) = setup(FIRST, SECOND);
        config.output = tmp.path().join("missing-dir").join("merged.yaml");

        let err = run(&config).expect_err("unwritable");
        assert!(err.to_string().contains("merged kubeconfig"));
        let inner = kubeconfig_error(&err);
        assert!(inner.is_io());
        assert_eq!(inner.path(), Path::new(&config.output));
    }
}
