//! kubeconfig-merge: merge two kubeconfig files into one

use std::process::ExitCode;

fn main() -> ExitCode {
    match kubeconfig_merge::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
