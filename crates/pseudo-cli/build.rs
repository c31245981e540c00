//! Stamps version metadata into the `pseudo` binary.
//!
//! `PSEUDO_VERSION` is taken from `PSEUDO_BUILD_VERSION` when packagers set
//! it, then from the nearest git tag, then from the crate version.
//! `PSEUDO_COMMIT` is the short commit hash, or `unknown` outside a checkout.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=PSEUDO_BUILD_VERSION");

    let version = env::var("PSEUDO_BUILD_VERSION")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| git(&["describe", "--tags", "--abbrev=0"]))
        .map(|v| v.trim_start_matches('v').to_string())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    let commit = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=PSEUDO_VERSION={version}");
    println!("cargo:rustc-env=PSEUDO_COMMIT={commit}");
}

/// Run git and return its trimmed stdout, if it succeeded with any output.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
