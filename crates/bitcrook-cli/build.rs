//! Stamps the binary with `BITCROOK_VERSION`.
//!
//! Release builds can pin the value through the `BITCROOK_VERSION`
//! environment variable. Otherwise it is the package version, with the
//! short commit hash appended as build metadata when built from a checkout
//! (`0.1.0+1a2b3c4`).

use std::path::PathBuf;
use std::process::Command;

const OVERRIDE: &str = "BITCROOK_VERSION";

fn main() {
    println!("cargo:rerun-if-env-changed={OVERRIDE}");

    let package = env!("CARGO_PKG_VERSION");
    let version = match std::env::var(OVERRIDE) {
        Ok(pinned) if !pinned.trim().is_empty() => pinned.trim().to_string(),
        _ => match commit() {
            Some(hash) => format!("{package}+{hash}"),
            None => package.to_string(),
        },
    };

    println!("cargo:rustc-env={OVERRIDE}={version}");
}

/// Short hash of `HEAD`, registering the files that move when it changes.
fn commit() -> Option<String> {
    let git_dir = PathBuf::from(git(&["rev-parse", "--absolute-git-dir"])?);
    println!("cargo:rerun-if-changed={}", git_dir.join("HEAD").display());
    println!("cargo:rerun-if-changed={}", git_dir.join("refs").display());

    git(&["rev-parse", "--short", "HEAD"])
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
