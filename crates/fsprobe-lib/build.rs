use std::env;
use std::process::Command;

fn rustc_version() -> Option<String> {
    let rustc = env::var_os("RUSTC")?;
    let output = Command::new(rustc).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let version = String::from_utf8(output.stdout).ok()?;
    let version = version.trim();
    if version.is_empty() {
        None
    } else {
        Some(version.to_string())
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");

    // Left unset on failure; the library falls back to "unknown".
    if let Some(version) = rustc_version() {
        println!("cargo:rustc-env=FSPROBE_RUSTC_VERSION={version}");
    }
}
