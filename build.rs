use std::env;

// Exposes the build target and profile to `jsonlog --version` long output.
fn main() {
    for (source, exported) in [
        ("TARGET", "JSONLOG_BUILD_TARGET_TRIPLE"),
        ("PROFILE", "JSONLOG_BUILD_PROFILE"),
    ] {
        let value = env::var(source).unwrap_or_else(|_| "unknown".to_string());
        println!("cargo:rustc-env={}={}", exported, value);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
