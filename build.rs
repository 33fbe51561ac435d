use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // The memory layout only matters when linking for the EFM32GG target;
    // host builds (tests against the mock platform) skip it entirely.
    if env::var("CARGO_FEATURE_EFM32GG").is_ok() {
        let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
        let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

        fs::copy(manifest_dir.join("memory.x"), out_dir.join("memory.x"))
            .expect("copy memory.x into OUT_DIR");
        println!("cargo:rustc-link-search={}", out_dir.display());
    }

    println!("cargo:rerun-if-changed=memory.x");
}
