// File: crates/chart-core/build.rs
// Summary: Build script to link required Windows system libraries for Skia/ICU.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager and ICU data lookup use the registry API.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
