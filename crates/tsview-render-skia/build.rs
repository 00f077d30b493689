// File: crates/tsview-render-skia/build.rs
// Summary: Links the Windows registry API that Skia's font manager and ICU pull in.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
