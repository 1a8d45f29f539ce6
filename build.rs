use std::env;

fn main() {
    // The embedded-test linker script only exists for on-target test builds;
    // host `cargo test` links normally.
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("none") {
        println!("cargo:rustc-link-arg-tests=-Tembedded-test.x");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
