// Linker setup follows the embassy stm32f3 examples:
// https://github.com/embassy-rs/embassy/blob/main/examples/stm32f3/build.rs
// The on-target test binaries need the same scripts as the firmware.
fn main() {
    for target in ["bins", "tests"] {
        println!("cargo:rustc-link-arg-{target}=--nmagic");
        println!("cargo:rustc-link-arg-{target}=-Tlink.x");
        println!("cargo:rustc-link-arg-{target}=-Tdefmt.x");
    }
}
