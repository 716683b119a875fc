//! Build script for word-layout verification
//!
//! The word-parallel scanner picks its native word from the target's pointer
//! width and its lane order from the target's endianness. This script checks
//! both and emits `fieldscan_swar_native` when they are a combination the
//! scanner is tested on (32 or 64 bits, little or big endian). Otherwise the
//! native entry point falls back to the sequential scan.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(fieldscan_swar_native)");

    let pointer_width = env::var("CARGO_CFG_TARGET_POINTER_WIDTH").unwrap_or_default();
    let endian = env::var("CARGO_CFG_TARGET_ENDIAN").unwrap_or_default();

    if is_verified_layout(&pointer_width, &endian) {
        println!("cargo:rustc-cfg=fieldscan_swar_native");
    } else {
        println!(
            "cargo:warning=word-parallel scanning not verified for {}-bit {} endian targets, using sequential fallback",
            pointer_width, endian
        );
    }
}

/// Word widths and byte orders the scanner is tested against
fn is_verified_layout(pointer_width: &str, endian: &str) -> bool {
    matches!(pointer_width, "32" | "64") && matches!(endian, "little" | "big")
}
