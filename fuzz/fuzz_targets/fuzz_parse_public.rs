#![no_main]

use libfuzzer_sys::fuzz_target;
use seapair::core::encoding::{decode_uint, split_public};

fuzz_target!(|data: &str| {
    // Malformed public keys must be rejected, never panic
    if let Ok((x, y)) = split_public(data) {
        let _ = decode_uint(x);
        let _ = decode_uint(y);
    }
});
