#![no_main]

use libfuzzer_sys::fuzz_target;
use seapair::{derive_key_pair, derive_sea_pair};

fuzz_target!(|data: &str| {
    // Any seed either derives or reports an error - should never panic
    if let Ok(jwk) = derive_key_pair(data) {
        let pair = derive_sea_pair(data).expect("second derivation of an accepted seed");
        assert_eq!(pair.public_key(), format!("{}.{}", jwk.x(), jwk.y()));
        assert_eq!(pair.private_key(), jwk.d());
    }
});
