#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(result) = imphash::imphash_from_bytes(data) {
        assert_eq!(result.imp_hash.len(), 32);
        assert!(result.imp_string.len() >= 4096);
    }
});
