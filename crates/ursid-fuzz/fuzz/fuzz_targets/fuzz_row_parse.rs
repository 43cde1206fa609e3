#![no_main]

use libfuzzer_sys::fuzz_target;
use ursid_wiki::services::extract::parse_row;

fuzz_target!(|data: &[u8]| {
    // Any row fragment either yields a row or None, never a panic
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_row(text);
    }
});
