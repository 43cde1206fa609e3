#![no_main]

use libfuzzer_sys::fuzz_target;
use ursid_wiki::models::{ImageQueryResponse, ParseResponse};

fuzz_target!(|data: &[u8]| {
    // Should never panic, only return Ok or Err
    if let Ok(resp) = serde_json::from_slice::<ImageQueryResponse>(data) {
        let _ = resp.first_image_url();
    }
    if let Ok(resp) = serde_json::from_slice::<ParseResponse>(data) {
        let _ = resp.into_wikitext();
    }
});
