#![no_main]

use async_trait::async_trait;
use futures::executor::block_on;
use libfuzzer_sys::fuzz_target;
use ursid_wiki::services::{ImageResolver, extract_bears};

struct Placeholder;

#[async_trait]
impl ImageResolver for Placeholder {
    async fn resolve(&self, _file_name: &str) -> String {
        "media/placeholder.png".to_string()
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let bears = block_on(extract_bears(text, &Placeholder));
        for bear in bears {
            assert!(!bear.range.is_empty());
        }
    }
});
