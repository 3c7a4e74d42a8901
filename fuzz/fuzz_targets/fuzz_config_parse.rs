//! Fuzz configuration parsing.
//!
//! Any document the loaders accept must build a filter.
//!
//! Run with:
//!   cargo fuzz run fuzz_config_parse

#![no_main]

use glide_filters::{AccelConfig, create_filter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for config in [AccelConfig::from_json_str(text), AccelConfig::from_yaml_str(text)]
        .into_iter()
        .flatten()
    {
        assert!(create_filter(&config).is_ok());
    }
});
