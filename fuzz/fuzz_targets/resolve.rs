#![no_main]

use libfuzzer_sys::fuzz_target;
use cssschema::{strip_vendor_prefix, DEFAULT};

fuzz_target!(|data: &[u8]| {
    let name = String::from_utf8_lossy(data);

    // Resolution is total: every input maps to some rule
    let rule = DEFAULT.for_key(&name);
    if DEFAULT.contains(&name.to_ascii_lowercase()) {
        assert!(!rule.is_disallowed());
    }

    if let Some((prefix, bare)) = strip_vendor_prefix(&name) {
        assert_eq!(name.len(), prefix.as_str().len() + bare.len());
    }
});
