//! Tag parsing accepts exactly the closed sets and nothing else.

#![no_main]

use libfuzzer_sys::fuzz_target;
use reconguard::taxonomy::{ExceptionType, Role};

fuzz_target!(|data: &[u8]| {
    let Ok(tag) = std::str::from_utf8(data) else {
        return;
    };

    if let Some(role) = Role::from_tag(tag) {
        assert_eq!(role.as_str(), tag);
    }
    if let Some(exception) = ExceptionType::from_tag(tag) {
        assert_eq!(exception.as_str(), tag);
    }
});
