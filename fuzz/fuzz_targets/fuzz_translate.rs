//! Translation must be total: any status resolves to a table string.

#![no_main]

use libfuzzer_sys::fuzz_target;
use reconguard::translator::{safe_message, FALLBACK_MESSAGE, KNOWN_STATUSES};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let status = u16::from_le_bytes([data[0], data[1]]);

    let message = safe_message(status);

    let in_table = KNOWN_STATUSES.iter().any(|s| safe_message(*s) == message);
    assert!(in_table || message == FALLBACK_MESSAGE);

    if !KNOWN_STATUSES.contains(&status) {
        assert_eq!(message, FALLBACK_MESSAGE);
    }
});
