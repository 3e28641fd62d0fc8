//! Rendering of a signal must be independent of fuzz-provided detail.
//!
//! Substring checks would false-positive when the fuzzer crafts a detail
//! that happens to occur inside a fixed table string, so the target asserts
//! the stronger property: output is byte-identical to that of a control
//! signal carrying different detail.

#![no_main]

use libfuzzer_sys::fuzz_target;
use reconguard::signal::FailureSignal;
use reconguard::translator::safe_message;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let status = u16::from_le_bytes([data[0], data[1]]);
    let Ok(detail) = std::str::from_utf8(&data[2..]) else {
        return;
    };

    let signal = FailureSignal::from_status(status).with_detail(detail.to_owned());
    let control = FailureSignal::from_status(status).with_detail("control");

    assert_eq!(signal.to_string(), safe_message(status));
    assert_eq!(format!("{:?}", signal), format!("{:?}", control));
});
