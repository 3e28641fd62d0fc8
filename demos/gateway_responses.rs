//! Building a JSON error envelope at the gateway.
//!
//! The envelope carries only the status and the translated message; the
//! signal's captured diagnostics stay inside the process.

use reconguard::FailureSignal;
use serde_json::json;

fn error_envelope(signal: &FailureSignal) -> serde_json::Value {
    json!({
        "error": signal.safe_message(),
        "status": signal.status(),
    })
}

fn main() {
    println!("--- Gateway Responses Example ---\n");

    let failures = [
        FailureSignal::from_status(404).with_detail("batch 2024-11-03 purged by retention job"),
        FailureSignal::from_status(429).with_metadata("client", "svc-recon-ui"),
        FailureSignal::without_status().with_detail("worker panic: index out of bounds"),
    ];

    for signal in &failures {
        println!("{}", error_envelope(signal));
    }

    // Output:
    // {"error":"The requested item was not found.","status":404}
    // {"error":"Too many requests. Please wait a moment and try again.","status":429}
    // {"error":"An error occurred. Please try again or contact support.","status":null}
}
