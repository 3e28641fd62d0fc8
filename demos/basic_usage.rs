use reconguard::{is_authorized, ExceptionType, FailureSignal, Role};

fn resolve_exception(role: Role, exception: ExceptionType) -> Result<(), FailureSignal> {
    if !is_authorized(role, exception) {
        // Denial is a normal outcome; the transport layer would answer 403.
        return Err(FailureSignal::from_status(403));
    }
    // Simulate the backend falling over mid-resolution.
    Err(FailureSignal::from_status(502)
        .with_detail("recon-engine upstream: connect to 10.4.2.17:9090 refused"))
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    // SCENARIO 1: an under-privileged role probes a financial discrepancy.
    match resolve_exception(Role::Operations, ExceptionType::ValueMismatch) {
        Ok(_) => println!("resolved"),
        Err(signal) => {
            println!("1. [EXTERNAL RESPONSE] What the Operations user sees:");
            println!("   \"{}\"", signal);
            // Output: "You do not have permission to perform this action."
            // Nothing hints that FINANCE would have succeeded.
        }
    }

    // SCENARIO 2: an authorized role hits a backend failure.
    match resolve_exception(Role::Finance, ExceptionType::ValueMismatch) {
        Ok(_) => println!("resolved"),
        Err(signal) => {
            println!("\n2. [EXTERNAL RESPONSE] What the Finance user sees:");
            println!("   \"{}\"", signal);
            // Output: "Service temporarily unavailable. Please try again shortly."
            // The upstream address never leaves the process.

            println!("\n3. [DEBUG VIEW] What lands in generic logs:");
            println!("   {:?}", signal);
            // Detail shows as <REDACTED>; raw access needs an AuditAccess token.
        }
    }
}
