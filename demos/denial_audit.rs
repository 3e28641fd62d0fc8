//! Walking the decision audit trail.
//!
//! Every authorization check can be recorded; denials are counted even
//! after their entries age out of the ring.

use reconguard::{DecisionLog, ExceptionType, Role};

fn main() {
    println!("--- Denial Audit Example ---\n");

    let log = DecisionLog::new(100, 64);

    // A probing client walks every category with an Operations role.
    for exception in ExceptionType::ALL {
        let allowed = log.check_and_record(Role::Operations, exception, "user:m.okafor");
        println!("{:<20} allowed={}", exception.to_string(), allowed);
    }

    println!("\nDenied attempts:");
    for entry in log.get_filtered(|e| !e.allowed) {
        println!(
            "  [{}] {} ({}) on {}",
            entry.timestamp,
            entry.actor,
            entry.role.display_name(),
            entry.exception.display_name(),
        );
    }

    println!("\ntotal decisions retained: {}", log.len());
    println!("total denials counted:    {}", log.denial_count());
}
