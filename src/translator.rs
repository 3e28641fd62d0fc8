//! Translation of raw failure signals into pre-approved user-facing text.
//!
//! Backend and transport failures reach the boundary carrying whatever the
//! failing layer produced: status codes, driver messages, stack fragments,
//! upstream hostnames. None of that is fit to display. This module maps a
//! failure to exactly one string from a small, fixed, pre-vetted table — and
//! nothing else.
//!
//! # The Closed-Set Invariant
//!
//! Every function here returns `&'static str` drawn from the compiled-in
//! table below. No code path concatenates, formats, or echoes any field of
//! the input. The invariant is a type-level property: a `&'static str`
//! return cannot carry request-time bytes.
//!
//! # Totality
//!
//! This is the last line of defense against error handling itself failing
//! unsafely, so it must be total: every `u16` resolves to a message, every
//! signal shape resolves to a message, and no path panics or allocates. A
//! status outside the known set — or no status at all — degrades to the one
//! generic fallback. A translation miss is not an error.
//!
//! # Fixed Table
//!
//! The known codes are `400, 401, 403, 404, 409, 413, 422, 429, 500, 502,
//! 503`. The message strings are a verbatim product contract; tests assert
//! them byte-for-byte. Editing a message is a product decision, not a
//! refactor.

use crate::signal::FailureSignal;

/// The single generic fallback, returned for any unknown or absent status.
///
/// Also the message of last resort when a failure shape is malformed: the
/// translator returns it immediately without inspecting the signal further.
pub const FALLBACK_MESSAGE: &str = "An error occurred. Please try again or contact support.";

/// Status codes with a dedicated message, in ascending order.
///
/// Exists for exhaustive table tests and for callers that pre-register
/// known statuses (e.g. gateway metrics buckets).
pub const KNOWN_STATUSES: [u16; 11] = [400, 401, 403, 404, 409, 413, 422, 429, 500, 502, 503];

/// Resolve a bare status code to its pre-approved message.
///
/// Total over all of `u16`: known codes map to their table entry, everything
/// else maps to [`FALLBACK_MESSAGE`]. Constant-time, zero-allocation, pure.
#[inline]
pub const fn safe_message(status: u16) -> &'static str {
    match status {
        400 => "Invalid request. Please check your input and try again.",
        401 => "Your session has expired. Please log in again.",
        403 => "You do not have permission to perform this action.",
        404 => "The requested item was not found.",
        409 => "A conflict occurred. The item may already exist.",
        413 => "The file is too large. Maximum size is 100MB.",
        422 => "The submitted data is invalid. Please review your input.",
        429 => "Too many requests. Please wait a moment and try again.",
        500 => "An unexpected error occurred. Please try again later.",
        502 | 503 => "Service temporarily unavailable. Please try again shortly.",
        _ => FALLBACK_MESSAGE,
    }
}

/// Resolve a failure signal to its pre-approved message.
///
/// Consults only the signal's status code. A signal without one resolves to
/// [`FALLBACK_MESSAGE`] immediately; the diagnostic detail and metadata a
/// signal may carry are never read here, let alone rendered.
#[inline]
pub const fn translate(signal: &FailureSignal) -> &'static str {
    match signal.status() {
        Some(status) => safe_message(status),
        None => FALLBACK_MESSAGE,
    }
}

// ============================================================================
// Tests
// ============================================================================
