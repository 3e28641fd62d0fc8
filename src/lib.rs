//! # Reconguard
//!
//! Fail-closed authorization and safe error disclosure for reconciliation
//! workflows.
//!
//! ## Design Philosophy
//!
//! 1. **Two policies, one boundary**: who may act on an exception, and what
//!    a failure is allowed to say — enforced together at the application
//!    edge
//! 2. **Fail closed, always**: no input, valid or adversarial, resolves to
//!    an implicit "allow" or to un-vetted output
//! 3. **Tables are code**: the permission matrix and the message table are
//!    compiled-in constants, so completeness is checked at build time, not
//!    on a config-load path
//! 4. **Closed enumerations**: roles and exception categories are sum
//!    types; adding one forces an explicit policy decision
//! 5. **Raw failure text is radioactive**: captured diagnostics are
//!    zeroized on drop and unreachable from any display path
//!
//! ## Security Principles
//!
//! - Never surface file paths, query text, upstream host names, or stack
//!   detail to an untrusted viewer
//! - Never vary the externally visible denial by which role would have
//!   succeeded
//! - Every user-facing failure string is one of eleven pre-approved
//!   constants; translation cannot construct new text
//! - Authorization denial and translation miss are normal outcomes, not
//!   errors — neither policy function can fail
//!
//! ## Threat Model
//!
//! We assume callers of the surrounding application:
//! - Trigger failures deliberately to fingerprint the backend
//! - Collect error messages to map internal topology
//! - Probe actions with under-privileged roles to enumerate the matrix
//!
//! Therefore the translator's output set is closed and fixed, the matrix
//! answers a bare boolean with no explanatory channel, and denials are
//! recorded internally (see [`DecisionLog`]) rather than explained
//! externally.
//!
//! An in-UI check alone is **not** a security boundary: this crate is
//! transport-neutral precisely so the same matrix runs again at the
//! server-side enforcement point. Deployments that consult it only in the
//! client have an unenforced policy, whatever the UI hides.
//!
//! ## Quick Start
//!
//! ```rust
//! use reconguard::{is_authorized, ExceptionType, FailureSignal, Role};
//!
//! // Gate an action on the caller's role and the exception's category.
//! let may_resolve = is_authorized(Role::Finance, ExceptionType::ValueMismatch);
//! assert!(may_resolve);
//!
//! // Render a backend failure without leaking what actually happened.
//! let signal = FailureSignal::from_status(503)
//!     .with_detail("recon-engine pod evicted, 0/3 replicas ready");
//! assert_eq!(
//!     signal.to_string(),
//!     "Service temporarily unavailable. Please try again shortly."
//! );
//! ```
//!
//! ## Features
//!
//! - `trusted_debug`: detailed debug formatting of captured diagnostics,
//!   available in debug builds only

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod audit;
pub mod matrix;
pub mod signal;
pub mod taxonomy;
pub mod translator;

pub use audit::*;
pub use matrix::*;
pub use signal::*;
pub use taxonomy::*;
pub use translator::*;
