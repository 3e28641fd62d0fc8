//! Opaque carrier for raw failure signals crossing the boundary.
//!
//! # Trust Model
//!
//! A [`FailureSignal`] is built at the point where a backend or transport
//! failure is caught, and carries two classes of data with very different
//! trust levels:
//!
//! - **Status code** (`Option<u16>`): the only field the translator may
//!   consult. Safe to branch on, never rendered directly.
//! - **Diagnostic detail and metadata**: whatever the failing layer
//!   produced — driver messages, file paths, query text, upstream host
//!   names. Held for forensic logging only, cleared from memory on drop,
//!   and never reachable through `Display` or `Debug`.
//!
//! The separation is enforced by the type, not by caller discipline:
//! `Display` renders the translated safe message and nothing else, `Debug`
//! redacts, and raw detail access requires an explicit [`AuditAccess`]
//! capability token.
//!
//! # Memory Hygiene
//!
//! Owned detail and metadata strings are zeroized on drop via the `zeroize`
//! crate. Borrowed `'static` strings are assumed to be non-sensitive
//! literals compiled into the binary and are left alone. This is
//! best-effort clearing against casual memory inspection, not HSM-grade
//! wiping.

use crate::translator;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;
use zeroize::Zeroize;

// ============================================================================
// Capability Token for Detail Access
// ============================================================================

/// Capability token for reading a signal's raw diagnostic detail.
///
/// Zero-sized proof-of-authority required by
/// [`FailureSignal::expose_detail`]. Requiring it:
///
/// 1. Makes raw-detail access impossible to call accidentally
/// 2. Keeps every access point grep-able in the codebase
/// 3. Leaves a seam for audit hooks around acquisition
///
/// This is not cryptographic. Code that can execute can construct the
/// token; the purpose is process safety for well-meaning developers, not
/// defense against a compromised process.
pub struct AuditAccess(());

impl AuditAccess {
    /// Acquire the capability.
    ///
    /// Call only in contexts where disclosure of raw upstream diagnostics
    /// is authorized: access-controlled operator tooling, encrypted
    /// internal log pipelines, forensic analysis.
    #[inline]
    pub fn acquire() -> Self {
        Self(())
    }
}

// ============================================================================
// FailureSignal
// ============================================================================

/// An opaque representation of something that went wrong upstream.
///
/// Not trusted to carry safe text. The boundary's only sanctioned rendering
/// of a signal is the translated safe message; everything else the signal
/// holds exists for internal forensics and dies, zeroized, with the value.
///
/// # Construction
///
/// ```rust
/// use reconguard::FailureSignal;
///
/// let signal = FailureSignal::from_status(409)
///     .with_detail("unique constraint recon_exceptions_pkey violated")
///     .with_metadata("correlation_id", "b9c1-44e0");
///
/// // External rendering is the safe message, nothing more:
/// assert_eq!(
///     signal.to_string(),
///     "A conflict occurred. The item may already exist."
/// );
/// ```
#[must_use = "failure signals should be translated or logged"]
pub struct FailureSignal {
    status: Option<u16>,
    detail: Option<Cow<'static, str>>,
    metadata: SmallVec<[(&'static str, Cow<'static, str>); 4]>,
}

impl FailureSignal {
    /// Create a signal carrying a numeric status code.
    #[inline]
    pub fn from_status(status: u16) -> Self {
        Self {
            status: Some(status),
            detail: None,
            metadata: SmallVec::new(),
        }
    }

    /// Create a signal for a failure with no extractable status.
    ///
    /// Malformed or unrecognized failure shapes land here; translation
    /// resolves them to the generic fallback without further inspection.
    #[inline]
    pub fn without_status() -> Self {
        Self {
            status: None,
            detail: None,
            metadata: SmallVec::new(),
        }
    }

    /// Create a signal from a transport-layer failure.
    ///
    /// The transport surfaces a status when it has one; `None` routes to
    /// the fallback path.
    #[inline]
    pub fn from_transport(status: Option<u16>, detail: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status,
            detail: Some(detail.into()),
            metadata: SmallVec::new(),
        }
    }

    /// Attach raw diagnostic detail (paths, query text, upstream messages).
    ///
    /// Detail is internal-only: zeroized on drop, redacted in `Debug`,
    /// unreachable from `Display`, and ignored by translation.
    #[inline]
    pub fn with_detail(mut self, detail: impl Into<Cow<'static, str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach tracking metadata (correlation ids, attempt counters).
    ///
    /// Keys are compile-time constants so the metadata schema stays
    /// grep-able; values are zeroized on drop.
    #[inline]
    pub fn with_metadata(mut self, key: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        self.metadata.push((key, value.into()));
        self
    }

    /// The status code, if one was extractable from the failure.
    #[inline]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// The pre-approved user-facing message for this signal.
    ///
    /// Always one of the fixed table strings or the generic fallback;
    /// never derived from the signal's own text.
    #[inline]
    pub const fn safe_message(&self) -> &'static str {
        translator::translate(self)
    }

    /// Whether any diagnostic detail was captured.
    #[inline]
    pub const fn has_detail(&self) -> bool {
        self.detail.is_some()
    }

    /// Expose raw diagnostic detail under an [`AuditAccess`] capability.
    ///
    /// Returns `None` when the signal carries no detail. The returned
    /// borrow cannot outlive the signal, so detail cannot be retained past
    /// the signal's zeroization.
    #[must_use]
    #[inline]
    pub fn expose_detail(&self, _access: &AuditAccess) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Tracking metadata attached to this signal.
    ///
    /// Keys are safe to log; values follow the same internal-only rules as
    /// detail and should reach trusted sinks only.
    #[inline]
    pub fn metadata(&self) -> &[(&'static str, Cow<'static, str>)] {
        &self.metadata
    }

    /// Format the full signal, detail included, for trusted debugging.
    ///
    /// Only available with the `trusted_debug` feature in debug builds.
    /// Never wire this into production logging; use `expose_detail` with an
    /// explicit capability there.
    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    pub fn format_for_trusted_debug(&self) -> String {
        let mut out = match self.status {
            Some(status) => format!("FailureSignal status={}", status),
            None => String::from("FailureSignal status=<none>"),
        };
        if let Some(detail) = &self.detail {
            out.push_str(" detail='");
            out.push_str(detail);
            out.push('\'');
        }
        for (key, value) in &self.metadata {
            out.push_str(&format!(" {}='{}'", key, value));
        }
        out
    }
}

impl Zeroize for FailureSignal {
    fn zeroize(&mut self) {
        if let Some(Cow::Owned(ref mut s)) = self.detail {
            s.zeroize();
        }
        self.detail = None;
        for (_, value) in &mut self.metadata {
            if let Cow::Owned(s) = value {
                s.zeroize();
            }
        }
        self.metadata.clear();
        // status maps to a public table string either way; nothing to clear
    }
}

impl Drop for FailureSignal {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Display for FailureSignal {
    /// External rendering — the translated safe message, nothing else.
    ///
    /// Writes a static string; cannot allocate, cannot fail, cannot echo
    /// any captured field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.safe_message())
    }
}

impl fmt::Debug for FailureSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailureSignal")
            .field("status", &self.status)
            .field("detail", &self.detail.as_ref().map(|_| "<REDACTED>"))
            .field("metadata_len", &self.metadata.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
