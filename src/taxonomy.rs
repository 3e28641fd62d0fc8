//! Closed enumerations for callers and reconciliation discrepancies.
//!
//! # Frozen Taxonomy
//!
//! `Role` and `ExceptionType` are the two identity axes of the authorization
//! matrix. Both are true closed sum types:
//!
//! - No runtime construction of new members exists anywhere in the crate
//! - Adding a variant forces a compile-time decision in the matrix
//!   (`matrix::authorized_roles` matches exhaustively, with no wildcard arm)
//! - Wire tags are fixed and round-trip through `from_tag`
//!
//! This prevents silent fail-open gaps: an unknown role or exception
//! category cannot be smuggled past the matrix as a string, because the
//! matrix only accepts enum values. Boundary code that receives tags from
//! the identity provider or the reconciliation engine parses them with
//! `from_tag` and must treat `None` as "reject upstream".
//!
//! # No Default
//!
//! Neither enum implements `Default`. There is no safe default caller
//! identity and no neutral discrepancy category; forcing the caller to name
//! one keeps accidental privilege out of the type system.

use std::fmt;

// ============================================================================
// Role
// ============================================================================

/// Caller identity attribute, assigned by the identity/session system.
///
/// The set is closed. Role assignment is external to this crate and
/// immutable for the duration of a request; this crate only ever reads it.
///
/// # Copy Semantics
///
/// Small fieldless enum; passed by value throughout. Copying a role has no
/// governance risk because roles carry no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Full access to every exception category.
    Admin,
    /// Reconciliation analyst; full access to every exception category.
    Analyst,
    /// Integration/infrastructure operator for structural discrepancies.
    ItAdmin,
    /// Finance reviewer for monetary discrepancies.
    Finance,
    /// Operations reviewer for duplicate and match ambiguity.
    Operations,
    /// Compliance reviewer for regulated discrepancy classes.
    Compliance,
}

impl Role {
    /// Every role, in declaration order.
    ///
    /// Used by completeness tests and by callers that enumerate the matrix
    /// (e.g. building a capability view for an admin screen).
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::Analyst,
        Role::ItAdmin,
        Role::Finance,
        Role::Operations,
        Role::Compliance,
    ];

    /// Wire tag as supplied by the identity provider.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Analyst => "ANALYST",
            Self::ItAdmin => "IT_ADMIN",
            Self::Finance => "FINANCE",
            Self::Operations => "OPERATIONS",
            Self::Compliance => "COMPLIANCE",
        }
    }

    /// Human-readable label for audit views and internal tooling.
    #[inline]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Analyst => "Analyst",
            Self::ItAdmin => "IT Administrator",
            Self::Finance => "Finance",
            Self::Operations => "Operations",
            Self::Compliance => "Compliance",
        }
    }

    /// Parse a wire tag from the identity provider.
    ///
    /// Returns `None` for anything outside the closed set. Callers must
    /// treat `None` as "not authorized" and refuse the request before any
    /// matrix lookup happens; there is no entry for an invalid role to fall
    /// back on.
    #[inline]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ADMIN" => Some(Self::Admin),
            "ANALYST" => Some(Self::Analyst),
            "IT_ADMIN" => Some(Self::ItAdmin),
            "FINANCE" => Some(Self::Finance),
            "OPERATIONS" => Some(Self::Operations),
            "COMPLIANCE" => Some(Self::Compliance),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ExceptionType
// ============================================================================

/// Category of reconciliation discrepancy, tagged by the reconciliation
/// engine.
///
/// The set is closed. This crate never constructs exception records; it only
/// classifies who may act on one. An untagged or unknown category must be
/// rejected upstream (`from_tag` returning `None`) before an authorization
/// check is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionType {
    /// Record present in the target but absent from the source.
    MissingSource,
    /// Record present in the source but absent from the target.
    MissingTarget,
    /// Matched records disagree on a monetary or quantitative value.
    ValueMismatch,
    /// The same record appears more than once on one side.
    Duplicate,
    /// Record fails structural validation (encoding, schema, field shape).
    FormatError,
    /// Value difference exceeds the configured tolerance band.
    ToleranceExceeded,
    /// Heuristic match below the auto-accept confidence threshold.
    PotentialMatch,
}

impl ExceptionType {
    /// Every exception category, in declaration order.
    pub const ALL: [ExceptionType; 7] = [
        ExceptionType::MissingSource,
        ExceptionType::MissingTarget,
        ExceptionType::ValueMismatch,
        ExceptionType::Duplicate,
        ExceptionType::FormatError,
        ExceptionType::ToleranceExceeded,
        ExceptionType::PotentialMatch,
    ];

    /// Wire tag as emitted by the reconciliation engine.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingSource => "MISSING_SOURCE",
            Self::MissingTarget => "MISSING_TARGET",
            Self::ValueMismatch => "VALUE_MISMATCH",
            Self::Duplicate => "DUPLICATE",
            Self::FormatError => "FORMAT_ERROR",
            Self::ToleranceExceeded => "TOLERANCE_EXCEEDED",
            Self::PotentialMatch => "POTENTIAL_MATCH",
        }
    }

    /// Human-readable label for audit views and internal tooling.
    #[inline]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::MissingSource => "Missing in source",
            Self::MissingTarget => "Missing in target",
            Self::ValueMismatch => "Value mismatch",
            Self::Duplicate => "Duplicate",
            Self::FormatError => "Format error",
            Self::ToleranceExceeded => "Tolerance exceeded",
            Self::PotentialMatch => "Potential match",
        }
    }

    /// Parse a wire tag from the reconciliation engine.
    ///
    /// Returns `None` for anything outside the closed set; such records must
    /// be rejected before reaching the authorization check.
    #[inline]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "MISSING_SOURCE" => Some(Self::MissingSource),
            "MISSING_TARGET" => Some(Self::MissingTarget),
            "VALUE_MISMATCH" => Some(Self::ValueMismatch),
            "DUPLICATE" => Some(Self::Duplicate),
            "FORMAT_ERROR" => Some(Self::FormatError),
            "TOLERANCE_EXCEEDED" => Some(Self::ToleranceExceeded),
            "POTENTIAL_MATCH" => Some(Self::PotentialMatch),
            _ => None,
        }
    }
}

impl fmt::Display for ExceptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
