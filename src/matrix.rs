//! Permission matrix for actions on reconciliation exceptions.
//!
//! Given a caller's [`Role`] and an exception's [`ExceptionType`], decides
//! whether the caller may act on it. Denial is a normal `false`, not an
//! error; callers hide or disable the action and say nothing about which
//! roles would have been allowed.
//!
//! # Shape of the Policy
//!
//! The canonical direction is exception type → permitted roles
//! ([`authorized_roles`]); [`is_authorized`] answers membership in that set
//! via the `role_policy` predicates, and tests pin the two views to each
//! other. The tables are compiled-in constants, not loaded configuration:
//! the matrix is small, security-relevant, and changes rarely, and keeping
//! it in code lets completeness be a build-time property instead of a
//! file-load code path.
//!
//! # Fail-Closed Guarantee
//!
//! - The match over `ExceptionType` is exhaustive with no wildcard-allow
//!   arm, so a new exception category cannot compile without an explicit
//!   role-set decision.
//! - A role absent from a category's table resolves to `false`. There is no
//!   input, valid or hypothetical, for which the answer degrades to "allow".
//! - The `tests` module asserts that every category has a non-empty role
//!   set, preventing the opposite accident (total lockout).
//!
//! # Least-Privilege Domains
//!
//! The role sets encode separation by discrepancy domain, centralized in
//! `role_policy` so the shape is auditable in one place:
//!
//! - Structural/integration discrepancies (missing records, format errors)
//!   require `IT_ADMIN` awareness
//! - Monetary discrepancies (value mismatch, tolerance breach) require
//!   `FINANCE`, with `COMPLIANCE` added where a regulated threshold is
//!   involved
//! - Duplicate and match ambiguity require `OPERATIONS` review, with
//!   `COMPLIANCE` on duplicates
//! - `ADMIN` and `ANALYST` are universal
//!
//! This assignment is a deliberate access-control decision, not an
//! incidental default; changing any role set is a policy revision, not a
//! refactor.

use crate::taxonomy::{ExceptionType, Role};

// ============================================================================
// Role Policy (Extracted for Auditability)
// ============================================================================

/// Per-domain authorization predicates.
///
/// Centralizes the least-privilege shape so a reviewer can audit who
/// reaches what without walking the per-category tables.
mod role_policy {
    use crate::taxonomy::Role;

    /// ADMIN and ANALYST may act on every exception category.
    pub(super) const fn universal(role: Role) -> bool {
        matches!(role, Role::Admin | Role::Analyst)
    }

    /// Structural and integration discrepancies.
    pub(super) const fn structural(role: Role) -> bool {
        universal(role) || matches!(role, Role::ItAdmin)
    }

    /// Monetary discrepancies.
    pub(super) const fn financial(role: Role) -> bool {
        universal(role) || matches!(role, Role::Finance)
    }

    /// Monetary discrepancies crossing a regulated tolerance band.
    pub(super) const fn financial_regulated(role: Role) -> bool {
        financial(role) || matches!(role, Role::Compliance)
    }

    /// Duplicate records; compliance review required alongside operations.
    pub(super) const fn duplication(role: Role) -> bool {
        universal(role) || matches!(role, Role::Operations | Role::Compliance)
    }

    /// Heuristic match ambiguity; operations review only.
    pub(super) const fn match_review(role: Role) -> bool {
        universal(role) || matches!(role, Role::Operations)
    }
}

// ============================================================================
// Canonical Tables
// ============================================================================

const STRUCTURAL_ROLES: &[Role] = &[Role::Admin, Role::Analyst, Role::ItAdmin];
const FINANCIAL_ROLES: &[Role] = &[Role::Admin, Role::Analyst, Role::Finance];
const FINANCIAL_REGULATED_ROLES: &[Role] =
    &[Role::Admin, Role::Analyst, Role::Finance, Role::Compliance];
const DUPLICATION_ROLES: &[Role] =
    &[Role::Admin, Role::Analyst, Role::Operations, Role::Compliance];
const MATCH_REVIEW_ROLES: &[Role] = &[Role::Admin, Role::Analyst, Role::Operations];

/// The set of roles permitted to act on exceptions of the given category.
///
/// This is the canonical view of the matrix. The returned slice is a
/// compiled-in constant; it is never empty (asserted by the `tests` module)
/// and never mutated.
#[inline]
pub const fn authorized_roles(exception: ExceptionType) -> &'static [Role] {
    match exception {
        ExceptionType::MissingSource => STRUCTURAL_ROLES,
        ExceptionType::MissingTarget => STRUCTURAL_ROLES,
        ExceptionType::ValueMismatch => FINANCIAL_ROLES,
        ExceptionType::Duplicate => DUPLICATION_ROLES,
        ExceptionType::FormatError => STRUCTURAL_ROLES,
        ExceptionType::ToleranceExceeded => FINANCIAL_REGULATED_ROLES,
        ExceptionType::PotentialMatch => MATCH_REVIEW_ROLES,
    }
}

/// Whether `role` may act on exceptions of category `exception`.
///
/// Pure predicate: `true` iff the role set for the category (see
/// [`authorized_roles`]) contains `role`. Identical inputs always yield
/// identical output; there are no side effects, no allocation, and no
/// failure mode — inputs outside the closed enumerations cannot be
/// expressed, and a role missing from a category's set resolves to `false`.
///
/// Denial is not an error. Callers treat `false` as "hide or disable the
/// action", and must not vary the externally visible response by which role
/// would have succeeded.
#[inline]
pub const fn is_authorized(role: Role, exception: ExceptionType) -> bool {
    match exception {
        ExceptionType::MissingSource
        | ExceptionType::MissingTarget
        | ExceptionType::FormatError => role_policy::structural(role),
        ExceptionType::ValueMismatch => role_policy::financial(role),
        ExceptionType::Duplicate => role_policy::duplication(role),
        ExceptionType::ToleranceExceeded => role_policy::financial_regulated(role),
        ExceptionType::PotentialMatch => role_policy::match_review(role),
    }
}

/// The exception categories a role may act on — the inverse view.
///
/// Allocates a fresh `Vec` per call; intended for capability screens and
/// audit tooling, not for per-request checks (use [`is_authorized`]).
pub fn permitted_exceptions(role: Role) -> Vec<ExceptionType> {
    ExceptionType::ALL
        .into_iter()
        .filter(|exception| is_authorized(role, *exception))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Completeness
    // ========================================================================

    #[test]
    fn every_category_has_a_nonempty_role_set() {
        for exception in ExceptionType::ALL {
            assert!(
                !authorized_roles(exception).is_empty(),
                "{} has no authorized roles",
                exception
            );
        }
    }

    #[test]
    fn universal_roles_reach_every_category() {
        for exception in ExceptionType::ALL {
            assert!(is_authorized(Role::Admin, exception));
            assert!(is_authorized(Role::Analyst, exception));
        }
    }

    // ========================================================================
    // Exact Membership
    // ========================================================================

    #[test]
    fn financial_separation() {
        assert!(is_authorized(Role::Finance, ExceptionType::ValueMismatch));
        assert!(!is_authorized(Role::ItAdmin, ExceptionType::ValueMismatch));
        assert!(!is_authorized(Role::Operations, ExceptionType::ValueMismatch));
        assert!(!is_authorized(Role::Compliance, ExceptionType::ValueMismatch));
    }

    #[test]
    fn structural_separation() {
        for exception in [
            ExceptionType::MissingSource,
            ExceptionType::MissingTarget,
            ExceptionType::FormatError,
        ] {
            assert!(is_authorized(Role::ItAdmin, exception));
            assert!(!is_authorized(Role::Finance, exception));
            assert!(!is_authorized(Role::Operations, exception));
            assert!(!is_authorized(Role::Compliance, exception));
        }
    }

    #[test]
    fn duplication_requires_operations_or_compliance() {
        assert!(is_authorized(Role::Operations, ExceptionType::Duplicate));
        assert!(is_authorized(Role::Compliance, ExceptionType::Duplicate));
        assert!(!is_authorized(Role::Finance, ExceptionType::Duplicate));
        assert!(!is_authorized(Role::ItAdmin, ExceptionType::Duplicate));
    }

    #[test]
    fn tolerance_breach_adds_compliance_to_finance() {
        assert!(is_authorized(Role::Finance, ExceptionType::ToleranceExceeded));
        assert!(is_authorized(Role::Compliance, ExceptionType::ToleranceExceeded));
        assert!(!is_authorized(Role::Operations, ExceptionType::ToleranceExceeded));
        assert!(!is_authorized(Role::ItAdmin, ExceptionType::ToleranceExceeded));
    }

    #[test]
    fn potential_match_is_operations_only() {
        assert!(is_authorized(Role::Operations, ExceptionType::PotentialMatch));
        assert!(!is_authorized(Role::Compliance, ExceptionType::PotentialMatch));
        assert!(!is_authorized(Role::Finance, ExceptionType::PotentialMatch));
        assert!(!is_authorized(Role::ItAdmin, ExceptionType::PotentialMatch));
    }

    // ========================================================================
    // View Agreement
    // ========================================================================

    /// The predicate dispatch and the canonical tables are two renderings
    /// of one matrix; drift between them is a policy bug.
    #[test]
    fn predicate_agrees_with_canonical_tables() {
        for role in Role::ALL {
            for exception in ExceptionType::ALL {
                assert_eq!(
                    is_authorized(role, exception),
                    authorized_roles(exception).contains(&role),
                    "matrix views disagree for ({}, {})",
                    role,
                    exception
                );
            }
        }
    }

    #[test]
    fn inverse_view_agrees_with_predicate() {
        for role in Role::ALL {
            let permitted = permitted_exceptions(role);
            for exception in ExceptionType::ALL {
                assert_eq!(
                    permitted.contains(&exception),
                    is_authorized(role, exception)
                );
            }
        }
    }

    // ========================================================================
    // Purity
    // ========================================================================

    #[test]
    fn repeated_lookups_are_stable() {
        for role in Role::ALL {
            for exception in ExceptionType::ALL {
                let first = is_authorized(role, exception);
                for _ in 0..100 {
                    assert_eq!(first, is_authorized(role, exception));
                }
            }
        }
    }

    #[test]
    fn matrix_is_const_evaluable() {
        const FINANCE_ON_MISMATCH: bool =
            is_authorized(Role::Finance, ExceptionType::ValueMismatch);
        const IT_ON_MISMATCH: bool = is_authorized(Role::ItAdmin, ExceptionType::ValueMismatch);
        assert!(FINANCE_ON_MISMATCH);
        assert!(!IT_ON_MISMATCH);
    }
}
