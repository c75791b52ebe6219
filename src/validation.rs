//! Directory integrity checks.
//!
//! Lints a staff snapshot before a roster run. Detects:
//! - Duplicate or empty names
//! - Partner links that dangle or point back at the member
//! - Carpool companions that dangle
//! - Supervisors carrying more than two zone affinities
//!
//! Every finding is a data-entry problem for a human to fix, never a
//! runtime failure: the engine tolerates all of them (dangling links are
//! silently skipped, extra affinities are honoured as recorded). Callers
//! typically run this when the directory is edited, not on every
//! generation.

use std::collections::HashSet;

use crate::models::{normalize, same_name, StaffMember};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two members share a name; assignment tracking is by name.
    DuplicateName,
    /// A member has a blank name.
    EmptyName,
    /// A preferred partner that names nobody in the directory.
    DanglingPartner,
    /// A member naming themselves as partner.
    SelfPartner,
    /// A carpool companion that names nobody in the directory.
    DanglingCompanion,
    /// A supervisor with more than two zone affinities.
    SupervisorAffinityOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Lints a directory snapshot.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected finding.
pub fn validate_directory(staff: &[StaffMember]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen: HashSet<String> = HashSet::new();
    for member in staff {
        if normalize(&member.name).is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Member with empty name",
            ));
            continue;
        }
        if !seen.insert(normalize(&member.name)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate name: {}", member.name),
            ));
        }
    }

    for member in staff {
        if let Some(partner) = member.preferred_partner.as_deref() {
            if same_name(partner, &member.name) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfPartner,
                    format!("'{}' lists themselves as partner", member.name),
                ));
            } else if !staff.iter().any(|m| same_name(&m.name, partner)) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DanglingPartner,
                    format!("'{}' lists unknown partner '{partner}'", member.name),
                ));
            }
        }

        if let Some(companion) = member.travels_with.as_deref() {
            if !staff.iter().any(|m| same_name(&m.name, companion)) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DanglingCompanion,
                    format!("'{}' rides with unknown companion '{companion}'", member.name),
                ));
            }
        }

        if member.is_supervisor() && member.zone_affinities.len() > 2 {
            errors.push(ValidationError::new(
                ValidationErrorKind::SupervisorAffinityOverflow,
                format!(
                    "Supervisor '{}' has {} zone affinities (form allows 2)",
                    member.name,
                    member.zone_affinities.len()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StaffMember;

    fn sample_staff() -> Vec<StaffMember> {
        vec![
            StaffMember::supervisor("Lucia").with_affinity("Castello").with_affinity("Le Dune"),
            StaffMember::attendant("Anna").with_partner("Beatrice"),
            StaffMember::attendant("Beatrice").commuting_with("Anna"),
        ]
    }

    #[test]
    fn test_valid_directory() {
        assert!(validate_directory(&sample_staff()).is_ok());
    }

    #[test]
    fn test_duplicate_name() {
        let mut staff = sample_staff();
        staff.push(StaffMember::attendant("anna "));

        let errors = validate_directory(&staff).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName));
    }

    #[test]
    fn test_empty_name() {
        let errors = validate_directory(&[StaffMember::attendant("  ")]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyName));
    }

    #[test]
    fn test_dangling_partner() {
        let staff = vec![StaffMember::attendant("Anna").with_partner("Ghost")];

        let errors = validate_directory(&staff).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DanglingPartner));
    }

    #[test]
    fn test_self_partner() {
        let staff = vec![StaffMember::attendant("Anna").with_partner("anna")];

        let errors = validate_directory(&staff).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::SelfPartner));
    }

    #[test]
    fn test_dangling_companion() {
        let staff = vec![StaffMember::attendant("Anna").commuting_with("Ghost")];

        let errors = validate_directory(&staff).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DanglingCompanion));
    }

    #[test]
    fn test_supervisor_affinity_overflow() {
        let staff = vec![StaffMember::supervisor("Lucia")
            .with_affinity("Castello")
            .with_affinity("Le Dune")
            .with_affinity("Le Palme")];

        let errors = validate_directory(&staff).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::SupervisorAffinityOverflow));
    }

    #[test]
    fn test_multiple_findings() {
        let staff = vec![
            StaffMember::attendant(""),
            StaffMember::attendant("Anna").with_partner("Ghost").commuting_with("Nobody"),
        ];

        let errors = validate_directory(&staff).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
