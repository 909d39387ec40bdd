//! Input validation for rostering scenarios.
//!
//! Checks structural integrity of a scenario before any model is built.
//! Detects:
//! - Zero-sized dimensions (workers, shifts, days)
//! - Staffing vector length not matching the shift count
//! - Preference matrix dimensions not matching the declared counts
//!
//! Feasibility is deliberately NOT checked here — an over-demanded scenario
//! still produces a well-formed model, and infeasibility is a solver
//! outcome, not a configuration error.

use crate::models::Scenario;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A dimension (workers, shifts, or days) is zero.
    EmptyDimension,
    /// `staffing_per_shift` length differs from the shift count.
    StaffingLengthMismatch,
    /// Preference matrix dimensions differ from the declared counts.
    PreferenceDimensionMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a rostering scenario.
///
/// Checks:
/// 1. All three dimensions are positive
/// 2. `staffing_per_shift` has exactly `shift_count` entries
/// 3. The preference matrix spans exactly
///    `worker_count × day_count × shift_count`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_scenario(scenario: &Scenario) -> ValidationResult {
    let mut errors = Vec::new();

    if scenario.worker_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDimension,
            "Scenario has zero workers",
        ));
    }
    if scenario.shift_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDimension,
            "Scenario has zero shifts per day",
        ));
    }
    if scenario.day_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDimension,
            "Scenario has zero days",
        ));
    }

    if scenario.staffing_per_shift.len() != scenario.shift_count {
        errors.push(ValidationError::new(
            ValidationErrorKind::StaffingLengthMismatch,
            format!(
                "staffing_per_shift has {} entries, expected {}",
                scenario.staffing_per_shift.len(),
                scenario.shift_count
            ),
        ));
    }

    let prefs = &scenario.preferences;
    if prefs.worker_count() != scenario.worker_count
        || prefs.day_count() != scenario.day_count
        || prefs.shift_count() != scenario.shift_count
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::PreferenceDimensionMismatch,
            format!(
                "preference matrix spans {}×{}×{}, scenario declares {}×{}×{}",
                prefs.worker_count(),
                prefs.day_count(),
                prefs.shift_count(),
                scenario.worker_count,
                scenario.day_count,
                scenario.shift_count
            ),
        ));
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
    use crate::models::PreferenceMatrix;

    #[test]
    fn test_valid_scenario() {
        let scenario = Scenario::new(5, 3, 7).with_staffing(vec![3, 2, 5]);
        assert!(validate_scenario(&scenario).is_ok());
    }

    #[test]
    fn test_zero_workers() {
        let scenario = Scenario::new(0, 3, 7).with_staffing(vec![1, 1, 1]);
        let errors = validate_scenario(&scenario).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyDimension
                && e.message.contains("workers")));
    }

    #[test]
    fn test_zero_days() {
        let scenario = Scenario::new(5, 3, 0).with_staffing(vec![1, 1, 1]);
        let errors = validate_scenario(&scenario).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyDimension
                && e.message.contains("days")));
    }

    #[test]
    fn test_staffing_length_mismatch() {
        let scenario = Scenario::new(5, 3, 7).with_staffing(vec![3, 2]);
        let errors = validate_scenario(&scenario).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::StaffingLengthMismatch));
    }

    #[test]
    fn test_preference_dimension_mismatch() {
        let scenario = Scenario::new(3, 3, 1)
            .with_staffing(vec![1, 1, 1])
            .with_preferences(PreferenceMatrix::new(2, 2, 2));
        let errors = validate_scenario(&scenario).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::PreferenceDimensionMismatch));
    }

    #[test]
    fn test_multiple_errors() {
        // Zero workers + short staffing vector; the matrix from
        // `Scenario::new` still matches the declared (zero) dimensions.
        let scenario = Scenario::new(0, 3, 7).with_staffing(vec![1]);
        let errors = validate_scenario(&scenario).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_over_demanded_scenario_is_not_a_validation_error() {
        // 2 workers cannot fill 5 slots per day, but that is the solver's
        // verdict to give.
        let scenario = Scenario::new(2, 1, 1).with_staffing(vec![5]);
        assert!(validate_scenario(&scenario).is_ok());
    }
}
