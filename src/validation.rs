//! Input validation for timetabling instances.
//!
//! Checks structural integrity of an [`Instance`] before any search:
//! - Empty dimensions (no days, periods, rooms, or courses)
//! - Lecturer references outside the declared lecturer count
//! - Membership or unavailability entries naming unknown courses
//! - Membership entries naming unknown curricula
//! - Unavailability entries naming slots outside the grid
//!
//! This is advisory tooling for external loaders. The core operations —
//! validators, evaluator, builder — are total over any structurally valid
//! instance and perform no checking of their own.

use crate::models::Instance;

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
    /// A dimension that must be positive is zero.
    EmptyDimension,
    /// A course names a lecturer outside the declared count.
    InvalidLecturerReference,
    /// A membership or unavailability entry names an unknown course.
    InvalidCourseReference,
    /// A membership entry names an unknown curriculum.
    InvalidCurriculumReference,
    /// An unavailability entry names a slot outside the grid.
    InvalidSlotReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the structural integrity of an instance.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &Instance) -> ValidationResult {
    let mut errors = Vec::new();

    if instance.days == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDimension,
            "Instance has zero days",
        ));
    }
    if instance.periods_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDimension,
            "Instance has zero periods per day",
        ));
    }
    if instance.rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDimension,
            "Instance has no rooms",
        ));
    }
    if instance.courses.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDimension,
            "Instance has no courses",
        ));
    }

    for (index, course) in instance.courses.iter().enumerate() {
        if course.lecturer >= instance.lecturers {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidLecturerReference,
                format!(
                    "Course {index} references unknown lecturer {}",
                    course.lecturer
                ),
            ));
        }
    }

    for (course, curriculum) in instance.memberships.iter() {
        if course >= instance.course_count() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCourseReference,
                format!("Membership references unknown course {course}"),
            ));
        }
        if curriculum >= instance.curricula {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCurriculumReference,
                format!("Membership references unknown curriculum {curriculum}"),
            ));
        }
    }

    for entry in instance.unavailability.iter() {
        if entry.course >= instance.course_count() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCourseReference,
                format!("Unavailability references unknown course {}", entry.course),
            ));
        }
        if entry.day >= instance.days || entry.period >= instance.periods_per_day {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSlotReference,
                format!(
                    "Unavailability references slot ({}, {}) outside the grid",
                    entry.day, entry.period
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
