//! Input validation for simulation runs.
//!
//! Checks the preconditions every scheduler relies on before any process
//! record is touched. Detects:
//! - Duplicate or zero PIDs
//! - Negative arrival times
//! - Non-positive service times
//! - Workloads whose schedule could end past `i64::MAX`
//! - Non-positive Round Robin quantum
//!
//! All problems are collected so callers can report them together.

use std::collections::HashSet;

use crate::models::{Algorithm, Process};

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
    /// Two processes share the same PID.
    DuplicatePid,
    /// PID must be positive.
    InvalidPid,
    /// Arrival time is before the simulation epoch.
    NegativeArrival,
    /// Service time is zero or negative.
    NonPositiveService,
    /// Latest arrival plus total service does not fit in an `i64`.
    TimeOverflow,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a workload.
///
/// Checks:
/// 1. Every PID is positive
/// 2. No duplicate PIDs
/// 3. Every arrival time is ≥ 0
/// 4. Every service time is > 0
/// 5. Latest arrival + total service ≤ `i64::MAX`, which bounds every
///    finish time
///
/// An empty workload is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for p in processes {
        if p.pid == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPid,
                "PID must be positive, got 0",
            ));
        }

        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate PID: {}", p.pid),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.pid, p.arrival_time
                ),
            ));
        }

        if p.service_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveService,
                format!(
                    "Process {} has non-positive service time {}",
                    p.pid, p.service_time
                ),
            ));
        }
    }

    if schedule_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total service time exceeds the representable time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the finish time of any schedule, or `None` on overflow.
fn schedule_horizon(processes: &[Process]) -> Option<i64> {
    let total_service = processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.service_time.max(0)))?;
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    latest_arrival.checked_add(total_service)
}

/// Validates algorithm parameters.
///
/// Only Round Robin carries a parameter; its quantum must be positive.
pub fn validate_algorithm(algorithm: &Algorithm) -> ValidationResult {
    match algorithm {
        Algorithm::RoundRobin { quantum } if *quantum <= 0 => Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Round Robin quantum must be positive, got {quantum}"),
        )]),
        _ => Ok(()),
    }
}

/// Validates a workload together with the algorithm that will run it.
pub fn validate_input(processes: &[Process], algorithm: &Algorithm) -> ValidationResult {
    let mut errors = Vec::new();
    if let Err(mut e) = validate_algorithm(algorithm) {
        errors.append(&mut e);
    }
    if let Err(mut e) = validate_workload(processes) {
        errors.append(&mut e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
