//! Input validation for simulation runs.
//!
//! Checks structural integrity of the process list before any simulation
//! state exists. Detects:
//! - Duplicate process ids
//! - Negative arrival times
//! - Bursts below one tick
//! - A missing or non-positive quantum for Round Robin
//!
//! Validation rejects malformed input outright; the engine never clamps a
//! field and never returns partial results. An empty process list is valid
//! and simulates to an empty timeline.

use std::collections::HashSet;

use crate::models::{Algorithm, Process, Tick};

/// Validation result.
pub type ValidationResult = Result<(), Vec<InvalidInputError>>;

/// A rejected input field.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidInputError {
    /// Error category.
    pub kind: InvalidInputKind,
    /// Human-readable description naming the offending field.
    pub message: String,
}

/// Categories of input errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInputKind {
    /// Two processes share the same id.
    DuplicateId,
    /// An arrival time is below zero.
    NegativeArrivalTime,
    /// A burst time is below one tick.
    NonPositiveBurstTime,
    /// Round Robin was requested without a usable quantum.
    InvalidQuantum,
}

impl InvalidInputError {
    fn new(kind: InvalidInputKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// A Round Robin run submitted without a quantum.
    pub(crate) fn missing_quantum() -> Self {
        Self::new(
            InvalidInputKind::InvalidQuantum,
            "Round Robin requires a quantum",
        )
    }
}

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for InvalidInputError {}

/// Validates the input of a simulation run.
///
/// Checks:
/// 1. No duplicate process ids
/// 2. `arrival >= 0` for every process
/// 3. `burst >= 1` for every process
/// 4. A quantum of at least 1 tick when the discipline requires one
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(
    algorithm: Algorithm,
    processes: &[Process],
    quantum: Option<Tick>,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen_ids = HashSet::new();
    for p in processes {
        if !seen_ids.insert(p.id.as_str()) {
            errors.push(InvalidInputError::new(
                InvalidInputKind::DuplicateId,
                format!("Duplicate process id: {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(InvalidInputError::new(
                InvalidInputKind::NegativeArrivalTime,
                format!("Process '{}' has negative arrival time {}", p.id, p.arrival),
            ));
        }

        if p.burst < 1 {
            errors.push(InvalidInputError::new(
                InvalidInputKind::NonPositiveBurstTime,
                format!("Process '{}' has burst time {}, expected >= 1", p.id, p.burst),
            ));
        }
    }

    if algorithm.requires_quantum() {
        match quantum {
            None => errors.push(InvalidInputError::missing_quantum()),
            Some(q) if q < 1 => errors.push(InvalidInputError::new(
                InvalidInputKind::InvalidQuantum,
                format!("Quantum is {q}, expected >= 1"),
            )),
            Some(_) => {}
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

    fn make_process(id: &str, arrival: Tick, burst: Tick) -> Process {
        Process::new(id).with_arrival(arrival).with_burst(burst)
    }

    #[test]
    fn test_valid_input() {
        let processes = vec![make_process("p1", 0, 3), make_process("p2", 2, 1)];
        assert!(validate_input(Algorithm::Fcfs, &processes, None).is_ok());
        assert!(validate_input(Algorithm::RoundRobin, &processes, Some(2)).is_ok());
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate_input(Algorithm::Sjf, &[], None).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![make_process("p1", 0, 3), make_process("p1", 1, 2)];
        let errors = validate_input(Algorithm::Fcfs, &processes, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == InvalidInputKind::DuplicateId));
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![make_process("p1", -1, 3)];
        let errors = validate_input(Algorithm::Fcfs, &processes, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == InvalidInputKind::NegativeArrivalTime
                && e.message.contains("p1")));
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![make_process("p1", 0, 0)];
        let errors = validate_input(Algorithm::Srtf, &processes, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == InvalidInputKind::NonPositiveBurstTime));
    }

    #[test]
    fn test_missing_quantum() {
        let processes = vec![make_process("p1", 0, 3)];
        let errors = validate_input(Algorithm::RoundRobin, &processes, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == InvalidInputKind::InvalidQuantum));
    }

    #[test]
    fn test_zero_quantum() {
        let processes = vec![make_process("p1", 0, 3)];
        let errors = validate_input(Algorithm::RoundRobin, &processes, Some(0)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == InvalidInputKind::InvalidQuantum));
    }

    #[test]
    fn test_quantum_ignored_elsewhere() {
        // A useless quantum on a non-RR run is not an error.
        let processes = vec![make_process("p1", 0, 3)];
        assert!(validate_input(Algorithm::Fcfs, &processes, Some(0)).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![make_process("p1", -2, 0), make_process("p1", 0, 1)];
        let errors = validate_input(Algorithm::RoundRobin, &processes, None).unwrap_err();
        // Negative arrival + zero burst + duplicate id + missing quantum.
        assert!(errors.len() >= 4);
    }
}
