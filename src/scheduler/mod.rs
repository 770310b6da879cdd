//! The scheduling engine and derived metrics.
//!
//! One `run` entry point dispatches over the five disciplines. The engine
//! is a pure function of its input: a fresh timeline per call, a clock
//! that only moves forward, and no state surviving the call. Concurrent
//! runs over independent inputs need no coordination.
//!
//! # Conventions shared by all disciplines
//!
//! - The clock starts at 0 and advances either by executing a process or
//!   by jumping to the next arrival when nothing is ready.
//! - Idle time is never emitted as a slice; it shows up as a gap between
//!   consecutive slices (`Timeline::idle_gaps`).
//! - A process with no remaining burst leaves the working set.
//! - Malformed input is rejected in full before any simulation state
//!   exists; there are no partial results.

mod fcfs;
mod kpi;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use kpi::{ProcessMetrics, SimulationKpi};

use log::debug;

use crate::models::{Algorithm, Process, Tick, Timeline};
use crate::validation::{validate_input, InvalidInputError};

/// Result of a simulation call.
pub type RunResult = Result<Timeline, Vec<InvalidInputError>>;

/// Input container for a simulation run.
#[derive(Debug, Clone)]
pub struct SimulationRequest {
    /// Discipline to simulate.
    pub algorithm: Algorithm,
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Time quantum; read only by Round Robin.
    pub quantum: Option<Tick>,
}

impl SimulationRequest {
    /// Creates a new request.
    pub fn new(algorithm: Algorithm, processes: Vec<Process>) -> Self {
        Self {
            algorithm,
            processes,
            quantum: None,
        }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Runs the simulation described by this request.
    pub fn run(&self) -> RunResult {
        run(self.algorithm, &self.processes, self.quantum)
    }
}

/// Simulates one scheduling run.
///
/// Validates the input, then replays the processes under `algorithm` and
/// returns the resulting timeline in non-decreasing start order. `quantum`
/// is required for Round Robin and ignored by every other discipline.
/// Calling twice with the same input yields identical output.
///
/// # Example
///
/// ```
/// use procsim::models::{Algorithm, Process};
/// use procsim::scheduler;
///
/// let processes = vec![
///     Process::new("p1").with_arrival(2).with_burst(3),
///     Process::new("p2").with_burst(2),
/// ];
///
/// let timeline = scheduler::run(Algorithm::Fcfs, &processes, None).unwrap();
/// assert_eq!(timeline.slices[0].process_id, "p2");
/// assert_eq!(timeline.makespan(), 5);
/// ```
pub fn run(algorithm: Algorithm, processes: &[Process], quantum: Option<Tick>) -> RunResult {
    validate_input(algorithm, processes, quantum)?;
    debug!(
        "simulating {} over {} processes",
        algorithm.name(),
        processes.len()
    );

    let timeline = match algorithm {
        Algorithm::Fcfs => fcfs::simulate(processes),
        Algorithm::Priority => priority::simulate(processes),
        Algorithm::Sjf => sjf::simulate(processes),
        Algorithm::Srtf => srtf::simulate(processes),
        Algorithm::RoundRobin => {
            let quantum = quantum.ok_or_else(|| vec![InvalidInputError::missing_quantum()])?;
            round_robin::simulate(processes, quantum)
        }
    };

    Ok(timeline)
}
