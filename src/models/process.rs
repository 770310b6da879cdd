//! Process (simulation input) model.
//!
//! A process is the unit of work the CPU executes: it arrives at a fixed
//! tick, requires a fixed amount of CPU time, and optionally carries a
//! static priority. Inputs are immutable for the duration of a run; the
//! engine keeps its remaining-time bookkeeping in its own working state.

use serde::{Deserialize, Serialize};

/// Simulated time, in abstract integer ticks from the run epoch (t=0).
pub type Tick = i64;

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer ticks relative to the run epoch. The consumer
/// defines what one tick means (ms, s, instruction budget).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier. Identity for tie-breaking and for
    /// tracking remaining burst in preemptive disciplines.
    pub id: String,
    /// Human-readable label. No effect on scheduling.
    pub name: String,
    /// Earliest tick at which the process may be scheduled.
    pub arrival: Tick,
    /// Total CPU time required, in ticks. Must be at least 1.
    pub burst: Tick,
    /// Static priority. Lower value = more urgent. Only the Priority
    /// discipline reads it.
    pub priority: i32,
}

impl Process {
    /// Creates a new process with the given id.
    ///
    /// Arrival and priority default to 0; burst defaults to 0 and must be
    /// set to a positive value before the input passes validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            arrival: 0,
            burst: 0,
            priority: 0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the arrival tick.
    pub fn with_arrival(mut self, arrival: Tick) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the required CPU time.
    pub fn with_burst(mut self, burst: Tick) -> Self {
        self.burst = burst;
        self
    }

    /// Sets the static priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}
