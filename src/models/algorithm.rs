//! Scheduling discipline selector.

use serde::{Deserialize, Serialize};

/// The scheduling discipline to simulate.
///
/// Dispatch is by tag: the disciplines share no mutable state, so a plain
/// enum routed through `scheduler::run` replaces any trait hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served: non-preemptive, arrival order.
    Fcfs,
    /// Fixed time slices over a FIFO ready queue. Requires a quantum.
    RoundRobin,
    /// Non-preemptive static priority (lower value = more urgent).
    Priority,
    /// Shortest-Job-First: non-preemptive, shortest total burst among
    /// arrived processes.
    Sjf,
    /// Shortest-Remaining-Time-First: preemptive, re-evaluated every tick.
    Srtf,
}

impl Algorithm {
    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::RoundRobin => "RR",
            Algorithm::Priority => "PRIORITY",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
        }
    }

    /// Whether the discipline may interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin | Algorithm::Srtf)
    }

    /// Whether the discipline needs a time quantum.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}
