//! Timeline (simulation output) model.
//!
//! A timeline is the complete account of what the CPU did: a chronological
//! list of execution slices. Non-preemptive disciplines emit exactly one
//! slice per process; preemptive disciplines emit one slice per execution
//! turn (Round Robin) or per tick (SRTF).
//!
//! # Idle Representation
//! Idle CPU time is never stored as a slice. A gap between the end of one
//! slice and the start of the next is the idle span; `Timeline::idle_gaps`
//! derives the spans for renderers that want to draw them.

use serde::{Deserialize, Serialize};

use super::Tick;

/// One contiguous execution interval of one process.
///
/// The CPU ran `process_id` over `[start, end)`. Waiting and turnaround are
/// slice-level figures relative to the process arrival; for preemptive
/// output the last slice of a process carries its final turnaround.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slice {
    /// Id of the executed process.
    pub process_id: String,
    /// First tick of the interval.
    pub start: Tick,
    /// One past the last tick of the interval.
    pub end: Tick,
    /// Ticks between arrival and this slice's start.
    pub waiting: Tick,
    /// Ticks between arrival and this slice's end.
    pub turnaround: Tick,
}

impl Slice {
    /// Creates a slice for a process that arrived at `arrival` and ran
    /// over `[start, end)`.
    pub fn new(process_id: impl Into<String>, arrival: Tick, start: Tick, end: Tick) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
            waiting: start - arrival,
            turnaround: end - arrival,
        }
    }

    /// Executed ticks (end - start).
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }
}

/// A complete simulation result: execution slices in chronological order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in non-decreasing start order.
    pub slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    /// Number of slices.
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }

    /// Latest end tick across all slices, 0 when empty.
    pub fn makespan(&self) -> Tick {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// All slices of one process, in execution order.
    pub fn slices_for_process(&self, process_id: &str) -> Vec<&Slice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// First tick at which a process ran.
    pub fn first_start(&self, process_id: &str) -> Option<Tick> {
        self.slices_for_process(process_id)
            .iter()
            .map(|s| s.start)
            .min()
    }

    /// Completion tick of a process (end of its last slice).
    pub fn completion_time(&self, process_id: &str) -> Option<Tick> {
        self.slices_for_process(process_id)
            .iter()
            .map(|s| s.end)
            .max()
    }

    /// Total ticks a process actually executed.
    pub fn executed(&self, process_id: &str) -> Tick {
        self.slices_for_process(process_id)
            .iter()
            .map(|s| s.duration())
            .sum()
    }

    /// Idle spans derived from gaps between consecutive slices.
    ///
    /// Returns `(start, end)` pairs in chronological order. A leading gap
    /// before the first slice is included when the first slice starts
    /// after tick 0.
    pub fn idle_gaps(&self) -> Vec<(Tick, Tick)> {
        let mut gaps = Vec::new();
        let mut cursor: Tick = 0;
        for s in &self.slices {
            if s.start > cursor {
                gaps.push((cursor, s.start));
            }
            cursor = cursor.max(s.end);
        }
        gaps
    }

    /// Fraction of the makespan the CPU spent executing (0.0..1.0).
    ///
    /// Returns `None` for an empty timeline.
    pub fn cpu_utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        let busy: Tick = self.slices.iter().map(|s| s.duration()).sum();
        Some(busy as f64 / horizon as f64)
    }
}
