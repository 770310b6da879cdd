//! Run quality metrics.
//!
//! Computes the standard per-process and aggregate figures from a
//! completed timeline and its input processes. These are collaborator-side
//! statistics: the engine itself only emits slices.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion tick |
//! | Turnaround | completion - arrival, per process |
//! | Waiting | turnaround - burst, per process |
//! | Avg Waiting / Turnaround | Mean over distinct input processes |
//! | CPU Utilization | Executed ticks / makespan |

use crate::models::{Process, Tick, Timeline};

/// Aggregated timing figures for one process.
///
/// For preemptive output these aggregate every slice of the process:
/// completion is the end of the last slice, and waiting counts every tick
/// spent ready but not executing.
#[derive(Debug, Clone)]
pub struct ProcessMetrics {
    /// Id of the process.
    pub process_id: String,
    /// First tick the process ran.
    pub first_start: Tick,
    /// End of the process's last slice.
    pub completion: Tick,
    /// completion - arrival.
    pub turnaround: Tick,
    /// turnaround - burst.
    pub waiting: Tick,
}

/// Aggregate performance figures for one simulation run.
#[derive(Debug, Clone)]
pub struct SimulationKpi {
    /// Latest completion tick, 0 for an empty run.
    pub makespan: Tick,
    /// Mean waiting time over distinct input processes.
    pub avg_waiting: f64,
    /// Mean turnaround time over distinct input processes.
    pub avg_turnaround: f64,
    /// Executed ticks divided by makespan, 0.0 for an empty run.
    pub cpu_utilization: f64,
    /// Per-process figures, in input order.
    pub per_process: Vec<ProcessMetrics>,
}

impl SimulationKpi {
    /// Computes KPIs from a timeline and the processes that produced it.
    ///
    /// Averages divide by the number of distinct input processes, not by
    /// the slice count, so preemptive runs are not skewed by their finer
    /// slice granularity.
    pub fn calculate(timeline: &Timeline, processes: &[Process]) -> Self {
        let mut per_process = Vec::with_capacity(processes.len());
        let mut total_waiting: f64 = 0.0;
        let mut total_turnaround: f64 = 0.0;

        for p in processes {
            if let (Some(first_start), Some(completion)) =
                (timeline.first_start(&p.id), timeline.completion_time(&p.id))
            {
                let turnaround = completion - p.arrival;
                let waiting = turnaround - p.burst;
                total_waiting += waiting as f64;
                total_turnaround += turnaround as f64;
                per_process.push(ProcessMetrics {
                    process_id: p.id.clone(),
                    first_start,
                    completion,
                    turnaround,
                    waiting,
                });
            }
        }

        let count = processes.len();
        let (avg_waiting, avg_turnaround) = if count == 0 {
            (0.0, 0.0)
        } else {
            (total_waiting / count as f64, total_turnaround / count as f64)
        };

        Self {
            makespan: timeline.makespan(),
            avg_waiting,
            avg_turnaround,
            cpu_utilization: timeline.cpu_utilization().unwrap_or(0.0),
            per_process,
        }
    }
}
