//! Shortest-Remaining-Time-First, preemptive.
//!
//! The Shortest-Job-First decision is re-taken every single tick, on
//! remaining time instead of total burst, so a newly arrived short process
//! preempts a long one mid-run. Each executed tick is emitted as its own
//! single-tick slice, even when consecutive ticks run the same process;
//! consumers that want merged runs aggregate through
//! `Timeline::slices_for_process`.

use log::trace;

use crate::models::{Process, Slice, Tick, Timeline};

pub(crate) fn simulate(processes: &[Process]) -> Timeline {
    let mut timeline = Timeline::new();
    // Owned working state: (input index, remaining burst).
    let mut pending: Vec<(usize, Tick)> = processes
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.burst))
        .collect();
    let mut clock: Tick = 0;

    while !pending.is_empty() {
        // Smallest remaining time among arrived processes; strict `<`
        // keeps the first-found candidate on ties.
        let mut pick: Option<(usize, Tick)> = None;
        for (pos, &(idx, left)) in pending.iter().enumerate() {
            if processes[idx].arrival > clock {
                continue;
            }
            if pick.map_or(true, |(_, best)| left < best) {
                pick = Some((pos, left));
            }
        }

        match pick {
            Some((pos, left)) => {
                let idx = pending[pos].0;
                let p = &processes[idx];
                timeline.push(Slice::new(p.id.as_str(), p.arrival, clock, clock + 1));
                clock += 1;
                if left == 1 {
                    pending.remove(pos);
                } else {
                    pending[pos].1 = left - 1;
                }
            }
            None => {
                if let Some(next) = pending.iter().map(|&(idx, _)| processes[idx].arrival).min() {
                    trace!("cpu idle from {clock} to {next}");
                    clock = next;
                }
            }
        }
    }

    timeline
}
