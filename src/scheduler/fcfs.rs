//! First-Come-First-Served.
//!
//! Non-preemptive: processes run to completion in arrival order, ties
//! broken by input order. The shared in-order core below is also the
//! back end of the Priority discipline, which only changes the ordering.

use crate::models::{Process, Slice, Tick, Timeline};

/// Runs `processes` non-preemptively in the given index order.
///
/// The clock advances to `max(clock, arrival)` before each start, so a gap
/// appears in the timeline whenever the next process has not arrived yet.
pub(crate) fn schedule_in_order(processes: &[Process], order: &[usize]) -> Timeline {
    let mut timeline = Timeline::new();
    let mut clock: Tick = 0;

    for &idx in order {
        let p = &processes[idx];
        let start = clock.max(p.arrival);
        let end = start + p.burst;
        timeline.push(Slice::new(p.id.as_str(), p.arrival, start, end));
        clock = end;
    }

    timeline
}

pub(crate) fn simulate(processes: &[Process]) -> Timeline {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    // Stable sort keeps input order among equal arrivals.
    order.sort_by_key(|&i| processes[i].arrival);
    schedule_in_order(processes, &order)
}
