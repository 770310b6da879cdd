//! Static priority, non-preemptive.
//!
//! Priority affects selection order only: processes are ordered by
//! priority (lower value = more urgent), ties by arrival, then input
//! order, and that ordering is handed to the First-Come-First-Served
//! core. A running process is never preempted, even when a more urgent
//! one arrives mid-execution.

use crate::models::{Process, Timeline};

use super::fcfs;

pub(crate) fn simulate(processes: &[Process]) -> Timeline {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    // Stable sort keeps input order among full ties.
    order.sort_by_key(|&i| (processes[i].priority, processes[i].arrival));
    fcfs::schedule_in_order(processes, &order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tick;

    fn make_process(id: &str, arrival: Tick, burst: Tick, priority: i32) -> Process {
        Process::new(id)
            .with_arrival(arrival)
            .with_burst(burst)
            .with_priority(priority)
    }

    #[test]
    fn test_lower_value_runs_first() {
        let processes = vec![
            make_process("low", 0, 2, 5),
            make_process("high", 0, 2, 1),
        ];
        let timeline = simulate(&processes);
        assert_eq!(timeline.slices[0].process_id, "high");
        assert_eq!(timeline.slices[1].process_id, "low");
        assert_eq!(timeline.slices[1].waiting, 2);
    }

    #[test]
    fn test_equal_priority_falls_back_to_arrival() {
        let processes = vec![
            make_process("late", 3, 1, 2),
            make_process("early", 0, 1, 2),
        ];
        let timeline = simulate(&processes);
        assert_eq!(timeline.slices[0].process_id, "early");
    }

    #[test]
    fn test_urgent_arrival_does_not_preempt() {
        // "high" is more urgent but arrives later; the ordering places it
        // first, so the CPU idles until its arrival and "low" runs after.
        let processes = vec![
            make_process("low", 0, 5, 5),
            make_process("high", 2, 2, 0),
        ];
        let timeline = simulate(&processes);

        let first = &timeline.slices[0];
        assert_eq!(first.process_id, "high");
        assert_eq!((first.start, first.end), (2, 4));

        let second = &timeline.slices[1];
        assert_eq!(second.process_id, "low");
        // Runs [4,9) in one piece: no preemption once started.
        assert_eq!((second.start, second.end), (4, 9));
    }

    #[test]
    fn test_full_tie_keeps_input_order() {
        let processes = vec![
            make_process("b", 0, 1, 1),
            make_process("a", 0, 1, 1),
        ];
        let timeline = simulate(&processes);
        assert_eq!(timeline.slices[0].process_id, "b");
    }
}
