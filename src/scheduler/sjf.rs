//! Shortest-Job-First, non-preemptive.
//!
//! At each decision point the candidate set is every unfinished process
//! that has arrived by the current clock. The candidate with the smallest
//! total burst runs to completion; ties keep the earliest entry in the
//! remaining list, which preserves input order among tied arrivals. When
//! no candidate exists the clock jumps to the next arrival.

use log::trace;

use crate::models::{Process, Slice, Tick, Timeline};

pub(crate) fn simulate(processes: &[Process]) -> Timeline {
    let mut timeline = Timeline::new();
    let mut remaining: Vec<usize> = (0..processes.len()).collect();
    let mut clock: Tick = 0;

    while !remaining.is_empty() {
        // Smallest burst among arrived processes; strict `<` keeps the
        // first-found candidate on ties.
        let mut pick: Option<(usize, Tick)> = None;
        for (pos, &idx) in remaining.iter().enumerate() {
            let p = &processes[idx];
            if p.arrival > clock {
                continue;
            }
            if pick.map_or(true, |(_, best)| p.burst < best) {
                pick = Some((pos, p.burst));
            }
        }

        match pick {
            Some((pos, _)) => {
                let idx = remaining.remove(pos);
                let p = &processes[idx];
                let end = clock + p.burst;
                timeline.push(Slice::new(p.id.as_str(), p.arrival, clock, end));
                clock = end;
            }
            None => {
                if let Some(next) = remaining.iter().map(|&i| processes[i].arrival).min() {
                    trace!("cpu idle from {clock} to {next}");
                    clock = next;
                }
            }
        }
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_process(id: &str, arrival: Tick, burst: Tick) -> Process {
        Process::new(id).with_arrival(arrival).with_burst(burst)
    }

    #[test]
    fn test_shortest_runs_first() {
        let processes = vec![
            make_process("long", 0, 5),
            make_process("short", 0, 1),
            make_process("medium", 0, 3),
        ];
        let timeline = simulate(&processes);
        let ids: Vec<&str> = timeline.slices.iter().map(|s| s.process_id.as_str()).collect();
        assert_eq!(ids, vec!["short", "medium", "long"]);
    }

    #[test]
    fn test_idle_until_first_arrival() {
        let processes = vec![make_process("p1", 5, 2)];
        let timeline = simulate(&processes);
        let only = &timeline.slices[0];
        assert_eq!((only.start, only.end), (5, 7));
        assert_eq!(only.waiting, 0);
    }

    #[test]
    fn test_selection_limited_to_arrived() {
        // "tiny" is the shortest overall but has not arrived when the CPU
        // first picks, so "big" wins the first decision point.
        let processes = vec![make_process("big", 0, 4), make_process("tiny", 1, 1)];
        let timeline = simulate(&processes);
        assert_eq!(timeline.slices[0].process_id, "big");
        let second = &timeline.slices[1];
        assert_eq!(second.process_id, "tiny");
        // Non-preemptive: waits for "big" to finish at tick 4.
        assert_eq!((second.start, second.end), (4, 5));
    }

    #[test]
    fn test_equal_bursts_keep_list_order() {
        let processes = vec![
            make_process("b", 0, 2),
            make_process("a", 0, 2),
        ];
        let timeline = simulate(&processes);
        assert_eq!(timeline.slices[0].process_id, "b");
    }

    #[test]
    fn test_idle_between_batches() {
        let processes = vec![make_process("p1", 0, 2), make_process("p2", 6, 1)];
        let timeline = simulate(&processes);
        assert_eq!(timeline.slices[1].start, 6);
        assert_eq!(timeline.idle_gaps(), vec![(2, 6)]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(simulate(&[]).slice_count(), 0);
    }
}
