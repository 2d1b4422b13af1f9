//! CPU schedulers and run metrics.
//!
//! Provides the three supported disciplines behind a common [`Scheduler`]
//! trait, the per-run [`SimulationState`] they share, and the summary
//! metrics computed from a finished run.
//!
//! # Disciplines
//!
//! | Scheduler | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | [`Fcfs`] | No | Earliest arrival (stable) |
//! | [`Spn`] | No | Smallest service among arrived |
//! | [`RoundRobin`] | Quantum expiry | FIFO ready queue |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod fcfs;
mod kpi;
mod round_robin;
mod spn;
mod state;

pub use fcfs::Fcfs;
pub use kpi::SimulationSummary;
pub use round_robin::RoundRobin;
pub use spn::Spn;
pub use state::SimulationState;

use std::fmt::Debug;

use crate::models::{Algorithm, Process, Timeline};

/// A single-CPU scheduling discipline.
///
/// `schedule` takes exclusive ownership of the process records for the run,
/// resets their run fields, fills in `start_time`, `finish_time` and
/// `remaining_time`, and returns the timeline of dispatches. Implementations
/// are pure: the same input always yields the same timeline, and every run
/// terminates, even for records with a non-positive service time.
pub trait Scheduler: Send + Sync + Debug {
    /// Short name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Runs every process to completion.
    fn schedule(&self, processes: &mut [Process]) -> Timeline;

    /// Discipline description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Builds the scheduler for an algorithm.
///
/// Returns `None` for disciplines that are recognized but not implemented.
pub fn for_algorithm(algorithm: &Algorithm) -> Option<Box<dyn Scheduler>> {
    match *algorithm {
        Algorithm::Fcfs => Some(Box::new(Fcfs)),
        Algorithm::Spn => Some(Box::new(Spn)),
        Algorithm::RoundRobin { quantum } => Some(Box::new(RoundRobin::new(quantum))),
        Algorithm::Priority => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn workload() -> impl Strategy<Value = Vec<Process>> {
        prop::collection::vec((0i64..30, 1i64..12), 0..12).prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (arrival, service))| Process::new(i as u32 + 1, arrival, service))
                .collect()
        })
    }

    fn all_schedulers(quantum: i64) -> Vec<Box<dyn Scheduler>> {
        vec![
            Box::new(Fcfs),
            Box::new(Spn),
            Box::new(RoundRobin::new(quantum)),
        ]
    }

    #[test]
    fn test_for_algorithm() {
        assert_eq!(for_algorithm(&Algorithm::Fcfs).unwrap().name(), "FCFS");
        assert_eq!(for_algorithm(&Algorithm::Spn).unwrap().name(), "SPN");
        assert_eq!(
            for_algorithm(&Algorithm::RoundRobin { quantum: 2 })
                .unwrap()
                .description(),
            "Round Robin"
        );
        assert!(for_algorithm(&Algorithm::Priority).is_none());
    }

    #[test]
    fn test_deserialized_descriptors_conserve_service() {
        let input: Vec<Process> = serde_json::from_str(
            r#"[
                {"pid": 1, "arrival_time": 0, "service_time": 5},
                {"pid": 2, "arrival_time": 1, "service_time": 3}
            ]"#,
        )
        .unwrap();

        for scheduler in all_schedulers(2) {
            let mut processes = input.clone();
            let executed = scheduler.schedule(&mut processes).executed_by_pid();
            assert_eq!(executed[&1], 5, "{}", scheduler.name());
            assert_eq!(executed[&2], 3, "{}", scheduler.name());
            for p in &processes {
                assert!(p.turnaround_time().unwrap() >= p.service_time);
            }
        }
    }

    #[test]
    fn test_rerun_on_finished_records_matches_fresh_run() {
        let fresh = vec![
            Process::new(1, 0, 4),
            Process::new(2, 1, 3),
            Process::new(3, 2, 5),
        ];

        for scheduler in all_schedulers(2) {
            let mut expected = fresh.clone();
            let expected_timeline = scheduler.schedule(&mut expected);

            let mut reused = expected.clone();
            assert_eq!(scheduler.schedule(&mut reused), expected_timeline);
            assert_eq!(reused, expected);
        }
    }

    #[test]
    fn test_non_positive_service_terminates() {
        let input = vec![
            Process::new(1, 0, -1),
            Process::new(2, 0, 3),
            Process::new(3, 1, 0),
        ];

        for scheduler in all_schedulers(2) {
            let mut processes = input.clone();
            let timeline = scheduler.schedule(&mut processes);

            assert!(processes.iter().all(Process::is_completed), "{}", scheduler.name());
            assert_eq!(timeline.busy_time(), 3);
            assert!(timeline.slices.iter().all(|s| s.pid == 2));
        }
    }

    proptest! {
        #[test]
        fn prop_every_process_completes_with_conserved_service(
            input in workload(),
            quantum in 1i64..6,
        ) {
            for scheduler in all_schedulers(quantum) {
                let mut processes = input.clone();
                let timeline = scheduler.schedule(&mut processes);
                let executed = timeline.executed_by_pid();

                for p in &processes {
                    prop_assert!(p.is_completed(), "{} left pid {} unfinished", scheduler.name(), p.pid);
                    prop_assert_eq!(p.remaining_time, 0);
                    prop_assert_eq!(executed.get(&p.pid).copied(), Some(p.service_time));
                }
            }
        }

        #[test]
        fn prop_start_and_finish_ordering(input in workload(), quantum in 1i64..6) {
            for scheduler in all_schedulers(quantum) {
                let mut processes = input.clone();
                scheduler.schedule(&mut processes);

                for p in &processes {
                    let start = p.start_time.unwrap();
                    let finish = p.finish_time.unwrap();
                    prop_assert!(p.arrival_time <= start);
                    prop_assert!(start + p.service_time <= finish);
                    prop_assert!(p.response_time().unwrap() >= 0);
                    prop_assert!(p.waiting_time().unwrap() >= 0);
                }
            }
        }

        #[test]
        fn prop_slices_never_overlap(input in workload(), quantum in 1i64..6) {
            for scheduler in all_schedulers(quantum) {
                let mut processes = input.clone();
                let timeline = scheduler.schedule(&mut processes);

                for w in timeline.slices.windows(2) {
                    prop_assert!(w[0].end <= w[1].start);
                }
                for s in &timeline.slices {
                    prop_assert!(s.duration() > 0);
                }
            }
        }

        #[test]
        fn prop_non_preemptive_single_slice(input in workload()) {
            let schedulers: [&dyn Scheduler; 2] = [&Fcfs, &Spn];
            for scheduler in schedulers {
                let mut processes = input.clone();
                let timeline = scheduler.schedule(&mut processes);
                prop_assert_eq!(timeline.len(), processes.len());
            }
        }

        #[test]
        fn prop_fcfs_deterministic(input in workload()) {
            let mut a = input.clone();
            let mut b = input;
            prop_assert_eq!(Fcfs.schedule(&mut a), Fcfs.schedule(&mut b));
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_spn_shortest_at_each_dispatch(input in workload()) {
            let mut processes = input;
            let timeline = Spn.schedule(&mut processes);

            for slice in &timeline.slices {
                let chosen = processes.iter().find(|p| p.pid == slice.pid).unwrap();
                // Eligible alternatives: arrived, not yet started
                for other in &processes {
                    let waiting = other.arrival_time <= slice.start
                        && other.start_time.unwrap() > slice.start;
                    if waiting {
                        prop_assert!(other.service_time >= chosen.service_time);
                    }
                }
            }
        }

        #[test]
        fn prop_round_robin_quantum_bound(input in workload(), quantum in 1i64..6) {
            let mut processes = input;
            let timeline = RoundRobin::new(quantum).schedule(&mut processes);

            for slice in &timeline.slices {
                prop_assert!(slice.duration() <= quantum);
                if slice.duration() < quantum {
                    let p = processes.iter().find(|p| p.pid == slice.pid).unwrap();
                    prop_assert_eq!(p.finish_time, Some(slice.end));
                }
            }
        }
    }
}
