//! Shortest Process Next (non-preemptive shortest-job-first).
//!
//! # Algorithm
//!
//! At every dispatch point:
//! 1. Among processes that have arrived and are not complete, pick the one
//!    with the smallest service time. Ties go to the process that appears
//!    first in the input, regardless of which arrived first.
//! 2. If nothing has arrived, jump the clock to the next arrival.
//! 3. Run the selected process to completion. A shorter job arriving
//!    mid-burst waits for the next dispatch point.
//!
//! # Complexity
//! O(n²): one linear scan per dispatch.
//!
//! # Reference
//! Stallings (2018), "Operating Systems", Ch. 9.2 (SPN)

use tracing::debug;

use super::{Scheduler, SimulationState};
use crate::models::{Process, Timeline};

/// Non-preemptive shortest-service-next scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spn;

impl Spn {
    /// Index of the eligible process with the smallest service time.
    ///
    /// `min_by_key` keeps the first of equal minima, which yields the
    /// input-order tie-break.
    fn select(processes: &[Process], clock: i64) -> Option<usize> {
        processes
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_completed() && p.has_arrived(clock))
            .min_by_key(|(_, p)| p.service_time)
            .map(|(idx, _)| idx)
    }

    fn next_arrival(processes: &[Process]) -> Option<i64> {
        processes
            .iter()
            .filter(|p| !p.is_completed())
            .map(|p| p.arrival_time)
            .min()
    }
}

impl Scheduler for Spn {
    fn name(&self) -> &'static str {
        "SPN"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        let mut state = SimulationState::new(processes);

        while state.completed() < processes.len() {
            match Self::select(processes, state.clock()) {
                Some(idx) => {
                    debug!(
                        pid = processes[idx].pid,
                        service = processes[idx].service_time,
                        clock = state.clock(),
                        "spn pick"
                    );
                    state.run_to_completion(processes, idx);
                }
                None => match Self::next_arrival(processes) {
                    Some(next) => state.advance_to(next),
                    None => break,
                },
            }
        }

        state.into_timeline()
    }

    fn description(&self) -> &'static str {
        "Shortest Process Next"
    }
}
