//! First Come First Served.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time. Equal arrivals keep input order
//!    (stable sort), so repeated runs produce identical timelines.
//! 2. Walk the order with a single clock: each process starts at
//!    `max(clock, arrival)` and runs to completion.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for dispatch.
//!
//! # Reference
//! Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9.2

use tracing::debug;

use super::{Scheduler, SimulationState};
use crate::models::{Process, Timeline};

/// Non-preemptive arrival-order scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        let mut state = SimulationState::new(processes);

        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&idx| processes[idx].arrival_time);

        for idx in order {
            state.advance_to(processes[idx].arrival_time);
            debug!(pid = processes[idx].pid, clock = state.clock(), "fcfs pick");
            state.run_to_completion(processes, idx);
        }

        state.into_timeline()
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}
