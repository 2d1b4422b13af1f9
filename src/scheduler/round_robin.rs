//! Round Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Admit every process that arrives at t=0, in input order.
//! 2. While processes remain:
//!    - Empty ready queue: jump to the earliest pending arrival and admit
//!      everything that has arrived by then.
//!    - Otherwise dequeue the head and run it for `min(quantum, remaining)`.
//!    - Admit processes that arrived during the slice (input order)
//!      **before** re-queuing the process that just ran.
//!    - Re-queue the process at the tail if it still has work.
//!
//! Service time never influences the order; preemption only happens on
//! quantum exhaustion.
//!
//! # Per-process states
//!
//! ```text
//! NOT_ARRIVED → READY → RUNNING → READY      (remaining > 0)
//!                               → COMPLETED  (remaining == 0)
//! ```
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use tracing::debug;

use super::{Scheduler, SimulationState};
use crate::models::{Process, Timeline};

/// Preemptive time-slicing scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{RoundRobin, Scheduler};
///
/// let mut processes = vec![Process::new(1, 0, 3), Process::new(2, 2, 2)];
/// let timeline = RoundRobin::new(2).schedule(&mut processes);
///
/// // P2 arrives at t=2 and is queued ahead of the preempted P1
/// let order: Vec<u32> = timeline.slices.iter().map(|s| s.pid).collect();
/// assert_eq!(order, vec![1, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round Robin scheduler.
    ///
    /// A quantum below 1 is raised to 1.
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum: quantum.max(1),
        }
    }

    /// Time quantum in ticks.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        let mut state = SimulationState::new(processes);
        state.admit_arrivals(processes);

        while state.completed() < processes.len() {
            let Some(idx) = state.pop_ready() else {
                match state.next_arrival(processes) {
                    Some(next) => {
                        state.advance_to(next);
                        state.admit_arrivals(processes);
                        continue;
                    }
                    None => break,
                }
            };

            state.dispatch(processes, idx, self.quantum);
            let admitted = state.admit_arrivals(processes);

            if processes[idx].is_completed() {
                debug!(pid = processes[idx].pid, clock = state.clock(), "completed");
            } else {
                debug!(
                    pid = processes[idx].pid,
                    clock = state.clock(),
                    admitted,
                    "preempted"
                );
                state.push_ready(idx);
            }
        }

        state.into_timeline()
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}
