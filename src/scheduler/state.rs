//! Per-run scheduling state.
//!
//! Owns the simulation clock, the FIFO ready queue and the timeline of a
//! single run. A fresh state is built for every run; nothing is shared
//! between runs, including run fields left on the process records.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::models::{ExecutionSlice, Process, Timeline};

/// Clock, ready queue and dispatch bookkeeping for one run.
///
/// Processes are referred to by their index in the slice handed to the
/// scheduler, so PID values are never used as array offsets.
#[derive(Debug, Clone)]
pub struct SimulationState {
    clock: i64,
    ready: VecDeque<usize>,
    /// Not yet admitted to the ready queue, in input order.
    pending: Vec<usize>,
    completed: usize,
    timeline: Timeline,
}

impl SimulationState {
    /// Creates the state for a run over `processes`, with the clock at 0.
    ///
    /// Every record is reset: `remaining_time` is set to `service_time` and
    /// both start and finish times are cleared.
    pub fn new(processes: &mut [Process]) -> Self {
        for p in processes.iter_mut() {
            *p = p.reset();
        }
        Self {
            clock: 0,
            ready: VecDeque::with_capacity(processes.len()),
            pending: (0..processes.len()).collect(),
            completed: 0,
            timeline: Timeline::new(),
        }
    }

    /// Current simulation time.
    #[inline]
    pub fn clock(&self) -> i64 {
        self.clock
    }

    /// Moves the clock forward to `time`. Never moves it backwards.
    pub fn advance_to(&mut self, time: i64) {
        if time > self.clock {
            trace!(from = self.clock, to = time, "cpu idle");
            self.clock = time;
        }
    }

    /// Number of processes that finished their burst.
    #[inline]
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Moves every pending process that has arrived by the current clock
    /// to the tail of the ready queue, in input order.
    ///
    /// Returns the number of processes admitted.
    pub fn admit_arrivals(&mut self, processes: &[Process]) -> usize {
        let clock = self.clock;
        let ready = &mut self.ready;
        let before = self.pending.len();

        self.pending.retain(|&idx| {
            if processes[idx].has_arrived(clock) {
                trace!(pid = processes[idx].pid, clock, "admitted to ready queue");
                ready.push_back(idx);
                false
            } else {
                true
            }
        });

        before - self.pending.len()
    }

    /// Earliest arrival among processes not yet admitted.
    pub fn next_arrival(&self, processes: &[Process]) -> Option<i64> {
        self.pending
            .iter()
            .map(|&idx| processes[idx].arrival_time)
            .min()
    }

    /// Removes the head of the ready queue.
    pub fn pop_ready(&mut self) -> Option<usize> {
        self.ready.pop_front()
    }

    /// Appends a process to the tail of the ready queue.
    pub fn push_ready(&mut self, idx: usize) {
        self.ready.push_back(idx);
    }

    /// Gives the CPU to `processes[idx]` for at most `limit` ticks.
    ///
    /// Records the first dispatch, advances the clock, appends the slice to
    /// the timeline and marks the process finished when its remaining time
    /// reaches zero. A process with no work left (including a non-positive
    /// service time) finishes immediately without a slice. Returns the
    /// number of ticks executed.
    ///
    /// The clock saturates at `i64::MAX` instead of overflowing.
    pub fn dispatch(&mut self, processes: &mut [Process], idx: usize, limit: i64) -> i64 {
        let process = &mut processes[idx];
        if process.start_time.is_none() {
            process.start_time = Some(self.clock);
        }

        let start = self.clock;
        let run = limit.min(process.remaining_time).max(0);
        self.clock = self.clock.saturating_add(run);
        process.remaining_time = (process.remaining_time - run).max(0);
        if run > 0 {
            self.timeline
                .push(ExecutionSlice::new(process.pid, start, self.clock));
        }

        debug!(
            pid = process.pid,
            start,
            end = self.clock,
            remaining = process.remaining_time,
            "dispatched"
        );

        if process.remaining_time == 0 && process.finish_time.is_none() {
            process.finish_time = Some(self.clock);
            self.completed += 1;
        }

        run
    }

    /// Runs `processes[idx]` until its burst is exhausted.
    pub fn run_to_completion(&mut self, processes: &mut [Process], idx: usize) -> i64 {
        let remaining = processes[idx].remaining_time;
        self.dispatch(processes, idx, remaining)
    }

    /// Consumes the state and returns the recorded timeline.
    pub fn into_timeline(self) -> Timeline {
        self.timeline
    }
}
