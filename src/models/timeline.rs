//! Execution timeline.
//!
//! A timeline is the ordered list of CPU slices a scheduler handed out.
//! Non-preemptive disciplines produce one slice per process; Round Robin
//! produces one slice per quantum.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One contiguous period of CPU time given to a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that ran.
    pub pid: u32,
    /// Dispatch time.
    pub start: i64,
    /// Time the CPU was taken back (preemption or completion).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a slice.
    pub fn new(pid: u32, start: i64, end: i64) -> Self {
        Self { pid, start, end }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Dispatch-ordered execution history of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in dispatch order.
    pub slices: Vec<ExecutionSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, slice: ExecutionSlice) {
        self.slices.push(slice);
    }

    /// Number of dispatches.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing was dispatched.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// End of the last slice, or 0 for an empty timeline.
    pub fn end(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(ExecutionSlice::duration).sum()
    }

    /// CPU time executed per process.
    pub fn executed_by_pid(&self) -> HashMap<u32, i64> {
        let mut executed: HashMap<u32, i64> = HashMap::new();
        for s in &self.slices {
            *executed.entry(s.pid).or_insert(0) += s.duration();
        }
        executed
    }

    /// Number of times the CPU switched from one process to another.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid)
            .count()
    }

    /// Idle gaps between consecutive slices (and before the first one).
    pub fn idle_time(&self) -> i64 {
        self.end() - self.busy_time()
    }
}
