//! Process (PCB) model.
//!
//! A process is the unit of work handed to a scheduler. It carries its
//! static description (arrival, service) and the timing fields a scheduler
//! fills in while it runs.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

/// A simulated process.
///
/// Created from external input with only `pid`, `arrival_time` and
/// `service_time` meaningful; the remaining fields are owned by the
/// scheduler for the duration of a run.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
/// The latest arrival plus the total service of a workload must fit in an
/// `i64`; the driver rejects workloads whose schedule could end past
/// `i64::MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProcessDescriptor")]
pub struct Process {
    /// Process identifier, unique within a run.
    pub pid: u32,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required (burst length).
    pub service_time: i64,
    /// CPU time still owed to the process.
    pub remaining_time: i64,
    /// Time of the first dispatch. `None` = never dispatched.
    pub start_time: Option<i64>,
    /// Time the last unit of work completed. `None` = not finished.
    pub finish_time: Option<i64>,
}

/// Wire form of [`Process`]. Only the descriptor fields are required;
/// a missing `remaining_time` means the full service time is owed.
#[derive(Deserialize)]
struct ProcessDescriptor {
    pid: u32,
    arrival_time: i64,
    service_time: i64,
    #[serde(default)]
    remaining_time: Option<i64>,
    #[serde(default)]
    start_time: Option<i64>,
    #[serde(default)]
    finish_time: Option<i64>,
}

impl From<ProcessDescriptor> for Process {
    fn from(d: ProcessDescriptor) -> Self {
        Self {
            pid: d.pid,
            arrival_time: d.arrival_time,
            service_time: d.service_time,
            remaining_time: d.remaining_time.unwrap_or(d.service_time),
            start_time: d.start_time,
            finish_time: d.finish_time,
        }
    }
}

impl Process {
    /// Creates a fresh process record.
    pub fn new(pid: u32, arrival_time: i64, service_time: i64) -> Self {
        Self {
            pid,
            arrival_time,
            service_time,
            remaining_time: service_time,
            start_time: None,
            finish_time: None,
        }
    }

    /// Returns a copy with every scheduler-owned field cleared.
    pub fn reset(&self) -> Self {
        Self::new(self.pid, self.arrival_time, self.service_time)
    }

    /// Whether the process has been dispatched at least once.
    #[inline]
    pub fn started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether the process has finished its burst.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.finish_time.is_some()
    }

    /// Whether the process is eligible to run at `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: i64) -> bool {
        self.arrival_time <= clock
    }

    /// Delay between arrival and first dispatch.
    pub fn response_time(&self) -> Option<i64> {
        self.start_time.map(|s| s - self.arrival_time)
    }

    /// Time from arrival to completion.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.finish_time.map(|f| f - self.arrival_time)
    }

    /// Time spent eligible but not running.
    pub fn waiting_time(&self) -> Option<i64> {
        self.turnaround_time().map(|t| t - self.service_time)
    }
}

/// Per-process row of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub pid: u32,
    /// Arrival time.
    pub arrival_time: i64,
    /// Service (burst) time.
    pub service_time: i64,
    /// First dispatch.
    pub start_time: i64,
    /// Completion.
    pub finish_time: i64,
    /// start - arrival.
    pub response_time: i64,
    /// turnaround - service.
    pub waiting_time: i64,
    /// finish - arrival.
    pub turnaround_time: i64,
}

impl ProcessMetrics {
    /// Builds the row for a completed process.
    ///
    /// Returns `None` if the process was never dispatched or never finished.
    pub fn from_process(process: &Process) -> Option<Self> {
        let start_time = process.start_time?;
        let finish_time = process.finish_time?;
        let turnaround_time = finish_time - process.arrival_time;
        Some(Self {
            pid: process.pid,
            arrival_time: process.arrival_time,
            service_time: process.service_time,
            start_time,
            finish_time,
            response_time: start_time - process.arrival_time,
            waiting_time: turnaround_time - process.service_time,
            turnaround_time,
        })
    }
}
