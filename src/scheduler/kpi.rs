//! Simulation performance metrics.
//!
//! Aggregates per-process timings of a completed run into summary
//! statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Response | mean(start - arrival) |
//! | Avg Waiting | mean(turnaround - service) |
//! | Avg Turnaround | mean(finish - arrival) |
//! | Makespan | Latest finish time |
//! | Throughput | count / makespan |
//! | CPU Utilization | busy time / makespan |
//! | Context Switches | Consecutive slices of different processes |
//!
//! Every ratio resolves to 0 when its denominator is 0 (empty workload).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{Process, Timeline};

/// Summary statistics of a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Number of completed processes included in the averages.
    pub process_count: usize,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Longest waiting time of any single process.
    pub max_waiting_time: i64,
    /// Latest finish time (0 when empty).
    pub makespan: i64,
    /// Completed processes per unit time.
    pub throughput: f64,
    /// Fraction of `[0, makespan]` the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Number of switches between different processes.
    pub context_switches: usize,
}

impl SimulationSummary {
    /// Computes the summary from completed processes and their timeline.
    ///
    /// Processes without a finish time are skipped. Totals are accumulated
    /// in `i128`, so sums over large times cannot overflow.
    pub fn calculate(processes: &[Process], timeline: &Timeline) -> Self {
        let mut total_response: i128 = 0;
        let mut total_waiting: i128 = 0;
        let mut total_turnaround: i128 = 0;
        let mut max_waiting: i64 = 0;
        let mut makespan: i64 = 0;
        let mut counted: usize = 0;

        for p in processes {
            let (Some(response), Some(turnaround), Some(finish)) =
                (p.response_time(), p.turnaround_time(), p.finish_time)
            else {
                continue;
            };
            let waiting = turnaround - p.service_time;

            counted += 1;
            total_response += i128::from(response);
            total_waiting += i128::from(waiting);
            total_turnaround += i128::from(turnaround);
            max_waiting = max_waiting.max(waiting);
            makespan = makespan.max(finish);
        }

        let mean = |total: i128| {
            if counted == 0 {
                0.0
            } else {
                total as f64 / counted as f64
            }
        };

        let (throughput, cpu_utilization) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                counted as f64 / makespan as f64,
                timeline.busy_time() as f64 / makespan as f64,
            )
        };

        Self {
            process_count: counted,
            avg_response_time: mean(total_response),
            avg_waiting_time: mean(total_waiting),
            avg_turnaround_time: mean(total_turnaround),
            max_waiting_time: max_waiting,
            makespan,
            throughput,
            cpu_utilization,
            context_switches: timeline.context_switches(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionSlice;

    fn completed(pid: u32, arrival: i64, service: i64, start: i64, finish: i64) -> Process {
        let mut p = Process::new(pid, arrival, service);
        p.start_time = Some(start);
        p.finish_time = Some(finish);
        p.remaining_time = 0;
        p
    }

    fn fcfs_fixture() -> (Vec<Process>, Timeline) {
        let processes = vec![
            completed(1, 0, 5, 0, 5),
            completed(2, 1, 3, 5, 8),
            completed(3, 2, 8, 8, 16),
        ];
        let mut timeline = Timeline::new();
        timeline.push(ExecutionSlice::new(1, 0, 5));
        timeline.push(ExecutionSlice::new(2, 5, 8));
        timeline.push(ExecutionSlice::new(3, 8, 16));
        (processes, timeline)
    }

    #[test]
    fn test_summary_basic() {
        let (processes, timeline) = fcfs_fixture();
        let s = SimulationSummary::calculate(&processes, &timeline);

        assert_eq!(s.process_count, 3);
        assert_eq!(s.makespan, 16);
        assert!((s.avg_response_time - 10.0 / 3.0).abs() < 1e-10);
        assert!((s.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10); // (0+4+6)/3
        assert!((s.avg_turnaround_time - 26.0 / 3.0).abs() < 1e-10); // (5+7+14)/3
        assert!((s.throughput - 3.0 / 16.0).abs() < 1e-10);
        assert!((s.cpu_utilization - 1.0).abs() < 1e-10);
        assert_eq!(s.max_waiting_time, 6);
        assert_eq!(s.context_switches, 2);
    }

    #[test]
    fn test_summary_utilization_with_idle() {
        let processes = vec![completed(1, 0, 2, 0, 2), completed(2, 6, 2, 6, 8)];
        let mut timeline = Timeline::new();
        timeline.push(ExecutionSlice::new(1, 0, 2));
        timeline.push(ExecutionSlice::new(2, 6, 8));

        let s = SimulationSummary::calculate(&processes, &timeline);
        assert!((s.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((s.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_summary_empty() {
        let s = SimulationSummary::calculate(&[], &Timeline::new());
        assert_eq!(s.process_count, 0);
        assert_eq!(s.makespan, 0);
        assert_eq!(s.avg_response_time, 0.0);
        assert_eq!(s.avg_waiting_time, 0.0);
        assert_eq!(s.avg_turnaround_time, 0.0);
        assert_eq!(s.throughput, 0.0);
        assert_eq!(s.cpu_utilization, 0.0);
        assert_eq!(s.context_switches, 0);
    }

    #[test]
    fn test_summary_large_times_do_not_overflow() {
        let end = i64::MAX;
        let processes = vec![
            completed(1, 0, 1, end - 2, end - 1),
            completed(2, 0, 1, end - 1, end),
        ];
        let mut timeline = Timeline::new();
        timeline.push(ExecutionSlice::new(1, end - 2, end - 1));
        timeline.push(ExecutionSlice::new(2, end - 1, end));

        let s = SimulationSummary::calculate(&processes, &timeline);
        assert_eq!(s.makespan, end);
        assert_eq!(s.max_waiting_time, end - 1);
        let expected = end as f64 - 0.5;
        assert!((s.avg_turnaround_time - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_summary_skips_unfinished() {
        let (mut processes, timeline) = fcfs_fixture();
        processes.push(Process::new(4, 0, 1));

        let s = SimulationSummary::calculate(&processes, &timeline);
        assert_eq!(s.process_count, 3);
    }
}
