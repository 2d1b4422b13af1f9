//! Simulation driver.
//!
//! Validates a workload, runs the configured scheduler over a private copy
//! of it and aggregates the outcome. This is the entry point for callers;
//! schedulers and the metrics aggregator are never invoked directly by
//! presentation code.
//!
//! # Failure
//!
//! A run either returns every input process with complete metrics or fails
//! with a [`SimulationError`]. There are no partial results.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::SimulationError;
use crate::models::{Algorithm, Process, ProcessMetrics, SimulationConfig, Timeline};
use crate::scheduler::{self, SimulationSummary};
use crate::validation::validate_input;

/// Outcome of a successful simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Discipline that produced this result.
    pub algorithm: Algorithm,
    /// Completed process records, in input order.
    pub processes: Vec<Process>,
    /// Per-process metrics table, in input order.
    pub metrics: Vec<ProcessMetrics>,
    /// Dispatch history.
    pub timeline: Timeline,
    /// Aggregate statistics.
    pub summary: SimulationSummary,
    #[serde(skip)]
    index_by_pid: HashMap<u32, usize>,
}

impl SimulationResult {
    fn new(
        algorithm: Algorithm,
        processes: Vec<Process>,
        metrics: Vec<ProcessMetrics>,
        timeline: Timeline,
        summary: SimulationSummary,
    ) -> Self {
        let index_by_pid = processes
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.pid, idx))
            .collect();
        Self {
            algorithm,
            processes,
            metrics,
            timeline,
            summary,
            index_by_pid,
        }
    }

    /// Completed record for a PID.
    pub fn process(&self, pid: u32) -> Option<&Process> {
        self.index_by_pid.get(&pid).map(|&idx| &self.processes[idx])
    }

    /// Metrics row for a PID.
    pub fn metrics_for(&self, pid: u32) -> Option<&ProcessMetrics> {
        self.index_by_pid.get(&pid).map(|&idx| &self.metrics[idx])
    }

    /// Number of simulated processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the workload was empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Serializes the result as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SimulationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs a configured scheduling discipline over workloads.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Process, SimulationConfig};
/// use u_cpusched::simulation::Simulator;
///
/// let processes = vec![
///     Process::new(1, 0, 5),
///     Process::new(2, 1, 3),
///     Process::new(3, 2, 8),
/// ];
///
/// let result = Simulator::new(SimulationConfig::fcfs()).run(&processes).unwrap();
/// assert_eq!(result.summary.makespan, 16);
/// assert_eq!(result.metrics_for(2).unwrap().waiting_time, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator for the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates `processes` under the configured discipline.
    ///
    /// The input slice is not modified; each run works on fresh copies of
    /// the records.
    ///
    /// # Errors
    /// - [`SimulationError::UnsupportedAlgorithm`] for recognized but
    ///   unimplemented disciplines.
    /// - [`SimulationError::InvalidInput`] when the workload or quantum
    ///   violates a precondition, including a workload whose schedule could
    ///   end past `i64::MAX`.
    /// - [`SimulationError::IncompleteRun`] if a process was left unfinished.
    pub fn run(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError> {
        let algorithm = self.config.algorithm;

        let unsupported = || SimulationError::UnsupportedAlgorithm(algorithm.to_string());
        if !algorithm.is_supported() {
            warn!(%algorithm, "algorithm not implemented");
            return Err(unsupported());
        }

        if let Err(errors) = validate_input(processes, &algorithm) {
            warn!(%algorithm, errors = errors.len(), "rejected workload");
            return Err(errors.into());
        }

        info!(
            %algorithm,
            processes = processes.len(),
            "starting simulation"
        );

        let scheduler = scheduler::for_algorithm(&algorithm).ok_or_else(unsupported)?;
        let mut records = processes.to_vec();
        let timeline = scheduler.schedule(&mut records);

        let metrics = records
            .iter()
            .map(|p| {
                ProcessMetrics::from_process(p).ok_or(SimulationError::IncompleteRun { pid: p.pid })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let summary = SimulationSummary::calculate(&records, &timeline);

        info!(
            %algorithm,
            makespan = summary.makespan,
            dispatches = timeline.len(),
            avg_waiting = summary.avg_waiting_time,
            "simulation finished"
        );

        Ok(SimulationResult::new(
            algorithm, records, metrics, timeline, summary,
        ))
    }

    /// Runs several configurations over independent copies of one workload.
    ///
    /// Results are returned in configuration order. Fails on the first
    /// configuration that cannot run.
    pub fn compare(
        processes: &[Process],
        configs: &[SimulationConfig],
    ) -> Result<Vec<SimulationResult>, SimulationError> {
        configs
            .iter()
            .map(|config| Simulator::new(*config).run(processes))
            .collect()
    }
}

/// Simulates `processes` under `config`.
pub fn simulate(
    processes: &[Process],
    config: &SimulationConfig,
) -> Result<SimulationResult, SimulationError> {
    Simulator::new(*config).run(processes)
}
