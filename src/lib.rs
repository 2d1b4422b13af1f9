//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates single-CPU process scheduling over a fixed workload and derives
//! per-process and aggregate performance metrics (response, waiting and
//! turnaround time, throughput).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessMetrics`, `Algorithm`,
//!   `SimulationConfig`, `ExecutionSlice`, `Timeline`
//! - **`scheduler`**: FCFS, SPN and Round Robin behind the `Scheduler` trait,
//!   plus `SimulationSummary` metrics
//! - **`simulation`**: The driver: `Simulator`, `SimulationResult`
//! - **`validation`**: Input integrity checks (duplicate PIDs, non-positive
//!   service or quantum)
//! - **`workload`**: Seeded synthetic workload generation
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::{Process, SimulationConfig};
//! use u_cpusched::simulate;
//!
//! let processes = vec![Process::new(1, 0, 4), Process::new(2, 1, 3)];
//! let result = simulate(&processes, &SimulationConfig::round_robin(2)).unwrap();
//! assert_eq!(result.summary.makespan, 7);
//! ```
//!
//! # Logging
//!
//! Diagnostics are emitted through `tracing`. The crate installs no
//! subscriber.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod error;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
pub use simulation::{simulate, SimulationResult, Simulator};
