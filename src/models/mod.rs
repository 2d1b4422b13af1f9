//! Simulation domain models.
//!
//! Provides the data types shared by every scheduling discipline: the
//! process record, the run configuration and the execution timeline.
//!
//! # Terminology
//!
//! | u-cpusched | Textbook |
//! |------------|----------|
//! | Process | PCB / job |
//! | service_time | CPU burst |
//! | ExecutionSlice | Dispatch interval |
//! | Timeline | Gantt chart |

mod config;
mod process;
mod timeline;

pub use config::{Algorithm, SimulationConfig};
pub use process::{Process, ProcessMetrics};
pub use timeline::{ExecutionSlice, Timeline};
