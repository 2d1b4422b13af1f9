//! Simulation configuration.
//!
//! Selects the scheduling discipline for a run. Only Round Robin takes a
//! parameter (the quantum).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Algorithm {
    /// First Come First Served (non-preemptive).
    Fcfs,
    /// Shortest Process Next (non-preemptive).
    Spn,
    /// Round Robin with a fixed time quantum (preemptive).
    RoundRobin {
        /// Maximum contiguous ticks per dispatch.
        quantum: i64,
    },
    /// Priority scheduling. Recognized but not implemented.
    Priority,
}

impl Algorithm {
    /// Short name (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Spn => "SPN",
            Self::RoundRobin { .. } => "RR",
            Self::Priority => "PRIORITY",
        }
    }

    /// Whether the simulator can run this discipline.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Priority)
    }

    /// Round Robin quantum, if any.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            Self::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Parses `fcfs`, `spn`, `priority` and `rr:<quantum>` (case-insensitive).
///
/// `sjf` is accepted as an alias for SPN, and `round_robin:<q>` / `rr<q>`
/// for Round Robin.
impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim().to_ascii_lowercase();
        match spec.as_str() {
            "fcfs" | "fifo" => return Ok(Self::Fcfs),
            "spn" | "sjf" => return Ok(Self::Spn),
            "priority" | "prio" => return Ok(Self::Priority),
            _ => {}
        }

        let quantum = spec
            .strip_prefix("round_robin:")
            .or_else(|| spec.strip_prefix("rr:"))
            .or_else(|| spec.strip_prefix("rr"));

        match quantum.map(str::parse::<i64>) {
            Some(Ok(quantum)) => Ok(Self::RoundRobin { quantum }),
            _ => Err(SimulationError::InvalidAlgorithm(s.to_string())),
        }
    }
}

/// Validated configuration handed to the simulator.
///
/// # Example
///
/// ```
/// use u_cpusched::models::SimulationConfig;
///
/// let config = SimulationConfig::from_json(
///     r#"{"algorithm": {"name": "round_robin", "quantum": 4}}"#,
/// ).unwrap();
/// assert_eq!(config, SimulationConfig::round_robin(4));
/// assert_eq!(config.algorithm.quantum(), Some(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Selected discipline.
    pub algorithm: Algorithm,
}

impl SimulationConfig {
    /// Creates a configuration for the given discipline.
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// FCFS configuration.
    pub fn fcfs() -> Self {
        Self::new(Algorithm::Fcfs)
    }

    /// SPN configuration.
    pub fn spn() -> Self {
        Self::new(Algorithm::Spn)
    }

    /// Round Robin configuration with the given quantum.
    pub fn round_robin(quantum: i64) -> Self {
        Self::new(Algorithm::RoundRobin { quantum })
    }

    /// Priority configuration (always rejected as unsupported).
    pub fn priority() -> Self {
        Self::new(Algorithm::Priority)
    }

    /// Loads a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Algorithm> for SimulationConfig {
    fn from(algorithm: Algorithm) -> Self {
        Self::new(algorithm)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::fcfs()
    }
}
