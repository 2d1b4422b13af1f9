//! Synthetic workload generation.
//!
//! Produces reproducible random process sets for comparing disciplines
//! and for stress-testing schedulers. The same seed and parameters always
//! yield the same workload.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;

/// Seeded random workload generator.
///
/// # Example
///
/// ```
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let generator = WorkloadGenerator::new(42)
///     .with_count(5)
///     .with_arrival_range(0, 10)
///     .with_service_range(1, 6);
///
/// let processes = generator.generate();
/// assert_eq!(processes.len(), 5);
/// assert_eq!(processes, generator.generate());
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    count: usize,
    arrival_min: i64,
    arrival_max: i64,
    service_min: i64,
    service_max: i64,
}

impl WorkloadGenerator {
    /// Creates a generator with default parameters
    /// (10 processes, arrivals in 0..=20, service in 1..=10).
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            count: 10,
            arrival_min: 0,
            arrival_max: 20,
            service_min: 1,
            service_max: 10,
        }
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count.min(u32::MAX as usize);
        self
    }

    /// Sets the inclusive arrival range. Negative bounds are raised to 0.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.arrival_min = min.max(0);
        self.arrival_max = max.max(self.arrival_min);
        self
    }

    /// Sets the inclusive service range. Bounds below 1 are raised to 1.
    pub fn with_service_range(mut self, min: i64, max: i64) -> Self {
        self.service_min = min.max(1);
        self.service_max = max.max(self.service_min);
        self
    }

    /// Generates a workload from the configured seed.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        self.generate_with(&mut rng)
    }

    /// Generates a workload from a caller-supplied RNG.
    ///
    /// PIDs are assigned `1..=count` in generation order.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count as u32)
            .map(|pid| {
                let arrival = rng.random_range(self.arrival_min..=self.arrival_max);
                let service = rng.random_range(self.service_min..=self.service_max);
                Process::new(pid, arrival, service)
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SimulationConfig;
    use crate::simulation::Simulator;
    use crate::validation::validate_workload;

    #[test]
    fn test_generated_workload_is_valid() {
        let processes = WorkloadGenerator::new(7).with_count(50).generate();
        assert_eq!(processes.len(), 50);
        assert!(validate_workload(&processes).is_ok());
        assert_eq!(processes[0].pid, 1);
        assert_eq!(processes[49].pid, 50);
    }

    #[test]
    fn test_ranges_respected() {
        let processes = WorkloadGenerator::new(1)
            .with_count(100)
            .with_arrival_range(5, 8)
            .with_service_range(2, 3)
            .generate();

        for p in &processes {
            assert!((5..=8).contains(&p.arrival_time));
            assert!((2..=3).contains(&p.service_time));
            assert_eq!(p.remaining_time, p.service_time);
        }
    }

    #[test]
    fn test_same_seed_same_workload() {
        let a = WorkloadGenerator::new(99).generate();
        let b = WorkloadGenerator::new(99).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_ranges_clamped() {
        let processes = WorkloadGenerator::new(3)
            .with_count(20)
            .with_arrival_range(-10, -5)
            .with_service_range(0, -1)
            .generate();

        for p in &processes {
            assert_eq!(p.arrival_time, 0);
            assert_eq!(p.service_time, 1);
        }
    }

    #[test]
    fn test_zero_count() {
        assert!(WorkloadGenerator::new(5).with_count(0).generate().is_empty());
    }

    #[test]
    fn test_generated_workloads_complete_under_every_discipline() {
        let configs = [
            SimulationConfig::fcfs(),
            SimulationConfig::spn(),
            SimulationConfig::round_robin(1),
            SimulationConfig::round_robin(3),
        ];
        for seed in 0..20 {
            let processes = WorkloadGenerator::new(seed).with_count(25).generate();
            let results = Simulator::compare(&processes, &configs).unwrap();
            for r in &results {
                assert_eq!(r.len(), 25);
                let total_service: i64 = processes.iter().map(|p| p.service_time).sum();
                assert_eq!(r.timeline.busy_time(), total_service);
            }
        }
    }
}
