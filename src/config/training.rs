use serde::{Deserialize, Serialize};

use super::traits::ConfigSection;
use crate::error::{FguessError, Result};

/// Survivor counts accept either an absolute count or a proportion of the
/// pool size; proportions resolve when training starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SurvivorCount {
    Count(usize),
    Proportion(f64),
}

impl SurvivorCount {
    /// Absolute survivor count for a pool of size `p`, at least 1.
    pub fn resolve(&self, p: usize) -> usize {
        match self {
            SurvivorCount::Count(k) => *k,
            SurvivorCount::Proportion(f) => ((p as f64 * f).round() as usize).max(1),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Pool size `p`.
    pub pool_size: usize,
    /// Survivors kept each generation (`k`).
    pub survivors: SurvivorCount,
    /// Survivors kept by the final selection (`k0`).
    pub final_survivors: SurvivorCount,
    /// Probability that a derived offspring comes from mutation rather than
    /// crossover.
    pub epsilon: f64,
    /// Generation count `n`.
    pub generations: usize,
    /// Length guard: expressions over this many atoms score 0. `None`
    /// disables the guard.
    pub max_expr_len: Option<usize>,
    /// RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            pool_size: 20,
            survivors: SurvivorCount::Count(5),
            final_survivors: SurvivorCount::Count(15),
            epsilon: 0.01,
            generations: 1000,
            max_expr_len: Some(40),
            seed: None,
        }
    }
}

impl ConfigSection for TrainingConfig {
    fn section_name() -> &'static str {
        "training"
    }

    fn validate(&self) -> Result<()> {
        if self.pool_size == 0 {
            return Err(FguessError::Configuration(
                "Pool size must be at least 1".to_string(),
            ));
        }
        if self.generations == 0 {
            return Err(FguessError::Configuration(
                "Generation count must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(FguessError::Configuration(
                "Epsilon must be between 0 and 1".to_string(),
            ));
        }
        if let SurvivorCount::Proportion(f) = self.survivors {
            if !(0.0..=1.0).contains(&f) || f == 0.0 {
                return Err(FguessError::Configuration(
                    "Survivor proportion must be in (0, 1]".to_string(),
                ));
            }
        }
        if let SurvivorCount::Proportion(f) = self.final_survivors {
            if !(0.0..=1.0).contains(&f) || f == 0.0 {
                return Err(FguessError::Configuration(
                    "Final survivor proportion must be in (0, 1]".to_string(),
                ));
            }
        }
        let k = self.survivors.resolve(self.pool_size);
        let k0 = self.final_survivors.resolve(self.pool_size);
        if k == 0 || k > self.pool_size {
            return Err(FguessError::Configuration(format!(
                "Survivors per generation must be in 1..={} (got {k})",
                self.pool_size
            )));
        }
        if k0 == 0 || k0 > self.pool_size {
            return Err(FguessError::Configuration(format!(
                "Final survivors must be in 1..={} (got {k0})",
                self.pool_size
            )));
        }
        Ok(())
    }
}
