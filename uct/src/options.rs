use anyhow::Result;
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

use crate::SearchBudget;

pub const DEFAULT_EXPLORATION: f32 = 2.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UCTOptions {
    /// Wall clock limit per decision. Zero or less is unbounded.
    pub max_seconds: f32,
    pub max_iterations: Option<usize>,
    /// Constant `c` of the UCB1 explore term `sqrt(c * ln(N) / n)`.
    pub exploration: f32,
    pub seed: Option<u64>,
}

impl UCTOptions {
    pub fn new(max_seconds: f32, max_iterations: Option<usize>) -> Self {
        Self {
            max_seconds,
            max_iterations,
            ..Default::default()
        }
    }

    pub fn budget(&self) -> SearchBudget {
        let max_iterations = self
            .max_iterations
            .and_then(|max_iterations| i64::try_from(max_iterations).ok())
            .unwrap_or(-1);

        SearchBudget::from_limits(self.max_seconds as f64, max_iterations)
    }
}

impl Default for UCTOptions {
    fn default() -> Self {
        Self {
            max_seconds: 1.0,
            max_iterations: None,
            exploration: DEFAULT_EXPLORATION,
            seed: None,
        }
    }
}

impl Config for UCTOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            max_seconds: config
                .get("max_seconds")
                .and_then(|v| v.as_f32())
                .unwrap_or(defaults.max_seconds),
            max_iterations: config
                .get("max_iterations")
                .and_then(|v| v.as_usize()),
            exploration: config
                .get("exploration")
                .and_then(|v| v.as_f32())
                .unwrap_or(defaults.exploration),
            seed: config.get("seed").and_then(|v| v.as_u64()),
        })
    }
}
