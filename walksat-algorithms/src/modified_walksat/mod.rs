//! WalkSAT generalised to flip up to `v` variables per step.
//!
//! Each step either flips a random sample of the variables found in falsified
//! clauses (probability `noise`) or performs `v` greedy min-conflict flips.
//! `v` escalates from 1 to `min(max_flips, n)` as the iteration budget of each
//! level is spent.

pub mod conflict;
pub mod greedy;
pub mod noisy;
mod search;

use crate::{Interrupt, NoInterrupt};
use rand::{
    rngs::{SmallRng, StdRng},
    Rng, SeedableRng,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use walksat_challenges::{Instance, Model, SatError};

/// How the iteration budget is shared between flip levels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BudgetPolicy {
    /// One budget of `max_iterations` steps for the whole search. Once it is
    /// spent at some level, the remaining levels run no steps at all.
    #[default]
    Shared,
    /// Every level starts with a fresh budget of `max_iterations` steps.
    PerLevel,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Hyperparameters {
    /// Probability of taking the random move instead of the greedy one.
    pub noise: f64,
    pub max_iterations: u64,
    /// Highest number of simultaneous flips, capped at the variable count.
    pub max_flips: usize,
    pub budget_policy: BudgetPolicy,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            noise: 0.5,
            max_iterations: 1000,
            max_flips: 1,
            budget_policy: BudgetPolicy::Shared,
        }
    }
}

impl Hyperparameters {
    pub fn new(noise: f64, max_iterations: u64, max_flips: usize) -> Self {
        Self {
            noise,
            max_iterations,
            max_flips,
            budget_policy: BudgetPolicy::Shared,
        }
    }

    pub fn with_budget_policy(mut self, budget_policy: BudgetPolicy) -> Self {
        self.budget_policy = budget_policy;
        self
    }

    /// Reads hyperparameters from a JSON object, falling back to the defaults
    /// for missing keys.
    pub fn from_map(hyperparameters: &Option<Map<String, Value>>) -> Result<Self, SatError> {
        let hyperparameters: Self = match hyperparameters {
            Some(map) => serde_json::from_value(Value::Object(map.clone()))
                .map_err(|e| SatError::invalid_parameter("hyperparameters", e.to_string()))?,
            None => Self::default(),
        };
        hyperparameters.validate()?;
        Ok(hyperparameters)
    }

    pub fn validate(&self) -> Result<(), SatError> {
        if !(0.0..=1.0).contains(&self.noise) {
            return Err(SatError::invalid_parameter(
                "noise",
                format!("{} is not a probability in [0, 1]", self.noise),
            ));
        }
        if self.max_iterations == 0 {
            return Err(SatError::invalid_parameter(
                "max_iterations",
                "must be at least 1",
            ));
        }
        if self.max_flips == 0 {
            return Err(SatError::invalid_parameter("max_flips", "must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Satisfied,
    Exhausted,
    Interrupted,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub status: SolveStatus,
    /// Present only when `status` is [`SolveStatus::Satisfied`].
    pub assignment: Option<Model>,
    /// Moves applied over all flip levels.
    pub steps: u64,
}

impl SolveResult {
    pub fn is_satisfied(&self) -> bool {
        self.status == SolveStatus::Satisfied
    }
}

pub fn solve_instance<R: Rng + ?Sized>(
    instance: &Instance,
    hyperparameters: &Hyperparameters,
    rng: &mut R,
    interrupt: &dyn Interrupt,
) -> Result<SolveResult, SatError> {
    hyperparameters.validate()?;
    Ok(search::run(instance, hyperparameters, rng, interrupt))
}

/// `Solve(instance, p, maxit, maxv)` with a shared budget and no interruption.
pub fn solve<R: Rng + ?Sized>(
    instance: &Instance,
    p: f64,
    maxit: u64,
    maxv: usize,
    rng: &mut R,
) -> Result<SolveResult, SatError> {
    solve_instance(
        instance,
        &Hyperparameters::new(p, maxit, maxv),
        rng,
        &NoInterrupt,
    )
}

/// Seeds the search from a 32 byte seed and reads the hyperparameters from an
/// optional JSON object.
pub fn solve_challenge(
    instance: &Instance,
    seed: &[u8; 32],
    hyperparameters: &Option<Map<String, Value>>,
    interrupt: &dyn Interrupt,
) -> Result<SolveResult, SatError> {
    let hyperparameters = Hyperparameters::from_map(hyperparameters)?;
    solve_instance(instance, &hyperparameters, &mut seeded_rng(seed), interrupt)
}

/// The random stream `solve_challenge` draws from for a given seed.
pub fn seeded_rng(seed: &[u8; 32]) -> SmallRng {
    SmallRng::from_seed(StdRng::from_seed(*seed).gen())
}
