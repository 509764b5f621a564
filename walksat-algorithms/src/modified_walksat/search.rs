use super::{
    greedy::{greedy_flip, FlipScorer},
    noisy::noisy_flip,
    BudgetPolicy, Hyperparameters, SolveResult, SolveStatus,
};
use crate::Interrupt;
use rand::Rng;
use walksat_challenges::{satisfies, Instance, Model};

pub(super) fn run<R: Rng + ?Sized>(
    instance: &Instance,
    hyperparameters: &Hyperparameters,
    rng: &mut R,
    interrupt: &dyn Interrupt,
) -> SolveResult {
    let num_variables = instance.num_variables();
    let clauses = instance.clauses();
    let scorer = FlipScorer::new(num_variables, clauses);
    let max_level = hyperparameters.max_flips.min(num_variables);

    let mut model = Model::random(num_variables, rng);
    let mut steps: u64 = 0;
    let mut budget = hyperparameters.max_iterations;
    let mut noisy_moves: u64 = 0;

    tracing::info!(
        "solving {} clauses over {} variables (noise={}, max_iterations={}, max_flips={}, budget_policy={:?})",
        clauses.len(),
        num_variables,
        hyperparameters.noise,
        hyperparameters.max_iterations,
        max_level,
        hyperparameters.budget_policy
    );

    for v in 1..=max_level {
        if hyperparameters.budget_policy == BudgetPolicy::PerLevel {
            budget = hyperparameters.max_iterations;
        }
        tracing::debug!("flip level v={} with {} iterations left", v, budget);

        while budget > 0 {
            if satisfies(&model, clauses) {
                return satisfied(model, steps);
            }
            if interrupt.should_stop() {
                tracing::info!("interrupted after {} steps", steps);
                return SolveResult {
                    status: SolveStatus::Interrupted,
                    assignment: None,
                    steps,
                };
            }

            if rng.gen_bool(hyperparameters.noise) {
                noisy_flip(&mut model, clauses, v, rng);
                noisy_moves += 1;
            } else {
                greedy_flip(&mut model, &scorer, v);
            }
            assert_eq!(
                model.len(),
                num_variables,
                "model length diverged from the variable count"
            );

            steps += 1;
            budget -= 1;
        }
    }

    if satisfies(&model, clauses) {
        return satisfied(model, steps);
    }
    tracing::info!(
        "budget exhausted after {} steps ({} noisy, {} greedy)",
        steps,
        noisy_moves,
        steps - noisy_moves
    );
    SolveResult {
        status: SolveStatus::Exhausted,
        assignment: None,
        steps,
    }
}

fn satisfied(model: Model, steps: u64) -> SolveResult {
    tracing::info!("satisfied after {} steps", steps);
    SolveResult {
        status: SolveStatus::Satisfied,
        assignment: Some(model),
        steps,
    }
}
