use super::conflict::false_clause_variables;
use rand::{seq::SliceRandom, Rng};
use walksat_challenges::{Clause, Model};

/// Flips `min(v, |S|)` distinct variables drawn uniformly from the conflict
/// set `S`. Returns the flipped variables in draw order.
pub fn noisy_flip<R: Rng + ?Sized>(
    model: &mut Model,
    clauses: &[Clause],
    v: usize,
    rng: &mut R,
) -> Vec<usize> {
    let conflict = false_clause_variables(model, clauses);
    let amount = v.min(conflict.len());
    let chosen: Vec<usize> = conflict.choose_multiple(rng, amount).copied().collect();
    for &variable in &chosen {
        model.flip(variable);
    }
    tracing::trace!(
        "noisy flip of {:?} out of {} conflicting variables",
        chosen,
        conflict.len()
    );
    chosen
}
