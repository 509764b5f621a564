use crate::{Clause, Model};

/// True iff some literal of `clause` agrees with `model`.
#[inline]
pub fn satisfies_clause(model: &Model, clause: &Clause) -> bool {
    clause.is_satisfied_by(model)
}

/// True iff every clause is satisfied. Stops at the first falsified clause.
pub fn satisfies(model: &Model, clauses: &[Clause]) -> bool {
    clauses.iter().all(|clause| satisfies_clause(model, clause))
}

pub fn count_satisfied(model: &Model, clauses: &[Clause]) -> usize {
    clauses
        .iter()
        .filter(|clause| satisfies_clause(model, clause))
        .count()
}

/// Index of the first clause `model` falsifies.
pub fn first_falsified(model: &Model, clauses: &[Clause]) -> Option<usize> {
    clauses
        .iter()
        .position(|clause| !satisfies_clause(model, clause))
}
