use walksat_challenges::{satisfies_clause, Clause, Model};

/// Variables occurring in at least one clause `model` falsifies, ascending
/// and without duplicates.
pub fn false_clause_variables(model: &Model, clauses: &[Clause]) -> Vec<usize> {
    let mut in_conflict = vec![false; model.len()];
    for clause in clauses.iter().filter(|c| !satisfies_clause(model, c)) {
        for variable in clause.variables() {
            in_conflict[variable - 1] = true;
        }
    }
    in_conflict
        .iter()
        .enumerate()
        .filter_map(|(idx, &flag)| flag.then_some(idx + 1))
        .collect()
}
