use walksat_challenges::{count_satisfied, Clause, Model};

/// Number of clauses `model` would satisfy if `variable` were flipped.
///
/// Evaluates the hypothetical flip over the whole clause list without touching
/// `model`.
pub fn satisfied_after_flip(model: &Model, clauses: &[Clause], variable: usize) -> usize {
    clauses
        .iter()
        .filter(|clause| clause.is_satisfied_with_flip(model, variable))
        .count()
}

/// Scores hypothetical flips against a fixed clause list.
///
/// Flipping a variable can only change clauses that mention it, so the score is
/// the current satisfied count corrected over the variable's occurrences. The
/// result always equals [`satisfied_after_flip`].
pub struct FlipScorer<'a> {
    clauses: &'a [Clause],
    occurrences: Vec<Vec<usize>>,
}

impl<'a> FlipScorer<'a> {
    pub fn new(num_variables: usize, clauses: &'a [Clause]) -> Self {
        let mut occurrences = vec![Vec::new(); num_variables];
        for (idx, clause) in clauses.iter().enumerate() {
            for variable in clause.variables() {
                occurrences[variable - 1].push(idx);
            }
        }
        Self {
            clauses,
            occurrences,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.occurrences.len()
    }

    pub fn clauses(&self) -> &'a [Clause] {
        self.clauses
    }

    /// `satisfied` must be the number of clauses `model` currently satisfies.
    pub fn score(&self, model: &Model, variable: usize, satisfied: usize) -> usize {
        let mut made = 0;
        let mut broken = 0;
        for &idx in &self.occurrences[variable - 1] {
            let clause = &self.clauses[idx];
            match (
                clause.is_satisfied_by(model),
                clause.is_satisfied_with_flip(model, variable),
            ) {
                (false, true) => made += 1,
                (true, false) => broken += 1,
                _ => {}
            }
        }
        satisfied + made - broken
    }
}

/// Min-conflicts move: `v` greedy rounds, each committing the uncommitted
/// variable whose flip leaves the most clauses satisfied.
///
/// Every round is scored against the full clause list. Ties go to the lowest
/// variable id. Returns the committed variables in commit order.
pub fn greedy_flip(model: &mut Model, scorer: &FlipScorer, v: usize) -> Vec<usize> {
    let num_variables = scorer.num_variables();
    let mut committed = vec![false; num_variables];
    let mut flipped = Vec::with_capacity(v.min(num_variables));

    for _ in 0..v {
        let satisfied = count_satisfied(model, scorer.clauses());
        let mut best: Option<(usize, usize)> = None;
        for variable in 1..=num_variables {
            if committed[variable - 1] {
                continue;
            }
            let score = scorer.score(model, variable, satisfied);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((variable, score));
            }
        }

        let Some((variable, score)) = best else {
            break;
        };
        model.flip(variable);
        committed[variable - 1] = true;
        flipped.push(variable);
        tracing::trace!(
            "greedy flip of {} ({} -> {} satisfied clauses)",
            variable,
            satisfied,
            score
        );
    }
    flipped
}
