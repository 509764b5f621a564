use crate::{Clause, Instance, Literal, SatError};
use rand::{
    rngs::{SmallRng, StdRng},
    seq::index,
    Rng, SeedableRng,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct GeneratorParams {
    pub clause_size: usize,
    pub num_clauses: usize,
    pub num_variables: usize,
}

impl From<[usize; 3]> for GeneratorParams {
    fn from([clause_size, num_clauses, num_variables]: [usize; 3]) -> Self {
        Self {
            clause_size,
            num_clauses,
            num_variables,
        }
    }
}

impl Instance {
    pub fn generate_instance(seed: &[u8; 32], params: &GeneratorParams) -> Result<Self, SatError> {
        let mut rng = SmallRng::from_seed(StdRng::from_seed(*seed).gen());
        generate_with_rng(params, &mut rng)
    }
}

/// Number of distinct clauses of `k` literals over `n` variables,
/// `2^k * C(n, k)`, saturating at `u128::MAX`.
pub fn max_distinct_clauses(k: usize, n: usize) -> u128 {
    if k > n {
        return 0;
    }
    let (n, k) = (n as u128, k as u128);
    let mut combinations: u128 = 1;
    for i in 1..=k {
        // Exact at every step: the running product is C(n - k + i, i).
        combinations = match combinations.checked_mul(n - k + i) {
            Some(product) => product / i,
            None => return u128::MAX,
        };
    }
    u32::try_from(k)
        .ok()
        .and_then(|k| 1u128.checked_shl(k))
        .and_then(|polarities| polarities.checked_mul(combinations))
        .unwrap_or(u128::MAX)
}

/// Random `k`-CNF with `m` distinct clauses over `n` variables.
///
/// Each clause draws `k` distinct variables uniformly without replacement and
/// a fair polarity for each, and is kept in canonical (sorted) form. Clauses
/// keep the order in which they were first drawn.
pub fn generate_with_rng<R: Rng + ?Sized>(
    params: &GeneratorParams,
    rng: &mut R,
) -> Result<Instance, SatError> {
    let GeneratorParams {
        clause_size: k,
        num_clauses: m,
        num_variables: n,
    } = *params;

    if n == 0 {
        return Err(SatError::invalid_parameter(
            "num_variables",
            "must be at least 1",
        ));
    }
    if k == 0 {
        return Err(SatError::invalid_parameter("clause_size", "must be at least 1"));
    }
    if k > n {
        return Err(SatError::invalid_instance(format!(
            "clause size {} exceeds the number of variables {}",
            k, n
        )));
    }
    let realizable = max_distinct_clauses(k, n);
    if m as u128 > realizable {
        return Err(SatError::invalid_parameter(
            "num_clauses",
            format!(
                "only {} distinct clauses of size {} exist over {} variables, {} requested",
                realizable, k, n, m
            ),
        ));
    }

    let mut seen: HashSet<Clause> = HashSet::with_capacity(m);
    let mut clauses: Vec<Clause> = Vec::with_capacity(m);
    let mut draws = 0usize;
    while clauses.len() < m {
        draws += 1;
        let literals = index::sample(rng, n, k)
            .into_iter()
            .map(|idx| {
                Literal::new(idx + 1, rng.gen_bool(0.5)).ok_or_else(|| {
                    SatError::invalid_parameter("num_variables", "exceeds the literal range")
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let clause = Clause::new(literals)?.canonicalize();
        if seen.insert(clause.clone()) {
            clauses.push(clause);
        }
    }
    tracing::debug!(
        "generated {}-CNF with {} clauses over {} variables ({} draws)",
        k,
        m,
        n,
        draws
    );

    Instance::new(n, clauses)
}
