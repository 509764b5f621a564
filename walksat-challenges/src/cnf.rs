use crate::{first_falsified, Model, SatError};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::{collections::HashSet, num::NonZeroI32};

/// A variable id paired with its required polarity, stored in the usual
/// signed DIMACS form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Literal(NonZeroI32);

impl Literal {
    pub fn new(variable: usize, positive: bool) -> Option<Self> {
        let variable = i32::try_from(variable).ok()?;
        let signed = if positive { variable } else { -variable };
        NonZeroI32::new(signed).map(Literal)
    }

    #[inline]
    pub fn variable(self) -> usize {
        self.0.get().unsigned_abs() as usize
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0.get() > 0
    }

    pub fn to_i32(self) -> i32 {
        self.0.get()
    }

    #[inline]
    pub fn is_satisfied_by(self, model: &Model) -> bool {
        model.get(self.variable()) == self.is_positive()
    }
}

impl TryFrom<i32> for Literal {
    type Error = SatError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value == i32::MIN {
            return Err(SatError::invalid_instance(format!(
                "literal '{}' is out of range",
                value
            )));
        }
        NonZeroI32::new(value)
            .map(Literal)
            .ok_or_else(|| SatError::invalid_instance("literal '0' is not allowed"))
    }
}

impl From<Literal> for i32 {
    fn from(literal: Literal) -> Self {
        literal.to_i32()
    }
}

/// A disjunction of literals over distinct variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Literal>", into = "Vec<Literal>")]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Result<Self, SatError> {
        if literals.is_empty() {
            return Err(SatError::invalid_instance("clause has no literals"));
        }
        let mut seen = HashSet::with_capacity(literals.len());
        for literal in &literals {
            if !seen.insert(literal.variable()) {
                return Err(SatError::invalid_instance(format!(
                    "variable {} appears more than once in a clause",
                    literal.variable()
                )));
            }
        }
        Ok(Self { literals })
    }

    pub fn from_i32s(literals: &[i32]) -> Result<Self, SatError> {
        let literals = literals
            .iter()
            .map(|&l| Literal::try_from(l))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(literals)
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn variables(&self) -> impl Iterator<Item = usize> + '_ {
        self.literals.iter().map(|l| l.variable())
    }

    /// Sorts the literals by their signed value, so that equal clauses
    /// compare equal regardless of draw order.
    pub fn canonicalize(mut self) -> Self {
        self.literals.sort_unstable();
        self
    }

    #[inline]
    pub fn is_satisfied_by(&self, model: &Model) -> bool {
        self.literals.iter().any(|l| l.is_satisfied_by(model))
    }

    /// Evaluates the clause as if `variable` were flipped in `model`.
    #[inline]
    pub fn is_satisfied_with_flip(&self, model: &Model, variable: usize) -> bool {
        self.literals.iter().any(|l| {
            let value = model.get(l.variable()) ^ (l.variable() == variable);
            value == l.is_positive()
        })
    }

    pub fn to_i32s(&self) -> Vec<i32> {
        self.literals.iter().map(|l| l.to_i32()).collect()
    }
}

impl TryFrom<Vec<Literal>> for Clause {
    type Error = SatError;

    fn try_from(literals: Vec<Literal>) -> Result<Self, Self::Error> {
        Clause::new(literals)
    }
}

impl From<Clause> for Vec<Literal> {
    fn from(clause: Clause) -> Self {
        clause.literals
    }
}

/// Largest variable id a signed 32-bit literal can name.
pub const MAX_VARIABLES: usize = i32::MAX as usize;

/// A CNF formula: `num_variables` variables and a conjunction of clauses of
/// equal arity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instance {
    num_variables: usize,
    clauses: Vec<Clause>,
}

impl<'de> Deserialize<'de> for Instance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct InstanceData {
            num_variables: usize,
            clauses: Vec<Clause>,
        }

        let data = InstanceData::deserialize(deserializer)?;
        Instance::new(data.num_variables, data.clauses).map_err(de::Error::custom)
    }
}

impl Instance {
    pub fn new(num_variables: usize, clauses: Vec<Clause>) -> Result<Self, SatError> {
        if num_variables == 0 {
            return Err(SatError::invalid_parameter(
                "num_variables",
                "an instance needs at least one variable",
            ));
        }
        if num_variables > MAX_VARIABLES {
            return Err(SatError::invalid_instance(format!(
                "{} variables exceed the literal range of {}",
                num_variables, MAX_VARIABLES
            )));
        }
        let arity = clauses.first().map(|c| c.len());
        for (idx, clause) in clauses.iter().enumerate() {
            check_clause(clause, num_variables, arity)
                .map_err(|reason| SatError::invalid_instance(format!("clause {}: {}", idx, reason)))?;
        }
        Ok(Self {
            num_variables,
            clauses,
        })
    }

    pub fn from_i32s(num_variables: usize, clauses: &[Vec<i32>]) -> Result<Self, SatError> {
        let clauses = clauses
            .iter()
            .map(|c| Clause::from_i32s(c))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(num_variables, clauses)
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Shared clause size, `None` for an instance without clauses.
    pub fn arity(&self) -> Option<usize> {
        self.clauses.first().map(|c| c.len())
    }

    pub fn is_satisfied_by(&self, model: &Model) -> bool {
        assert_eq!(
            model.len(),
            self.num_variables,
            "model length diverged from the variable count"
        );
        crate::satisfies(model, &self.clauses)
    }

    pub fn verify_solution(&self, solution: &Model) -> Result<(), SatError> {
        if solution.len() != self.num_variables {
            return Err(SatError::InvalidSolution {
                reason: format!(
                    "Invalid number of variables. Expected: {}, Actual: {}",
                    self.num_variables,
                    solution.len()
                ),
            });
        }

        match first_falsified(solution, &self.clauses) {
            Some(idx) => Err(SatError::InvalidSolution {
                reason: format!("Clause '{}' not satisfied", idx),
            }),
            None => Ok(()),
        }
    }
}

/// Range and arity rules every clause of an instance obeys. Distinctness of
/// variables is already guaranteed by [`Clause::new`].
pub(crate) fn check_clause(
    clause: &Clause,
    num_variables: usize,
    arity: Option<usize>,
) -> Result<(), String> {
    if let Some(arity) = arity {
        if clause.len() != arity {
            return Err(format!(
                "expected {} literals, found {}",
                arity,
                clause.len()
            ));
        }
    }
    if let Some(literal) = clause
        .literals()
        .iter()
        .find(|l| l.variable() > num_variables)
    {
        return Err(format!(
            "literal '{}' refers to a variable outside [1, {}]",
            literal.to_i32(),
            num_variables
        ));
    }
    Ok(())
}
