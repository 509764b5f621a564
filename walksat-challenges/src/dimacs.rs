//! Text encoding of instances.
//!
//! The header is `cnf <n> <m>` (the standard `p cnf <n> <m>` is accepted as
//! well), followed by `m` clauses, each a run of signed literals closed by `0`.
//! Lines whose first token is `c` are comments and a line starting with `%`
//! ends the input.

use crate::{cnf::check_clause, Clause, Instance, Literal, SatError, MAX_VARIABLES};
use std::{fmt, str::FromStr};

pub fn parse_dimacs(input: &str) -> Result<Instance, SatError> {
    let mut header: Option<(usize, usize)> = None;
    let mut arity: Option<usize> = None;
    let mut clauses: Vec<Clause> = Vec::new();
    let mut current: Vec<Literal> = Vec::new();
    let mut last_line = 0;

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        let mut tokens = line.split_whitespace().peekable();
        match tokens.peek() {
            None | Some(&"c") => continue,
            Some(token) if token.starts_with('%') => break,
            _ => {}
        }

        let (num_variables, num_clauses) = match header {
            Some(header) => header,
            None => {
                header = Some(parse_header(line, line_no)?);
                if let Some((_, m)) = header {
                    clauses.reserve(m);
                }
                continue;
            }
        };

        for token in tokens {
            let value: i32 = token.parse().map_err(|_| {
                SatError::invalid_instance_at(line_no, format!("'{}' is not an integer", token))
            })?;
            if value != 0 {
                let literal = Literal::try_from(value).map_err(|e| at_line(e, line_no))?;
                current.push(literal);
                continue;
            }

            if clauses.len() == num_clauses {
                return Err(SatError::invalid_instance_at(
                    line_no,
                    format!("more than the {} declared clauses", num_clauses),
                ));
            }
            let clause =
                Clause::new(std::mem::take(&mut current)).map_err(|e| at_line(e, line_no))?;
            check_clause(&clause, num_variables, arity)
                .map_err(|reason| SatError::invalid_instance_at(line_no, reason))?;
            arity.get_or_insert(clause.len());
            clauses.push(clause);
        }
    }

    let (num_variables, num_clauses) =
        header.ok_or_else(|| SatError::invalid_instance("missing 'cnf <n> <m>' header"))?;
    if !current.is_empty() {
        return Err(SatError::invalid_instance_at(
            last_line,
            "last clause is not terminated by '0'",
        ));
    }
    if clauses.len() != num_clauses {
        return Err(SatError::invalid_instance(format!(
            "header declares {} clauses but {} were found",
            num_clauses,
            clauses.len()
        )));
    }

    Instance::new(num_variables, clauses)
}

fn parse_header(line: &str, line_no: usize) -> Result<(usize, usize), SatError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let counts = match tokens.as_slice() {
        ["cnf", n, m] | ["p", "cnf", n, m] => (n.parse::<usize>(), m.parse::<usize>()),
        _ => {
            return Err(SatError::invalid_instance_at(
                line_no,
                format!("expected 'cnf <n> <m>' header, found '{}'", line.trim()),
            ))
        }
    };
    match counts {
        (Ok(0), Ok(_)) => Err(SatError::invalid_instance_at(
            line_no,
            "variable count must be positive",
        )),
        (Ok(n), Ok(_)) if n > MAX_VARIABLES => Err(SatError::invalid_instance_at(
            line_no,
            format!("variable count {} exceeds {}", n, MAX_VARIABLES),
        )),
        (Ok(n), Ok(m)) => Ok((n, m)),
        _ => Err(SatError::invalid_instance_at(
            line_no,
            format!("header counts in '{}' are not non-negative integers", line.trim()),
        )),
    }
}

fn at_line(err: SatError, line_no: usize) -> SatError {
    match err {
        SatError::InvalidInstance { line: None, reason } => {
            SatError::invalid_instance_at(line_no, reason)
        }
        other => other,
    }
}

pub fn write_dimacs(instance: &Instance) -> String {
    instance.to_string()
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cnf {} {}", self.num_variables(), self.num_clauses())?;
        for clause in self.clauses() {
            for literal in clause.literals() {
                write!(f, "{} ", literal.to_i32())?;
            }
            writeln!(f, "0")?;
        }
        Ok(())
    }
}

impl FromStr for Instance {
    type Err = SatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dimacs(s)
    }
}
