use rand::{rngs::SmallRng, SeedableRng};
use std::collections::HashSet;
use walksat_challenges::{generator::*, Instance, SatError};

#[test]
fn test_generate_small_instance() {
    let mut rng = SmallRng::seed_from_u64(7);
    let params = GeneratorParams::from([3, 3, 4]);
    let instance = generate_with_rng(&params, &mut rng).unwrap();

    assert_eq!(instance.num_variables(), 4);
    assert_eq!(instance.num_clauses(), 3);
    let distinct: HashSet<Vec<i32>> = instance.clauses().iter().map(|c| c.to_i32s()).collect();
    assert_eq!(distinct.len(), 3);
    for clause in instance.clauses() {
        assert_eq!(clause.len(), 3);
        let variables: HashSet<usize> = clause.variables().collect();
        assert_eq!(variables.len(), 3);
        assert!(variables.iter().all(|&v| (1..=4).contains(&v)));
        let literals = clause.to_i32s();
        let mut sorted = literals.clone();
        sorted.sort();
        assert_eq!(literals, sorted);
    }
}

#[test]
fn test_generate_instance_is_seeded() {
    let params = GeneratorParams {
        clause_size: 3,
        num_clauses: 40,
        num_variables: 10,
    };
    let a = Instance::generate_instance(&[1u8; 32], &params).unwrap();
    let b = Instance::generate_instance(&[1u8; 32], &params).unwrap();
    let c = Instance::generate_instance(&[2u8; 32], &params).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_generate_every_clause() {
    // 2^2 * C(2, 2) = 4 clauses exist over two variables
    let mut rng = SmallRng::seed_from_u64(0);
    let instance = generate_with_rng(&GeneratorParams::from([2, 4, 2]), &mut rng).unwrap();
    let mut clauses: Vec<Vec<i32>> = instance.clauses().iter().map(|c| c.to_i32s()).collect();
    clauses.sort();
    assert_eq!(
        clauses,
        vec![vec![-2, -1], vec![-2, 1], vec![-1, 2], vec![1, 2]]
    );
}

#[test]
fn test_generate_rejects_bad_params() {
    let mut rng = SmallRng::seed_from_u64(0);
    assert!(matches!(
        generate_with_rng(&GeneratorParams::from([4, 1, 3]), &mut rng),
        Err(SatError::InvalidInstance { .. })
    ));
    assert!(matches!(
        generate_with_rng(&GeneratorParams::from([0, 1, 3]), &mut rng),
        Err(SatError::InvalidParameter { name: "clause_size", .. })
    ));
    assert!(matches!(
        generate_with_rng(&GeneratorParams::from([1, 1, 0]), &mut rng),
        Err(SatError::InvalidParameter { name: "num_variables", .. })
    ));
    assert!(matches!(
        generate_with_rng(&GeneratorParams::from([2, 5, 2]), &mut rng),
        Err(SatError::InvalidParameter { name: "num_clauses", .. })
    ));
    let empty = generate_with_rng(&GeneratorParams::from([3, 0, 3]), &mut rng).unwrap();
    assert_eq!(empty.num_clauses(), 0);
}

#[test]
fn test_max_distinct_clauses() {
    assert_eq!(max_distinct_clauses(3, 4), 8 * 4);
    assert_eq!(max_distinct_clauses(2, 5), 4 * 10);
    assert_eq!(max_distinct_clauses(1, 1), 2);
    assert_eq!(max_distinct_clauses(4, 3), 0);
    assert_eq!(max_distinct_clauses(200, 1_000_000), u128::MAX);
}
