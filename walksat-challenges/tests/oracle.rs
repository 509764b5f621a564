use proptest::prelude::*;
use walksat_challenges::*;

fn known_instance() -> Instance {
    Instance::from_i32s(
        3,
        &[vec![3, -2, 1], vec![-3, 2, -1], vec![-2, -1, 3], vec![1, 2, -3]],
    )
    .unwrap()
}

#[test]
fn test_satisfies_known_instance() {
    let instance = known_instance();
    let model = Model::from_signs(&[1, 1, 1]).unwrap();
    assert!(satisfies(&model, instance.clauses()));
    assert!(instance.is_satisfied_by(&model));
    assert_eq!(count_satisfied(&model, instance.clauses()), 4);
    assert!(instance.verify_solution(&model).is_ok());
}

#[test]
fn test_satisfies_clause() {
    let clause = Clause::from_i32s(&[3, -2, 1]).unwrap();
    let falsifying = Model::from_signs(&[-1, 1, -1]).unwrap();
    assert!(!satisfies_clause(&falsifying, &clause));

    let mut model = falsifying.clone();
    model.flip(2);
    assert!(satisfies_clause(&model, &clause));
    assert!(clause.is_satisfied_with_flip(&falsifying, 2));
    assert!(clause.is_satisfied_with_flip(&falsifying, 3));
    assert!(!satisfies_clause(&falsifying, &clause));
}

#[test]
fn test_verify_solution() {
    let instance = known_instance();
    let model = Model::from_signs(&[-1, 1, 1]).unwrap();
    assert!(instance.verify_solution(&model).is_ok());

    let model = Model::from_signs(&[-1, 1, -1]).unwrap();
    assert_eq!(
        instance.verify_solution(&model),
        Err(SatError::InvalidSolution {
            reason: "Clause '0' not satisfied".to_string()
        })
    );
    assert_eq!(first_falsified(&model, instance.clauses()), Some(0));

    let short = Model::from_signs(&[1, 1]).unwrap();
    assert!(matches!(
        instance.verify_solution(&short),
        Err(SatError::InvalidSolution { .. })
    ));
}

#[test]
fn test_empty_clause_set_is_satisfied() {
    let instance = Instance::new(2, vec![]).unwrap();
    assert_eq!(instance.arity(), None);
    assert!(instance.is_satisfied_by(&Model::from_signs(&[-1, -1]).unwrap()));
}

#[test]
fn test_instance_validation() {
    assert!(matches!(
        Instance::from_i32s(0, &[]),
        Err(SatError::InvalidParameter { name: "num_variables", .. })
    ));
    assert!(matches!(
        Instance::from_i32s(3, &[vec![1, 4, 2]]),
        Err(SatError::InvalidInstance { .. })
    ));
    assert!(matches!(
        Instance::from_i32s(3, &[vec![1, -1, 2]]),
        Err(SatError::InvalidInstance { .. })
    ));
    assert!(matches!(
        Instance::from_i32s(3, &[vec![1, 2, 3], vec![1, 2]]),
        Err(SatError::InvalidInstance { .. })
    ));
    assert!(matches!(
        Clause::from_i32s(&[1, 0]),
        Err(SatError::InvalidInstance { .. })
    ));
    assert!(Clause::from_i32s(&[]).is_err());
    assert!(matches!(
        Instance::new(MAX_VARIABLES + 1, vec![]),
        Err(SatError::InvalidInstance { line: None, .. })
    ));
    assert_eq!(
        Instance::new(MAX_VARIABLES, vec![]).unwrap().num_variables(),
        MAX_VARIABLES
    );
}

#[test]
fn test_model_serde() {
    let model = Model::from_signs(&[1, -1, -1]).unwrap();
    assert_eq!(serde_json::to_string(&model).unwrap(), "[1,-1,-1]");
    let parsed: Model = serde_json::from_str("[true,-1,false]").unwrap();
    assert_eq!(parsed, model);
    assert!(serde_json::from_str::<Model>("[1,0]").is_err());
    assert!(Model::from_signs(&[1, 2]).is_err());
}

#[test]
fn test_instance_serde() {
    let instance = known_instance();
    let json = serde_json::to_string(&instance).unwrap();
    assert_eq!(
        json,
        r#"{"num_variables":3,"clauses":[[3,-2,1],[-3,2,-1],[-2,-1,3],[1,2,-3]]}"#
    );
    assert_eq!(serde_json::from_str::<Instance>(&json).unwrap(), instance);
    assert!(serde_json::from_str::<Instance>(r#"{"num_variables":2,"clauses":[[3]]}"#).is_err());
}

fn clause_and_model() -> impl Strategy<Value = (Vec<i32>, Vec<bool>)> {
    (3usize..12).prop_flat_map(|n| {
        (
            proptest::sample::subsequence((1..=n as i32).collect::<Vec<_>>(), 1..=3)
                .prop_flat_map(|vars| {
                    proptest::collection::vec(any::<bool>(), vars.len()).prop_map(move |signs| {
                        vars.iter()
                            .zip(signs)
                            .map(|(&v, s)| if s { v } else { -v })
                            .collect::<Vec<i32>>()
                    })
                }),
            proptest::collection::vec(any::<bool>(), n),
        )
    })
}

proptest! {
    #[test]
    fn prop_satisfies_clause_matches_definition((literals, values) in clause_and_model()) {
        let clause = Clause::from_i32s(&literals).unwrap();
        let model = Model::from_values(values.clone());
        let expected = literals.iter().any(|&l| {
            let value = if values[l.unsigned_abs() as usize - 1] { 1 } else { -1 };
            l * value > 0
        });
        prop_assert_eq!(satisfies_clause(&model, &clause), expected);
    }

    #[test]
    fn prop_flip_evaluation_matches_real_flip(
        (literals, values) in clause_and_model(),
        pick in any::<proptest::sample::Index>(),
    ) {
        let clause = Clause::from_i32s(&literals).unwrap();
        let model = Model::from_values(values.clone());
        let variable = pick.index(values.len()) + 1;
        let mut flipped = model.clone();
        flipped.flip(variable);
        prop_assert_eq!(
            clause.is_satisfied_with_flip(&model, variable),
            satisfies_clause(&flipped, &clause)
        );
    }
}
