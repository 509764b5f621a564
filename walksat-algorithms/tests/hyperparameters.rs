use serde_json::{json, Map, Value};
use walksat_algorithms::{BudgetPolicy, Hyperparameters};
use walksat_challenges::SatError;

fn map(value: Value) -> Option<Map<String, Value>> {
    value.as_object().cloned()
}

#[test]
fn test_defaults() {
    let hyperparameters = Hyperparameters::from_map(&None).unwrap();
    assert_eq!(hyperparameters, Hyperparameters::default());
    assert_eq!(hyperparameters.noise, 0.5);
    assert_eq!(hyperparameters.max_iterations, 1000);
    assert_eq!(hyperparameters.max_flips, 1);
    assert_eq!(hyperparameters.budget_policy, BudgetPolicy::Shared);
}

#[test]
fn test_partial_map() {
    let hyperparameters =
        Hyperparameters::from_map(&map(json!({"max_flips": 3, "budget_policy": "per_level"})))
            .unwrap();
    assert_eq!(
        hyperparameters,
        Hyperparameters {
            max_flips: 3,
            budget_policy: BudgetPolicy::PerLevel,
            ..Hyperparameters::default()
        }
    );
}

#[test]
fn test_rejects_bad_maps() {
    for value in [
        json!({"noise": 1.01}),
        json!({"max_iterations": 0}),
        json!({"max_flips": 0}),
        json!({"max_flips": -1}),
        json!({"budget_policy": "sometimes"}),
        json!({"max_flip": 2}),
    ] {
        assert!(
            matches!(
                Hyperparameters::from_map(&map(value.clone())),
                Err(SatError::InvalidParameter { .. })
            ),
            "{} should be rejected",
            value
        );
    }
}

#[test]
fn test_serialize() {
    let hyperparameters = Hyperparameters::new(0.25, 10, 2);
    assert_eq!(
        serde_json::to_value(hyperparameters).unwrap(),
        json!({"noise": 0.25, "max_iterations": 10, "max_flips": 2, "budget_policy": "shared"})
    );
}
