mod interrupt;
pub use interrupt::*;
pub mod modified_walksat;
pub use modified_walksat::{
    seeded_rng, solve, solve_challenge, solve_instance, BudgetPolicy, Hyperparameters, SolveResult,
    SolveStatus,
};
