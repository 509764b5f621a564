mod cnf;
pub use cnf::*;
pub mod dimacs;
mod error;
pub use error::*;
pub mod generator;
pub use generator::GeneratorParams;
mod model;
pub use model::*;
mod oracle;
pub use oracle::*;
