mod components;
mod error;
pub mod formula;
pub mod graph;
mod solver;

#[cfg(test)]
mod brute_force;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SatResult {
    Satisfiable,
    Unsatisfiable,
}

pub use components::Components;
pub use error::{FormulaError, ParseError};
pub use formula::{Clause, Formula, InputFormat, Literal, Variable};
pub use solver::{FinishOrder, Solver};
