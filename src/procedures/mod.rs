//! The algorithm for determining satisfiability, factored into a collection
//! of procedures.

pub mod analysis;
pub mod backjump;
pub mod cdcl;
pub mod dpll;
pub mod preprocess;
