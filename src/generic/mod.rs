//! Generic structures with no particular tie to satisfiability.

pub mod pcg;
