/*!
Configuration of a context.

Scaled to the library: a handful of plain fields with sensible defaults,
rather than a database of bounded options. Each solve call reads the
configuration afresh, so revising a field between calls is safe.
*/

/// The engines a context can solve with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Engine {
    /// DPLL, deciding a uniformly random unassigned atom with uniformly
    /// random polarity.
    RandomDpll,

    /// DPLL, deciding the atom occurring most often in live two-literal
    /// clauses, with the random rule as fallback.
    TwoClauseDpll,

    /// DPLL, deciding a uniformly random literal of the shortest live
    /// clause, preceded by pure literal elimination.
    OptimizedDpll,

    /// Conflict-driven clause-learning over an explicit implication graph.
    Cdcl,
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::RandomDpll => write!(f, "random-dpll"),
            Self::TwoClauseDpll => write!(f, "two-clause-dpll"),
            Self::OptimizedDpll => write!(f, "optimized-dpll"),
            Self::Cdcl => write!(f, "cdcl"),
        }
    }
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The seed for the random stream of a solve.
    ///
    /// Every solve entry point reseeds from this value, so repeated solves
    /// of one formula are reproducible, and concurrent contexts built from
    /// the same configuration draw identical, independent streams.
    pub seed: u64,

    /// The count of iterations (DPLL branches, or CDCL passes) after which
    /// a solve with the timeout flag set is abandoned.
    ///
    /// An approximate budget rather than a portably exact bound.
    pub iteration_limit: usize,

    /// The probability of assigning positive polarity to an atom when
    /// freely choosing a value for the atom.
    pub polarity_lean: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: 0x5EED,
            iteration_limit: 150_000,
            polarity_lean: 0.5,
        }
    }
}
