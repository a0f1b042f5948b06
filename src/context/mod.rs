/*!
The context --- to which formulas are added and within which solves take place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness, which must be
seedable: every solve entry point reseeds the stream from the configured
seed, so repeated solves of one formula reproduce each other exactly, and
contexts running in parallel never contend for (or correlate through)
shared generator state. [Context] fixes the source to the library's
[Pcg32].

No state survives between solve calls: each call builds its own live clause
set, valuation, and (for CDCL) implication graph, and returns everything of
note in the [SolveReport].

# Example

```rust
# use stoat_sat::config::{Config, Engine};
# use stoat_sat::context::Context;
# use stoat_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

the_context.add_clause_ints(&[1, 2]).unwrap();
the_context.add_clause_ints(&[-1]).unwrap();

let outcome = the_context.solve_with(Engine::Cdcl, true);
let Report::Satisfiable(valuation) = outcome.report else {
    panic!("satisfiable formula");
};
assert_eq!(valuation.of(1), Some(false));
assert_eq!(valuation.of(2), Some(true));
```
*/

use rand::SeedableRng;

use crate::{
    config::{Config, Engine},
    generic::pcg::Pcg32,
    procedures::dpll::DecisionHeuristic,
    reports::SolveReport,
    structures::formula::Formula,
};

/// A generic context, parameterised to a (re)seedable source of randomness.
pub struct GenericContext<R: rand::Rng + rand::SeedableRng> {
    /// The configuration of the context.
    pub config: Config,

    /// The formula whose satisfiability the context determines.
    pub formula: Formula,

    /// The source of rng for decisions, reseeded at each solve entry.
    pub(crate) rng: R,
}

/// The canonical context.
pub type Context = GenericContext<Pcg32>;

impl Context {
    pub fn from_config(config: Config) -> Self {
        let rng = Pcg32::seed_from_u64(config.seed);
        Context {
            config,
            formula: Formula::new(),
            rng,
        }
    }
}

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// A context on the given formula, with a caller-supplied stream.
    pub fn with_formula(config: Config, formula: Formula) -> Self {
        let rng = R::seed_from_u64(config.seed);
        GenericContext {
            config,
            formula,
            rng,
        }
    }

    /// Restarts the random stream from the configured seed.
    fn reseed(&mut self) {
        self.rng = R::seed_from_u64(self.config.seed);
    }

    /// Solves with the given engine. The timeout flag enables the iteration
    /// budget of the configuration.
    pub fn solve_with(&mut self, engine: Engine, timeout: bool) -> SolveReport {
        match engine {
            Engine::RandomDpll => self.random_dpll(timeout),
            Engine::TwoClauseDpll => self.two_clause_dpll(timeout),
            Engine::OptimizedDpll => self.optimized_dpll(timeout),
            Engine::Cdcl => self.cdcl(timeout),
        }
    }

    /// DPLL with uniformly random decisions.
    pub fn random_dpll(&mut self, timeout: bool) -> SolveReport {
        self.reseed();
        self.dpll_search(DecisionHeuristic::Random, timeout)
    }

    /// DPLL deciding the atom most frequent among live two-literal clauses.
    pub fn two_clause_dpll(&mut self, timeout: bool) -> SolveReport {
        self.reseed();
        self.dpll_search(DecisionHeuristic::TwoClause, timeout)
    }

    /// DPLL deciding within the shortest live clause, with pure literal
    /// elimination up front.
    pub fn optimized_dpll(&mut self, timeout: bool) -> SolveReport {
        self.reseed();
        self.dpll_search(DecisionHeuristic::ShortestClause, timeout)
    }

    /// Conflict-driven clause-learning.
    pub fn cdcl(&mut self, timeout: bool) -> SolveReport {
        self.reseed();
        self.cdcl_search(timeout)
    }
}
