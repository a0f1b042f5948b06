/*!
A library for determining the satisfiability of boolean formulas written in
conjunctive normal form.

stoat_sat contains a small family of complete solvers over one shared
clause model: three DPLL engines distinguished by their decision rule, and
a conflict-driven clause-learning engine built on an explicit implication
graph. The library is developed to make the dynamics of the algorithms easy
to inspect: every structure of a solve (the live clause sets, the
valuation, the graph) is an ordinary value a curious reader can poke at,
rather than an optimised encoding.

# Orientation

The library is designed around the core structure of a [context].

A context owns a [formula](structures::formula), a
[configuration](config::Config), and a seedable random stream. Clauses are
added [programmatically](crate::builder) or from
[DIMACS](crate::builder::dimacs) text, and a solve is requested from one of
four engine entry points, returning a [report](reports) with the outcome,
the iteration count, and the elapsed time.

Useful starting points:

- The [DPLL procedure](crate::procedures::dpll) for the backtracking
  skeleton and the decision rules.
- The [CDCL procedure](crate::procedures::cdcl) for the
  decide/propagate/analyse/backjump loop.
- The [implication graph](crate::graph) for the trail structure conflict
  analysis works over.
- The [structures] for the representation of atoms, literals, clauses,
  formulas, and valuations.

# Example

```rust
use stoat_sat::config::{Config, Engine};
use stoat_sat::context::Context;
use stoat_sat::reports::Report;

let mut the_context = Context::from_config(Config::default());

the_context.add_clause_ints(&[1, 2]).unwrap();
the_context.add_clause_ints(&[-1, 2]).unwrap();
the_context.add_clause_ints(&[1, -2]).unwrap();
the_context.add_clause_ints(&[-1, -2]).unwrap();

let outcome = the_context.solve_with(Engine::Cdcl, true);
assert_eq!(outcome.report, Report::Unsatisfiable);
```

# Randomness

Decision rules draw from a per-context [PCG stream](generic::pcg) which is
reseeded from the configuration at every solve entry point. Repeated solves
of a formula are therefore reproducible, and independent contexts may run
in parallel without sharing generator state.

# Logs

To help diagnose issues, calls to [log!](log) are made throughout, and a
variety of targets are defined in [misc::log] to help narrow output to the
relevant parts of the library. No log implementation is provided.

If you're in search of cnf formulas, consider the SATLIB benchmark problems
at <https://www.cs.ubc.ca/~hoos/SATLIB/benchm.html>, or the
[random builder](builder::random).
*/

pub mod builder;
pub mod config;
pub mod context;
pub mod generic;
pub mod graph;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
