/*!
Reports from a solve.

Every engine resolves to one of three outcomes, none of which is an error:

- [Satisfiable](Report::Satisfiable), carrying an assignment which is total
  over the atoms of the formula and satisfies every original clause.
- [Unsatisfiable](Report::Unsatisfiable).
- [TimedOut](Report::TimedOut), when the iteration budget was exhausted
  with the timeout flag set. A deliberate, reportable non-answer, never to
  be conflated with unsatisfiability.

The outcome is paired with the iteration count and the elapsed wall-clock
time of the solve in a [SolveReport].
*/

use std::time::Duration;

use crate::structures::valuation::Valuation;

/// The outcome of a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    /// The formula is satisfiable, on the contained valuation.
    Satisfiable(Valuation),

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// The iteration budget was exhausted before an answer was found.
    TimedOut,
}

impl Report {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Report::Satisfiable(_))
    }

    /// The satisfying valuation, if the report carries one.
    pub fn valuation(&self) -> Option<&Valuation> {
        match self {
            Report::Satisfiable(valuation) => Some(valuation),
            _ => None,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Satisfiable(_) => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::TimedOut => write!(f, "TimedOut"),
        }
    }
}

/// The outcome of a solve together with how much work it took.
#[derive(Clone, Debug)]
pub struct SolveReport {
    pub report: Report,

    /// How many iterations the engine ran: branches explored for DPLL,
    /// decide/conflict passes for CDCL.
    pub iterations: usize,

    /// Elapsed wall-clock time of the solve.
    pub time: Duration,
}

impl SolveReport {
    pub fn new(report: Report, iterations: usize, time: Duration) -> Self {
        SolveReport {
            report,
            iterations,
            time,
        }
    }
}
