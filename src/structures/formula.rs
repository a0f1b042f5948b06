//! An ordered collection of clauses, with bookkeeping of the mentioned atoms.

use std::rc::Rc;

use crate::structures::{
    atom::Atom,
    clause::{self, CClause, TrackedClause},
    valuation::Valuation,
};

/// A formula in conjunctive normal form: an ordered collection of clauses.
///
/// The formula is immutable during a solve. Engines take tracked copies of
/// the clause collection to mutate and, for clause learning, a permanent
/// clause repository seeded from the original clauses.
#[derive(Clone, Debug, Default)]
pub struct Formula {
    clauses: Vec<Rc<CClause>>,

    /// The atoms mentioned by some clause, sorted, without duplicates.
    atoms: Vec<Atom>,
}

impl Formula {
    pub fn new() -> Self {
        Formula::default()
    }

    /// Appends a clause, in the order given, recording any fresh atoms.
    ///
    /// Input validation (non-empty clauses, non-zero literals) belongs to
    /// the context [builder](crate::builder).
    pub fn add_clause(&mut self, clause: CClause) {
        for literal in &clause {
            if let Err(index) = self.atoms.binary_search(&literal.atom()) {
                self.atoms.insert(index, literal.atom());
            }
        }
        self.clauses.push(Rc::new(clause));
    }

    /// The clauses of the formula, in insertion order.
    pub fn clauses(&self) -> &[Rc<CClause>] {
        &self.clauses
    }

    /// The atoms mentioned by the formula, sorted.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// The greatest mentioned atom, or zero for the empty formula.
    pub fn atom_max(&self) -> Atom {
        self.atoms.last().copied().unwrap_or(0)
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// A fresh tracked copy of every clause, each with all literals live.
    pub fn tracked_clauses(&self) -> Vec<TrackedClause> {
        self.clauses
            .iter()
            .map(|clause| TrackedClause::fresh(clause.clone()))
            .collect()
    }

    /// A fresh permanent repository holding (a shared handle to) every
    /// original clause. Learnt clauses are appended during a solve.
    pub fn permanent_clauses(&self) -> Vec<Rc<CClause>> {
        self.clauses.clone()
    }

    /// Whether the valuation satisfies every clause of the formula.
    pub fn satisfied_by(&self, valuation: &Valuation) -> bool {
        self.clauses
            .iter()
            .all(|clause| valuation.satisfies_clause(clause))
    }

    /// The formula in DIMACS form, with a problem line.
    pub fn as_dimacs(&self) -> String {
        let mut string = format!("p cnf {} {}\n", self.atom_max(), self.clause_count());
        for clause in &self.clauses {
            string.push_str(&clause::as_dimacs(clause));
            string.push('\n');
        }
        string
    }
}
