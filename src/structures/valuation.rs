/*!
A (partial) function from atoms to truth values.

The canonical representation is a vector of optional booleans indexed by
atom, where:
- *v*\[a\] = Some(true) *if and only if* the atom is assigned true.
- *v*\[a\] = Some(false) *if and only if* the atom is assigned false.
- *v*\[a\] = None *if and only if* the atom is unassigned.

As atoms are positive integers the zero index is unused, and as the atoms of
a formula need not be contiguous a valuation may contain entries for atoms
the formula never mentions. Those entries stay `None` and are ignored by
anything which consults the formula for its atoms.

Values are set by decisions and by unit propagation, and are cleared only
when backtracking or backjumping.
*/

use crate::structures::{atom::Atom, literal::CLiteral};

/// A partial map from atoms to truth values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Valuation {
    values: Vec<Option<bool>>,
}

impl Valuation {
    /// A fresh valuation on which every atom up to (and including) `atom_max` is unassigned.
    pub fn new(atom_max: Atom) -> Self {
        Valuation {
            values: vec![None; atom_max as usize + 1],
        }
    }

    /// Some value of an atom under the valuation, or otherwise nothing.
    pub fn of(&self, atom: Atom) -> Option<bool> {
        self.values[atom as usize]
    }

    /// Assigns the atom of the literal the polarity of the literal.
    pub fn set(&mut self, literal: CLiteral) {
        self.values[literal.atom() as usize] = Some(literal.polarity());
    }

    /// Unassigns the atom.
    pub fn clear(&mut self, atom: Atom) {
        self.values[atom as usize] = None;
    }

    /// Whether the valuation assigns the negation of the literal.
    pub fn falsifies(&self, literal: CLiteral) -> bool {
        self.of(literal.atom()) == Some(!literal.polarity())
    }

    /// Whether the valuation assigns the polarity of the literal.
    pub fn satisfies(&self, literal: CLiteral) -> bool {
        self.of(literal.atom()) == Some(literal.polarity())
    }

    /// Whether some literal of the clause is satisfied by the valuation.
    pub fn satisfies_clause(&self, clause: &[CLiteral]) -> bool {
        clause.iter().any(|literal| self.satisfies(*literal))
    }

    /// Assigns false to every given atom without a value.
    ///
    /// Used when a solve concludes satisfiable with atoms left unconstrained
    /// by simplification, so the reported assignment is total.
    pub fn totalise(&mut self, atoms: &[Atom]) {
        for atom in atoms {
            if self.values[*atom as usize].is_none() {
                self.values[*atom as usize] = Some(false);
            }
        }
    }

    /// The valuation of the given atoms as a string of literals in integer form.
    pub fn as_display_string(&self, atoms: &[Atom]) -> String {
        atoms
            .iter()
            .filter_map(|atom| {
                self.of(*atom)
                    .map(|value| CLiteral::new(*atom, value).to_string())
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod valuation_tests {
    use super::*;

    #[test]
    fn set_clear() {
        let mut valuation = Valuation::new(5);
        assert_eq!(valuation.of(5), None);

        valuation.set(CLiteral::new(5, true));
        assert_eq!(valuation.of(5), Some(true));
        assert!(valuation.satisfies(CLiteral::new(5, true)));
        assert!(valuation.falsifies(CLiteral::new(5, false)));

        valuation.clear(5);
        assert_eq!(valuation.of(5), None);
        assert!(!valuation.falsifies(CLiteral::new(5, false)));
    }

    #[test]
    fn totalise_fills_only_gaps() {
        let mut valuation = Valuation::new(3);
        valuation.set(CLiteral::new(2, true));
        valuation.totalise(&[1, 2, 3]);
        assert_eq!(valuation.of(1), Some(false));
        assert_eq!(valuation.of(2), Some(true));
        assert_eq!(valuation.of(3), Some(false));
    }
}
