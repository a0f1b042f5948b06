/*!
Methods to build a formula within a context.

Clauses may be added programmatically, as literals or in the integer form
of the DIMACS convention, or read from [DIMACS text](crate::builder::dimacs).

The engines assume every original clause is non-empty and every literal
names an atom; the builder makes that caller contract explicit by rejecting
empty clauses and zero literals with a [BuildError].
*/

pub mod dimacs;
pub mod random;

use crate::{
    context::GenericContext,
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self, ErrorKind},
};

/// The clause corresponding to a sequence of integer literals.
pub fn clause_from_ints(ints: &[i32]) -> Result<CClause, ErrorKind> {
    let mut clause = CClause::with_capacity(ints.len());
    for int in ints {
        match CLiteral::from_int(*int) {
            Some(literal) => clause.push(literal),
            None => return Err(ErrorKind::from(err::BuildError::ZeroLiteral)),
        }
    }
    Ok(clause)
}

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Adds a clause to the formula of the context, in the order given.
    ///
    /// Duplicate literals are kept, as storage is not required to
    /// de-duplicate a clause.
    pub fn add_clause(&mut self, clause: CClause) -> Result<(), ErrorKind> {
        if clause.is_empty() {
            return Err(ErrorKind::from(err::BuildError::EmptyClause));
        }
        self.formula.add_clause(clause);
        Ok(())
    }

    /// Adds a clause given as non-zero integer literals.
    pub fn add_clause_ints(&mut self, ints: &[i32]) -> Result<(), ErrorKind> {
        let clause = clause_from_ints(ints)?;
        self.add_clause(clause)
    }
}

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::{
        config::Config,
        context::Context,
        types::err::{BuildError, ErrorKind},
    };

    #[test]
    fn rejects_empty_clauses_and_zero_literals() {
        let mut the_context = Context::from_config(Config::default());

        assert_eq!(
            the_context.add_clause_ints(&[]),
            Err(ErrorKind::Build(BuildError::EmptyClause))
        );
        assert_eq!(
            the_context.add_clause_ints(&[1, 0, 2]),
            Err(ErrorKind::Build(BuildError::ZeroLiteral))
        );
        assert_eq!(the_context.formula.clause_count(), 0);
    }

    #[test]
    fn keeps_clause_and_literal_order() {
        let mut the_context = Context::from_config(Config::default());
        the_context.add_clause_ints(&[3, -1, 3]).unwrap();

        let clause = &the_context.formula.clauses()[0];
        let ints = clause.iter().map(CLiteral::as_int).collect::<Vec<_>>();
        assert_eq!(ints, vec![3, -1, 3]);
        assert_eq!(the_context.formula.atoms(), &[1, 3]);
    }
}
