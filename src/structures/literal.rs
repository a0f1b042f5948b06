/*!
Literals are atoms paired with a (boolean) polarity.

The canonical representation is the [CLiteral] structure, an atom together
with a boolean. In other solvers an integer is often used, with the sign of
the integer indicating the value of the literal, and conversions to and from
that form are kept on the structure for interaction with DIMACS input and
output.

An example:

```rust
# use stoat_sat::structures::literal::CLiteral;
let literal = CLiteral::new(79, true);

assert!(literal.polarity());
assert_eq!(literal.atom(), 79);
assert_eq!(literal.negate(), CLiteral::new(79, false));
assert_eq!(literal.as_int(), 79);
assert_eq!(CLiteral::from_int(-79).unwrap(), literal.negate());
```

Literals are ordered by atom and then polarity, with the (Rust default)
ordering of 'false' being (strictly) less than 'true', and are hashable to
allow straightforward use as the indicies of maps.
*/

use crate::structures::atom::Atom;

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CLiteral {
    /// The atom of the literal.
    atom: Atom,

    /// The polarity of the literal.
    polarity: bool,
}

impl CLiteral {
    /// A fresh literal, specified by pairing an atom with a boolean.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        CLiteral { atom, polarity }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> Atom {
        self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        CLiteral {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// The literal in integer form, with sign indicating polarity.
    pub fn as_int(&self) -> i32 {
        match self.polarity {
            true => self.atom as i32,
            false => -(self.atom as i32),
        }
    }

    /// The literal corresponding to a non-zero integer, or nothing for zero.
    ///
    /// Zero is reserved as the clause terminator in DIMACS input, and no
    /// literal corresponds to it.
    pub fn from_int(int: i32) -> Option<Self> {
        match int {
            0 => None,
            _ => Some(CLiteral {
                atom: int.unsigned_abs(),
                polarity: int.is_positive(),
            }),
        }
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn int_round_trip() {
        for int in [1, -1, 79, -2_147_483_647] {
            let literal = CLiteral::from_int(int).expect("non-zero");
            assert_eq!(literal.as_int(), int);
        }
        assert!(CLiteral::from_int(0).is_none());
    }

    #[test]
    fn negation_flips_polarity_only() {
        let literal = CLiteral::new(3, false);
        assert_eq!(literal.negate().atom(), 3);
        assert!(literal.negate().polarity());
        assert_eq!(literal.negate().negate(), literal);
    }

    #[test]
    fn ordering() {
        let mut literals = vec![
            CLiteral::new(2, true),
            CLiteral::new(1, true),
            CLiteral::new(2, false),
            CLiteral::new(1, false),
        ];
        literals.sort_unstable();
        let ints = literals.iter().map(CLiteral::as_int).collect::<Vec<_>>();
        assert_eq!(ints, vec![-1, 1, -2, 2]);
    }
}
