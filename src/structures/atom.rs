/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a positive integer, with magnitude bounded by [ATOM_MAX] so the
signed (DIMACS) representation of either literal of an atom always fits an
`i32`. Atoms mentioned by a formula are not required to be contiguous.

In the SAT literature these are often called 'variables' while in the logic
literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
