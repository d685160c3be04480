/*!
An atom (aka. a 'variable').

Atoms are things with a name to which assigning a (boolean) value (true or false) is of interest.
In DIMACS input the name of an atom is a positive integer, and the same integer is used internally.

```rust
# use trio_sat::structures::atom::{Atom, ATOM_MAX};
let atom: Atom = 97;
assert!(atom <= ATOM_MAX);
```

Atom `0` is never the atom of a literal, as the integer `0` terminates a clause in DIMACS input.
So, structures indexed by atoms have an unused zero index.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// As literals are signed 32 bit integers, the atom of every literal is at most the maximum signed 32 bit integer.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
