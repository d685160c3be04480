/*!
Tools for building a context.

# Basic methods

A formula is added to a context either:
- Clause by clause, with [add_clause](crate::context::Context::add_clause).
- From a DIMACS representation, with [read_dimacs](crate::context::Context::read_dimacs) or [read_dimacs_file](crate::context::Context::read_dimacs_file).

# DIMACS

The DIMACS reader is lenient.
Each line is read as a clause, with the following exceptions:
- Blank lines, and lines beginning with `c`, `p`, `%`, or `0` are skipped.
  Though, a well formed `p cnf <atoms> <clauses>` line is noted in the [ParserInfo].
- A line which is not a whitespace separated sequence of integers is skipped, and its number noted.
- A line with a `0` other than at the end of the line is skipped, and its number noted, as `0` is not a literal.

A terminating `0` is removed from each clause, and a line without a terminating `0` is read as a clause of all the integers on the line.

```rust
# use trio_sat::context::Context;
# use trio_sat::config::Config;
let mut the_context = Context::from_config(Config::default());

let dimacs = b"c An example
p cnf 3 3
 1 -2  0
 2  x  0
-3  1
%
0
";

let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
assert_eq!(info.expected_atoms, Some(3));
assert_eq!(info.added_clauses, 2);
assert_eq!(info.skipped_lines, vec![4]);
assert_eq!(the_context.formula.clauses(), &[vec![1, -2], vec![-3, 1]]);
```
*/

mod dimacs;

/// Details of a parse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms stated by a problem line, if any.
    pub expected_atoms: Option<usize>,

    /// The count of clauses stated by a problem line, if any.
    pub expected_clauses: Option<usize>,

    /// The count of distinct atoms in the formula after the parse.
    pub added_atoms: usize,

    /// The count of clauses added by the parse.
    pub added_clauses: usize,

    /// The (1-indexed) numbers of lines skipped as malformed.
    pub skipped_lines: Vec<usize>,
}

impl std::fmt::Display for ParserInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let (Some(atoms), Some(clauses)) = (self.expected_atoms, self.expected_clauses) {
            write!(f, "expected {atoms} atoms and {clauses} clauses, ")?;
        }
        write!(
            f,
            "read {} atoms and {} clauses",
            self.added_atoms, self.added_clauses
        )?;
        if !self.skipped_lines.is_empty() {
            write!(f, ", skipped {} lines", self.skipped_lines.len())?;
        }
        Ok(())
    }
}
