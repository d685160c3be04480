//! Error types used in the library.
//!
//! - Some of these are internally expected, e.g. a propagation conflict is used to control the flow of a search.
//! - Some are external, e.g. a missing file when reading a formula or a batch.
//!
//! Names of the error enums, for the most part, overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::literal::IntLiteral;

/// The general error type, wrapping the errors of each part of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Batch(BatchError),
    Build(BuildError),
    Parse(ParseError),
    Solve(SolveError),

    /// Some input/output failure, with the message of the underlying error.
    Io(String),
}

/// Errors when running a batch of formulas.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BatchError {
    /// The batch folder could not be read.
    UnreadableFolder,

    /// The pattern used to find formulas in the folder was invalid.
    Pattern,

    /// The summary could not be serialized.
    Serialize,

    /// The summary could not be written.
    Write,
}

impl From<BatchError> for ErrorKind {
    fn from(e: BatchError) -> Self {
        ErrorKind::Batch(e)
    }
}

/// Errors when adding a clause to a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A literal of zero was given, and zero is not a literal.
    ZeroLiteral,

    /// A literal whose atom cannot be represented.
    AtomOverflow,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during parsing.
///
/// Malformed lines are not errors of the parse, they are skipped and noted in the [parser report](crate::builder::ParserInfo).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue reading the line at the given (1-indexed) position.
    Line(usize),

    /// No file was found.
    NoFile,

    /// The file has an extension which is not supported.
    UnknownExtension(String),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted outcomes of unit propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PropagationError {
    /// The literal is forced by some unit clause, though its negation is already true.
    /// This is expected, and makes the branch of a search unsatisfiable.
    Conflict(IntLiteral),

    /// Simplification produced the empty clause.
    EmptyClause,

    /// The solve was interrupted during propagation.
    Interrupted,
}

/// Errors during a solve.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolveError {
    /// The interrupt of the solve was raised, e.g. as the time limit was reached.
    Interrupted,

    /// The worker thread of a bounded solve could not be spawned.
    Spawn,
}

impl From<SolveError> for ErrorKind {
    fn from(e: SolveError) -> Self {
        ErrorKind::Solve(e)
    }
}

impl From<std::io::Error> for ErrorKind {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::Io(e.to_string())
    }
}
