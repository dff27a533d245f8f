//! Epsilon-NFA compiler and simulator for a minimal regex grammar.
//!
//! The grammar consists of literal characters, the wildcard `.`, grouping
//! `( )`, alternation `|`, the zero-or-more operator `*`, and backslash
//! escapes for those five metacharacters. Matching is always against the
//! whole input.
//!
//! A pattern of `m` symbols is compiled into a graph with `m + 1` vertices,
//! one per pattern position plus the accepting state. The graph holds only
//! epsilon transitions. Consuming a character moves from state `i` to state
//! `i + 1` whenever symbol `i` matches it, so consuming transitions never
//! need to be stored.
//!
//! ```text
//! pattern  ──symbol::parse──>  [Symbol]  ──Compiler──>  Nfa  ──Matcher──>  bool
//! ```
//!
//! The simulator keeps the set of all states reachable after each input
//! character, so a match runs in `O(m * n)` time for a text of `n`
//! characters regardless of how the pattern nests groups and stars.

#[macro_use]
mod macros;

pub mod compiler;
pub mod digraph;
pub mod matcher;
pub mod nfa;
pub mod sparse_set;
pub mod symbol;

pub use compiler::{Compiler, Config};
pub use matcher::{Cache, Matcher};
pub use nfa::{Nfa, StateId};
pub use symbol::Symbol;

/// The result of compiling a pattern.
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that can occur during compilation.
///
/// Every error is a deterministic function of the pattern text. Running a
/// compiled pattern never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A backslash escapes something other than `(`, `)`, `|`, `*` or `.`.
    ///
    /// `pos` is the offset, in characters, of the escaped character.
    InvalidEscape { ch: char, pos: usize },
    /// The pattern ends with a backslash. `pos` is the backslash's offset.
    UnterminatedEscape { pos: usize },
    /// Parentheses or alternations don't pair up.
    UnbalancedPattern(Unbalanced),
    /// The pattern has more symbols than the configured size limit.
    TooComplex { size: usize, limit: usize },
}

/// The reason a pattern was rejected as unbalanced.
///
/// Positions are indices into the symbol sequence, which differ from
/// character offsets when the pattern contains escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unbalanced {
    /// A `)` with no open group.
    UnopenedGroup { pos: usize },
    /// A `|` that isn't inside any group.
    AlternationOutsideGroup { pos: usize },
    /// A `(` that is never closed.
    UnclosedGroup { pos: usize },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::InvalidEscape { ch, pos } => {
                write!(f, "invalid escape sequence '\\{}' at offset {}", ch, pos)
            }
            CompileError::UnterminatedEscape { pos } => {
                write!(f, "unterminated escape sequence at offset {}", pos)
            }
            CompileError::UnbalancedPattern(reason) => {
                write!(f, "unbalanced pattern: {}", reason)
            }
            CompileError::TooComplex { size, limit } => write!(
                f,
                "pattern has {} symbols, which exceeds the limit of {}",
                size, limit
            ),
        }
    }
}

impl std::fmt::Display for Unbalanced {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unbalanced::UnopenedGroup { pos } => {
                write!(f, "')' at symbol {} closes no group", pos)
            }
            Unbalanced::AlternationOutsideGroup { pos } => {
                write!(f, "'|' at symbol {} is not inside a group", pos)
            }
            Unbalanced::UnclosedGroup { pos } => {
                write!(f, "'(' at symbol {} is never closed", pos)
            }
        }
    }
}

impl std::error::Error for CompileError {}
