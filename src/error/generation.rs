//! Generation error, raise only if an internal invariant is broken

/* crate use */
use thiserror::Error;

/// Enum to manage error polymorphism
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Generation {
    /// A wrap production require more character than available
    #[error("invalid grammar split, inner span {inner} doesn't fit in {size}")]
    InvalidGrammarSplit { size: usize, inner: usize },

    /// A ')' without matching '('
    #[error("unbalanced structure, no opening bracket match position {0}")]
    UnbalancedClose(usize),

    /// Some '(' are never closed
    #[error("unbalanced structure, {0} opening bracket(s) never closed")]
    UnbalancedOpen(usize),

    /// Structure contains something else than '.', '(' or ')'
    #[error("invalid structure character {0:?} at position {1}")]
    InvalidStructureChar(char, usize),

    /// A sequence position was never assigned
    #[error("internal assignment error, position {0} isn't assigned")]
    UnassignedPosition(usize),

    /// Sequence and structure length differ
    #[error("sequence and structure length mismatch ({seq} != {structure})")]
    LengthMismatch { seq: usize, structure: usize },

    /// Bases at a matched bracket pair can't pair
    #[error("disallowed pair at ({open},{close}): ({left}, {right})")]
    DisallowedPair {
        open: usize,
        close: usize,
        left: char,
        right: char,
    },

    /// Sequence contains something else than A, U, G or C
    #[error("invalid sequence character {0:?} at position {1}")]
    InvalidSequenceChar(char, usize),
}
