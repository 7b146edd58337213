//! Command line interface error

/* crate use */
use thiserror::Error;

/// Enum to manage error polymorphism
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Cli {
    /// Number of case must be strictly positive
    #[error("--count must be > 0")]
    CountMustBePositive,

    /// Length of case can't be negative
    #[error("--length must be >= 0")]
    LengthMustBePositiveOrZero,
}
