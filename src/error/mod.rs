//! All stuff relate to error

/* crate use */
use thiserror::Error;

/* module declaration */
pub mod cli;
pub mod generation;

/* reexport for easiest use */
pub use cli::Cli;
pub use generation::Generation;

/// Enum to manage error polymorphism
#[derive(Debug, Error)]
pub enum Error {
    /// Error related to command line interface
    #[error(transparent)]
    Cli(#[from] Cli),

    /// Error related to generation of case
    #[error(transparent)]
    Generation(#[from] Generation),
}
