//! All stuff relate to command line

/// Generate reproducible random pairs of RNA sequence and secondary structure
#[derive(clap::Parser, std::fmt::Debug)]
#[clap(name = "randstruct", version = "0.1")]
pub struct Command {
    /// Seed of pseudo random generator, negative value are accepted
    #[clap(long = "seed", default_value = "1", allow_hyphen_values = true)]
    pub seed: i64,

    /// Number of case, must be > 0
    #[clap(long = "count", default_value = "10", allow_hyphen_values = true)]
    pub count: i64,

    /// Length of sequence and structure, must be >= 0
    #[clap(long = "length", default_value = "24", allow_hyphen_values = true)]
    pub length: i64,

    /// Case id prefix, case ids are <prefix>_0001, <prefix>_0002, ...
    #[clap(long = "prefix", default_value = "rand")]
    pub prefix: String,

    /// Verbosity level also control by environment variable RANDSTRUCT_LOG if flag is set RANDSTRUCT_LOG value is ignored
    #[clap(short = 'v', long = "verbosity", parse(from_occurrences))]
    pub verbosity: i8,
}

/// Convert verbosity level (number of v) is log::Level
pub fn i82level(level: i8) -> Option<log::Level> {
    match level {
        std::i8::MIN..=0 => None,
        1 => Some(log::Level::Error),
        2 => Some(log::Level::Warn),
        3 => Some(log::Level::Info),
        4 => Some(log::Level::Debug),
        5..=std::i8::MAX => Some(log::Level::Trace),
    }
}
