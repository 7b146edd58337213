//! Generate random sequence/structure cases

/* mod declaration */
pub mod case;
pub mod sequence;
pub mod structure;
pub mod token;
pub mod validate;

/* crate use */
use anyhow::Result;
use rand::SeedableRng;

/* local use */
use crate::cli;
use crate::error::{Cli, Error};
use crate::rng::RandomSource;
pub use case::Case;
pub use sequence::assign_sequence;
pub use structure::generate_structure;
pub use validate::validate_pairing;

/// Validated generation parameters, seed is the bit pattern of the signed command line seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub seed: u64,
    pub count: usize,
    pub length: usize,
    pub prefix: String,
}

impl TryFrom<&cli::Command> for Params {
    type Error = Cli;

    fn try_from(cmd: &cli::Command) -> Result<Self, Self::Error> {
        if cmd.count <= 0 {
            return Err(Cli::CountMustBePositive);
        }
        if cmd.length < 0 {
            return Err(Cli::LengthMustBePositiveOrZero);
        }

        Ok(Params {
            seed: cmd.seed as u64,
            count: usize::try_from(cmd.count).map_err(|_| Cli::CountMustBePositive)?,
            length: usize::try_from(cmd.length).map_err(|_| Cli::LengthMustBePositiveOrZero)?,
            prefix: cmd.prefix.clone(),
        })
    }
}

/// Generate one validated case, structure draws happen before sequence draws
pub fn generate_case<R>(
    rng: &mut R,
    prefix: &str,
    index: usize,
    length: usize,
) -> Result<Case, Error>
where
    R: RandomSource + ?Sized,
{
    let structure = generate_structure(rng, length)?;
    let seq = assign_sequence(rng, &structure)?;
    validate_pairing(&seq, &structure)?;

    Ok(Case::new(prefix, index, seq, structure))
}

/// main generate function, write header and all cases in output
pub fn generate<W>(params: &Params, output: W) -> Result<()>
where
    W: std::io::Write,
{
    let mut rng = rand::rngs::StdRng::seed_from_u64(params.seed);

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(output);

    log::info!(
        "Start generate {} cases of length {} with seed {}",
        params.count,
        params.length,
        params.seed
    );
    writer.write_record(["case_id", "seq", "G"])?;

    for index in 1..=params.count {
        let case = generate_case(&mut rng, &params.prefix, index, params.length)?;
        log::debug!("{}", case);

        writer.write_record(case.record())?;
    }

    writer.flush()?;
    log::info!("End generate cases");

    Ok(())
}
