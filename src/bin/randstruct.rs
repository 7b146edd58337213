/* crate use */
use anyhow::Result;

use clap::Parser as _;

/* local use */
use randstruct::*;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cmd = cli::Command::parse();

    if let Some(level) = cli::i82level(cmd.verbosity) {
        env_logger::builder()
            .format_timestamp(Some(env_logger::fmt::TimestampPrecision::Millis))
            .filter_level(level.to_level_filter())
            .init();
    } else {
        env_logger::Builder::from_env("RANDSTRUCT_LOG")
            .format_timestamp(Some(env_logger::fmt::TimestampPrecision::Millis))
            .init();
    }

    let params = match generate::Params::try_from(&cmd) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };
    log::debug!("{:?}", params);

    let stdout = std::io::stdout();
    generate::generate(&params, std::io::BufWriter::new(stdout.lock()))
}
