mod command;
mod literal;
mod logging;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Separator printed between values (default: newline).
    #[arg(long, global = true)]
    separator: Option<String>,
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
enum Commands {
    /// An arithmetic sequence: `range STOP`, `range START STOP [STEP]`.
    Range(command::Range),
    /// An unbounded counter, cut off with `--limit`.
    Count(command::Count),
    /// A window over a source by position and stride.
    Islice(command::Islice),
    /// The concatenation of the given sources.
    Chain(command::Chain),
    /// The concatenation of the members of a single source.
    ChainFromIterable(command::ChainFromIterable),
    /// Running results of a combiner over a source.
    Accumulate(command::Accumulate),
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbosity.tracing_level_filter(), cli.verbosity.is_present())?;

    let separator = cli.separator.as_deref().unwrap_or("\n");
    let mut printer = command::Printer::new(std::io::stdout().lock(), separator);
    // values are written as they are pulled; an error ends the output
    let error = match &cli.command {
        Commands::Range(range) => range.run(&mut printer)?,
        Commands::Count(count) => count.run(&mut printer)?,
        Commands::Islice(islice) => islice.run(&mut printer)?,
        Commands::Chain(chain) => chain.run(&mut printer)?,
        Commands::ChainFromIterable(chain) => chain.run(&mut printer)?,
        Commands::Accumulate(accumulate) => accumulate.run(&mut printer)?,
    };
    printer.finish()?;

    match error {
        Some(error) => {
            tracing::debug!(%error, "evaluation failed");
            eprintln!("{}: {}", error.kind(), error);
            Ok(ExitCode::FAILURE)
        }
        None => Ok(ExitCode::SUCCESS),
    }
}
