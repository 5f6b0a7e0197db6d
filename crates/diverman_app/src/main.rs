mod cli;
mod run;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    diverman_logging::initialize_stderr(diverman_logging::level_for_verbosity(cli.verbose));

    if let Err(err) = run::run(cli) {
        eprintln!("diverman error: {:#}", err);
        std::process::exit(1);
    }
}
