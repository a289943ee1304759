use clap::Parser;

use unexported_guard::cli::{Cli, Commands};
use unexported_guard::commands::{run_check, run_config, run_init};
use unexported_guard::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
