mod accessor;
mod app;
mod cli;
mod config;
mod consts;
mod error;
mod output;
mod utils;

use clap::Parser;

use accessor::DateAccessor;
use app::{CommandContext, run_command};
use cli::{Cli, Commands};
use config::Config;
use utils::init_tracing;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = Config::load();
    let cli = cli.with_config(&config);

    let accessor = DateAccessor::new(cli.date_settings());
    let command = Commands::or_default(cli.command.as_ref());
    let ctx = CommandContext {
        cli: &cli,
        accessor: &accessor,
    };

    if let Err(e) = run_command(&command, &ctx) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
