mod actions;
mod cli;
mod config;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = actions::run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
