use clap::Parser;
use dbperf::{
    cli::{self, Cli},
    env::Env,
};
use env_logger::Builder;
use log::error;
use std::process;

fn main() {
    // Initialize the logger.
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
    let mut builder = Builder::from_env(env);
    builder.init();

    let cli = Cli::parse();
    let result = cli::run(cli.into_command());
    if let Err(e) = &result {
        error!("{}: {e:#}", Env::SYS_NAME);
    }

    process::exit(cli::exit_code(&result));
}
