use std::process;
use clap::Parser;
use parity_sdk::errors::ErrorHandler;
use parity_sdk::structs::cli::Cli;
use parity_sdk::workers::command_runner::CommandRunner;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let runner = CommandRunner::new(&cli);

    if let Err(error) = runner.run_command(cli.command) {
        ErrorHandler::handle_error(&error);
        process::exit(ErrorHandler::exit_code(&error));
    }
}
