use clap::Parser;
use colored::Colorize;
use netcalc::cli::Cli;
use netcalc::config::Config;
use netcalc::logging::init_logging;
use netcalc::{run, Outcome};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env();
    if let Err(e) = init_logging(&config.log_config) {
        eprintln!("Error initializing log4rs: {e}");
    }
    log::info!("#Start main()");

    let cli = Cli::parse();
    cli.color_choice(&config).apply();

    match run(&cli, &config) {
        Ok(Outcome::Text(text)) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Calculated { output, warning }) => {
            if let Some(warning) = warning {
                eprintln!("{warning}");
            }
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("run() failed: {e:?}");
            eprintln!("{} {e}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}
