use std::process::ExitCode;

use clap::Parser;
use ditag::cli::commands::Cli;
use ditag::utils::reporting::Reporter;
use ditag::RunConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = RunConfig::from(Cli::parse());

    println!("=== Preparing playlist '{}' ===", config.name);
    println!("Descriptor: {}", config.descriptor.display());
    println!("Music directory: {}", config.directory.display());
    if config.dry_run {
        println!("Dry run mode: no files will be changed");
    }

    match ditag::run(&config) {
        Ok(summary) => {
            Reporter::new().print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
