//! allure-hosting - infrastructure description synthesizer for Allure reports
//!
//! This is the main entry point for the allure-hosting CLI.

mod cli;

use anyhow::Context;
use cli::{Cli, CommandContext, Commands};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use allure_hosting::config::Config;
use allure_hosting::error::Error;
use allure_hosting::output::OutputFormatter;

fn main() {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let formatter = OutputFormatter::new(!cli.no_color, cli.verbosity());

    // Load configuration
    let config = Config::load(cli.config.as_ref()).unwrap_or_else(|e| {
        formatter.warning(&format!("Failed to load config: {}", e));
        Config::default()
    });

    let exit_code = match run(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            formatter.error(&format!("{:#}", e));
            // The crate error somewhere in the chain decides the exit code.
            e.chain()
                .find_map(|cause| cause.downcast_ref::<Error>())
                .map_or(1, Error::exit_code)
        }
    };

    std::process::exit(exit_code);
}

/// Execute the selected subcommand
fn run(cli: &Cli, config: &Config) -> anyhow::Result<i32> {
    let ctx =
        CommandContext::new(cli, config).context("failed to resolve deployment context")?;

    let code = match &cli.command {
        Commands::Synth(args) => args.execute(&ctx)?,
        Commands::List(args) => args.execute(&ctx)?,
        Commands::Outputs(args) => args.execute(&ctx)?,
    };

    Ok(code)
}

/// Initialize logging based on verbosity level
fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(verbosity >= 3))
        .with(env_filter)
        .init();
}
