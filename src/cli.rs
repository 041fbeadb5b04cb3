//! CLI for allure-hosting
//!
//! Argument parsing and subcommand handling. Three subcommands:
//!
//! - `synth` — build the resource graph and emit it as JSON or YAML
//! - `list` — print the names of stacks that would be synthesized
//! - `outputs` — print the stack's output bindings for upload automation

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use allure_hosting::app::App;
use allure_hosting::config::Config;
use allure_hosting::context::DeploymentContext;
use allure_hosting::error::Result;
use allure_hosting::graph::Graph;
use allure_hosting::output::OutputFormatter;

/// allure-hosting - synthesize report-hosting infrastructure descriptions
///
/// Describes an S3 bucket and CloudFront distribution for hosting static
/// Allure test reports, for deployment by an external provisioning tool.
#[derive(Parser, Debug, Clone)]
#[command(name = "allure-hosting")]
#[command(author = "Allure Hosting Contributors")]
#[command(version)]
#[command(about = "Synthesize report-hosting infrastructure descriptions", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Context values (key=value), repeatable. Known keys: project,
    /// domainName, acmCertArn, region
    #[arg(short = 'c', long = "context", global = true, action = clap::ArgAction::Append)]
    pub context: Vec<String>,

    /// Path to configuration file
    #[arg(long, global = true, env = "ALLURE_HOSTING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Serialization format for synthesized graphs
    #[arg(long = "output-format", global = true)]
    pub output_format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Serialization format for synthesized graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Synthesize the resource graph
    Synth(SynthArgs),

    /// List the stacks that would be synthesized
    List(ListArgs),

    /// Print the stack's output bindings
    Outputs(OutputsArgs),
}

/// Arguments for synth command
#[derive(Parser, Debug, Clone)]
pub struct SynthArgs {
    /// Write the graph to a file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for list command
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {}

/// Arguments for outputs command
#[derive(Parser, Debug, Clone)]
pub struct OutputsArgs {
    /// Print outputs as a JSON object
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the effective verbosity level (0-3)
    pub fn verbosity(&self) -> u8 {
        self.verbose.min(3)
    }
}

/// Common context shared between commands
pub struct CommandContext {
    /// Output formatter
    pub output: OutputFormatter,
    /// Resolved deployment context
    pub context: DeploymentContext,
    /// Serialization format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context from CLI arguments and loaded config
    pub fn new(cli: &Cli, config: &Config) -> Result<Self> {
        let output = OutputFormatter::new(!cli.no_color && config.output.color, cli.verbosity());
        let context = DeploymentContext::resolve(&cli.context, &config.context)?;
        let format = cli.output_format.unwrap_or_else(|| {
            if config.output.format.eq_ignore_ascii_case("yaml") {
                OutputFormat::Yaml
            } else {
                OutputFormat::Json
            }
        });

        Ok(Self {
            output,
            context,
            format,
        })
    }

    fn synthesize(&self) -> Graph {
        App::synthesize(&self.context)
    }
}

impl SynthArgs {
    /// Synthesize the graph and write it out
    pub fn execute(&self, ctx: &CommandContext) -> Result<i32> {
        let graph = ctx.synthesize();
        if graph.is_empty() {
            ctx.output
                .debug("no project in context; synthesized an empty graph");
        }

        let serialized = match ctx.format {
            OutputFormat::Json => graph.to_json()?,
            OutputFormat::Yaml => graph.to_yaml()?,
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, serialized)?;
                ctx.output
                    .info(&format!("Wrote graph to {}", path.display()));
            }
            None => println!("{}", serialized),
        }

        Ok(0)
    }
}

impl ListArgs {
    /// Print one stack name per line
    pub fn execute(&self, ctx: &CommandContext) -> Result<i32> {
        for stack in &ctx.synthesize().stacks {
            println!("{}", stack.name);
        }
        Ok(0)
    }
}

impl OutputsArgs {
    /// Print the output bindings of the synthesized stack
    pub fn execute(&self, ctx: &CommandContext) -> Result<i32> {
        let graph = ctx.synthesize();
        let Some(stack) = graph.stacks.first() else {
            // No project, no stack, no outputs. Consistent with synth.
            return Ok(0);
        };

        if self.json {
            let map: serde_json::Map<String, serde_json::Value> = stack
                .outputs
                .iter()
                .map(|o| (o.name.clone(), serde_json::Value::String(o.value.clone())))
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
        } else {
            for output in &stack.outputs {
                println!("{} = {}", output.name, output.value);
            }
        }

        Ok(0)
    }
}
