use clap::{Parser, Subcommand};
use tracing::debug;

use placer_observe::{LoggerConfig, LoggerFormat, LoggerLevel, LoggerResult, init_logger};

mod commands;
use commands::{OutputFormat, SpecInput};

#[derive(Parser)]
#[command(
    name = "placer",
    about = "Compile label-constraint specs into replica placement rules",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log format: text, json or journald. Overrides PLACER_LOG_FORMAT.
    #[arg(long, global = true)]
    log_format: Option<LoggerFormat>,
    /// Log filter, e.g. "debug" or "placer_core=trace". Overrides PLACER_LOG_LEVEL.
    #[arg(long, global = true)]
    log_level: Option<LoggerLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a spec and print the resulting rules
    Compile {
        #[command(flatten)]
        input: SpecInput,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
        /// Print rules in canonical order instead of production order
        #[arg(long)]
        sorted: bool,
    },
    /// Validate a spec and print the total number of replicas it places
    Check {
        #[command(flatten)]
        input: SpecInput,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1) logger
    let cfg = logger_config(&cli)?;
    init_logger(&cfg)?;
    debug!(format = %cfg.format, level = cfg.level.as_str(), "logger initialized");

    // 2) command
    match cli.command {
        Commands::Compile {
            input,
            output,
            sorted,
        } => commands::compile(&input, output, sorted),
        Commands::Check { input } => commands::check(&input),
    }
}

/// Defaults < environment < flags. Logs go to stderr; stdout is reserved for rules.
fn logger_config(cli: &Cli) -> LoggerResult<LoggerConfig> {
    let mut cfg = LoggerConfig::from_env()?;
    cfg.stderr = true;
    if let Some(format) = cli.log_format {
        cfg.format = format;
    }
    if let Some(level) = &cli.log_level {
        cfg.level = level.clone();
    }
    Ok(cfg)
}
