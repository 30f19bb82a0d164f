use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use spendtracker::cli::{handle_report_command, ReportCommands};
use spendtracker::config::logging::{init_logger, LogTarget};
use spendtracker::config::{settings::Settings, SpendPaths};

#[derive(Parser)]
#[command(
    name = "spendtracker",
    version,
    about = "Terminal-based monthly spending tracker",
    long_about = "SpendTracker records monthly income and categorized expenses for a \
                  session, shows the history and savings rate of every month, and \
                  forecasts next month's expenses from a linear trend."
)]
struct Cli {
    /// Diagnostic log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, env = "SPENDTRACKER_LOG")]
    log_level: Option<LevelFilter>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    #[command(alias = "ui")]
    Tui,

    /// One-shot reports over records given as arguments
    #[command(subcommand)]
    Report(ReportCommands),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            paths.ensure_directories()?;
            let log_file = paths.log_file();
            init_logger(
                cli.log_level.unwrap_or(LevelFilter::INFO),
                LogTarget::File(&log_file),
            )?;
            tracing::info!(base_dir = %paths.base_dir().display(), "starting dashboard");
            spendtracker::tui::run_tui(&settings, &paths)?;
        }
        Commands::Report(cmd) => {
            init_logger(cli.log_level.unwrap_or(LevelFilter::WARN), LogTarget::Stderr)?;
            handle_report_command(&paths, &settings, cmd)?;
        }
        Commands::Init => {
            init_logger(cli.log_level.unwrap_or(LevelFilter::WARN), LogTarget::Stderr)?;
            println!("Initializing SpendTracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
            println!();
            println!("Run 'spendtracker' to launch the dashboard.");
        }
        Commands::Config => {
            println!("SpendTracker Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Cut-back categories: {}", settings.cut_back_count);
            println!("  Suggested reduction: {}", settings.reduction_range());
            println!("  Forecast minimum:    {} months", settings.forecast_min_months());
            println!("  Audit enabled:       {}", settings.audit_enabled);
        }
    }

    Ok(())
}
