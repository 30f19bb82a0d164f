//! CLI commands for reports
//!
//! Each report builds a fresh session from `--record` arguments and prints
//! the derived view. Nothing is kept after the command exits.

use crate::config::{settings::Settings, SpendPaths};
use crate::error::{SpendError, SpendResult};
use crate::export::SnapshotOptions;
use crate::reports::{
    cut_back_areas_by, format_cut_back, ForecastReport, HistoryReport, RankingBasis,
};
use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use super::export::{write_export, ExportFormat};
use super::records::RecordArgs;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show the monthly history table
    History {
        #[command(flatten)]
        records: RecordArgs,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Forecast next month's expenses and list areas to cut back
    #[command(alias = "predict")]
    Forecast {
        #[command(flatten)]
        records: RecordArgs,

        /// Number of categories to suggest cutting back
        #[arg(long)]
        top: Option<usize>,

        /// Rank the chronologically latest month instead of the last one given
        #[arg(long)]
        chronological: bool,
    },

    /// Export history, forecast and cut-back list
    Export {
        #[command(flatten)]
        records: RecordArgs,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Handle report commands
pub fn handle_report_command(
    paths: &SpendPaths,
    settings: &Settings,
    cmd: ReportCommands,
) -> SpendResult<()> {
    match cmd {
        ReportCommands::History { records, output } => {
            handle_history_report(paths, settings, records, output)
        }
        ReportCommands::Forecast {
            records,
            top,
            chronological,
        } => handle_forecast_report(paths, settings, records, top, chronological),
        ReportCommands::Export {
            records,
            format,
            output,
            pretty,
        } => {
            let store = records.build_store(paths, settings)?;
            write_export(
                &store,
                format,
                output.as_deref(),
                pretty,
                SnapshotOptions::from_settings(settings),
            )
        }
    }
}

/// Handle history report
fn handle_history_report(
    paths: &SpendPaths,
    settings: &Settings,
    records: RecordArgs,
    output: Option<PathBuf>,
) -> SpendResult<()> {
    let store = records.build_store(paths, settings)?;
    let report = HistoryReport::generate(&store);

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            SpendError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("History report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

/// Handle forecast report
fn handle_forecast_report(
    paths: &SpendPaths,
    settings: &Settings,
    records: RecordArgs,
    top: Option<usize>,
    chronological: bool,
) -> SpendResult<()> {
    let store = records.build_store(paths, settings)?;

    match ForecastReport::generate_with_minimum(&store, settings.forecast_min_months()) {
        Ok(forecast) => println!("{}", forecast.format_terminal()),
        Err(SpendError::InsufficientData { needed, available }) => {
            println!(
                "Not enough data to forecast: need at least {} months, have {}.",
                needed, available
            );
            println!();
        }
        Err(e) => return Err(e),
    }

    let basis = if chronological {
        RankingBasis::Chronological
    } else {
        RankingBasis::InsertionOrder
    };
    let areas = cut_back_areas_by(&store, top.unwrap_or(settings.cut_back_count), basis);
    println!("{}", format_cut_back(&areas, &settings.reduction_range()));

    Ok(())
}
