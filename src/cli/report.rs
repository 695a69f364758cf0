//! CLI commands for reports
//!
//! Monthly report on screen, optionally exported to CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::format_monthly_report;
use crate::error::{PocketError, PocketResult};
use crate::models::ReportPeriod;
use crate::reports::MonthlyReport;
use crate::services::TransactionService;
use crate::storage::Storage;

/// Arguments for the `report` command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Month for report (MM)
    #[arg(long)]
    pub month: String,

    /// Year for report (YYYY)
    #[arg(long)]
    pub year: String,

    /// Also export the category breakdown to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the report command
pub fn handle_report_command(
    storage: &mut Storage,
    settings: &Settings,
    args: ReportArgs,
) -> PocketResult<()> {
    let period = ReportPeriod::parse(&args.month, &args.year)
        .map_err(|e| PocketError::Validation(e.to_string()))?;

    let service = TransactionService::new(storage);
    let report = MonthlyReport::generate(&service, period)?;

    print!("{}", format_monthly_report(&report, settings));

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            PocketError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        println!("\nReport exported to: {}", path.display());
    }

    Ok(())
}
