use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rosterstat",
    about = "Analyze an employee roster spreadsheet for company and email domain statistics",
    version,
    long_about = None
)]
pub struct Args {
    /// Roster spreadsheet to analyze
    #[arg(short, long, default_value = "Employees_Cleaned.xlsx")]
    pub input: PathBuf,

    /// Destination for the CSV summary report
    #[arg(short, long, default_value = "Summary_Report.csv")]
    pub output: PathBuf,

    /// Worksheet to read (defaults to the first sheet)
    #[arg(short, long)]
    pub sheet: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
