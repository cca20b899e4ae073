use anyhow::Result;
use clap::Parser;
use tracing::error;

use rosterstat::{analyze_roster, report, utils, Args};

fn run(args: &Args) -> Result<()> {
    let result = analyze_roster(args)?;
    report::write_csv(&result.summary_rows, &args.output)?;
    report::print_summary(&result.stats, &args.output);
    Ok(())
}

fn main() {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    if let Err(e) = run(&args) {
        error!(action = "abort", component = "main", error = %e, "Roster analysis failed");
        println!("Error: {e}");
        std::process::exit(1);
    }
}
