//! Daily comparison report across two alerting systems.

use chrono::Local;
use clap::Parser;
use dotenvy::dotenv;
use market_sentinel::config::ReportConfig;
use market_sentinel::logging;
use market_sentinel::report::ReportMerger;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "compare")]
#[command(about = "Merge per-day alert feeds into a markdown comparison report")]
struct Cli {
    /// Date key naming the data directory (defaults to today, YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    date: Option<String>,

    /// Root directory holding one folder per date
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Directory the reports are written to
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let date = cli
        .date
        .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());

    let config = ReportConfig::default().with_dirs(cli.data_dir, cli.out_dir);
    let paths = ReportMerger::new(config).run(&date)?;

    println!(
        "Wrote {} and {}",
        paths.dated.display(),
        paths.latest.display()
    );
    Ok(())
}
