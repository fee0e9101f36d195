use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use salescope::{build_report, derive_records, AggregateTable, DatasetLoader, SalesReport};

/// Summary metrics and breakdowns from e-commerce order exports
#[derive(Parser)]
#[command(name = "salescope")]
#[command(about = "Aggregate e-commerce order exports into dashboard-ready metrics", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate an order export and render the sales report
    Report {
        /// Path to the CSV order export
        dataset: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Text dashboard
    Table,
    /// Series objects for a downstream chart renderer
    Json,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("Salescope started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Commands::Report { dataset, format } => run_report(dataset, format).await,
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run_report(dataset: PathBuf, format: OutputFormat) -> anyhow::Result<()> {
    let records = DatasetLoader::load(&dataset)
        .with_context(|| format!("load stage failed for {}", dataset.display()))?;
    let enriched = derive_records(&records).context("derive stage failed")?;
    let report = build_report(Arc::from(enriched))
        .await
        .context("aggregate stage failed")?;

    match format {
        OutputFormat::Table => render_dashboard(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report_series(&report))?),
    }

    Ok(())
}

/// Series form of the report for chart consumers, one entry per
/// visualization plus the headline metrics.
fn report_series(report: &SalesReport) -> serde_json::Value {
    serde_json::json!({
        "summary": report.summary,
        "sales_by_country": report.country_series(),
        "sales_by_category": report.category_series(),
        "sales_by_month": report.period_series(),
        "sales_by_payment_method": report.payment_method_series(),
    })
}

fn render_dashboard(report: &SalesReport) {
    println!("E-commerce Sales Report");
    println!("{:=<46}", "");
    println!("Total Sales:     ${}", format_thousands(report.summary.total_sales));
    println!(
        "Total Orders:    {}",
        format_thousands(report.summary.total_orders as u64)
    );
    println!(
        "Total Customers: {}",
        format_thousands(report.summary.total_customers as u64)
    );
    println!(
        "Total Products:  {}",
        format_thousands(report.summary.total_products as u64)
    );

    print_breakdown("Sales by Country", &report.by_country);
    print_breakdown("Sales by Category", &report.by_category);
    print_breakdown("Sales by Month", &report.by_period);
    print_breakdown("Sales by Payment Method", &report.by_payment_method);
}

fn print_breakdown(title: &str, table: &AggregateTable) {
    println!("\n{title}");
    println!("{:-<46}", "");
    for entry in table.entries() {
        println!("{:<30} {:>15.2}", entry.key, entry.total);
    }
}

/// Group digits in threes, renderer-side formatting only.
fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
