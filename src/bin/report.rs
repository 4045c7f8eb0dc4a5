//! Financial report over exported records
//!
//! Loads the cost and revenue CSV exports, composes a snapshot at the
//! requested date, and prints it as text or JSON.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;

use financial_engine::records::loader;
use financial_engine::{AnalyticsEngine, FinancialRecords, FinancialSnapshot, YearlyBaseline};

#[derive(Parser, Debug)]
#[command(name = "report", about = "Compose a financial snapshot from exported records")]
struct Args {
    /// Directory containing fixed_costs.csv, variable_costs.csv, revenues.csv
    #[arg(long, default_value = loader::DEFAULT_RECORDS_PATH)]
    records_dir: PathBuf,

    /// Evaluation date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Prior-year revenue total, enables growth rates with --prior-costs
    #[arg(long)]
    prior_revenues: Option<f64>,

    /// Prior-year total costs, enables growth rates with --prior-revenues
    #[arg(long)]
    prior_costs: Option<f64>,

    /// Months of history in the text report
    #[arg(long, default_value_t = 6)]
    trend_months: u32,

    /// Emit the snapshot as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let as_of = args.date.unwrap_or_else(|| Local::now().date_naive());

    let records = FinancialRecords::from_csv_path(&args.records_dir)
        .map_err(|e| anyhow::anyhow!("failed to load records from {}: {e}", args.records_dir.display()))?;

    let baseline = match (args.prior_revenues, args.prior_costs) {
        (Some(revenues), Some(total_costs)) => Some(YearlyBaseline {
            revenues,
            total_costs,
        }),
        (None, None) => None,
        _ => {
            log::warn!("growth rates need both --prior-revenues and --prior-costs; ignoring");
            None
        }
    };

    let engine = AnalyticsEngine::new();
    let snapshot = match baseline {
        Some(ref b) => engine.snapshot_with_baseline(&records, as_of, b),
        None => engine.snapshot(&records, as_of),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    print_snapshot(&snapshot);

    let trend = engine.trend(&records, as_of, args.trend_months);
    println!("\n{:>8} {:>12} {:>12} {:>12} {:>12}", "Month", "Fixed", "Variable", "Revenue", "Net");
    println!("{}", "-".repeat(62));
    for point in &trend {
        println!(
            "{:>4}-{:02} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
            point.year,
            point.month,
            point.aggregates.fixed,
            point.aggregates.variable,
            point.aggregates.revenue,
            point.net
        );
    }

    Ok(())
}

fn print_snapshot(snapshot: &FinancialSnapshot) {
    println!("Snapshot at {}\n", snapshot.as_of);

    println!("Annual:");
    println!("  Fixed costs:      {:>12.2}", snapshot.annual_fixed_costs);
    println!(
        "  Variable costs:   {:>12.2}{}",
        snapshot.annual_variable_costs.value,
        if snapshot.annual_variable_costs.is_projected { "  (projected)" } else { "" }
    );
    println!(
        "  Revenues:         {:>12.2}{}",
        snapshot.annual_revenues.value,
        if snapshot.annual_revenues.is_projected { "  (projected)" } else { "" }
    );
    println!("  Total costs:      {:>12.2}", snapshot.annual_total_costs);
    println!("  Net profit:       {:>12.2}", snapshot.annual_net_profit);
    println!("  Profit margin:    {:>11.1}%", snapshot.annual_profit_margin);
    println!("  Cost/revenue:     {:>11.1}%", snapshot.cost_revenue_ratio);
    println!("  Efficiency:       {:>11.1}%", snapshot.efficiency_ratio);

    println!("\nCurrent month:");
    println!("  Total costs:      {:>12.2}", snapshot.monthly.total_costs);
    println!("  Revenue:          {:>12.2}", snapshot.monthly.revenue);
    println!("  Break-even:       {:>12.2}", snapshot.monthly_break_even);
    println!("  Days to break-even: {:>8}", snapshot.days_to_break_even);

    if let (Some(revenue), Some(cost)) = (snapshot.revenue_growth_rate, snapshot.cost_growth_rate) {
        println!("\nGrowth vs prior year:");
        println!("  Revenue: {:+.1}%", revenue);
        println!("  Costs:   {:+.1}%", cost);
    }
}
