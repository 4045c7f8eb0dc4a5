//! Financial Engine CLI
//!
//! Demo run over an in-memory sample ledger: composes a snapshot, prints
//! the indicator sections, and exports the monthly trend to CSV.

use chrono::NaiveDate;
use financial_engine::{
    AnalyticsEngine, FinancialRecords, FixedCost, Frequency, Revenue, VariableCost, YearlyBaseline,
};
use std::fs::File;
use std::io::Write;

fn main() {
    env_logger::init();

    println!("Financial Engine v0.1.0");
    println!("=======================\n");

    // Sample ledger spanning January through April 2025
    let records = FinancialRecords::new(
        vec![
            FixedCost::new(1, "Office rent", 1200.0, Frequency::Monthly, true, "facilities"),
            FixedCost::new(2, "Cloud hosting", 85.5, Frequency::Monthly, true, "it"),
            FixedCost::new(3, "Equipment insurance", 940.0, Frequency::Yearly, true, "insurance"),
            FixedCost::new(4, "Cleaning service", 45.0, Frequency::Weekly, true, "facilities"),
            FixedCost::new(5, "Legacy CRM licence", 59.0, Frequency::Monthly, false, "it"),
        ],
        vec![
            VariableCost::new(1, "Trade fair booth", 850.0, date(2025, 1, 18), "marketing"),
            VariableCost::new(2, "Raw materials", 1420.75, date(2025, 2, 3), "materials"),
            VariableCost::new(3, "Raw materials", 990.4, date(2025, 3, 7), "materials"),
            VariableCost::new(4, "Machine maintenance", 375.0, date(2025, 4, 2), "maintenance"),
        ],
        vec![
            Revenue::new(1, "Invoice 2025-001", 5200.0, date(2025, 1, 28), "Rossi Costruzioni"),
            Revenue::new(2, "Invoice 2025-002", 3150.0, date(2025, 2, 14), "Bianchi Impianti"),
            Revenue::new(3, "Invoice 2025-003", 4600.0, date(2025, 3, 12), "Rossi Costruzioni"),
            Revenue::new(4, "Invoice 2025-005", 5340.0, date(2025, 4, 10), "Bianchi Impianti"),
        ],
    );

    // Evaluation date inside the sample window so the demo is stable
    let as_of = date(2025, 4, 18);
    let baseline = YearlyBaseline {
        revenues: 31_400.0,
        total_costs: 27_150.0,
    };

    let engine = AnalyticsEngine::new();
    let snapshot = engine.snapshot_with_baseline(&records, as_of, &baseline);

    println!("Snapshot at {}\n", snapshot.as_of);

    println!("Annual indicators:");
    println!("  Fixed costs:      {:>12.2}", snapshot.annual_fixed_costs);
    println!(
        "  Variable costs:   {:>12.2}  {}",
        snapshot.annual_variable_costs.value,
        projection_tag(snapshot.annual_variable_costs.is_projected)
    );
    println!(
        "  Revenues:         {:>12.2}  {}",
        snapshot.annual_revenues.value,
        projection_tag(snapshot.annual_revenues.is_projected)
    );
    println!("  Total costs:      {:>12.2}", snapshot.annual_total_costs);
    println!("  Net profit:       {:>12.2}", snapshot.annual_net_profit);
    println!("  Profit margin:    {:>11.1}%", snapshot.annual_profit_margin);
    println!("  Cost/revenue:     {:>11.1}%", snapshot.cost_revenue_ratio);
    println!("  Efficiency:       {:>11.1}%", snapshot.efficiency_ratio);
    println!("  Break-even point: {:>12.2}", snapshot.break_even_point);

    println!("\nCurrent month:");
    println!("  Fixed costs:      {:>12.2}", snapshot.monthly.fixed);
    println!("  Variable costs:   {:>12.2}", snapshot.monthly.variable);
    println!("  Total costs:      {:>12.2}", snapshot.monthly.total_costs);
    println!("  Revenue:          {:>12.2}", snapshot.monthly.revenue);
    println!("  Break-even:       {:>12.2}", snapshot.monthly_break_even);
    println!("  Days to break-even: {:>8}", snapshot.days_to_break_even);

    println!("\nGrowth vs prior year:");
    println!("  Revenue: {}", growth_tag(snapshot.revenue_growth_rate));
    println!("  Costs:   {}", growth_tag(snapshot.cost_growth_rate));

    // Monthly trend for the dashboard chart
    let trend = engine.trend(&records, as_of, 6);

    println!("\nLast {} months:", trend.len());
    println!(
        "{:>8} {:>12} {:>12} {:>12} {:>12}",
        "Month", "Fixed", "Variable", "Revenue", "Net"
    );
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

    // Write the trend to CSV for spreadsheet comparison
    let csv_path = "snapshot_output.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");

    writeln!(file, "Year,Month,Fixed,Variable,TotalCosts,Revenue,Net").unwrap();
    for point in &trend {
        writeln!(
            file,
            "{},{},{:.2},{:.2},{:.2},{:.2},{:.2}",
            point.year,
            point.month,
            point.aggregates.fixed,
            point.aggregates.variable,
            point.aggregates.total_costs,
            point.aggregates.revenue,
            point.net
        )
        .unwrap();
    }

    println!("\nTrend written to: {}", csv_path);
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid demo date")
}

fn projection_tag(is_projected: bool) -> &'static str {
    if is_projected {
        "(projected)"
    } else {
        "(actual)"
    }
}

fn growth_tag(rate: Option<f64>) -> String {
    match rate {
        Some(pct) => format!("{:+.1}%", pct),
        None => "n/a (no baseline)".to_string(),
    }
}
