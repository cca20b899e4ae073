use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::stats::RosterStats;
use crate::utils::format_number;

/// The report always names five domain rank positions; slots without
/// a real domain carry a placeholder so the shape stays stable.
pub const TOP_DOMAIN_SLOTS: usize = 5;

/// One line of the summary report, in CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SummaryRow {
    pub metric: String,
    pub value: String,
    pub details: String,
}

/// Assemble the ordered report: one unique-company row, exactly five
/// domain-rank rows, then one row per company (or its placeholder).
pub fn build_summary_rows(stats: &RosterStats) -> Vec<SummaryRow> {
    let company_rows = stats.employees_per_company.len().max(1);
    let mut rows = Vec::with_capacity(1 + TOP_DOMAIN_SLOTS + company_rows);

    rows.push(SummaryRow {
        metric: "Unique Companies".to_string(),
        value: stats.unique_companies.to_string(),
        details: String::new(),
    });

    let ranked = &stats.domain_counts[..stats.domain_counts.len().min(TOP_DOMAIN_SLOTS)];
    for slot in 0..TOP_DOMAIN_SLOTS {
        let metric = format!("Top Email Domain #{}", slot + 1);
        let row = match ranked.get(slot) {
            Some(entry) => SummaryRow {
                metric,
                value: entry.domain.clone(),
                details: format!("{} employees", entry.count),
            },
            None if ranked.is_empty() => SummaryRow {
                metric,
                value: "No email domains found".to_string(),
                details: String::new(),
            },
            None => SummaryRow {
                metric,
                value: format!("only {} email domains found", ranked.len()),
                details: String::new(),
            },
        };
        rows.push(row);
    }

    if stats.employees_per_company.is_empty() {
        rows.push(SummaryRow {
            metric: "Employees per Company".to_string(),
            value: "No companies found".to_string(),
            details: "0 employees".to_string(),
        });
    } else {
        for (company, count) in &stats.employees_per_company {
            rows.push(SummaryRow {
                metric: "Employees per Company".to_string(),
                value: company.clone(),
                details: format!("{} employees", count),
            });
        }
    }

    rows
}

/// Write the report as UTF-8 CSV with a `Metric,Value,Details` header
/// and no index column.
pub fn write_csv(rows: &[SummaryRow], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create report file {:?}", path))?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(
        action = "write",
        component = "report",
        path = ?path,
        row_count = rows.len(),
        "Summary report written"
    );
    Ok(())
}

/// Echo the report to stdout, section by section, mirroring the CSV
/// content including its placeholder text.
pub fn print_summary(stats: &RosterStats, output: &Path) {
    println!("Analysis Complete!");
    println!(
        "Number of unique companies: {}",
        format_number(stats.unique_companies as u32)
    );

    let shown = stats.domain_counts.len().min(TOP_DOMAIN_SLOTS);
    if shown > 0 {
        println!("\nTop {} email domains:", shown);
        for entry in stats.domain_counts.iter().take(TOP_DOMAIN_SLOTS) {
            println!("  {}: {} employees", entry.domain, format_number(entry.count));
        }
        if stats.domain_counts.len() < TOP_DOMAIN_SLOTS {
            println!(
                "  (Note: Only {} unique domains found in dataset)",
                stats.domain_counts.len()
            );
        }
    } else {
        println!("\nNo email domains found in dataset");
    }

    println!("\nEmployees per company:");
    if stats.employees_per_company.is_empty() {
        println!("  No companies found with employees");
    } else {
        for (company, count) in &stats.employees_per_company {
            println!("  {}: {} employees", company, format_number(*count));
        }
    }

    println!("\nResults saved to {}", output.display());
}
