use std::collections::{BTreeMap, HashMap};

use regex::Regex;
use tracing::info;

use crate::domain;
use crate::sheet::{RecordTable, COMPANY_COLUMN, EMAIL_COLUMN};

/// One email domain with its employee count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCount {
    pub domain: String,
    pub count: u32,
}

/// Aggregates derived from a roster table. Nothing here is recomputed
/// after construction.
#[derive(Debug)]
pub struct RosterStats {
    /// Distinct non-blank company names.
    pub unique_companies: usize,
    /// Descending by count; equal counts keep first-encounter order.
    pub domain_counts: Vec<DomainCount>,
    /// Headcount per company, alphabetical by company name.
    pub employees_per_company: BTreeMap<String, u32>,
}

/// Compute all three roster aggregates. Blank companies and emails
/// without a domain are skipped rather than counted; an entirely
/// blank column degrades to empty aggregates, never an error.
pub fn aggregate(table: &RecordTable, pattern: &Regex) -> RosterStats {
    // One pass covers both company aggregates: the distinct count and
    // the per-company totals share distinct-non-blank semantics.
    let mut employees_per_company: BTreeMap<String, u32> = BTreeMap::new();
    if let Some(companies) = table.column(COMPANY_COLUMN) {
        for company in companies.flatten() {
            *employees_per_company.entry(company.to_string()).or_insert(0) += 1;
        }
    }
    let unique_companies = employees_per_company.len();

    // Domain counts, plus first-encounter rank for the tie-break.
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    let mut counts: HashMap<String, u32> = HashMap::new();
    if let Some(emails) = table.column(EMAIL_COLUMN) {
        for email in emails.flatten() {
            if let Some(extracted) = domain::extract_domain(email, pattern) {
                let rank = first_seen.len();
                first_seen.entry(extracted.clone()).or_insert(rank);
                *counts.entry(extracted).or_insert(0) += 1;
            }
        }
    }

    let mut domain_counts: Vec<DomainCount> = counts
        .into_iter()
        .map(|(domain, count)| DomainCount { domain, count })
        .collect();
    domain_counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| first_seen[&a.domain].cmp(&first_seen[&b.domain]))
    });

    info!(
        action = "complete",
        component = "aggregation",
        unique_companies,
        distinct_domains = domain_counts.len(),
        companies_with_headcount = employees_per_company.len(),
        "Roster aggregation completed"
    );

    RosterStats {
        unique_companies,
        domain_counts,
        employees_per_company,
    }
}
