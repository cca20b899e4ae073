use std::time::Instant;

use anyhow::Result;
use tracing::info;

use crate::report::{self, SummaryRow};
use crate::stats::RosterStats;
use crate::{domain, sheet, stats, Args};

/// Everything one analysis run produces: the raw aggregates for the
/// stdout rendering and the ordered rows for the CSV report.
#[derive(Debug)]
pub struct AnalysisResult {
    pub stats: RosterStats,
    pub summary_rows: Vec<SummaryRow>,
}

pub fn analyze_roster(args: &Args) -> Result<AnalysisResult> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "analysis", "Starting roster analysis");

    let table = sheet::load_record_table(&args.input, args.sheet.as_deref())?;
    sheet::validate(&table)?;

    let pattern = domain::domain_pattern()?;
    let stats = stats::aggregate(&table, &pattern);
    let summary_rows = report::build_summary_rows(&stats);

    let total_time = total_start_time.elapsed();
    info!(
        action = "complete",
        component = "analysis",
        duration_ms = total_time.as_millis(),
        "Analysis completed successfully"
    );

    Ok(AnalysisResult {
        stats,
        summary_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    use rust_xlsxwriter::Workbook;
    use tempfile::tempdir;

    use crate::error::AnalysisError;
    use crate::report::TOP_DOMAIN_SLOTS;

    fn write_roster(path: &Path, rows: &[(Option<&str>, Option<&str>)]) {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "Company").unwrap();
        worksheet.write_string(0, 1, "Email").unwrap();
        for (idx, (company, email)) in rows.iter().enumerate() {
            if let Some(company) = company {
                worksheet.write_string(idx as u32 + 1, 0, *company).unwrap();
            }
            if let Some(email) = email {
                worksheet.write_string(idx as u32 + 1, 1, *email).unwrap();
            }
        }
        workbook.save(path).unwrap();
    }

    fn args_for(input: PathBuf, output: PathBuf) -> Args {
        Args {
            input,
            output,
            sheet: None,
            verbose: false,
        }
    }

    #[test]
    fn test_end_to_end_three_row_roster() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Employees_Cleaned.xlsx");
        let output = dir.path().join("Summary_Report.csv");
        write_roster(
            &input,
            &[
                (Some("Acme"), Some("a@x.com")),
                (Some("Acme"), Some("b@x.com")),
                (Some("Globex"), Some("c@y.com")),
            ],
        );

        let args = args_for(input, output.clone());
        let result = analyze_roster(&args).unwrap();

        assert_eq!(result.stats.unique_companies, 2);

        let rows = &result.summary_rows;
        assert_eq!(rows[0].metric, "Unique Companies");
        assert_eq!(rows[0].value, "2");

        assert_eq!(rows[1].value, "x.com");
        assert_eq!(rows[1].details, "2 employees");
        assert_eq!(rows[2].value, "y.com");
        assert_eq!(rows[2].details, "1 employees");
        for row in &rows[3..1 + TOP_DOMAIN_SLOTS] {
            assert_eq!(row.value, "only 2 email domains found");
        }

        let companies: Vec<(&str, &str)> = rows[1 + TOP_DOMAIN_SLOTS..]
            .iter()
            .map(|row| (row.value.as_str(), row.details.as_str()))
            .collect();
        assert_eq!(
            companies,
            vec![("Acme", "2 employees"), ("Globex", "1 employees")]
        );

        // The written report reloads to the same ordered triples.
        report::write_csv(rows, &args.output).unwrap();
        let mut reader = csv::Reader::from_path(&args.output).unwrap();
        let reloaded: Vec<SummaryRow> = reader.deserialize().map(|row| row.unwrap()).collect();
        assert_eq!(&reloaded, rows);
    }

    #[test]
    fn test_blank_columns_degrade_to_placeholders() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("blank.xlsx");
        write_roster(&input, &[(None, Some("no-at-sign")), (None, None)]);

        let args = args_for(input, dir.path().join("out.csv"));
        let result = analyze_roster(&args).unwrap();

        assert_eq!(result.stats.unique_companies, 0);
        let rows = &result.summary_rows;
        assert_eq!(rows[0].value, "0");
        for row in &rows[1..1 + TOP_DOMAIN_SLOTS] {
            assert_eq!(row.value, "No email domains found");
        }
        let last = rows.last().unwrap();
        assert_eq!(last.value, "No companies found");
        assert_eq!(last.details, "0 employees");
    }

    #[test]
    fn test_schema_failure_surfaces_from_analysis() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("wrong.xlsx");

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "Name").unwrap();
        worksheet.write_string(1, 0, "Jo").unwrap();
        workbook.save(&input).unwrap();

        let args = args_for(input, dir.path().join("out.csv"));
        let err = analyze_roster(&args).unwrap_err();
        match err.downcast_ref::<AnalysisError>() {
            Some(AnalysisError::Schema(missing)) => {
                assert_eq!(missing, &["Company".to_string(), "Email".to_string()]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }
}
