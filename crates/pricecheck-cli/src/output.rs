use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use pricecheck_core::{
    Comparison, ComparisonReport, FailureReport, PriceCheck, PriceSummary, ValidationOutcome,
};

/// Flat CSV row shared by vendor results and failures.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    outcome: &'a str,
    vendor: &'a str,
    url: &'a str,
    product_name: Option<&'a str>,
    price: Option<f64>,
    currency: Option<&'a str>,
    availability: Option<&'a str>,
    detail: &'a str,
    error_kind: Option<&'a str>,
    recovery_suggestion: Option<&'a str>,
}

impl<'a> CsvRow<'a> {
    fn vendor(summary: &'a PriceSummary, validation: &'a ValidationOutcome) -> Self {
        CsvRow {
            outcome: if validation.accepted {
                "accepted"
            } else {
                "rejected"
            },
            vendor: &summary.vendor,
            url: &summary.source_url,
            product_name: summary.product_name.as_deref(),
            price: summary.price,
            currency: Some(&summary.currency),
            availability: summary.availability.as_deref(),
            detail: validation.message,
            error_kind: None,
            recovery_suggestion: None,
        }
    }
}

impl<'a> From<&'a FailureReport> for CsvRow<'a> {
    fn from(report: &'a FailureReport) -> Self {
        CsvRow {
            outcome: "failed",
            vendor: &report.vendor,
            url: &report.url,
            product_name: None,
            price: None,
            currency: None,
            availability: None,
            detail: &report.message,
            error_kind: Some(report.error_kind.as_str()),
            recovery_suggestion: Some(report.recovery_suggestion),
        }
    }
}

/// Write one row per vendor result, then one per failure.
pub fn write_csv<W: Write>(
    out: W,
    checks: &[PriceCheck],
    failures: &[FailureReport],
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    write_rows(&mut writer, checks, failures)?;
    writer.flush()?;
    Ok(())
}

/// Like [`write_csv`], followed by one `summary` row for the comparison.
pub fn write_report_csv<W: Write>(out: W, report: &ComparisonReport) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    write_rows(&mut writer, &report.vendors, &report.failures)?;

    let detail = summary_detail(&report.comparison);
    let summary = report.comparison.summary();
    writer.serialize(CsvRow {
        outcome: "summary",
        vendor: summary.map_or("", |s| s.cheapest_vendor.as_str()),
        url: "",
        product_name: None,
        price: summary.map(|s| s.min_price),
        currency: None,
        availability: None,
        detail: &detail,
        error_kind: None,
        recovery_suggestion: None,
    })?;

    writer.flush()?;
    Ok(())
}

fn write_rows<W: Write>(
    writer: &mut csv::Writer<W>,
    checks: &[PriceCheck],
    failures: &[FailureReport],
) -> Result<()> {
    for check in checks {
        let summary = check.record.to_summary();
        writer.serialize(CsvRow::vendor(&summary, &check.validation))?;
    }
    for failure in failures {
        writer.serialize(CsvRow::from(failure))?;
    }
    Ok(())
}

/// Comparison statistics packed into the `detail` column.
fn summary_detail(comparison: &Comparison) -> String {
    let Some(s) = comparison.summary() else {
        return comparison.status().to_string();
    };
    let outliers: Vec<String> = s.outliers.iter().map(f64::to_string).collect();
    format!(
        "count={} min={} max={} average={} spread={} spread_percent={} most_expensive={} outliers=[{}]",
        s.price_count,
        s.min_price,
        s.max_price,
        s.average_price,
        s.price_spread,
        s.price_spread_percent,
        s.most_expensive_vendor,
        outliers.join(" ")
    )
}
