use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculator::{RoiBreakdown, RoiOutput};
use super::format::{format_display_date, format_fixed, format_money, format_percent};

pub const CSV_FILE_NAME: &str = "roi_calculator_export.csv";
pub const PNG_FILE_NAME: &str = "roi_calculator_report.png";
pub const CSV_HEADER: [&str; 2] = ["field", "value"];

pub const REPORT_TITLE: &str = "ROI Calculator - Report";
pub const REPORT_FOOTER: &str =
    "Contracted ROI is based on contracted value (not cash value as of today).";

const AMOUNT_DP: u32 = 2;
const ROI_DP: u32 = 4;

/// A single `(field, value)` line of an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub field: String,
    pub value: String,
}

impl ExportRow {
    fn new(field: &str, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

fn amount(value: Decimal) -> String {
    format_fixed(value, AMOUNT_DP)
}

fn roi(value: Option<Decimal>) -> String {
    value.map(|v| format_fixed(v, ROI_DP)).unwrap_or_default()
}

/// Rows of the CSV export. Amounts carry two decimals, ROI percentages four;
/// an undefined ROI is exported as an empty value.
pub fn csv_rows(output: &RoiOutput) -> Vec<ExportRow> {
    vec![
        ExportRow::new("Start date", output.start_date.format("%Y-%m-%d").to_string()),
        ExportRow::new("Days", output.days_elapsed.to_string()),
        ExportRow::new("Months (approx.)", amount(output.months_elapsed)),
        ExportRow::new("Total Spent", amount(output.total_spent)),
        ExportRow::new("Total Earned", amount(output.production.value_basis)),
        ExportRow::new("Realised value", amount(output.realized.value_basis)),
        ExportRow::new("Realised net", amount(output.realized.net)),
        ExportRow::new("Realised ROI", roi(output.realized.roi_percent)),
        ExportRow::new("Production net", amount(output.production.net)),
        ExportRow::new("Production ROI", roi(output.production.roi_percent)),
        ExportRow::new("Contracted value", amount(output.contracted.value_basis)),
        ExportRow::new("Contracted net", amount(output.contracted.net)),
        ExportRow::new("Contracted ROI", roi(output.contracted.roi_percent)),
    ]
}

/// Label/value lines drawn in the image report.
pub fn report_rows(output: &RoiOutput) -> Vec<ExportRow> {
    let pair = |b: &RoiBreakdown| {
        format!("{} / {}", format_percent(b.roi_percent), format_money(b.net))
    };
    vec![
        ExportRow::new("Start date", format_display_date(output.start_date)),
        ExportRow::new(
            "Days / Months",
            format!(
                "{} / {}",
                output.days_elapsed,
                format_fixed(output.months_elapsed, 1)
            ),
        ),
        ExportRow::new("Realised ROI / Net", pair(&output.realized)),
        ExportRow::new("Production ROI / Net", pair(&output.production)),
        ExportRow::new("Contracted ROI / Net", pair(&output.contracted)),
    ]
}
