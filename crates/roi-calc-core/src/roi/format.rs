//! Human-readable rendering of ROI results: currency and percentage strings
//! and the dashboard summary shown to users.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculator::{RoiBreakdown, RoiOutput};

/// Shown in place of any undefined ratio.
pub const NOT_APPLICABLE: &str = "N/A";

/// Contracted ROI is not a cash figure; every report carries this note.
pub const CONTRACTED_DISCLAIMER: &str = "Contracted ROI is based on contracted value \
     (Locked Auto Renew + Remaining Earning) and is not cash value as of today.";

/// Fixed-point rendering with `dp` decimals, half-to-even rounding.
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp(dp);
    format!("{:.*}", dp as usize, rounded)
}

/// `$1,234.56`. Negative amounts keep the sign after the symbol: `$-1,234.56`,
/// including sub-cent losses that round to `$-0.00`.
pub fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = value.is_sign_negative() && !value.is_zero();
    let plain = format_fixed(rounded.abs(), 2);
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    format!(
        "${}{}.{}",
        if negative { "-" } else { "" },
        group_thousands(int_part),
        frac_part
    )
}

/// Money or `N/A`.
pub fn format_optional_money(value: Option<Decimal>) -> String {
    value.map_or_else(|| NOT_APPLICABLE.to_string(), format_money)
}

/// `12.34%` or `N/A`.
pub fn format_percent(value: Option<Decimal>) -> String {
    format_percent_dp(value, 2)
}

/// Percentage with a caller-chosen number of decimals, or `N/A`.
pub fn format_percent_dp(value: Option<Decimal>, dp: u32) -> String {
    match value {
        Some(v) => format!("{}%", format_fixed(v, dp)),
        None => NOT_APPLICABLE.to_string(),
    }
}

/// `dd.mm.yyyy`, the display form of dates.
pub fn format_display_date(date: chrono::NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// One value basis as displayed: the headline ROI plus its details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub metric: String,
    /// ROI to one decimal, e.g. `-43.9%`.
    pub headline_roi: String,
    pub value_basis: String,
    pub net: String,
    pub roi: String,
    pub net_per_day: String,
    pub net_per_month: String,
}

/// Everything the results view shows, already formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub start_date: String,
    pub days_since_start: String,
    pub months_approx: String,
    pub cards: Vec<MetricCard>,
    pub disclaimer: String,
}

fn card(metric: &str, b: &RoiBreakdown) -> MetricCard {
    MetricCard {
        metric: metric.to_string(),
        headline_roi: format_percent_dp(b.roi_percent, 1),
        value_basis: format_money(b.value_basis),
        net: format_money(b.net),
        roi: format_percent(b.roi_percent),
        net_per_day: format_optional_money(b.per_day),
        net_per_month: format_optional_money(b.per_month),
    }
}

/// Build the formatted results view for an ROI calculation.
pub fn build_dashboard(output: &RoiOutput) -> Dashboard {
    Dashboard {
        start_date: format_display_date(output.start_date),
        days_since_start: output.days_elapsed.to_string(),
        months_approx: format_fixed(output.months_elapsed, 1),
        cards: vec![
            card("Realised (cash)", &output.realized),
            card("Production (historical)", &output.production),
            card("Contracted (time-variable)", &output.contracted),
        ],
        disclaimer: CONTRACTED_DISCLAIMER.to_string(),
    }
}
