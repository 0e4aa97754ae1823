//! Return-on-investment over three value bases.
//!
//! A single spend figure is compared against:
//! - **Realised** value: cash already claimed, available or claimable.
//! - **Production** value: cumulative historical earnings, regardless of
//!   whether they have been cashed out.
//! - **Contracted** value: amount locked in auto-renewing contracts plus the
//!   earnings still scheduled. Not cash today.
//!
//! For each basis the net gain, ROI percentage and net gain per day and per
//! (average) month since the start date are derived. Any ratio whose
//! denominator is zero is reported as `None` rather than an error.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::error::RoiCalcError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::RoiCalcResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Average Gregorian month length used to turn days into months.
pub const DAYS_PER_MONTH: Decimal = dec!(30.437);

const HUNDRED: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Inputs for an ROI calculation. Missing fields deserialize to the
/// defaults of [`RoiInput::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiInput {
    /// Date the investment started.
    pub start_date: NaiveDate,
    /// Reference date for elapsed-time calculations. `None` means today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
    /// Total spent, fiat and crypto.
    pub total_spent: Money,
    /// Total earned (historically produced).
    pub total_earned: Money,
    /// Realised: total claimed.
    pub claimed: Money,
    /// Realised: available balance.
    pub available: Money,
    /// Realised: claimable balance.
    pub claimable: Money,
    /// Contracted: locked with auto renew.
    pub locked: Money,
    /// Contracted: remaining scheduled earning.
    pub remaining: Money,
}

impl Default for RoiInput {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap_or_default(),
            as_of: None,
            total_spent: dec!(2695.58),
            total_earned: dec!(9598.85),
            claimed: dec!(1402.71),
            available: dec!(101.59),
            claimable: dec!(7.15),
            locked: dec!(94.43),
            remaining: dec!(7162.45),
        }
    }
}

impl RoiInput {
    /// Parse an input set from JSON. Absent fields take their defaults.
    pub fn from_json(json: &str) -> RoiCalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The reference date, falling back to the local calendar date.
    pub fn resolved_as_of(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }

    fn amounts(&self) -> [(&'static str, Money); 7] {
        [
            ("total_spent", self.total_spent),
            ("total_earned", self.total_earned),
            ("claimed", self.claimed),
            ("available", self.available),
            ("claimable", self.claimable),
            ("locked", self.locked),
            ("remaining", self.remaining),
        ]
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Net gain and derived rates against one value basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiBreakdown {
    /// The value the spend is compared against.
    pub value_basis: Money,
    /// value_basis - total_spent
    pub net: Money,
    /// net / total_spent * 100; `None` when nothing was spent.
    pub roi_percent: Option<Percent>,
    /// `None` when no days have elapsed.
    pub per_day: Option<Money>,
    /// `None` when no months have elapsed.
    pub per_month: Option<Money>,
}

/// Output of an ROI calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiOutput {
    pub start_date: NaiveDate,
    pub as_of: NaiveDate,
    pub days_elapsed: i64,
    pub months_elapsed: Decimal,
    pub total_spent: Money,
    pub realized: RoiBreakdown,
    pub production: RoiBreakdown,
    pub contracted: RoiBreakdown,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn overflow(context: String) -> RoiCalcError {
    RoiCalcError::ArithmeticOverflow { context }
}

/// `n / d`, or `None` when `d` is zero. A quotient outside the Decimal
/// range is an error, not `None`.
pub fn safe_div(n: Decimal, d: Decimal) -> RoiCalcResult<Option<Decimal>> {
    if d.is_zero() {
        return Ok(None);
    }
    n.checked_div(d)
        .map(Some)
        .ok_or_else(|| overflow(format!("{n} / {d}")))
}

/// ROI in percent, or `None` when nothing was spent.
pub fn safe_roi_percent(net: Money, spent: Money) -> RoiCalcResult<Option<Percent>> {
    match safe_div(net, spent)? {
        Some(ratio) => ratio
            .checked_mul(HUNDRED)
            .map(Some)
            .ok_or_else(|| overflow(format!("ROI of {net} over {spent}"))),
        None => Ok(None),
    }
}

/// Approximate months in `days`. Zero or fewer days gives zero months.
pub fn months_from_days(days: i64) -> Decimal {
    if days > 0 {
        Decimal::from(days) / DAYS_PER_MONTH
    } else {
        Decimal::ZERO
    }
}

fn checked_sum(field: &str, parts: &[Money]) -> RoiCalcResult<Money> {
    parts
        .iter()
        .try_fold(Decimal::ZERO, |acc, part| acc.checked_add(*part))
        .ok_or_else(|| overflow(field.to_string()))
}

fn breakdown(
    value_basis: Money,
    spent: Money,
    days: i64,
    months: Decimal,
) -> RoiCalcResult<RoiBreakdown> {
    let net = value_basis
        .checked_sub(spent)
        .ok_or_else(|| overflow(format!("{value_basis} - {spent}")))?;
    Ok(RoiBreakdown {
        value_basis,
        net,
        roi_percent: safe_roi_percent(net, spent)?,
        per_day: safe_div(net, Decimal::from(days))?,
        per_month: safe_div(net, months)?,
    })
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Calculate realised, production and contracted ROI with per-day and
/// per-month net rates.
pub fn calculate_roi(input: &RoiInput) -> RoiCalcResult<ComputationOutput<RoiOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    for (field, amount) in input.amounts() {
        if amount < Decimal::ZERO {
            return Err(RoiCalcError::InvalidInput {
                field: field.into(),
                reason: "Amount cannot be negative".into(),
            });
        }
    }

    let as_of = input.resolved_as_of();
    let days = (as_of - input.start_date).num_days();
    if days < 0 {
        return Err(RoiCalcError::InvalidInput {
            field: "start_date".into(),
            reason: format!(
                "Start date {} is after {}; choose a date on or before it",
                input.start_date, as_of
            ),
        });
    }
    let months = months_from_days(days);
    debug!(start_date = %input.start_date, %as_of, days, %months, "resolved ROI period");

    let spent = input.total_spent;
    let realized_value = checked_sum(
        "realized_value",
        &[input.claimed, input.available, input.claimable],
    )?;
    let contracted_value = checked_sum("contracted_value", &[input.locked, input.remaining])?;

    let output = RoiOutput {
        start_date: input.start_date,
        as_of,
        days_elapsed: days,
        months_elapsed: months,
        total_spent: spent,
        realized: breakdown(realized_value, spent, days, months)?,
        production: breakdown(input.total_earned, spent, days, months)?,
        contracted: breakdown(contracted_value, spent, days, months)?,
    };

    if spent.is_zero() {
        warnings.push("Total spent is zero; ROI percentages are undefined".into());
    }
    if days == 0 {
        warnings.push("Start date is today; per-day and per-month rates are undefined".into());
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "ROI: realised, production and contracted value net of total spent",
        &serde_json::json!({
            "start_date": input.start_date.to_string(),
            "as_of": as_of.to_string(),
            "total_spent": spent.to_string(),
            "total_earned": input.total_earned.to_string(),
            "realized_value": realized_value.to_string(),
            "contracted_value": contracted_value.to_string(),
            "days_per_month": DAYS_PER_MONTH.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
