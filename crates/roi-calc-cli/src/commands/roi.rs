use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use roi_calc_core::roi::calculator::{self, RoiInput};
use roi_calc_core::roi::format;

use crate::input;

/// Inputs shared by every ROI command. Flags override values read from
/// `--input` or stdin; anything left unset keeps its default.
#[derive(Args, Debug, Clone, Default)]
pub struct RoiArgs {
    /// Path to a JSON or YAML input file
    #[arg(long)]
    pub input: Option<String>,

    /// Date the investment started (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Reference date instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Total spent, fiat and crypto (USD)
    #[arg(long)]
    pub total_spent: Option<Decimal>,

    /// Total earned, historically produced (USD)
    #[arg(long)]
    pub total_earned: Option<Decimal>,

    /// Total claimed (USD)
    #[arg(long)]
    pub claimed: Option<Decimal>,

    /// Available balance (USD)
    #[arg(long)]
    pub available: Option<Decimal>,

    /// Claimable balance (USD)
    #[arg(long)]
    pub claimable: Option<Decimal>,

    /// Locked with auto renew (USD)
    #[arg(long)]
    pub locked: Option<Decimal>,

    /// Remaining scheduled earning (USD)
    #[arg(long)]
    pub remaining: Option<Decimal>,
}

impl RoiArgs {
    fn apply_overrides(&self, mut base: RoiInput) -> RoiInput {
        if let Some(d) = self.start_date {
            base.start_date = d;
        }
        if self.as_of.is_some() {
            base.as_of = self.as_of;
        }
        let amounts = [
            (self.total_spent, &mut base.total_spent),
            (self.total_earned, &mut base.total_earned),
            (self.claimed, &mut base.claimed),
            (self.available, &mut base.available),
            (self.claimable, &mut base.claimable),
            (self.locked, &mut base.locked),
            (self.remaining, &mut base.remaining),
        ];
        for (flag, field) in amounts {
            if let Some(v) = flag {
                *field = v;
            }
        }
        base
    }
}

/// Build the input set: file, then piped stdin, then defaults, with flags
/// applied on top.
pub fn resolve_input(args: &RoiArgs) -> Result<RoiInput, Box<dyn std::error::Error>> {
    let base: RoiInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RoiInput::default()
    };
    Ok(args.apply_overrides(base))
}

pub fn run_calculate(args: RoiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let roi_input = resolve_input(&args)?;
    let result = calculator::calculate_roi(&roi_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_dashboard(args: RoiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let roi_input = resolve_input(&args)?;
    let result = calculator::calculate_roi(&roi_input)?;
    let dashboard = format::build_dashboard(&result.result);
    Ok(serde_json::to_value(dashboard)?)
}

pub fn run_defaults() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(RoiInput::default())?)
}
