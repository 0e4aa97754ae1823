use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use roi_calc_core::roi::calculator::{self, RoiInput};
use roi_calc_core::roi::{export, format};
use roi_calc_core::RoiCalcError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 30 days between start and reference date, spend fully recovered in cash.
fn break_even_input() -> RoiInput {
    RoiInput {
        start_date: date(2025, 5, 31),
        as_of: Some(date(2025, 6, 30)),
        total_spent: dec!(100),
        total_earned: dec!(500),
        claimed: dec!(50),
        available: dec!(30),
        claimable: dec!(20),
        locked: Decimal::ZERO,
        remaining: Decimal::ZERO,
    }
}

// ===========================================================================
// Engine
// ===========================================================================

#[test]
fn test_break_even_thirty_days() {
    let result = calculator::calculate_roi(&break_even_input()).unwrap();
    let out = &result.result;

    assert_eq!(out.days_elapsed, 30);
    assert_eq!(out.realized.value_basis, dec!(100));
    assert_eq!(out.realized.net, Decimal::ZERO);
    assert_eq!(out.realized.roi_percent, Some(Decimal::ZERO));
    assert_eq!(out.realized.per_day, Some(Decimal::ZERO));
    assert_eq!(out.realized.per_month, Some(Decimal::ZERO));
    assert!(result.warnings.is_empty());
}

#[test]
fn test_realized_net_is_exact() {
    let input = RoiInput {
        claimed: dec!(1402.71),
        available: dec!(101.59),
        claimable: dec!(7.15),
        total_spent: dec!(2695.58),
        ..break_even_input()
    };
    let result = calculator::calculate_roi(&input).unwrap();
    assert_eq!(
        result.result.realized.net,
        dec!(1402.71) + dec!(101.59) + dec!(7.15) - dec!(2695.58)
    );
}

#[test]
fn test_zero_spent_leaves_every_roi_undefined() {
    let input = RoiInput {
        total_spent: Decimal::ZERO,
        total_earned: dec!(500),
        locked: dec!(10),
        remaining: dec!(20),
        ..break_even_input()
    };
    let result = calculator::calculate_roi(&input).unwrap();
    let out = &result.result;

    assert_eq!(out.production.net, dec!(500));
    assert_eq!(out.realized.roi_percent, None);
    assert_eq!(out.production.roi_percent, None);
    assert_eq!(out.contracted.roi_percent, None);
    // Rates still defined: they only depend on elapsed time.
    assert_eq!(out.production.per_day, Some(dec!(500) / dec!(30)));

    let dashboard = format::build_dashboard(out);
    assert_eq!(dashboard.cards[1].roi, "N/A");
    assert_eq!(dashboard.cards[1].headline_roi, "N/A");
    assert_eq!(dashboard.cards[1].net, "$500.00");
}

#[test]
fn test_start_today_has_no_rates() {
    let input = RoiInput {
        start_date: date(2025, 6, 30),
        ..break_even_input()
    };
    let result = calculator::calculate_roi(&input).unwrap();
    let out = &result.result;

    assert_eq!(out.days_elapsed, 0);
    assert_eq!(out.months_elapsed, Decimal::ZERO);
    assert_eq!(out.contracted.per_day, None);
    assert_eq!(out.contracted.per_month, None);
    assert_eq!(format::build_dashboard(out).cards[2].net_per_day, "N/A");
}

#[test]
fn test_start_after_reference_date_is_rejected() {
    let input = RoiInput {
        start_date: date(2025, 7, 1),
        ..break_even_input()
    };
    let err = calculator::calculate_roi(&input).unwrap_err();
    assert!(matches!(err, RoiCalcError::InvalidInput { ref field, .. } if field == "start_date"));
    assert!(err.to_string().contains("2025-07-01"));
}

#[test]
fn test_tiny_spend_reports_overflow_instead_of_panicking() {
    let input = RoiInput {
        total_spent: dec!(0.000000000000000001),
        claimed: dec!(100_000_000_000_000),
        ..break_even_input()
    };
    let err = calculator::calculate_roi(&input).unwrap_err();
    assert!(matches!(err, RoiCalcError::ArithmeticOverflow { .. }));
    assert!(err.to_string().starts_with("Arithmetic overflow"));
}

#[test]
fn test_realized_sum_beyond_decimal_range_is_an_error() {
    let input = RoiInput {
        claimed: Decimal::MAX,
        available: Decimal::ONE,
        ..break_even_input()
    };
    match calculator::calculate_roi(&input) {
        Err(RoiCalcError::ArithmeticOverflow { context }) => assert_eq!(context, "realized_value"),
        other => panic!("expected ArithmeticOverflow, got {other:?}"),
    }
}

#[test]
fn test_large_contracted_value_still_computes() {
    let input = RoiInput {
        locked: dec!(1_000_000_000_000),
        remaining: dec!(1_000_000_000_000),
        ..break_even_input()
    };
    let result = calculator::calculate_roi(&input).unwrap();
    assert_eq!(result.result.contracted.net, dec!(1_999_999_999_900));
}

#[test]
fn test_months_use_average_month_length() {
    let input = RoiInput {
        start_date: date(2024, 6, 30),
        ..break_even_input()
    };
    let result = calculator::calculate_roi(&input).unwrap();
    let out = &result.result;
    assert_eq!(out.days_elapsed, 365);
    assert_eq!(out.months_elapsed, dec!(365) / dec!(30.437));
    assert_eq!(format::format_fixed(out.months_elapsed, 1), "12.0");
}

// ===========================================================================
// Exports
// ===========================================================================

#[test]
fn test_csv_rows_formatting() {
    let result = calculator::calculate_roi(&break_even_input()).unwrap();
    let rows: Vec<(String, String)> = export::csv_rows(&result.result)
        .into_iter()
        .map(|r| (r.field, r.value))
        .collect();

    let expected: Vec<(String, String)> = [
        ("Start date", "2025-05-31"),
        ("Days", "30"),
        ("Months (approx.)", "0.99"),
        ("Total Spent", "100.00"),
        ("Total Earned", "500.00"),
        ("Realised value", "100.00"),
        ("Realised net", "0.00"),
        ("Realised ROI", "0.0000"),
        ("Production net", "400.00"),
        ("Production ROI", "400.0000"),
        ("Contracted value", "0.00"),
        ("Contracted net", "-100.00"),
        ("Contracted ROI", "-100.0000"),
    ]
    .iter()
    .map(|(f, v)| (f.to_string(), v.to_string()))
    .collect();

    assert_eq!(rows, expected);
}

#[test]
fn test_csv_rows_blank_when_roi_undefined() {
    let input = RoiInput {
        total_spent: Decimal::ZERO,
        ..break_even_input()
    };
    let result = calculator::calculate_roi(&input).unwrap();
    let rows = export::csv_rows(&result.result);

    assert_eq!(rows.len(), 13);
    for row in rows.iter().filter(|r| r.field.ends_with("ROI")) {
        assert_eq!(row.value, "");
    }
}

#[test]
fn test_report_rows() {
    let result = calculator::calculate_roi(&break_even_input()).unwrap();
    let rows: Vec<String> = export::report_rows(&result.result)
        .into_iter()
        .map(|r| format!("{}: {}", r.field, r.value))
        .collect();

    assert_eq!(
        rows,
        vec![
            "Start date: 31.05.2025",
            "Days / Months: 30 / 1.0",
            "Realised ROI / Net: 0.00% / $0.00",
            "Production ROI / Net: 400.00% / $400.00",
            "Contracted ROI / Net: -100.00% / $-100.00",
        ]
    );
}

#[test]
fn test_dashboard_default_scenario() {
    let input = RoiInput {
        as_of: Some(date(2025, 10, 19)),
        ..RoiInput::default()
    };
    let result = calculator::calculate_roi(&input).unwrap();
    let dashboard = format::build_dashboard(&result.result);

    assert_eq!(dashboard.start_date, "07.04.2025");
    assert_eq!(dashboard.days_since_start, "195");
    assert_eq!(dashboard.months_approx, "6.4");
    assert_eq!(dashboard.cards.len(), 3);
    assert_eq!(dashboard.cards[0].value_basis, "$1,511.45");
    assert_eq!(dashboard.cards[0].net, "$-1,184.13");
    assert_eq!(dashboard.cards[0].headline_roi, "-43.9%");
    assert_eq!(dashboard.cards[1].net, "$6,903.27");
    assert_eq!(dashboard.cards[2].value_basis, "$7,256.88");
}
