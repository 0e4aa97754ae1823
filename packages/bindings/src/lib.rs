use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Serialize;

use roi_calc_core::roi::calculator::{self, RoiInput, RoiOutput};
use roi_calc_core::roi::export::{self, ExportRow, REPORT_FOOTER, REPORT_TITLE};
use roi_calc_core::roi::format;
use roi_calc_core::ComputationOutput;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Parse the JSON input set and run the engine.
fn compute(input_json: &str) -> NapiResult<ComputationOutput<RoiOutput>> {
    let input = RoiInput::from_json(input_json).map_err(to_napi_error)?;
    calculator::calculate_roi(&input).map_err(to_napi_error)
}

#[derive(Serialize)]
struct Report {
    title: &'static str,
    rows: Vec<ExportRow>,
    footer: &'static str,
}

// ---------------------------------------------------------------------------
// ROI
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_roi(input_json: String) -> NapiResult<String> {
    let output = compute(&input_json)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn roi_dashboard(input_json: String) -> NapiResult<String> {
    let output = compute(&input_json)?.result;
    serde_json::to_string(&format::build_dashboard(&output)).map_err(to_napi_error)
}

#[napi]
pub fn default_roi_input() -> NapiResult<String> {
    serde_json::to_string(&RoiInput::default()).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Exports
// ---------------------------------------------------------------------------

#[napi]
pub fn roi_export_rows(input_json: String) -> NapiResult<String> {
    let output = compute(&input_json)?.result;
    serde_json::to_string(&export::csv_rows(&output)).map_err(to_napi_error)
}

#[napi]
pub fn roi_report_rows(input_json: String) -> NapiResult<String> {
    let output = compute(&input_json)?.result;
    let report = Report {
        title: REPORT_TITLE,
        rows: export::report_rows(&output),
        footer: REPORT_FOOTER,
    };
    serde_json::to_string(&report).map_err(to_napi_error)
}
