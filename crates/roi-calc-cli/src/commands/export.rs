use clap::Args;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::info;

use roi_calc_core::roi::calculator;
use roi_calc_core::roi::export::{self, CSV_FILE_NAME, PNG_FILE_NAME, REPORT_FOOTER, REPORT_TITLE};

use super::roi::{resolve_input, RoiArgs};
use crate::output::{csv_out, png};

/// Arguments for writing the CSV export and PNG report
#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub roi: RoiArgs,

    /// Destination of the CSV row-set
    #[arg(long, default_value = CSV_FILE_NAME)]
    pub csv_path: PathBuf,

    /// Destination of the PNG report
    #[arg(long, default_value = PNG_FILE_NAME)]
    pub png_path: PathBuf,

    /// Colour scheme of the PNG report
    #[arg(long, value_enum, default_value_t = png::Theme::Dark)]
    pub theme: png::Theme,

    /// Skip the CSV export
    #[arg(long)]
    pub no_csv: bool,

    /// Skip the PNG report
    #[arg(long)]
    pub no_png: bool,
}

pub fn run_export(args: ExportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let roi_input = resolve_input(&args.roi)?;
    let result = calculator::calculate_roi(&roi_input)?;
    let mut summary = json!({ "warnings": result.warnings });

    if !args.no_csv {
        let rows = export::csv_rows(&result.result);
        csv_out::write_rows_to_file(&args.csv_path, &rows)?;
        info!(path = %args.csv_path.display(), rows = rows.len(), "wrote CSV export");
        summary["csv_path"] = json!(args.csv_path.display().to_string());
        summary["csv_rows"] = json!(rows.len());
    }

    if !args.no_png {
        let rows = export::report_rows(&result.result);
        let (width, height) =
            png::write_report(&args.png_path, REPORT_TITLE, &rows, REPORT_FOOTER, args.theme)?;
        info!(path = %args.png_path.display(), width, height, "wrote PNG report");
        summary["png_path"] = json!(args.png_path.display().to_string());
        summary["png_width"] = json!(width);
        summary["png_height"] = json!(height);
    }

    Ok(summary)
}
