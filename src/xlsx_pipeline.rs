use cost_report_to_xlsx::{
    CostRow, ExtractOptions, ExtractionReport, extract_pdf_bytes_to_rows,
    extract_pdf_bytes_to_xlsx_bytes,
};

use crate::error::ApiError;

pub const OUTPUT_SUFFIX: &str = "_summary_of_costs_by_domain.xlsx";
pub const NO_ROWS_MESSAGE: &str = "no table rows found in the PDF text";

/// Download name for a converted upload: original base name (final
/// extension stripped) plus the fixed report suffix.
pub fn output_file_name(original_name: &str) -> String {
    let cleaned = original_name
        .chars()
        .filter(|ch| !ch.is_control() && *ch != '"')
        .collect::<String>();
    format!("{}{OUTPUT_SUFFIX}", base_name(&cleaned))
}

// Mirrors splitext: the extension starts at the last dot that follows at
// least one non-dot character, so dotfile-style names keep their full name.
fn base_name(name: &str) -> &str {
    let leading_dots = name.len() - name.trim_start_matches('.').len();
    match name.rfind('.') {
        Some(index) if index > leading_dots => &name[..index],
        _ => name,
    }
}

pub fn extract_rows(pdf_bytes: &[u8]) -> Result<Vec<CostRow>, ApiError> {
    let (rows, report) = extract_pdf_bytes_to_rows(pdf_bytes, &ExtractOptions::default())
        .map_err(extraction_failed)?;
    log_outcome(&report);
    if rows.is_empty() {
        return Err(ApiError::NoRows(NO_ROWS_MESSAGE.to_string()));
    }
    Ok(rows)
}

pub fn build_workbook(pdf_bytes: &[u8]) -> Result<Vec<u8>, ApiError> {
    let (xlsx, report) = extract_pdf_bytes_to_xlsx_bytes(pdf_bytes, &ExtractOptions::default())
        .map_err(extraction_failed)?;
    log_outcome(&report);
    if report.row_count == 0 {
        return Err(ApiError::NoRows(NO_ROWS_MESSAGE.to_string()));
    }
    Ok(xlsx)
}

// Extraction failures and zero-row results are presented identically to the
// caller; the underlying error only goes to the log.
fn extraction_failed(error: cost_report_to_xlsx::ExtractError) -> ApiError {
    worker::console_error!("pdf extraction failed: {error}");
    ApiError::NoRows(NO_ROWS_MESSAGE.to_string())
}

fn log_outcome(report: &ExtractionReport) {
    worker::console_log!(
        "report extraction completed: rows={}, tables={}, warnings={}",
        report.row_count,
        report.table_count,
        report.warnings.len()
    );
}
