use cost_report_to_xlsx::CostRow;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;
pub const UPLOAD_FIELD: &str = "file";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowPayload {
    pub domain: String,
    pub customer_id: String,
    pub amount: String,
}

impl From<CostRow> for RowPayload {
    fn from(row: CostRow) -> Self {
        Self {
            domain: row.domain,
            customer_id: row.customer_id,
            amount: row.amount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreviewResponse {
    pub file_name: String,
    pub row_count: usize,
    pub rows: Vec<RowPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}
