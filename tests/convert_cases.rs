use pretty_assertions::assert_eq;

use cost_report_to_xlsx::CostRow;
use cost_report_worker::error::ApiError;
use cost_report_worker::models::{PreviewResponse, RowPayload};
use cost_report_worker::xlsx_pipeline::output_file_name;

#[test]
fn output_name_strips_final_extension() {
    assert_eq!(
        output_file_name("report.pdf"),
        "report_summary_of_costs_by_domain.xlsx"
    );
}

#[test]
fn output_name_keeps_earlier_dots() {
    assert_eq!(
        output_file_name("invoice.2024.01.pdf"),
        "invoice.2024.01_summary_of_costs_by_domain.xlsx"
    );
}

#[test]
fn output_name_without_extension_is_used_as_is() {
    assert_eq!(
        output_file_name("report"),
        "report_summary_of_costs_by_domain.xlsx"
    );
}

#[test]
fn output_name_keeps_dotfile_style_names() {
    assert_eq!(
        output_file_name(".pdf"),
        ".pdf_summary_of_costs_by_domain.xlsx"
    );
}

#[test]
fn output_name_drops_quotes_and_control_characters() {
    assert_eq!(
        output_file_name("re\"port\n.pdf"),
        "report_summary_of_costs_by_domain.xlsx"
    );
}

#[test]
fn row_payload_preserves_fields_verbatim() {
    let payload = RowPayload::from(CostRow {
        domain: "example.com".to_string(),
        customer_id: "C12345".to_string(),
        amount: "1,234.56".to_string(),
    });
    assert_eq!(payload.domain, "example.com");
    assert_eq!(payload.customer_id, "C12345");
    assert_eq!(payload.amount, "1,234.56");
}

#[test]
fn preview_response_serializes_expected_keys() {
    let response = PreviewResponse {
        file_name: "report_summary_of_costs_by_domain.xlsx".to_string(),
        row_count: 1,
        rows: vec![RowPayload {
            domain: "example.com".to_string(),
            customer_id: "C12345".to_string(),
            amount: "1,234.56".to_string(),
        }],
    };

    let json = serde_json::to_value(&response).expect("response should serialize");
    assert_eq!(json["row_count"], 1);
    assert_eq!(json["rows"][0]["customer_id"], "C12345");
    assert_eq!(json["rows"][0]["amount"], "1,234.56");
}

#[test]
fn api_error_codes_and_statuses_line_up() {
    let cases = [
        (ApiError::BadRequest("x".to_string()), "bad_request", 400),
        (
            ApiError::PayloadTooLarge("x".to_string()),
            "payload_too_large",
            413,
        ),
        (ApiError::NoRows("x".to_string()), "no_rows_found", 422),
        (ApiError::Internal("x".to_string()), "internal_error", 500),
    ];

    for (error, code, status) in cases {
        assert_eq!(error.code(), code);
        assert_eq!(error.status_code(), status);
    }
}
