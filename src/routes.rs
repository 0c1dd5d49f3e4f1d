use serde::Serialize;
use worker::{Context, Env, FormEntry, Request, Response, Result, RouteContext, Router};

use crate::error::ApiError;
use crate::index_page::INDEX_HTML;
use crate::models::{
    DEFAULT_MAX_UPLOAD_BYTES, PreviewResponse, RowPayload, UPLOAD_FIELD, XLSX_CONTENT_TYPE,
};
use crate::xlsx_pipeline;

#[derive(Debug, Clone)]
pub struct AppState {
    pub max_upload_bytes: usize,
}

pub async fn handle(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    let max_upload_bytes = env
        .var("MAX_UPLOAD_BYTES")
        .ok()
        .and_then(|value| value.to_string().parse().ok())
        .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

    let state = AppState { max_upload_bytes };

    Router::with_data(state)
        .get("/", |_, _| Response::from_html(INDEX_HTML))
        .post_async("/api/v1/rows", rows_route)
        .post_async("/api/v1/xlsx", xlsx_route)
        .run(req, env)
        .await
}

async fn rows_route(mut req: Request, ctx: RouteContext<AppState>) -> Result<Response> {
    match preview_response(&mut req, &ctx.data).await {
        Ok(response) => json_response(&response),
        Err(error) => error.into_response(),
    }
}

async fn xlsx_route(mut req: Request, ctx: RouteContext<AppState>) -> Result<Response> {
    match workbook_response(&mut req, &ctx.data).await {
        Ok(response) => Ok(response),
        Err(error) => error.into_response(),
    }
}

async fn preview_response(
    req: &mut Request,
    state: &AppState,
) -> Result<PreviewResponse, ApiError> {
    let upload = read_upload(req, state).await?;
    let rows = xlsx_pipeline::extract_rows(&upload.bytes)?;

    Ok(PreviewResponse {
        file_name: xlsx_pipeline::output_file_name(&upload.name),
        row_count: rows.len(),
        rows: rows.into_iter().map(RowPayload::from).collect(),
    })
}

async fn workbook_response(req: &mut Request, state: &AppState) -> Result<Response, ApiError> {
    let upload = read_upload(req, state).await?;
    let xlsx = xlsx_pipeline::build_workbook(&upload.bytes)?;
    let file_name = xlsx_pipeline::output_file_name(&upload.name);

    let mut response = Response::from_bytes(xlsx)?;
    response
        .headers_mut()
        .set("Content-Type", XLSX_CONTENT_TYPE)?;
    response.headers_mut().set(
        "Content-Disposition",
        &format!("attachment; filename=\"{file_name}\""),
    )?;
    response.headers_mut().set("Cache-Control", "no-store")?;
    Ok(response)
}

struct Upload {
    name: String,
    bytes: Vec<u8>,
}

async fn read_upload(req: &mut Request, state: &AppState) -> Result<Upload, ApiError> {
    let form = req
        .form_data()
        .await
        .map_err(|error| ApiError::BadRequest(format!("invalid multipart form: {error}")))?;

    let Some(entry) = form.get(UPLOAD_FIELD) else {
        return Err(ApiError::BadRequest(format!(
            "missing '{UPLOAD_FIELD}' form field"
        )));
    };
    let FormEntry::File(file) = entry else {
        return Err(ApiError::BadRequest(format!(
            "'{UPLOAD_FIELD}' form field must be a file"
        )));
    };

    let name = file.name();
    let bytes = file.bytes().await?;
    if bytes.is_empty() {
        return Err(ApiError::BadRequest("uploaded file is empty".to_string()));
    }
    if bytes.len() > state.max_upload_bytes {
        return Err(ApiError::PayloadTooLarge(format!(
            "uploaded file exceeds {} bytes",
            state.max_upload_bytes
        )));
    }

    Ok(Upload { name, bytes })
}

fn json_response<T>(payload: &T) -> Result<Response>
where
    T: Serialize,
{
    let mut response = Response::from_json(payload)?;
    response.headers_mut().set("Cache-Control", "no-store")?;
    Ok(response)
}
