use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Serialize;

use crate::api::{ActionReply, ApiError, FileDownload, SaveReportForm};
use crate::app::state::AppState;
use crate::app::views;
use crate::i18n;

use super::common::{
    html_result, json_result, map_api_error, reply_response, run_blocking, status_for, wants_json,
    FlashQuery,
};

// ==========================================
// 报表相关处理函数
// ==========================================

const REPORT_PATH: &str = "/report";

/// 报表页
pub async fn index(State(state): State<AppState>, Query(flash): Query<FlashQuery>) -> Response {
    let api = state.report_api.clone();
    let result = run_blocking(move || api.overview()).await;
    html_result(result.map(|overview| views::report::render(&overview, &flash)))
}

/// 热销商品排行（JSON）
pub async fn popular_report(State(state): State<AppState>) -> Response {
    let api = state.report_api.clone();
    json_result(run_blocking(move || api.popular_products()).await)
}

/// 品牌销售额（JSON）
pub async fn sales_report(State(state): State<AppState>) -> Response {
    let api = state.report_api.clone();
    json_result(run_blocking(move || api.sales_by_brand()).await)
}

/// 客户下单排行（JSON）
pub async fn customer_report(State(state): State<AppState>) -> Response {
    let api = state.report_api.clone();
    json_result(run_blocking(move || api.top_customers()).await)
}

/// 保存回执附带实际文件名
#[derive(Debug, Serialize)]
struct SaveReply {
    #[serde(flatten)]
    reply: ActionReply,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_name: Option<String>,
}

/// 保存报表
pub async fn save_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SaveReportForm>,
) -> Response {
    let api = state.report_api.clone();
    let result = run_blocking(move || api.save_report(&form)).await;

    let (reply, file_name) = match result {
        Ok(name) => (ActionReply::ok(i18n::t("report.saved")), Some(name)),
        Err(err) => {
            tracing::warn!(error = %err, "报表保存失败");
            (ActionReply::from_file_error(&err, "report.save_error"), None)
        }
    };

    if wants_json(&headers) {
        return Json(SaveReply { reply, file_name }).into_response();
    }
    reply_response(&headers, reply, REPORT_PATH)
}

/// 下载报表
pub async fn download_file(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Response {
    let api = state.report_api.clone();
    match run_blocking(move || api.download(&file_name)).await {
        Ok(download) => attachment(download),
        Err(err) => {
            let status = status_for(&err);
            let message = match &err {
                ApiError::NotFound(msg) | ApiError::InvalidInput(msg) => msg.clone(),
                other => i18n::t_with_args(
                    "report.download_error",
                    &[("message", other.user_message().as_str())],
                ),
            };
            (status, message).into_response()
        }
    }
}

/// 删除报表
pub async fn delete_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(file_name): Path<String>,
) -> Response {
    let api = state.report_api.clone();
    let result = run_blocking(move || api.delete_file(&file_name)).await;

    let reply = match result {
        Ok(()) => ActionReply::ok(i18n::t("report.file_deleted")),
        Err(err) => ActionReply::from_file_error(&err, "report.delete_error"),
    };
    reply_response(&headers, reply, REPORT_PATH)
}

/// 报表描述
pub async fn file_description(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Response {
    let api = state.report_api.clone();
    match run_blocking(move || api.file_description(&file_name)).await {
        Ok(description) => {
            Json(serde_json::json!({ "success": true, "description": description })).into_response()
        }
        Err(err) => map_api_error(err),
    }
}

/// 以 CSV 导出报表
pub async fn export_report(State(state): State<AppState>, Path(kind): Path<String>) -> Response {
    let api = state.report_api.clone();
    match run_blocking(move || api.export_csv(&kind)).await {
        Ok(download) => attachment(download),
        Err(err) => map_api_error(err),
    }
}

/// 附件下载响应
fn attachment(download: FileDownload) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", download.file_name);
    let disposition = HeaderValue::from_str(&disposition)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(download.content_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        download.bytes,
    )
        .into_response()
}
