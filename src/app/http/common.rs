use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::{ActionReply, ApiError, ApiResult};

// ==========================================
// 公共工具：错误映射、内容协商、flash 重定向、阻塞调用
// ==========================================

/// 错误响应（JSON 接口输出）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct ErrorResponse {
    pub success: bool,

    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// ApiError → HTTP 状态码
pub(super) fn status_for(err: &ApiError) -> StatusCode {
    match err {
        ApiError::InvalidInput(_) | ApiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
        ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        ApiError::BusinessRuleViolation(_) => StatusCode::CONFLICT,
        ApiError::DatabaseError(_)
        | ApiError::DatabaseConnectionError(_)
        | ApiError::FileStorageError(_)
        | ApiError::InternalError(_)
        | ApiError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// 将ApiError转换为 JSON 错误响应
pub(super) fn map_api_error(err: ApiError) -> Response {
    let status = status_for(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "请求处理失败");
    }

    let reply = ActionReply::from_error(&err);
    let body = ErrorResponse {
        success: false,
        code: err.code().to_string(),
        message: reply.message,
        details: match &err {
            ApiError::ValidationFailed(violations) => {
                Some(serde_json::json!({ "violations": violations }))
            }
            _ => None,
        },
    };

    (status, Json(body)).into_response()
}

/// JSON 接口结果 → 响应
pub(super) fn json_result<T: Serialize>(result: ApiResult<T>) -> Response {
    match result {
        Ok(value) => Json(value).into_response(),
        Err(err) => map_api_error(err),
    }
}

/// 带 success 标记的单对象 JSON：`{success:true, ...字段}`
pub(super) fn json_success<T: Serialize>(result: ApiResult<T>) -> Response {
    match result.and_then(|value| {
        serde_json::to_value(value).map_err(|e| ApiError::InternalError(format!("序列化失败: {}", e)))
    }) {
        Ok(serde_json::Value::Object(mut map)) => {
            map.insert("success".to_string(), serde_json::Value::Bool(true));
            Json(serde_json::Value::Object(map)).into_response()
        }
        Ok(other) => Json(serde_json::json!({ "success": true, "data": other })).into_response(),
        Err(err) => map_api_error(err),
    }
}

/// HTML 页面结果 → 响应
pub(super) fn html_result(result: ApiResult<String>) -> Response {
    match result {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "页面渲染失败");
            let reply = ActionReply::from_error(&err);
            (status_for(&err), Html(crate::app::views::error_page(&reply.message))).into_response()
        }
    }
}

// ==========================================
// 内容协商与 flash
// ==========================================

/// 请求方是否期望 JSON（Accept: application/json 或 XHR）
pub(super) fn wants_json(headers: &HeaderMap) -> bool {
    let accepts_json = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false);

    let is_xhr = headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
        .unwrap_or(false);

    accepts_json || is_xhr
}

/// 页面顶部 flash 提示（随重定向查询串传递）
///
/// `ok` 按原始字符串接收，只有 `true` 视为成功；任意取值都不会导致页面 400
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlashQuery {
    #[serde(default)]
    pub flash: Option<String>,
    #[serde(default)]
    pub ok: Option<String>,
}

impl FlashQuery {
    pub fn new(message: impl Into<String>, ok: bool) -> Self {
        Self {
            flash: Some(message.into()),
            ok: Some(ok.to_string()),
        }
    }

    pub fn message(&self) -> Option<(&str, bool)> {
        self.flash
            .as_deref()
            .filter(|m| !m.is_empty())
            .map(|m| (m, self.ok.as_deref().map(str::trim) == Some("true")))
    }
}

/// 解析路径中的实体 ID；非数字按记录不存在处理
pub(super) fn parse_path_id(raw: &str, not_found_key: &str) -> ApiResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::NotFound(crate::i18n::t(not_found_key)))
}

/// 写操作回执：JSON 客户端直接返回，表单提交 303 回到来源页
pub(super) fn reply_response(headers: &HeaderMap, reply: ActionReply, back_to: &str) -> Response {
    if wants_json(headers) {
        return Json(reply).into_response();
    }

    let query = FlashQuery::new(reply.message, reply.success);
    match serde_urlencoded::to_string(&query) {
        Ok(qs) => Redirect::to(&format!("{}?{}", back_to, qs)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "flash 编码失败");
            Redirect::to(back_to).into_response()
        }
    }
}

// ==========================================
// 阻塞调用
// ==========================================

/// 在阻塞线程池中执行同步 API（SQLite / 文件 IO）
pub(super) async fn run_blocking<T, F>(f: F) -> ApiResult<T>
where
    F: FnOnce() -> ApiResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::InternalError(format!("后台任务失败: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_wants_json() {
        let mut headers = HeaderMap::new();
        assert!(!wants_json(&headers));

        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json, */*"));
        assert!(wants_json(&headers));

        let mut headers = HeaderMap::new();
        headers.insert("x-requested-with", HeaderValue::from_static("XMLHttpRequest"));
        assert!(wants_json(&headers));
    }

    #[test]
    fn test_form_post_redirects_with_encoded_flash() {
        let headers = HeaderMap::new();
        let resp = reply_response(&headers, ActionReply::ok("Staff created successfully!"), "/");
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let location = resp
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert_eq!(location, "/?flash=Staff+created+successfully%21&ok=true");
    }

    #[test]
    fn test_flash_ok_tolerates_malformed_values() {
        let flash = |ok: Option<&str>| FlashQuery {
            flash: Some("hi".into()),
            ok: ok.map(str::to_string),
        };
        assert_eq!(flash(Some("true")).message(), Some(("hi", true)));
        assert_eq!(flash(Some("")).message(), Some(("hi", false)));
        assert_eq!(flash(Some("yes")).message(), Some(("hi", false)));
        assert_eq!(flash(None).message(), Some(("hi", false)));
        assert_eq!(FlashQuery::default().message(), None);
    }

    #[test]
    fn test_parse_path_id() {
        assert_eq!(parse_path_id("42", "staff.not_found").unwrap(), 42);
        match parse_path_id("abc", "staff.not_found") {
            Err(ApiError::NotFound(msg)) => assert_eq!(msg, "Staff not found"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&ApiError::NotFound("x".into())), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&ApiError::BusinessRuleViolation("fk".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&ApiError::FileStorageError("io".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
