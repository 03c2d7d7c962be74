// ==========================================
// 自行车门店管理后台 - 操作回执
// ==========================================
// 所有写操作统一回执 {success, message}；失败时附带错误代码
// ==========================================

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::i18n;

/// 操作回执
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionReply {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ActionReply {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            code: None,
        }
    }

    pub fn fail(message: impl Into<String>, code: &str) -> Self {
        Self {
            success: false,
            message: message.into(),
            code: Some(code.to_string()),
        }
    }

    /// 通用失败回执
    ///
    /// - 校验失败: "Validation failed: a, b"
    /// - 未找到: 原样输出（如 "Staff not found"）
    /// - 其他: "Error: <message>"
    pub fn from_error(err: &ApiError) -> Self {
        let message = match err {
            ApiError::ValidationFailed(_) => i18n::t_with_args(
                "common.validation_failed",
                &[("errors", err.user_message().as_str())],
            ),
            ApiError::NotFound(msg) => msg.clone(),
            _ => i18n::t_with_args("common.error", &[("message", err.user_message().as_str())]),
        };
        Self::fail(message, err.code())
    }

    /// 报表文件操作失败回执，使用指定的消息模板（含 %{message}）
    ///
    /// 未找到仍原样输出。
    pub fn from_file_error(err: &ApiError, template_key: &str) -> Self {
        let message = match err {
            ApiError::NotFound(msg) => msg.clone(),
            _ => i18n::t_with_args(template_key, &[("message", err.user_message().as_str())]),
        };
        Self::fail(message, err.code())
    }

    /// 成功时使用 success_key 对应的消息
    pub fn from_result<T>(result: &ApiResult<T>, success_key: &str) -> Self {
        match result {
            Ok(_) => Self::ok(i18n::t(success_key)),
            Err(err) => Self::from_error(err),
        }
    }
}
