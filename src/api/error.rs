// ==========================================
// 自行车门店管理后台 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换仓储/文件层错误为用户可读的错误消息
// ==========================================

use crate::i18n;
use crate::repository::error::RepositoryError;
use crate::report::error::ReportFileError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入/业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 表单字段校验失败（带逐字段原因）
    #[error("表单校验失败: {}", join_reasons(.0))]
    ValidationFailed(Vec<ValidationViolation>),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("业务规则违反: {0}")]
    BusinessRuleViolation(String),

    // ==========================================
    // 数据访问错误
    // ==========================================
    #[error("数据库错误: {0}")]
    DatabaseError(String),

    #[error("数据库连接失败: {0}")]
    DatabaseConnectionError(String),

    #[error("报表文件读写失败: {0}")]
    FileStorageError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 错误代码（供 HTTP 层输出）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::ValidationFailed(_) => "VALIDATION_FAILED",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BusinessRuleViolation(_) => "BUSINESS_RULE_VIOLATION",
            ApiError::DatabaseError(_) => "DATABASE_ERROR",
            ApiError::DatabaseConnectionError(_) => "DATABASE_CONNECTION_ERROR",
            ApiError::FileStorageError(_) => "FILE_STORAGE_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
    }

    /// 面向用户的消息正文（不带分类前缀）
    pub fn user_message(&self) -> String {
        match self {
            ApiError::InvalidInput(msg)
            | ApiError::NotFound(msg)
            | ApiError::BusinessRuleViolation(msg)
            | ApiError::DatabaseError(msg)
            | ApiError::DatabaseConnectionError(msg)
            | ApiError::FileStorageError(msg)
            | ApiError::InternalError(msg) => msg.clone(),
            ApiError::ValidationFailed(violations) => join_reasons(violations),
            ApiError::Other(err) => err.to_string(),
        }
    }
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, .. } => ApiError::NotFound(
                i18n::t_with_args("common.not_found", &[("entity", entity.as_str())]),
            ),
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseConnectionError(format!("数据库锁获取失败: {}", msg))
            }
            RepositoryError::DatabaseTransactionError(msg)
            | RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),

            // 约束失败保留 SQLite 原文，便于定位被引用的记录
            RepositoryError::UniqueConstraintViolation(msg)
            | RepositoryError::ForeignKeyViolation(msg) => ApiError::BusinessRuleViolation(msg),

            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

// ==========================================
// 从 ReportFileError 转换
// ==========================================
impl From<ReportFileError> for ApiError {
    fn from(err: ReportFileError) -> Self {
        match err {
            ReportFileError::InvalidFileName(_) => {
                ApiError::InvalidInput(i18n::t("report.invalid_file_name"))
            }
            ReportFileError::UnsupportedFileType(file_type) => ApiError::InvalidInput(
                i18n::t_with_args("report.unsupported_type", &[("file_type", file_type.as_str())]),
            ),
            ReportFileError::NotFound(_) => ApiError::NotFound(i18n::t("report.file_not_found")),
            ReportFileError::Csv(msg) => ApiError::InternalError(msg),
            ReportFileError::Io(e) => ApiError::FileStorageError(e.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 校验违规详情
// ==========================================

/// 校验违规详情
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationViolation {
    /// 表单字段名
    pub field: String,
    /// 违规原因（已本地化）
    pub reason: String,
}

impl ValidationViolation {
    pub fn new(field: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

fn join_reasons(violations: &[ValidationViolation]) -> String {
    violations
        .iter()
        .map(|v| v.reason.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
