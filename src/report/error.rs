// ==========================================
// 报表文件层错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportFileError {
    #[error("无效的文件名: {0}")]
    InvalidFileName(String),

    #[error("不支持的文件类型: {0}")]
    UnsupportedFileType(String),

    #[error("文件不存在: {0}")]
    NotFound(String),

    #[error("CSV 生成失败: {0}")]
    Csv(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for ReportFileError {
    fn from(err: csv::Error) -> Self {
        ReportFileError::Csv(err.to_string())
    }
}

pub type ReportFileResult<T> = Result<T, ReportFileError>;
