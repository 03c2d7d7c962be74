// ==========================================
// 自行车门店管理后台 - 报表文件层
// ==========================================
// 职责:
// - 报表内容渲染（去标签文本 / CSV）
// - 报表文件落盘、列表、下载、删除
// - 描述 sidecar 文件（<文件名>.description.txt）
// 约束: 只接受不含路径分隔符的裸文件名
// ==========================================

pub mod error;
pub mod file_store;
pub mod render;

pub use error::{ReportFileError, ReportFileResult};
pub use file_store::{ReportFileStore, DESCRIPTION_SUFFIX};
pub use render::{is_bare_file_name, rows_to_csv, sanitize_file_name, strip_tags};
