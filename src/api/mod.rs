// ==========================================
// 自行车门店管理后台 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 HTTP 处理函数调用
// ==========================================

pub mod error;
pub mod forms;
pub mod home_api;
pub mod maintain_api;
pub mod reply;
pub mod report_api;
pub mod validator;

// 重导出核心类型
pub use error::{ApiError, ApiResult, ValidationViolation};
pub use forms::{CustomerForm, ProductForm, SaveReportForm, StaffForm};
pub use home_api::{HomeApi, HomeOverview};
pub use maintain_api::{MaintainApi, MaintainOverview};
pub use reply::ActionReply;
pub use report_api::{FileDownload, ReportApi, ReportOverview};
pub use validator::FormValidator;
