// ==========================================
// 自行车门店管理后台 - 应用层
// ==========================================
// 职责: HTTP 集成（axum 路由、处理函数、服务端页面）
// ==========================================

pub mod http;
pub mod state;
pub mod views;

// 重导出
pub use http::build_router;
pub use state::AppState;
