// ==========================================
// 自行车门店管理后台 - HTTP 路由
// ==========================================
// 页面: GET /, /maintain, /report（HTML，支持 ?flash=&ok= 提示）
// 写操作: POST 表单，JSON 客户端得到 {success, message}，
//         其余 303 重定向回来源页
// ==========================================

mod common;
pub mod home;
pub mod maintain;
pub mod report;

pub use common::FlashQuery;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::app::state::AppState;

/// 构建应用路由
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // 首页
        .route("/", get(home::index))
        .route("/home", get(home::index))
        .route("/home/staff", post(home::create_staff))
        .route("/home/customers", post(home::create_customer))
        .route(
            "/home/products",
            get(home::filter_products).post(home::create_product),
        )
        // 数据维护
        .route("/maintain", get(maintain::index))
        .route("/maintain/staff/edit", post(maintain::edit_staff))
        .route("/maintain/staff/:id", get(maintain::get_staff))
        .route("/maintain/staff/:id/delete", post(maintain::delete_staff))
        .route("/maintain/customers/edit", post(maintain::edit_customer))
        .route("/maintain/customers/:id", get(maintain::get_customer))
        .route("/maintain/customers/:id/delete", post(maintain::delete_customer))
        .route("/maintain/products/edit", post(maintain::edit_product))
        .route("/maintain/products/:id", get(maintain::get_product))
        .route("/maintain/products/:id/delete", post(maintain::delete_product))
        // 报表
        .route("/report", get(report::index))
        .route("/report/popular", get(report::popular_report))
        .route("/report/sales", get(report::sales_report))
        .route("/report/customers", get(report::customer_report))
        .route("/report/save", post(report::save_report))
        .route("/report/files/:file_name", get(report::download_file))
        .route("/report/files/:file_name/delete", post(report::delete_file))
        .route(
            "/report/files/:file_name/description",
            get(report::file_description),
        )
        .route("/report/export/:kind", get(report::export_report))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
