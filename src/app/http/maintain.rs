use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Form;

use crate::api::{ActionReply, CustomerForm, ProductForm, StaffForm};
use crate::app::state::AppState;
use crate::app::views;

use super::common::{
    html_result, json_success, parse_path_id, reply_response, run_blocking, FlashQuery,
};

// ==========================================
// 数据维护相关处理函数
// ==========================================

const MAINTAIN_PATH: &str = "/maintain";

/// 维护页
pub async fn index(State(state): State<AppState>, Query(flash): Query<FlashQuery>) -> Response {
    let api = state.maintain_api.clone();
    let result = run_blocking(move || api.overview()).await;
    html_result(result.map(|overview| views::maintain::render(&overview, &flash)))
}

// ===== 员工 =====

pub async fn get_staff(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let api = state.maintain_api.clone();
    json_success(
        run_blocking(move || {
            let staff_id = parse_path_id(&raw_id, "staff.not_found")?;
            api.get_staff(staff_id)
        })
        .await,
    )
}

pub async fn edit_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<StaffForm>,
) -> Response {
    let api = state.maintain_api.clone();
    let result = run_blocking(move || api.edit_staff(&form)).await;
    reply_response(&headers, ActionReply::from_result(&result, "staff.updated"), MAINTAIN_PATH)
}

pub async fn delete_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
) -> Response {
    let api = state.maintain_api.clone();
    let result = run_blocking(move || {
        let staff_id = parse_path_id(&raw_id, "staff.not_found")?;
        api.delete_staff(staff_id)
    })
    .await;
    reply_response(&headers, ActionReply::from_result(&result, "staff.deleted"), MAINTAIN_PATH)
}

// ===== 客户 =====

pub async fn get_customer(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let api = state.maintain_api.clone();
    json_success(
        run_blocking(move || {
            let customer_id = parse_path_id(&raw_id, "customer.not_found")?;
            api.get_customer(customer_id)
        })
        .await,
    )
}

pub async fn edit_customer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<CustomerForm>,
) -> Response {
    let api = state.maintain_api.clone();
    let result = run_blocking(move || api.edit_customer(&form)).await;
    reply_response(&headers, ActionReply::from_result(&result, "customer.updated"), MAINTAIN_PATH)
}

pub async fn delete_customer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
) -> Response {
    let api = state.maintain_api.clone();
    let result = run_blocking(move || {
        let customer_id = parse_path_id(&raw_id, "customer.not_found")?;
        api.delete_customer(customer_id)
    })
    .await;
    reply_response(&headers, ActionReply::from_result(&result, "customer.deleted"), MAINTAIN_PATH)
}

// ===== 商品 =====

pub async fn get_product(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let api = state.maintain_api.clone();
    json_success(
        run_blocking(move || {
            let product_id = parse_path_id(&raw_id, "product.not_found")?;
            api.get_product(product_id)
        })
        .await,
    )
}

pub async fn edit_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ProductForm>,
) -> Response {
    let api = state.maintain_api.clone();
    let result = run_blocking(move || api.edit_product(&form)).await;
    reply_response(&headers, ActionReply::from_result(&result, "product.updated"), MAINTAIN_PATH)
}

pub async fn delete_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
) -> Response {
    let api = state.maintain_api.clone();
    let result = run_blocking(move || {
        let product_id = parse_path_id(&raw_id, "product.not_found")?;
        api.delete_product(product_id)
    })
    .await;
    reply_response(&headers, ActionReply::from_result(&result, "product.deleted"), MAINTAIN_PATH)
}
