use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Form;
use serde::Deserialize;

use crate::api::{ActionReply, CustomerForm, ProductForm, StaffForm};
use crate::app::state::AppState;
use crate::app::views;
use crate::domain::product::ProductFilter;

use super::common::{html_result, json_result, reply_response, run_blocking, FlashQuery};

// ==========================================
// 首页相关处理函数
// ==========================================

const HOME_PATH: &str = "/";

/// 首页
pub async fn index(State(state): State<AppState>, Query(flash): Query<FlashQuery>) -> Response {
    let api = state.home_api.clone();
    let result = run_blocking(move || api.overview()).await;
    html_result(result.map(|overview| views::home::render(&overview, &flash)))
}

/// 新增员工
pub async fn create_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<StaffForm>,
) -> Response {
    let api = state.home_api.clone();
    let result = run_blocking(move || api.create_staff(&form)).await;
    reply_response(&headers, ActionReply::from_result(&result, "staff.created"), HOME_PATH)
}

/// 新增客户
pub async fn create_customer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<CustomerForm>,
) -> Response {
    let api = state.home_api.clone();
    let result = run_blocking(move || api.create_customer(&form)).await;
    reply_response(&headers, ActionReply::from_result(&result, "customer.created"), HOME_PATH)
}

/// 新增商品
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ProductForm>,
) -> Response {
    let api = state.home_api.clone();
    let result = run_blocking(move || api.create_product(&form)).await;
    reply_response(&headers, ActionReply::from_result(&result, "product.created"), HOME_PATH)
}

/// 商品筛选参数；非数字按未填写处理
#[derive(Debug, Default, Deserialize)]
pub struct ProductFilterQuery {
    #[serde(default, alias = "brandId")]
    pub brand_id: Option<String>,
    #[serde(default, alias = "categoryId")]
    pub category_id: Option<String>,
}

impl ProductFilterQuery {
    fn to_filter(&self) -> ProductFilter {
        let parse = |v: &Option<String>| v.as_deref().and_then(|s| s.trim().parse::<i64>().ok());
        ProductFilter::new(parse(&self.brand_id), parse(&self.category_id))
    }
}

/// 按品牌/品类筛选商品（JSON）
pub async fn filter_products(
    State(state): State<AppState>,
    Query(query): Query<ProductFilterQuery>,
) -> Response {
    let api = state.home_api.clone();
    let filter = query.to_filter();
    json_result(run_blocking(move || api.filter_products(&filter)).await)
}
