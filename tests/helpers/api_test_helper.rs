// ==========================================
// API集成测试辅助工具
// ==========================================
// 职责: 提供API层集成测试的通用辅助函数
// ==========================================

#![allow(dead_code)]

use chrono::NaiveDate;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tempfile::{NamedTempFile, TempDir};

use bike_store_admin::api::{ApiError, HomeApi, MaintainApi, ReportApi};
use bike_store_admin::app::AppState;
use bike_store_admin::config::ConfigManager;
use bike_store_admin::domain::{NewOrder, OrderItem, OrderStatus};
use bike_store_admin::repository::{
    CustomerRepository, LookupRepository, OrderRepository, ProductRepository, StaffRepository,
};

use crate::test_helpers::{create_test_db, insert_lookups, open_shared, LookupIds};

// ==========================================
// API测试环境
// ==========================================

/// API测试环境
///
/// 包含所有API实例和必要的依赖
pub struct ApiTestEnv {
    pub db_path: String,
    pub state: AppState,
    pub home_api: Arc<HomeApi>,
    pub maintain_api: Arc<MaintainApi>,
    pub report_api: Arc<ReportApi>,
    pub config_manager: Arc<ConfigManager>,

    // Repository层（用于测试数据准备）
    pub conn: Arc<Mutex<Connection>>,
    pub staff_repo: Arc<StaffRepository>,
    pub customer_repo: Arc<CustomerRepository>,
    pub product_repo: Arc<ProductRepository>,
    pub lookup_repo: Arc<LookupRepository>,
    pub order_repo: Arc<OrderRepository>,

    pub lookups: LookupIds,

    // 临时文件（确保生命周期）
    pub reports_dir: TempDir,
    _temp_file: NamedTempFile,
}

impl ApiTestEnv {
    /// 创建新的测试环境（已写入品牌/品类/门店）
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        bike_store_admin::logging::init_test();

        let (temp_file, db_path) = create_test_db()?;
        let conn = open_shared(&db_path)?;

        let lookups = {
            let c = conn.lock().map_err(|e| e.to_string())?;
            insert_lookups(&c)?
        };

        let reports_dir = tempfile::tempdir()?;
        let state = AppState::from_connection(conn.clone(), reports_dir.path().join("Reports"));
        // 与 AppState 内部实例读写同一张 config_kv 表
        let config_manager = Arc::new(ConfigManager::from_connection(conn.clone()));

        Ok(Self {
            db_path,
            home_api: state.home_api.clone(),
            maintain_api: state.maintain_api.clone(),
            report_api: state.report_api.clone(),
            config_manager,
            state,
            staff_repo: Arc::new(StaffRepository::from_connection(conn.clone())),
            customer_repo: Arc::new(CustomerRepository::from_connection(conn.clone())),
            product_repo: Arc::new(ProductRepository::from_connection(conn.clone())),
            lookup_repo: Arc::new(LookupRepository::from_connection(conn.clone())),
            order_repo: Arc::new(OrderRepository::from_connection(conn.clone())),
            conn,
            lookups,
            reports_dir,
            _temp_file: temp_file,
        })
    }

    /// 报表文件实际落盘目录
    pub fn reports_path(&self) -> std::path::PathBuf {
        self.reports_dir.path().join("Reports")
    }

    /// 写入一张订单（行为 (product_id, 数量, 单价, 折扣)）
    pub fn insert_order(
        &self,
        customer_id: Option<i64>,
        staff_id: i64,
        lines: &[(i64, i32, f64, f64)],
    ) -> i64 {
        let date = NaiveDate::from_ymd_opt(2018, 3, 1).unwrap();
        let order = NewOrder {
            customer_id,
            order_status: OrderStatus::Completed,
            order_date: date,
            required_date: date,
            shipped_date: Some(date),
            store_id: self.lookups.santa_cruz,
            staff_id,
        };
        let items = lines
            .iter()
            .map(|&(product_id, quantity, list_price, discount)| OrderItem {
                order_id: 0,
                item_id: 0,
                product_id,
                quantity,
                list_price,
                discount,
            })
            .collect::<Vec<_>>();

        self.order_repo
            .insert_order_with_items(&order, &items)
            .expect("写入订单失败")
    }
}

// ==========================================
// 断言辅助
// ==========================================

/// 断言为校验失败，并返回失败字段列表
pub fn assert_validation_fields(err: &ApiError) -> Vec<String> {
    match err {
        ApiError::ValidationFailed(violations) => {
            violations.iter().map(|v| v.field.clone()).collect()
        }
        other => panic!("应为 ValidationFailed，实际: {:?}", other),
    }
}

/// 断言为 NotFound 并返回消息
pub fn assert_not_found(err: &ApiError) -> String {
    match err {
        ApiError::NotFound(msg) => msg.clone(),
        other => panic!("应为 NotFound，实际: {:?}", other),
    }
}
