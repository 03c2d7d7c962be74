// ==========================================
// 自行车门店管理后台 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 说明: 所有仓储共享同一个 SQLite 连接（Arc<Mutex<Connection>>）
// ==========================================

use anyhow::Context;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::api::{HomeApi, MaintainApi, ReportApi};
use crate::config::{AppConfig, ConfigManager};
use crate::db;
use crate::report::ReportFileStore;
use crate::repository::{
    CustomerRepository, LookupRepository, ProductRepository, ReportRepository, StaffRepository,
};

/// 应用状态
///
/// 包含所有API实例和共享资源；克隆开销仅为引用计数
#[derive(Clone)]
pub struct AppState {
    /// 首页API
    pub home_api: Arc<HomeApi>,

    /// 数据维护API
    pub maintain_api: Arc<MaintainApi>,

    /// 报表API
    pub report_api: Arc<ReportApi>,
}

impl AppState {
    /// 按进程配置创建应用状态
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 打开数据库并幂等建表
    /// 2. 初始化所有Repository
    /// 3. 创建所有API实例
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        tracing::info!(
            db_path = %config.db_path.display(),
            reports_dir = %config.reports_dir.display(),
            "初始化AppState"
        );

        config.ensure_db_dir()?;
        let conn = db::open_and_init(config.db_path_str()?)
            .with_context(|| format!("无法打开数据库: {}", config.db_path.display()))?;

        let state = Self::from_connection(Arc::new(Mutex::new(conn)), config.reports_dir.clone());
        tracing::info!("AppState初始化完成");
        Ok(state)
    }

    /// 从已初始化的连接创建（测试与内存库使用）
    pub fn from_connection(conn: Arc<Mutex<Connection>>, reports_dir: PathBuf) -> Self {
        // ==========================================
        // 初始化Repository层
        // ==========================================
        let staff_repo = Arc::new(StaffRepository::from_connection(conn.clone()));
        let customer_repo = Arc::new(CustomerRepository::from_connection(conn.clone()));
        let product_repo = Arc::new(ProductRepository::from_connection(conn.clone()));
        let lookup_repo = Arc::new(LookupRepository::from_connection(conn.clone()));
        let report_repo = Arc::new(ReportRepository::from_connection(conn.clone()));
        let config_manager = Arc::new(ConfigManager::from_connection(conn));
        let file_store = Arc::new(ReportFileStore::new(reports_dir));

        // ==========================================
        // 初始化API层
        // ==========================================
        let home_api = Arc::new(HomeApi::new(
            staff_repo.clone(),
            customer_repo.clone(),
            product_repo.clone(),
            lookup_repo.clone(),
        ));
        let maintain_api = Arc::new(MaintainApi::new(
            staff_repo,
            customer_repo,
            product_repo,
            lookup_repo,
        ));
        let report_api = Arc::new(ReportApi::new(report_repo, config_manager, file_store));

        Self {
            home_api,
            maintain_api,
            report_api,
        }
    }
}
