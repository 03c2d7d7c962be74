// ==========================================
// 自行车门店管理后台 - 核心库
// ==========================================
// 技术栈: axum + Rust + SQLite
// 系统定位: 员工/客户/商品维护 + 销售报表
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与报表行
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 报表文件层 - 报表落盘/下载/删除
pub mod report;

// 配置层 - 运行配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA/建表）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - HTTP 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    Brand, BrandSales, Category, Customer, CustomerOrderCount, Order, OrderItem, Product,
    ProductRow, ReportDataItem, SavedFileInfo, Staff, Store,
};

// API
pub use api::{HomeApi, MaintainApi, ReportApi};

// 应用
pub use app::{build_router, AppState};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Bike Store Admin";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(!APP_NAME.is_empty());
    }
}
