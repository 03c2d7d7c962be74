// ==========================================
// 自行车门店管理后台 - 领域模型层
// ==========================================
// 职责: 定义领域实体、报表行类型
// 红线: 不含数据访问逻辑
// ==========================================

pub mod customer;
pub mod lookup;
pub mod order;
pub mod product;
pub mod report;
pub mod staff;

// 重导出核心类型
pub use customer::{Customer, NewCustomer};
pub use lookup::{Brand, Category, Store};
pub use order::{NewOrder, Order, OrderItem, OrderStatus};
pub use product::{NewProduct, Product, ProductFilter, ProductRow};
pub use report::{
    BrandSales, CustomerOrderCount, ReportDataItem, ReportFileType, ReportKind, SavedFileInfo,
};
pub use staff::{NewStaff, Staff, StaffWithStore};
