// ==========================================
// 自行车门店管理后台 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// 职责: 提供数据访问接口,屏蔽数据库细节
// 约束: 所有查询使用参数化,防止 SQL 注入
// ==========================================

pub mod customer_repo;
pub mod error;
pub mod lookup_repo;
pub mod order_repo;
pub mod product_repo;
pub mod report_repo;
pub mod staff_repo;

// 重导出核心仓储
pub use customer_repo::CustomerRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use lookup_repo::LookupRepository;
pub use order_repo::OrderRepository;
pub use product_repo::ProductRepository;
pub use report_repo::ReportRepository;
pub use staff_repo::StaffRepository;
