// ==========================================
// 自行车门店管理后台 - 报表聚合仓储
// ==========================================
// 职责: 订单/订单行的 group-by 聚合查询
// 约束: 同值排序按主键升序，保证排行稳定
// ==========================================

use crate::domain::report::{BrandSales, CustomerOrderCount, ReportDataItem};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

/// 报表聚合仓储（只读）
pub struct ReportRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ReportRepository {
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 热销商品排行
    ///
    /// # 参数
    /// - limit: 返回条数
    ///
    /// # 返回
    /// - 按订单行数降序的商品列表（label=商品名，value=订单行数）
    pub fn popular_products(&self, limit: u32) -> RepositoryResult<Vec<ReportDataItem>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT p.product_name, COUNT(*) AS total_orders, b.brand_name, c.category_name
            FROM order_items oi
            JOIN products p ON p.product_id = oi.product_id
            LEFT JOIN brands b ON b.brand_id = p.brand_id
            LEFT JOIN categories c ON c.category_id = p.category_id
            GROUP BY oi.product_id
            ORDER BY total_orders DESC, oi.product_id ASC
            LIMIT ?1
            "#,
        )?;

        let rows = stmt
            .query_map(params![limit], |row| {
                Ok(ReportDataItem {
                    label: row.get(0)?,
                    value: row.get(1)?,
                    brand: row.get(2)?,
                    category: row.get(3)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(rows)
    }

    /// 品牌销售额
    ///
    /// total_sales = Σ quantity × list_price × (1 − discount)，按品牌名称分组，降序
    pub fn sales_by_brand(&self) -> RepositoryResult<Vec<BrandSales>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT b.brand_name,
                   SUM(oi.quantity * oi.list_price * (1 - oi.discount)) AS total_sales
            FROM order_items oi
            JOIN products p ON p.product_id = oi.product_id
            JOIN brands b ON b.brand_id = p.brand_id
            GROUP BY b.brand_name
            ORDER BY total_sales DESC, b.brand_name ASC
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(BrandSales {
                    brand: row.get(0)?,
                    total_sales: row.get(1)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(rows)
    }

    /// 客户下单排行（忽略无客户的订单）
    pub fn top_customers(&self, limit: u32) -> RepositoryResult<Vec<CustomerOrderCount>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT c.first_name, c.last_name, COUNT(*) AS order_count
            FROM orders o
            JOIN customers c ON c.customer_id = o.customer_id
            WHERE o.customer_id IS NOT NULL
            GROUP BY o.customer_id
            ORDER BY order_count DESC, o.customer_id ASC
            LIMIT ?1
            "#,
        )?;

        let rows = stmt
            .query_map(params![limit], |row| {
                let first: String = row.get(0)?;
                let last: String = row.get(1)?;
                Ok(CustomerOrderCount {
                    customer_name: format!("{} {}", first, last),
                    order_count: row.get(2)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(rows)
    }
}
