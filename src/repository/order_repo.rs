// ==========================================
// 自行车门店管理后台 - 订单数据仓储
// ==========================================
// 说明: 订单不在界面维护；此仓储供初始化数据、测试数据写入及明细查询
// ==========================================

use crate::domain::order::{NewOrder, Order, OrderItem, OrderStatus};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::sync::{Arc, Mutex};

const DATE_FMT: &str = "%Y-%m-%d";

/// 订单仓储
/// 职责: 管理 orders / order_items 表
pub struct OrderRepository {
    conn: Arc<Mutex<Connection>>,
}

impl OrderRepository {
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 新增订单头，返回订单ID
    pub fn insert_order(&self, order: &NewOrder) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO orders (
                customer_id, order_status, order_date, required_date, shipped_date,
                store_id, staff_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                order.customer_id,
                order.order_status.to_db(),
                order.order_date.format(DATE_FMT).to_string(),
                order.required_date.format(DATE_FMT).to_string(),
                order.shipped_date.map(|d| d.format(DATE_FMT).to_string()),
                order.store_id,
                order.staff_id,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 新增订单头及其订单行（同一事务）
    ///
    /// 订单行的 order_id / item_id 由本方法填写（item_id 从 1 递增）
    pub fn insert_order_with_items(
        &self,
        order: &NewOrder,
        items: &[OrderItem],
    ) -> RepositoryResult<i64> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        tx.execute(
            r#"
            INSERT INTO orders (
                customer_id, order_status, order_date, required_date, shipped_date,
                store_id, staff_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                order.customer_id,
                order.order_status.to_db(),
                order.order_date.format(DATE_FMT).to_string(),
                order.required_date.format(DATE_FMT).to_string(),
                order.shipped_date.map(|d| d.format(DATE_FMT).to_string()),
                order.store_id,
                order.staff_id,
            ],
        )?;
        let order_id = tx.last_insert_rowid();

        for (idx, item) in items.iter().enumerate() {
            tx.execute(
                r#"
                INSERT INTO order_items (order_id, item_id, product_id, quantity, list_price, discount)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
                params![
                    order_id,
                    (idx + 1) as i64,
                    item.product_id,
                    item.quantity,
                    item.list_price,
                    item.discount,
                ],
            )?;
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(order_id)
    }

    /// 按主键查询订单头
    pub fn find_by_id(&self, order_id: i64) -> RepositoryResult<Option<Order>> {
        let conn = self.get_conn()?;
        let order = conn
            .query_row(
                r#"
                SELECT order_id, customer_id, order_status, order_date, required_date,
                       shipped_date, store_id, staff_id
                FROM orders
                WHERE order_id = ?1
                "#,
                params![order_id],
                |row| {
                    Ok(Order {
                        order_id: row.get(0)?,
                        customer_id: row.get(1)?,
                        order_status: OrderStatus::from_db(row.get(2)?),
                        order_date: parse_date(&row.get::<_, String>(3)?),
                        required_date: parse_date(&row.get::<_, String>(4)?),
                        shipped_date: row
                            .get::<_, Option<String>>(5)?
                            .and_then(|s| NaiveDate::parse_from_str(&s, DATE_FMT).ok()),
                        store_id: row.get(6)?,
                        staff_id: row.get(7)?,
                    })
                },
            )
            .optional()?;
        Ok(order)
    }

    /// 查询订单的全部订单行
    pub fn find_items_by_order(&self, order_id: i64) -> RepositoryResult<Vec<OrderItem>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT order_id, item_id, product_id, quantity, list_price, discount
            FROM order_items
            WHERE order_id = ?1
            ORDER BY item_id ASC
            "#,
        )?;
        let items = stmt
            .query_map(params![order_id], |row| {
                Ok(OrderItem {
                    order_id: row.get(0)?,
                    item_id: row.get(1)?,
                    product_id: row.get(2)?,
                    quantity: row.get(3)?,
                    list_price: row.get(4)?,
                    discount: row.get(5)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(items)
    }

    /// 订单总数
    pub fn count_orders(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM orders", [], |row| row.get(0))?;
        Ok(count)
    }
}

// 日期列损坏时回退到 1970-01-01
fn parse_date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, DATE_FMT).unwrap_or_default()
}
