// ==========================================
// 自行车门店管理后台 - 客户数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::customer::{Customer, NewCustomer};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

const CUSTOMER_COLUMNS: &str =
    "customer_id, first_name, last_name, phone, email, street, city, state, zip_code";

// ==========================================
// CustomerRepository - 客户仓储
// ==========================================
/// 客户仓储
/// 职责: 管理 customers 表的 CRUD 操作
pub struct CustomerRepository {
    conn: Arc<Mutex<Connection>>,
}

impl CustomerRepository {
    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 新增客户，返回新客户ID
    pub fn insert(&self, customer: &NewCustomer) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO customers (first_name, last_name, phone, email, street, city, state, zip_code)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                customer.first_name,
                customer.last_name,
                customer.phone,
                customer.email,
                customer.street,
                customer.city,
                customer.state,
                customer.zip_code,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 按主键查询
    pub fn find_by_id(&self, customer_id: i64) -> RepositoryResult<Option<Customer>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM customers WHERE customer_id = ?1",
            CUSTOMER_COLUMNS
        );
        let customer = conn
            .query_row(&sql, params![customer_id], map_customer_row)
            .optional()?;
        Ok(customer)
    }

    /// 查询全部客户（按ID升序）
    pub fn find_all(&self) -> RepositoryResult<Vec<Customer>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM customers ORDER BY customer_id ASC",
            CUSTOMER_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let customers = stmt
            .query_map([], map_customer_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(customers)
    }

    /// 整行更新，主键不存在时返回 NotFound
    pub fn update(&self, customer: &Customer) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            r#"
            UPDATE customers
            SET first_name = ?2, last_name = ?3, phone = ?4, email = ?5,
                street = ?6, city = ?7, state = ?8, zip_code = ?9
            WHERE customer_id = ?1
            "#,
            params![
                customer.customer_id,
                customer.first_name,
                customer.last_name,
                customer.phone,
                customer.email,
                customer.street,
                customer.city,
                customer.state,
                customer.zip_code,
            ],
        )?;

        if affected == 0 {
            return Err(RepositoryError::not_found("Customer", customer.customer_id));
        }
        Ok(())
    }

    /// 删除客户
    ///
    /// # 返回
    /// - Ok(true): 已删除
    /// - Ok(false): 主键不存在
    /// - Err(ForeignKeyViolation): 仍被订单引用
    pub fn delete(&self, customer_id: i64) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "DELETE FROM customers WHERE customer_id = ?1",
            params![customer_id],
        )?;
        Ok(affected > 0)
    }
}

fn map_customer_row(row: &Row<'_>) -> SqliteResult<Customer> {
    Ok(Customer {
        customer_id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        phone: row.get(3)?,
        email: row.get(4)?,
        street: row.get(5)?,
        city: row.get(6)?,
        state: row.get(7)?,
        zip_code: row.get(8)?,
    })
}
