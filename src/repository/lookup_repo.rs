// ==========================================
// 自行车门店管理后台 - 字典表数据仓储
// ==========================================
// 职责: brands / categories / stores 的读取、存在性检查、初始化写入
// ==========================================

use crate::domain::lookup::{Brand, Category, Store};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::sync::{Arc, Mutex};

/// 字典表仓储
pub struct LookupRepository {
    conn: Arc<Mutex<Connection>>,
}

impl LookupRepository {
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 全部品牌（按名称）
    pub fn list_brands(&self) -> RepositoryResult<Vec<Brand>> {
        let conn = self.get_conn()?;
        let mut stmt =
            conn.prepare("SELECT brand_id, brand_name FROM brands ORDER BY brand_name ASC")?;
        let brands = stmt
            .query_map([], |row| {
                Ok(Brand {
                    brand_id: row.get(0)?,
                    brand_name: row.get(1)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(brands)
    }

    /// 全部类别（按名称）
    pub fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT category_id, category_name FROM categories ORDER BY category_name ASC",
        )?;
        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    category_id: row.get(0)?,
                    category_name: row.get(1)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(categories)
    }

    /// 全部门店（按ID）
    pub fn list_stores(&self) -> RepositoryResult<Vec<Store>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT store_id, store_name, phone, email, street, city, state, zip_code
            FROM stores
            ORDER BY store_id ASC
            "#,
        )?;
        let stores = stmt
            .query_map([], |row| {
                Ok(Store {
                    store_id: row.get(0)?,
                    store_name: row.get(1)?,
                    phone: row.get(2)?,
                    email: row.get(3)?,
                    street: row.get(4)?,
                    city: row.get(5)?,
                    state: row.get(6)?,
                    zip_code: row.get(7)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(stores)
    }

    // ==========================================
    // 存在性检查（外键预校验）
    // ==========================================

    pub fn brand_exists(&self, brand_id: i64) -> RepositoryResult<bool> {
        self.exists("SELECT 1 FROM brands WHERE brand_id = ?1", brand_id)
    }

    pub fn category_exists(&self, category_id: i64) -> RepositoryResult<bool> {
        self.exists("SELECT 1 FROM categories WHERE category_id = ?1", category_id)
    }

    pub fn store_exists(&self, store_id: i64) -> RepositoryResult<bool> {
        self.exists("SELECT 1 FROM stores WHERE store_id = ?1", store_id)
    }

    fn exists(&self, sql: &str, id: i64) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let found = conn
            .query_row(sql, params![id], |_row| Ok(true))
            .optional()?
            .unwrap_or(false);
        Ok(found)
    }

    // ==========================================
    // 写入（初始化数据/测试数据）
    // ==========================================

    pub fn insert_brand(&self, brand_name: &str) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO brands (brand_name) VALUES (?1)",
            params![brand_name],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn insert_category(&self, category_name: &str) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO categories (category_name) VALUES (?1)",
            params![category_name],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 新增门店（store.store_id 被忽略，返回新ID）
    pub fn insert_store(&self, store: &Store) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO stores (store_name, phone, email, street, city, state, zip_code)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                store.store_name,
                store.phone,
                store.email,
                store.street,
                store.city,
                store.state,
                store.zip_code,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }
}
