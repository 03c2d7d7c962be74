// ==========================================
// 自行车门店管理后台 - 商品数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 约束: 筛选条件全部参数化，防止 SQL 注入
// ==========================================

use crate::domain::product::{NewProduct, Product, ProductFilter, ProductRow};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

const PRODUCT_COLUMNS: &str =
    "product_id, product_name, brand_id, category_id, model_year, list_price";

// ==========================================
// ProductRepository - 商品仓储
// ==========================================
/// 商品仓储
/// 职责: 管理 products 表的 CRUD 操作及按品牌/类别筛选
pub struct ProductRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ProductRepository {
    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 新增商品，返回新商品ID
    pub fn insert(&self, product: &NewProduct) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO products (product_name, brand_id, category_id, model_year, list_price)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                product.product_name,
                product.brand_id,
                product.category_id,
                product.model_year,
                product.list_price,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 按主键查询
    pub fn find_by_id(&self, product_id: i64) -> RepositoryResult<Option<Product>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM products WHERE product_id = ?1",
            PRODUCT_COLUMNS
        );
        let product = conn
            .query_row(&sql, params![product_id], map_product_row)
            .optional()?;
        Ok(product)
    }

    /// 查询全部商品（附品牌/类别名称）
    pub fn find_all_rows(&self) -> RepositoryResult<Vec<ProductRow>> {
        self.filter(&ProductFilter::default())
    }

    /// 按品牌/类别筛选商品
    ///
    /// # 参数
    /// - filter: 条件仅在存在且 > 0 时生效
    ///
    /// # 返回
    /// - Ok(Vec<ProductRow>): 按商品ID升序
    pub fn filter(&self, filter: &ProductFilter) -> RepositoryResult<Vec<ProductRow>> {
        let conn = self.get_conn()?;

        let mut sql = String::from(
            r#"
            SELECT p.product_id, p.product_name, b.brand_name, c.category_name,
                   p.model_year, p.list_price
            FROM products p
            LEFT JOIN brands b ON b.brand_id = p.brand_id
            LEFT JOIN categories c ON c.category_id = p.category_id
            WHERE 1 = 1
            "#,
        );
        let mut values: Vec<Value> = Vec::new();

        if let Some(brand_id) = filter.effective_brand() {
            values.push(Value::from(brand_id));
            sql.push_str(&format!(" AND p.brand_id = ?{}", values.len()));
        }
        if let Some(category_id) = filter.effective_category() {
            values.push(Value::from(category_id));
            sql.push_str(&format!(" AND p.category_id = ?{}", values.len()));
        }
        sql.push_str(" ORDER BY p.product_id ASC");

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(values.iter()), |row| {
                Ok(ProductRow {
                    product_id: row.get(0)?,
                    product_name: row.get(1)?,
                    brand_name: row.get(2)?,
                    category_name: row.get(3)?,
                    model_year: row.get(4)?,
                    list_price: row.get(5)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(rows)
    }

    /// 整行更新，主键不存在时返回 NotFound
    pub fn update(&self, product: &Product) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            r#"
            UPDATE products
            SET product_name = ?2, brand_id = ?3, category_id = ?4,
                model_year = ?5, list_price = ?6
            WHERE product_id = ?1
            "#,
            params![
                product.product_id,
                product.product_name,
                product.brand_id,
                product.category_id,
                product.model_year,
                product.list_price,
            ],
        )?;

        if affected == 0 {
            return Err(RepositoryError::not_found("Product", product.product_id));
        }
        Ok(())
    }

    /// 删除商品
    ///
    /// # 返回
    /// - Ok(true): 已删除
    /// - Ok(false): 主键不存在
    /// - Err(ForeignKeyViolation): 仍被订单行引用
    pub fn delete(&self, product_id: i64) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "DELETE FROM products WHERE product_id = ?1",
            params![product_id],
        )?;
        Ok(affected > 0)
    }
}

fn map_product_row(row: &Row<'_>) -> SqliteResult<Product> {
    Ok(Product {
        product_id: row.get(0)?,
        product_name: row.get(1)?,
        brand_id: row.get(2)?,
        category_id: row.get(3)?,
        model_year: row.get(4)?,
        list_price: row.get(5)?,
    })
}
