// ==========================================
// 自行车门店管理后台 - 员工数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::staff::{NewStaff, Staff, StaffWithStore};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

const STAFF_COLUMNS: &str =
    "s.staff_id, s.first_name, s.last_name, s.email, s.phone, s.active, s.store_id, s.manager_id";

// ==========================================
// StaffRepository - 员工仓储
// ==========================================
/// 员工仓储
/// 职责: 管理 staffs 表的 CRUD 操作
pub struct StaffRepository {
    conn: Arc<Mutex<Connection>>,
}

impl StaffRepository {
    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 新增员工
    ///
    /// # 返回
    /// - Ok(i64): 新员工ID
    /// - Err: 数据库错误（含唯一/外键约束违反）
    pub fn insert(&self, staff: &NewStaff) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO staffs (first_name, last_name, email, phone, active, store_id, manager_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                staff.first_name,
                staff.last_name,
                staff.email,
                staff.phone,
                staff.active,
                staff.store_id,
                staff.manager_id,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 按主键查询
    ///
    /// # 返回
    /// - Ok(Some(Staff)): 找到员工
    /// - Ok(None): 未找到
    /// - Err: 数据库错误
    pub fn find_by_id(&self, staff_id: i64) -> RepositoryResult<Option<Staff>> {
        let conn = self.get_conn()?;
        let sql = format!("SELECT {} FROM staffs s WHERE s.staff_id = ?1", STAFF_COLUMNS);
        let staff = conn
            .query_row(&sql, params![staff_id], map_staff_row)
            .optional()?;
        Ok(staff)
    }

    /// 查询全部员工（按ID升序）
    pub fn find_all(&self) -> RepositoryResult<Vec<Staff>> {
        let conn = self.get_conn()?;
        let sql = format!("SELECT {} FROM staffs s ORDER BY s.staff_id ASC", STAFF_COLUMNS);
        let mut stmt = conn.prepare(&sql)?;
        let staffs = stmt
            .query_map([], map_staff_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(staffs)
    }

    /// 查询全部员工并附带门店名称
    pub fn find_all_with_store(&self) -> RepositoryResult<Vec<StaffWithStore>> {
        let conn = self.get_conn()?;
        let sql = format!(
            r#"
            SELECT {}, st.store_name
            FROM staffs s
            LEFT JOIN stores st ON st.store_id = s.store_id
            ORDER BY s.staff_id ASC
            "#,
            STAFF_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StaffWithStore {
                    staff: map_staff_row(row)?,
                    store_name: row.get(8)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    /// 整行更新
    ///
    /// # 返回
    /// - Ok(()): 更新成功
    /// - Err(NotFound): 主键不存在
    pub fn update(&self, staff: &Staff) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            r#"
            UPDATE staffs
            SET first_name = ?2, last_name = ?3, email = ?4, phone = ?5,
                active = ?6, store_id = ?7, manager_id = ?8
            WHERE staff_id = ?1
            "#,
            params![
                staff.staff_id,
                staff.first_name,
                staff.last_name,
                staff.email,
                staff.phone,
                staff.active,
                staff.store_id,
                staff.manager_id,
            ],
        )?;

        if affected == 0 {
            return Err(RepositoryError::not_found("Staff", staff.staff_id));
        }
        Ok(())
    }

    /// 删除员工
    ///
    /// # 返回
    /// - Ok(true): 已删除
    /// - Ok(false): 主键不存在
    /// - Err(ForeignKeyViolation): 仍被订单或下属引用
    pub fn delete(&self, staff_id: i64) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM staffs WHERE staff_id = ?1", params![staff_id])?;
        Ok(affected > 0)
    }

    /// 主键是否存在
    pub fn exists(&self, staff_id: i64) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let found = conn
            .query_row(
                "SELECT 1 FROM staffs WHERE staff_id = ?1",
                params![staff_id],
                |_row| Ok(true),
            )
            .optional()?
            .unwrap_or(false);
        Ok(found)
    }
}

fn map_staff_row(row: &Row<'_>) -> SqliteResult<Staff> {
    Ok(Staff {
        staff_id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        active: row.get(5)?,
        store_id: row.get(6)?,
        manager_id: row.get(7)?,
    })
}
