// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、基础数据准备
// ==========================================

#![allow(dead_code)]

use rusqlite::Connection;
use std::error::Error;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

use bike_store_admin::db::open_and_init;

/// 创建临时测试数据库并初始化 schema
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    // 建表后立即释放连接
    drop(open_and_init(&db_path)?);

    Ok((temp_file, db_path))
}

/// 打开已初始化的测试库（共享连接）
pub fn open_shared(db_path: &str) -> Result<Arc<Mutex<Connection>>, Box<dyn Error>> {
    Ok(Arc::new(Mutex::new(open_and_init(db_path)?)))
}

/// 基础字典数据的主键
#[derive(Debug, Clone, Copy)]
pub struct LookupIds {
    pub trek: i64,
    pub electra: i64,
    pub surly: i64,
    pub mountain: i64,
    pub cruisers: i64,
    pub santa_cruz: i64,
    pub baldwin: i64,
}

/// 写入品牌/品类/门店
pub fn insert_lookups(conn: &Connection) -> rusqlite::Result<LookupIds> {
    let insert = |sql: &str, name: &str| -> rusqlite::Result<i64> {
        conn.execute(sql, [name])?;
        Ok(conn.last_insert_rowid())
    };

    let trek = insert("INSERT INTO brands (brand_name) VALUES (?1)", "Trek")?;
    let electra = insert("INSERT INTO brands (brand_name) VALUES (?1)", "Electra")?;
    let surly = insert("INSERT INTO brands (brand_name) VALUES (?1)", "Surly")?;
    let mountain = insert("INSERT INTO categories (category_name) VALUES (?1)", "Mountain Bikes")?;
    let cruisers = insert("INSERT INTO categories (category_name) VALUES (?1)", "Cruisers Bicycles")?;
    let santa_cruz = insert("INSERT INTO stores (store_name) VALUES (?1)", "Santa Cruz Bikes")?;
    let baldwin = insert("INSERT INTO stores (store_name) VALUES (?1)", "Baldwin Bikes")?;

    Ok(LookupIds {
        trek,
        electra,
        surly,
        mountain,
        cruisers,
        santa_cruz,
        baldwin,
    })
}
