// ==========================================
// 自行车门店管理后台 - 字典类实体
// ==========================================
// 对齐: brands / categories / stores 表
// 用途: 下拉框、筛选条件、外键存在性校验
// ==========================================

use serde::{Deserialize, Serialize};

/// 品牌
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub brand_id: i64,
    pub brand_name: String,
}

/// 商品类别
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: i64,
    pub category_name: String,
}

/// 门店
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub store_id: i64,
    pub store_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}
