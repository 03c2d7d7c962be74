// ==========================================
// 自行车门店管理后台 - 商品领域模型
// ==========================================
// 对齐: products 表
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Product - 商品
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub brand_id: i64,
    pub category_id: i64,
    pub model_year: i32,
    pub list_price: f64,
}

// ==========================================
// NewProduct - 待插入商品（无主键）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub product_name: String,
    pub brand_id: i64,
    pub category_id: i64,
    pub model_year: i32,
    pub list_price: f64,
}

impl NewProduct {
    pub fn with_id(self, product_id: i64) -> Product {
        Product {
            product_id,
            product_name: self.product_name,
            brand_id: self.brand_id,
            category_id: self.category_id,
            model_year: self.model_year,
            list_price: self.list_price,
        }
    }
}

// ==========================================
// ProductRow - 列表/筛选结果（附品牌、类别名称）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub product_id: i64,
    pub product_name: String,
    pub brand_name: Option<String>,
    pub category_name: Option<String>,
    pub model_year: i32,
    pub list_price: f64,
}

// ==========================================
// ProductFilter - 商品筛选条件
// ==========================================
// 规则: 仅当条件存在且 > 0 时生效
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub brand_id: Option<i64>,
    pub category_id: Option<i64>,
}

impl ProductFilter {
    pub fn new(brand_id: Option<i64>, category_id: Option<i64>) -> Self {
        Self {
            brand_id,
            category_id,
        }
    }

    /// 生效的品牌条件
    pub fn effective_brand(&self) -> Option<i64> {
        self.brand_id.filter(|id| *id > 0)
    }

    /// 生效的类别条件
    pub fn effective_category(&self) -> Option<i64> {
        self.category_id.filter(|id| *id > 0)
    }
}
