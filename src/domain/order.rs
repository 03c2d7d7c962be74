// ==========================================
// 自行车门店管理后台 - 订单领域模型
// ==========================================
// 对齐: orders / order_items 表
// 说明: 订单不在界面维护，仅作为报表聚合的数据来源
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 订单状态 (Order Status)
// ==========================================
// 存储: INTEGER 1-4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,    // 1 待处理
    Processing, // 2 处理中
    Rejected,   // 3 已拒绝
    Completed,  // 4 已完成
}

impl OrderStatus {
    pub fn to_db(self) -> i32 {
        match self {
            OrderStatus::Pending => 1,
            OrderStatus::Processing => 2,
            OrderStatus::Rejected => 3,
            OrderStatus::Completed => 4,
        }
    }

    /// 未知取值按 Pending 处理
    pub fn from_db(value: i32) -> Self {
        match value {
            2 => OrderStatus::Processing,
            3 => OrderStatus::Rejected,
            4 => OrderStatus::Completed,
            _ => OrderStatus::Pending,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "PENDING"),
            OrderStatus::Processing => write!(f, "PROCESSING"),
            OrderStatus::Rejected => write!(f, "REJECTED"),
            OrderStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

// ==========================================
// Order - 订单头
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub customer_id: Option<i64>, // 散客订单为空
    pub order_status: OrderStatus,
    pub order_date: NaiveDate,
    pub required_date: NaiveDate,
    pub shipped_date: Option<NaiveDate>,
    pub store_id: i64,
    pub staff_id: i64,
}

/// 待插入订单头（无主键）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_id: Option<i64>,
    pub order_status: OrderStatus,
    pub order_date: NaiveDate,
    pub required_date: NaiveDate,
    pub shipped_date: Option<NaiveDate>,
    pub store_id: i64,
    pub staff_id: i64,
}

// ==========================================
// OrderItem - 订单行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: i64,
    pub item_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub list_price: f64,
    pub discount: f64, // 0.0 - 1.0
}

impl OrderItem {
    /// 折后金额 = 数量 × 单价 × (1 - 折扣)
    pub fn net_amount(&self) -> f64 {
        f64::from(self.quantity) * self.list_price * (1.0 - self.discount)
    }
}
