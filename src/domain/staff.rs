// ==========================================
// 自行车门店管理后台 - 员工领域模型
// ==========================================
// 对齐: staffs 表
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Staff - 员工
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub staff_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: bool,
    pub store_id: i64,
    pub manager_id: Option<i64>, // 直属经理 (staffs.staff_id)
}

impl Staff {
    /// 姓名全称 "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ==========================================
// NewStaff - 待插入员工（无主键）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStaff {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: bool,
    pub store_id: i64,
    pub manager_id: Option<i64>,
}

impl NewStaff {
    /// 赋予主键，得到完整实体
    pub fn with_id(self, staff_id: i64) -> Staff {
        Staff {
            staff_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            active: self.active,
            store_id: self.store_id,
            manager_id: self.manager_id,
        }
    }
}

// ==========================================
// StaffWithStore - 列表展示用（附门店名称）
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffWithStore {
    #[serde(flatten)]
    pub staff: Staff,
    pub store_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_id_and_full_name() {
        let staff = NewStaff {
            first_name: "Fabiola".to_string(),
            last_name: "Jackson".to_string(),
            email: "fabiola.jackson@bikes.shop".to_string(),
            phone: None,
            active: true,
            store_id: 1,
            manager_id: None,
        }
        .with_id(7);

        assert_eq!(staff.staff_id, 7);
        assert_eq!(staff.full_name(), "Fabiola Jackson");
    }

    #[test]
    fn test_staff_with_store_serializes_flat() {
        let row = StaffWithStore {
            staff: Staff {
                staff_id: 1,
                first_name: "Mireya".to_string(),
                last_name: "Copeland".to_string(),
                email: "mireya@bikes.shop".to_string(),
                phone: Some("(831) 555-5555".to_string()),
                active: true,
                store_id: 1,
                manager_id: None,
            },
            store_name: Some("Santa Cruz Bikes".to_string()),
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["staff_id"], 1);
        assert_eq!(value["store_name"], "Santa Cruz Bikes");
    }
}
