// ==========================================
// 自行车门店管理后台 - 表单 DTO
// ==========================================
// 职责: 接收表单原始字段（全部为可选字符串），
//       经 FormValidator 转换为领域写入模型
// 说明: 解析失败作为校验违规返回，而不是请求解析错误
// ==========================================

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::FormValidator;
use crate::domain::customer::NewCustomer;
use crate::domain::product::NewProduct;
use crate::domain::staff::NewStaff;

// 字段长度上限
const NAME_MAX: usize = 50;
const EMAIL_MAX: usize = 255;
const PHONE_MAX: usize = 25;
const STREET_MAX: usize = 255;
const CITY_MAX: usize = 50;
const STATE_MAX: usize = 25;
const ZIP_MAX: usize = 5;
const PRODUCT_NAME_MAX: usize = 255;

// 数值范围
const MODEL_YEAR_MIN: i32 = 1900;
const MODEL_YEAR_MAX: i32 = 2100;
const LIST_PRICE_MIN: f64 = 0.0;
const LIST_PRICE_MAX: f64 = 99_999_999.99;

fn incomplete() -> ApiError {
    ApiError::InternalError("表单校验通过但字段缺失".to_string())
}

// ==========================================
// StaffForm - 员工表单
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffForm {
    #[serde(default)]
    pub staff_id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub active: Option<String>,
    #[serde(default)]
    pub store_id: Option<String>,
    #[serde(default)]
    pub manager_id: Option<String>,
}

impl StaffForm {
    /// 字段校验并转换为写入模型
    pub fn validate(&self) -> ApiResult<NewStaff> {
        self.validate_with(&mut FormValidator::new())
    }

    /// 编辑场景：额外要求 staff_id
    pub fn validate_for_update(&self) -> ApiResult<(i64, NewStaff)> {
        let mut v = FormValidator::new();
        let staff_id = v.required_number::<i64>("staff_id", self.staff_id.as_deref());
        let staff = self.validate_with(&mut v)?;
        let staff_id = staff_id.ok_or_else(incomplete)?;
        Ok((staff_id, staff))
    }

    fn validate_with(&self, v: &mut FormValidator) -> ApiResult<NewStaff> {
        let first_name = v.required_text("first_name", self.first_name.as_deref(), NAME_MAX);
        let last_name = v.required_text("last_name", self.last_name.as_deref(), NAME_MAX);
        let email = v.required_email("email", self.email.as_deref(), EMAIL_MAX);
        let phone = v.optional_text("phone", self.phone.as_deref(), PHONE_MAX);
        let active = v.required_bool("active", self.active.as_deref());
        let store_id = v.required_number::<i64>("store_id", self.store_id.as_deref());
        let manager_id = v.optional_number::<i64>("manager_id", self.manager_id.as_deref());

        std::mem::take(v).finish()?;

        let (
            Some(first_name),
            Some(last_name),
            Some(email),
            Some(phone),
            Some(active),
            Some(store_id),
            Some(manager_id),
        ) = (first_name, last_name, email, phone, active, store_id, manager_id)
        else {
            return Err(incomplete());
        };

        Ok(NewStaff {
            first_name,
            last_name,
            email,
            phone,
            active,
            store_id,
            manager_id,
        })
    }
}

// ==========================================
// CustomerForm - 客户表单
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerForm {
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

impl CustomerForm {
    pub fn validate(&self) -> ApiResult<NewCustomer> {
        self.validate_with(&mut FormValidator::new())
    }

    pub fn validate_for_update(&self) -> ApiResult<(i64, NewCustomer)> {
        let mut v = FormValidator::new();
        let customer_id = v.required_number::<i64>("customer_id", self.customer_id.as_deref());
        let customer = self.validate_with(&mut v)?;
        let customer_id = customer_id.ok_or_else(incomplete)?;
        Ok((customer_id, customer))
    }

    fn validate_with(&self, v: &mut FormValidator) -> ApiResult<NewCustomer> {
        let first_name = v.required_text("first_name", self.first_name.as_deref(), NAME_MAX);
        let last_name = v.required_text("last_name", self.last_name.as_deref(), NAME_MAX);
        let phone = v.optional_text("phone", self.phone.as_deref(), PHONE_MAX);
        let email = v.required_email("email", self.email.as_deref(), EMAIL_MAX);
        let street = v.optional_text("street", self.street.as_deref(), STREET_MAX);
        let city = v.optional_text("city", self.city.as_deref(), CITY_MAX);
        let state = v.optional_text("state", self.state.as_deref(), STATE_MAX);
        let zip_code = v.optional_text("zip_code", self.zip_code.as_deref(), ZIP_MAX);

        std::mem::take(v).finish()?;

        let (
            Some(first_name),
            Some(last_name),
            Some(phone),
            Some(email),
            Some(street),
            Some(city),
            Some(state),
            Some(zip_code),
        ) = (first_name, last_name, phone, email, street, city, state, zip_code)
        else {
            return Err(incomplete());
        };

        Ok(NewCustomer {
            first_name,
            last_name,
            phone,
            email,
            street,
            city,
            state,
            zip_code,
        })
    }
}

// ==========================================
// ProductForm - 商品表单
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub brand_id: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub model_year: Option<String>,
    #[serde(default)]
    pub list_price: Option<String>,
}

impl ProductForm {
    pub fn validate(&self) -> ApiResult<NewProduct> {
        self.validate_with(&mut FormValidator::new())
    }

    pub fn validate_for_update(&self) -> ApiResult<(i64, NewProduct)> {
        let mut v = FormValidator::new();
        let product_id = v.required_number::<i64>("product_id", self.product_id.as_deref());
        let product = self.validate_with(&mut v)?;
        let product_id = product_id.ok_or_else(incomplete)?;
        Ok((product_id, product))
    }

    fn validate_with(&self, v: &mut FormValidator) -> ApiResult<NewProduct> {
        let product_name =
            v.required_text("product_name", self.product_name.as_deref(), PRODUCT_NAME_MAX);
        let brand_id = v.required_number::<i64>("brand_id", self.brand_id.as_deref());
        let category_id = v.required_number::<i64>("category_id", self.category_id.as_deref());
        let model_year = v.required_in_range(
            "model_year",
            self.model_year.as_deref(),
            MODEL_YEAR_MIN,
            MODEL_YEAR_MAX,
        );
        let list_price = v.required_in_range(
            "list_price",
            self.list_price.as_deref(),
            LIST_PRICE_MIN,
            LIST_PRICE_MAX,
        );

        std::mem::take(v).finish()?;

        let (Some(product_name), Some(brand_id), Some(category_id), Some(model_year), Some(list_price)) =
            (product_name, brand_id, category_id, model_year, list_price)
        else {
            return Err(incomplete());
        };

        Ok(NewProduct {
            product_name,
            brand_id,
            category_id,
            model_year,
            list_price,
        })
    }
}

// ==========================================
// SaveReportForm - 报表保存表单
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveReportForm {
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub report_html: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff_form() -> StaffForm {
        StaffForm {
            staff_id: None,
            first_name: Some("Fabiola".into()),
            last_name: Some("Jackson".into()),
            email: Some("fabiola.jackson@bikes.shop".into()),
            phone: Some("(831) 555-5554".into()),
            active: Some("true".into()),
            store_id: Some("1".into()),
            manager_id: Some("".into()),
        }
    }

    #[test]
    fn test_staff_form_valid() {
        let staff = staff_form().validate().unwrap();
        assert_eq!(staff.first_name, "Fabiola");
        assert_eq!(staff.manager_id, None);
        assert!(staff.active);
    }

    #[test]
    fn test_staff_form_update_requires_id() {
        let err = staff_form().validate_for_update().unwrap_err();
        match err {
            ApiError::ValidationFailed(list) => {
                assert_eq!(list.len(), 1);
                assert_eq!(list[0].field, "staff_id");
            }
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }

        let mut form = staff_form();
        form.staff_id = Some("3".into());
        let (id, _) = form.validate_for_update().unwrap();
        assert_eq!(id, 3);
    }

    #[test]
    fn test_customer_form_rejects_long_zip() {
        let form = CustomerForm {
            first_name: Some("Debra".into()),
            last_name: Some("Burks".into()),
            email: Some("debra.burks@yahoo.com".into()),
            zip_code: Some("147031".into()),
            ..Default::default()
        };
        let err = form.validate().unwrap_err();
        assert!(matches!(err, ApiError::ValidationFailed(ref l) if l[0].field == "zip_code"));
    }

    #[test]
    fn test_product_form_parse_errors_are_violations() {
        let form = ProductForm {
            product_name: Some("Trek 820 - 2016".into()),
            brand_id: Some("x".into()),
            category_id: Some("6".into()),
            model_year: Some("2016".into()),
            list_price: Some("-1".into()),
            ..Default::default()
        };
        match form.validate().unwrap_err() {
            ApiError::ValidationFailed(list) => {
                let fields: Vec<_> = list.iter().map(|v| v.field.as_str()).collect();
                assert_eq!(fields, vec!["brand_id", "list_price"]);
            }
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }
}
