// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================
// 表单字段均为字符串，与浏览器提交一致
// ==========================================

#![allow(dead_code)]

use bike_store_admin::api::{CustomerForm, ProductForm, SaveReportForm, StaffForm};

// ==========================================
// StaffForm 构建器
// ==========================================

pub struct StaffFormBuilder {
    form: StaffForm,
}

impl StaffFormBuilder {
    pub fn new(first_name: &str, last_name: &str, store_id: i64) -> Self {
        Self {
            form: StaffForm {
                staff_id: None,
                first_name: Some(first_name.to_string()),
                last_name: Some(last_name.to_string()),
                email: Some(format!(
                    "{}.{}@bikes.shop",
                    first_name.to_lowercase(),
                    last_name.to_lowercase()
                )),
                phone: None,
                active: Some("true".to_string()),
                store_id: Some(store_id.to_string()),
                manager_id: None,
            },
        }
    }

    pub fn id(mut self, staff_id: i64) -> Self {
        self.form.staff_id = Some(staff_id.to_string());
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.form.email = Some(email.to_string());
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.form.phone = Some(phone.to_string());
        self
    }

    pub fn active(mut self, active: &str) -> Self {
        self.form.active = Some(active.to_string());
        self
    }

    pub fn manager(mut self, manager_id: i64) -> Self {
        self.form.manager_id = Some(manager_id.to_string());
        self
    }

    pub fn build(self) -> StaffForm {
        self.form
    }
}

// ==========================================
// CustomerForm 构建器
// ==========================================

pub struct CustomerFormBuilder {
    form: CustomerForm,
}

impl CustomerFormBuilder {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            form: CustomerForm {
                customer_id: None,
                first_name: Some(first_name.to_string()),
                last_name: Some(last_name.to_string()),
                phone: None,
                email: Some(format!(
                    "{}.{}@example.com",
                    first_name.to_lowercase(),
                    last_name.to_lowercase()
                )),
                street: None,
                city: None,
                state: None,
                zip_code: None,
            },
        }
    }

    pub fn id(mut self, customer_id: i64) -> Self {
        self.form.customer_id = Some(customer_id.to_string());
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.form.email = Some(email.to_string());
        self
    }

    pub fn address(mut self, city: &str, state: &str, zip_code: &str) -> Self {
        self.form.city = Some(city.to_string());
        self.form.state = Some(state.to_string());
        self.form.zip_code = Some(zip_code.to_string());
        self
    }

    pub fn build(self) -> CustomerForm {
        self.form
    }
}

// ==========================================
// ProductForm 构建器
// ==========================================

pub struct ProductFormBuilder {
    form: ProductForm,
}

impl ProductFormBuilder {
    pub fn new(product_name: &str, brand_id: i64, category_id: i64) -> Self {
        Self {
            form: ProductForm {
                product_id: None,
                product_name: Some(product_name.to_string()),
                brand_id: Some(brand_id.to_string()),
                category_id: Some(category_id.to_string()),
                model_year: Some("2018".to_string()),
                list_price: Some("499.99".to_string()),
            },
        }
    }

    pub fn id(mut self, product_id: i64) -> Self {
        self.form.product_id = Some(product_id.to_string());
        self
    }

    pub fn model_year(mut self, year: &str) -> Self {
        self.form.model_year = Some(year.to_string());
        self
    }

    pub fn list_price(mut self, price: &str) -> Self {
        self.form.list_price = Some(price.to_string());
        self
    }

    pub fn build(self) -> ProductForm {
        self.form
    }
}

// ==========================================
// SaveReportForm
// ==========================================

pub fn save_report_form(file_name: &str, file_type: &str, html: &str, description: Option<&str>) -> SaveReportForm {
    SaveReportForm {
        file_name: file_name.to_string(),
        file_type: file_type.to_string(),
        report_html: html.to_string(),
        description: description.map(str::to_string),
    }
}
