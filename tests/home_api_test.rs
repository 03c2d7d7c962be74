// ==========================================
// HomeApi 集成测试
// ==========================================
// 测试范围:
// 1. 首页数据: overview
// 2. 新增: create_staff, create_customer, create_product
// 3. 商品筛选: filter_products
// ==========================================

mod helpers;
mod test_helpers;

use bike_store_admin::api::ApiError;
use bike_store_admin::domain::ProductFilter;
use helpers::api_test_helper::*;
use helpers::test_data_builder::*;

// ==========================================
// 首页数据
// ==========================================

#[test]
fn test_overview_空库只有字典数据() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let overview = env.home_api.overview().expect("查询失败");

    assert!(overview.staffs.is_empty());
    assert!(overview.customers.is_empty());
    assert!(overview.products.is_empty());
    assert_eq!(overview.brands.len(), 3);
    assert_eq!(overview.categories.len(), 2);
    assert_eq!(overview.stores.len(), 2);
}

#[test]
fn test_overview_员工带门店名称() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    env.home_api
        .create_staff(&StaffFormBuilder::new("Fabiola", "Jackson", env.lookups.baldwin).build())
        .expect("创建失败");

    let overview = env.home_api.overview().expect("查询失败");
    assert_eq!(overview.staffs.len(), 1);
    assert_eq!(overview.staffs[0].staff.first_name, "Fabiola");
    assert_eq!(overview.staffs[0].store_name.as_deref(), Some("Baldwin Bikes"));
}

// ==========================================
// 新增员工
// ==========================================

#[test]
fn test_create_staff_成功() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let manager_id = env
        .home_api
        .create_staff(&StaffFormBuilder::new("Fabiola", "Jackson", env.lookups.santa_cruz).build())
        .expect("创建失败");

    let staff_id = env
        .home_api
        .create_staff(
            &StaffFormBuilder::new("Mireya", "Copeland", env.lookups.santa_cruz)
                .phone("  (831) 555-5555 ")
                .active("on")
                .manager(manager_id)
                .build(),
        )
        .expect("创建失败");

    let staff = env.staff_repo.find_by_id(staff_id).unwrap().expect("员工应存在");
    assert_eq!(staff.email, "mireya.copeland@bikes.shop");
    assert_eq!(staff.phone.as_deref(), Some("(831) 555-5555"));
    assert!(staff.active);
    assert_eq!(staff.manager_id, Some(manager_id));
}

#[test]
fn test_create_staff_缺少必填字段() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let mut form = StaffFormBuilder::new("Kali", "Vargas", env.lookups.santa_cruz).build();
    form.first_name = Some("   ".to_string());
    form.email = None;

    let err = env.home_api.create_staff(&form).unwrap_err();
    let fields = assert_validation_fields(&err);
    assert!(fields.contains(&"first_name".to_string()));
    assert!(fields.contains(&"email".to_string()));

    // 校验失败不写库
    assert!(env.staff_repo.find_all().unwrap().is_empty());
}

#[test]
fn test_create_staff_邮箱格式错误() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let form = StaffFormBuilder::new("Kali", "Vargas", env.lookups.santa_cruz)
        .email("kali.vargas")
        .build();

    let err = env.home_api.create_staff(&form).unwrap_err();
    assert_eq!(assert_validation_fields(&err), vec!["email".to_string()]);
}

#[test]
fn test_create_staff_门店或经理不存在() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let form = StaffFormBuilder::new("Kali", "Vargas", 999).manager(888).build();

    let err = env.home_api.create_staff(&form).unwrap_err();
    let fields = assert_validation_fields(&err);
    assert_eq!(fields, vec!["store_id".to_string(), "manager_id".to_string()]);
}

#[test]
fn test_create_staff_邮箱重复() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let form = StaffFormBuilder::new("Genna", "Serrano", env.lookups.santa_cruz).build();
    env.home_api.create_staff(&form).expect("首次创建失败");

    let err = env.home_api.create_staff(&form).unwrap_err();
    assert!(
        matches!(err, ApiError::BusinessRuleViolation(_)),
        "重复邮箱应为约束错误: {:?}",
        err
    );
}

// ==========================================
// 新增客户
// ==========================================

#[test]
fn test_create_customer_成功() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let customer_id = env
        .home_api
        .create_customer(
            &CustomerFormBuilder::new("Debra", "Burks")
                .address("Orchard Park", "NY", "14127")
                .build(),
        )
        .expect("创建失败");

    let customer = env
        .customer_repo
        .find_by_id(customer_id)
        .unwrap()
        .expect("客户应存在");
    assert_eq!(customer.full_name(), "Debra Burks");
    assert_eq!(customer.city.as_deref(), Some("Orchard Park"));
    assert_eq!(customer.street, None);
}

#[test]
fn test_create_customer_邮编超长() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let form = CustomerFormBuilder::new("Debra", "Burks")
        .address("Orchard Park", "NY", "141270")
        .build();

    let err = env.home_api.create_customer(&form).unwrap_err();
    assert_eq!(assert_validation_fields(&err), vec!["zip_code".to_string()]);
}

// ==========================================
// 新增商品
// ==========================================

#[test]
fn test_create_product_成功() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let product_id = env
        .home_api
        .create_product(
            &ProductFormBuilder::new("Trek 820 - 2016", env.lookups.trek, env.lookups.mountain)
                .model_year("2016")
                .list_price("379.99")
                .build(),
        )
        .expect("创建失败");

    let product = env.product_repo.find_by_id(product_id).unwrap().expect("商品应存在");
    assert_eq!(product.model_year, 2016);
    assert!((product.list_price - 379.99).abs() < 1e-9);
}

#[test]
fn test_create_product_年款和价格越界() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let form = ProductFormBuilder::new("Time Machine", env.lookups.trek, env.lookups.mountain)
        .model_year("1850")
        .list_price("-1")
        .build();

    let err = env.home_api.create_product(&form).unwrap_err();
    let fields = assert_validation_fields(&err);
    assert_eq!(fields, vec!["model_year".to_string(), "list_price".to_string()]);
}

#[test]
fn test_create_product_品牌不存在() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let form = ProductFormBuilder::new("Ghost Bike", 404, env.lookups.mountain).build();

    let err = env.home_api.create_product(&form).unwrap_err();
    assert_eq!(assert_validation_fields(&err), vec!["brand_id".to_string()]);
    assert!(env.product_repo.find_all_rows().unwrap().is_empty());
}

// ==========================================
// 商品筛选
// ==========================================

fn seed_products(env: &ApiTestEnv) {
    let l = env.lookups;
    for (name, brand, category) in [
        ("Trek 820 - 2016", l.trek, l.mountain),
        ("Trek Slash 8 27.5 - 2016", l.trek, l.mountain),
        ("Electra Cruiser 1 - 2016", l.electra, l.cruisers),
        ("Surly Straggler - 2016", l.surly, l.mountain),
    ] {
        env.home_api
            .create_product(&ProductFormBuilder::new(name, brand, category).build())
            .expect("创建失败");
    }
}

#[test]
fn test_filter_products_按品牌和品类() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    seed_products(&env);

    let trek = env
        .home_api
        .filter_products(&ProductFilter::new(Some(env.lookups.trek), None))
        .unwrap();
    assert_eq!(trek.len(), 2);
    assert!(trek.iter().all(|p| p.brand_name.as_deref() == Some("Trek")));

    let mountain = env
        .home_api
        .filter_products(&ProductFilter::new(None, Some(env.lookups.mountain)))
        .unwrap();
    assert_eq!(mountain.len(), 3);

    let both = env
        .home_api
        .filter_products(&ProductFilter::new(Some(env.lookups.surly), Some(env.lookups.mountain)))
        .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].product_name, "Surly Straggler - 2016");
}

#[test]
fn test_filter_products_零值视为全部() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    seed_products(&env);

    let all = env
        .home_api
        .filter_products(&ProductFilter::new(Some(0), Some(0)))
        .unwrap();
    assert_eq!(all.len(), 4);

    let none = env
        .home_api
        .filter_products(&ProductFilter::new(Some(env.lookups.electra), Some(env.lookups.mountain)))
        .unwrap();
    assert!(none.is_empty());
}
