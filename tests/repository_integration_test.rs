// ==========================================
// Repository 层集成测试
// ==========================================
// 测试范围:
// 1. 员工/客户/商品 CRUD 与约束映射
// 2. 订单写入（事务）
// 3. ConfigManager 持久化
// ==========================================

mod test_helpers;

use chrono::NaiveDate;
use std::sync::Arc;

use bike_store_admin::config::{config_keys, ConfigManager};
use bike_store_admin::domain::{
    NewCustomer, NewOrder, NewProduct, NewStaff, OrderItem, OrderStatus, ProductFilter,
};
use bike_store_admin::repository::{
    CustomerRepository, OrderRepository, ProductRepository, RepositoryError, StaffRepository,
};
use test_helpers::{create_test_db, insert_lookups, open_shared};

fn new_staff(email: &str, store_id: i64, manager_id: Option<i64>) -> NewStaff {
    NewStaff {
        first_name: "Jannette".to_string(),
        last_name: "David".to_string(),
        email: email.to_string(),
        phone: None,
        active: true,
        store_id,
        manager_id,
    }
}

#[test]
fn test_staff_repo_crud() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let conn = open_shared(&db_path).unwrap();
    let ids = insert_lookups(&conn.lock().unwrap()).unwrap();
    let repo = StaffRepository::from_connection(conn);

    let manager = repo
        .insert(&new_staff("jannette.david@bikes.shop", ids.baldwin, None))
        .unwrap();
    let staff_id = repo
        .insert(&new_staff("bernardine.houston@bikes.shop", ids.baldwin, Some(manager)))
        .unwrap();

    let rows = repo.find_all_with_store().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].staff.staff_id, staff_id);
    assert_eq!(rows[1].store_name.as_deref(), Some("Baldwin Bikes"));

    let mut staff = repo.find_by_id(staff_id).unwrap().unwrap();
    staff.active = false;
    repo.update(&staff).unwrap();
    assert!(!repo.find_by_id(staff_id).unwrap().unwrap().active);

    // 仍有下属时不能删除经理
    let err = repo.delete(manager).unwrap_err();
    assert!(matches!(err, RepositoryError::ForeignKeyViolation(_)), "{:?}", err);

    assert!(repo.delete(staff_id).unwrap());
    assert!(!repo.delete(staff_id).unwrap());
    assert!(repo.delete(manager).unwrap());
}

#[test]
fn test_staff_repo_唯一邮箱() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let conn = open_shared(&db_path).unwrap();
    let ids = insert_lookups(&conn.lock().unwrap()).unwrap();
    let repo = StaffRepository::from_connection(conn);

    repo.insert(&new_staff("dup@bikes.shop", ids.santa_cruz, None)).unwrap();
    let err = repo
        .insert(&new_staff("dup@bikes.shop", ids.santa_cruz, None))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::UniqueConstraintViolation(_)), "{:?}", err);
}

#[test]
fn test_update_不存在返回_not_found() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let conn = open_shared(&db_path).unwrap();
    let repo = CustomerRepository::from_connection(conn);

    let ghost = NewCustomer {
        first_name: "Ghost".to_string(),
        last_name: "Rider".to_string(),
        phone: None,
        email: "ghost@example.com".to_string(),
        street: None,
        city: None,
        state: None,
        zip_code: None,
    }
    .with_id(999);

    let err = repo.update(&ghost).unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }), "{:?}", err);
}

#[test]
fn test_product_repo_筛选与排序() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let conn = open_shared(&db_path).unwrap();
    let ids = insert_lookups(&conn.lock().unwrap()).unwrap();
    let repo = ProductRepository::from_connection(conn);

    let mut inserted = Vec::new();
    for (name, brand, category) in [
        ("Trek Fuel EX 8 29 - 2016", ids.trek, ids.mountain),
        ("Electra Townie 7D - 2017", ids.electra, ids.cruisers),
        ("Trek Remedy 29 - 2016", ids.trek, ids.mountain),
    ] {
        inserted.push(
            repo.insert(&NewProduct {
                product_name: name.to_string(),
                brand_id: brand,
                category_id: category,
                model_year: 2016,
                list_price: 1799.99,
            })
            .unwrap(),
        );
    }

    let all = repo.find_all_rows().unwrap();
    assert_eq!(
        all.iter().map(|p| p.product_id).collect::<Vec<_>>(),
        inserted,
        "列表按主键升序"
    );

    let trek = repo.filter(&ProductFilter::new(Some(ids.trek), None)).unwrap();
    assert_eq!(trek.len(), 2);

    let negative = repo.filter(&ProductFilter::new(Some(-1), Some(ids.cruisers))).unwrap();
    assert_eq!(negative.len(), 1);
    assert_eq!(negative[0].brand_name.as_deref(), Some("Electra"));

    let err = repo
        .insert(&NewProduct {
            product_name: "Orphan".to_string(),
            brand_id: 9999,
            category_id: ids.mountain,
            model_year: 2016,
            list_price: 1.0,
        })
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ForeignKeyViolation(_)), "{:?}", err);
}

#[test]
fn test_order_repo_订单与订单行同事务写入() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let conn = open_shared(&db_path).unwrap();
    let ids = insert_lookups(&conn.lock().unwrap()).unwrap();

    let staff_repo = StaffRepository::from_connection(conn.clone());
    let product_repo = ProductRepository::from_connection(conn.clone());
    let order_repo = OrderRepository::from_connection(conn);

    let staff_id = staff_repo
        .insert(&new_staff("venita.daniel@bikes.shop", ids.santa_cruz, None))
        .unwrap();
    let product_id = product_repo
        .insert(&NewProduct {
            product_name: "Trek 820 - 2016".to_string(),
            brand_id: ids.trek,
            category_id: ids.mountain,
            model_year: 2016,
            list_price: 379.99,
        })
        .unwrap();

    let date = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
    let order = NewOrder {
        customer_id: None,
        order_status: OrderStatus::Pending,
        order_date: date,
        required_date: date,
        shipped_date: None,
        store_id: ids.santa_cruz,
        staff_id,
    };
    let line = |product_id: i64| OrderItem {
        order_id: 0,
        item_id: 0,
        product_id,
        quantity: 2,
        list_price: 379.99,
        discount: 0.07,
    };

    let order_id = order_repo
        .insert_order_with_items(&order, &[line(product_id), line(product_id)])
        .unwrap();

    let saved = order_repo.find_by_id(order_id).unwrap().unwrap();
    assert_eq!(saved.order_status, OrderStatus::Pending);
    assert_eq!(saved.order_date, date);

    let items = order_repo.find_items_by_order(order_id).unwrap();
    assert_eq!(items.iter().map(|i| i.item_id).collect::<Vec<_>>(), vec![1, 2]);

    // 订单行引用不存在的商品：整单回滚
    let before = order_repo.count_orders().unwrap();
    assert!(order_repo
        .insert_order_with_items(&order, &[line(product_id), line(4242)])
        .is_err());
    assert_eq!(order_repo.count_orders().unwrap(), before);
}

#[test]
fn test_config_manager_持久化与默认值() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let conn = open_shared(&db_path).unwrap();
    let config = Arc::new(ConfigManager::from_connection(conn.clone()));

    assert_eq!(config.popular_top_n().unwrap(), 10);
    assert_eq!(config.customer_top_n().unwrap(), 10);

    config.set_value(config_keys::REPORT_CUSTOMER_TOP_N, "5").unwrap();
    config.set_value(config_keys::REPORT_CUSTOMER_TOP_N, "3").unwrap();
    config.set_value(config_keys::REPORT_POPULAR_TOP_N, "lots").unwrap();

    // 新实例读取同一库
    let reopened = ConfigManager::new(&db_path).unwrap();
    assert_eq!(reopened.customer_top_n().unwrap(), 3);
    assert_eq!(reopened.popular_top_n().unwrap(), 10, "非法值回退默认");

    let snapshot = reopened.snapshot().unwrap();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(
        snapshot.get(config_keys::REPORT_POPULAR_TOP_N).map(String::as_str),
        Some("lots")
    );
}
