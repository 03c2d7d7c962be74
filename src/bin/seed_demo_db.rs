// ==========================================
// 演示数据库初始化
// ==========================================
// 用法: seed_demo_db [db_path]
// - 未指定路径时使用 BIKE_STORE_DB_PATH 或默认数据目录
// - 已存在的库先备份为 <db>.bak.<时间戳> 再重建
// ==========================================

use anyhow::Context;
use chrono::{Duration, Local, NaiveDate};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use bike_store_admin::config::AppConfig;
use bike_store_admin::db::open_and_init;
use bike_store_admin::domain::{NewCustomer, NewOrder, NewProduct, NewStaff, OrderItem, OrderStatus, Store};
use bike_store_admin::repository::{
    CustomerRepository, LookupRepository, OrderRepository, ProductRepository, StaffRepository,
};

const BRANDS: &[&str] = &["Electra", "Haro", "Heller", "Pure Cycles", "Ritchey", "Strider", "Sun Bicycles", "Surly", "Trek"];

const CATEGORIES: &[&str] = &[
    "Children Bicycles",
    "Comfort Bicycles",
    "Cruisers Bicycles",
    "Cyclocross Bicycles",
    "Electric Bikes",
    "Mountain Bikes",
    "Road Bikes",
];

// (名称, 品牌下标, 品类下标, 年款, 标价)
const PRODUCTS: &[(&str, usize, usize, i32, f64)] = &[
    ("Trek 820 - 2016", 8, 5, 2016, 379.99),
    ("Ritchey Timberwolf Frameset - 2016", 4, 5, 2016, 749.99),
    ("Surly Wednesday Frameset - 2016", 7, 5, 2016, 999.99),
    ("Trek Fuel EX 8 29 - 2016", 8, 5, 2016, 2899.99),
    ("Heller Shagamaw Frame - 2016", 2, 5, 2016, 1320.99),
    ("Surly Ice Cream Truck Frameset - 2016", 7, 5, 2016, 469.99),
    ("Trek Slash 8 27.5 - 2016", 8, 5, 2016, 3999.99),
    ("Trek Remedy 29 Carbon Frameset - 2016", 8, 5, 2016, 1799.99),
    ("Trek Conduit+ - 2016", 8, 4, 2016, 2999.99),
    ("Surly Straggler - 2016", 7, 3, 2016, 1549.00),
    ("Electra Townie Original 21D - 2016", 0, 1, 2016, 549.99),
    ("Electra Cruiser 1 (24-Inch) - 2016", 0, 2, 2016, 269.99),
    ("Electra Girl's Hawaii 1 (16-inch) - 2015/2016", 0, 0, 2016, 269.99),
    ("Haro Downtown 16 - 2017", 1, 0, 2017, 329.99),
    ("Strider Classic 12 Balance Bike - 2018", 5, 0, 2018, 89.99),
    ("Sun Bicycles Cruz 3 - 2017", 6, 1, 2017, 449.99),
    ("Pure Cycles Vine 8-Speed - 2016", 3, 2, 2016, 429.00),
    ("Trek Domane SL 6 - 2018", 8, 6, 2018, 3499.99),
];

// (名, 姓, 邮箱, 电话, 城市, 州, 邮编)
const CUSTOMERS: &[(&str, &str, &str, Option<&str>, &str, &str, &str)] = &[
    ("Debra", "Burks", "debra.burks@yahoo.com", None, "Orchard Park", "NY", "14127"),
    ("Kasha", "Todd", "kasha.todd@yahoo.com", None, "Campbell", "CA", "95008"),
    ("Tameka", "Fisher", "tameka.fisher@aol.com", None, "Redondo Beach", "CA", "90278"),
    ("Daryl", "Spence", "daryl.spence@aol.com", None, "Uniondale", "NY", "11553"),
    ("Charolette", "Rice", "charolette.rice@msn.com", Some("(916) 381-6003"), "Sacramento", "CA", "95820"),
    ("Lyndsey", "Bean", "lyndsey.bean@hotmail.com", None, "Fairport", "NY", "14450"),
    ("Latasha", "Hays", "latasha.hays@hotmail.com", Some("(716) 986-3359"), "Buffalo", "NY", "14215"),
    ("Jacquline", "Duncan", "jacquline.duncan@yahoo.com", None, "Jackson Heights", "NY", "11372"),
];

fn main() -> anyhow::Result<()> {
    bike_store_admin::logging::init();

    let db_path = match std::env::args().nth(1) {
        Some(p) => p,
        None => AppConfig::from_env()?.db_path_str()?.to_string(),
    };

    backup_and_reset_db(&db_path)?;
    if let Some(parent) = Path::new(&db_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let conn = open_and_init(&db_path).with_context(|| format!("无法打开数据库: {}", db_path))?;
    let conn = Arc::new(Mutex::new(conn));

    seed(conn.clone())?;
    print_quick_counts(&conn)?;

    tracing::info!(db_path = %db_path, "演示数据已写入");
    Ok(())
}

fn backup_and_reset_db(db_path: &str) -> anyhow::Result<()> {
    let path = Path::new(db_path);
    if !path.exists() {
        return Ok(());
    }

    let ts = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let backup_path = format!("{}.bak.{}", db_path, ts);
    fs::copy(path, &backup_path)?;
    fs::remove_file(path)?;

    tracing::info!("Backed up {} -> {}", db_path, backup_path);
    Ok(())
}

fn seed(conn: Arc<Mutex<Connection>>) -> anyhow::Result<()> {
    let lookup_repo = LookupRepository::from_connection(conn.clone());
    let staff_repo = StaffRepository::from_connection(conn.clone());
    let customer_repo = CustomerRepository::from_connection(conn.clone());
    let product_repo = ProductRepository::from_connection(conn.clone());
    let order_repo = OrderRepository::from_connection(conn);

    // ===== 品牌 / 品类 =====
    let brand_ids = BRANDS
        .iter()
        .map(|name| lookup_repo.insert_brand(name))
        .collect::<Result<Vec<_>, _>>()?;
    let category_ids = CATEGORIES
        .iter()
        .map(|name| lookup_repo.insert_category(name))
        .collect::<Result<Vec<_>, _>>()?;

    // ===== 门店 =====
    let stores = [
        ("Santa Cruz Bikes", "(831) 476-4321", "santacruz@bikes.shop", "3700 Portola Drive", "Santa Cruz", "CA", "95060"),
        ("Baldwin Bikes", "(516) 379-8888", "baldwin@bikes.shop", "4200 Chestnut Lane", "Baldwin", "NY", "11432"),
        ("Rowlett Bikes", "(972) 530-5555", "rowlett@bikes.shop", "8000 Fairway Avenue", "Rowlett", "TX", "75088"),
    ];
    let mut store_ids = Vec::new();
    for (name, phone, email, street, city, state, zip) in stores {
        store_ids.push(lookup_repo.insert_store(&Store {
            store_id: 0,
            store_name: name.to_string(),
            phone: Some(phone.to_string()),
            email: Some(email.to_string()),
            street: Some(street.to_string()),
            city: Some(city.to_string()),
            state: Some(state.to_string()),
            zip_code: Some(zip.to_string()),
        })?);
    }

    // ===== 员工（首位为各店经理） =====
    let fabiola = staff_repo.insert(&demo_staff("Fabiola", "Jackson", store_ids[0], None))?;
    let mireya = staff_repo.insert(&demo_staff("Mireya", "Copeland", store_ids[0], Some(fabiola)))?;
    let genna = staff_repo.insert(&demo_staff("Genna", "Serrano", store_ids[0], Some(mireya)))?;
    let jannette = staff_repo.insert(&demo_staff("Jannette", "David", store_ids[1], Some(fabiola)))?;
    let marcelene = staff_repo.insert(&demo_staff("Marcelene", "Boyer", store_ids[1], Some(jannette)))?;
    let kali = staff_repo.insert(&demo_staff("Kali", "Vargas", store_ids[2], Some(fabiola)))?;
    let sellers = [(genna, store_ids[0]), (marcelene, store_ids[1]), (kali, store_ids[2])];

    // ===== 客户 =====
    let mut customer_ids = Vec::new();
    for (first, last, email, phone, city, state, zip) in CUSTOMERS {
        customer_ids.push(customer_repo.insert(&NewCustomer {
            first_name: first.to_string(),
            last_name: last.to_string(),
            phone: phone.map(str::to_string),
            email: email.to_string(),
            street: None,
            city: Some(city.to_string()),
            state: Some(state.to_string()),
            zip_code: Some(zip.to_string()),
        })?);
    }

    // ===== 商品 =====
    let mut products = Vec::new();
    for (name, brand_idx, category_idx, year, price) in PRODUCTS {
        let id = product_repo.insert(&NewProduct {
            product_name: name.to_string(),
            brand_id: brand_ids[*brand_idx],
            category_id: category_ids[*category_idx],
            model_year: *year,
            list_price: *price,
        })?;
        products.push((id, *price));
    }

    // ===== 订单 =====
    // 确定性分布：客户、商品按下标轮转，保证各报表有可区分的排名
    let base_date = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap_or_default();
    for n in 0..40usize {
        let (staff_id, store_id) = sellers[n % sellers.len()];
        // 每第 7 单为散客订单
        let customer_id = if n % 7 == 6 {
            None
        } else {
            Some(customer_ids[(n * n) % customer_ids.len()])
        };
        let order_date = base_date + Duration::days(n as i64 * 3);
        let status = match n % 4 {
            0 => OrderStatus::Pending,
            1 => OrderStatus::Processing,
            2 => OrderStatus::Rejected,
            _ => OrderStatus::Completed,
        };

        let order = NewOrder {
            customer_id,
            order_status: status,
            order_date,
            required_date: order_date + Duration::days(3),
            shipped_date: (status == OrderStatus::Completed).then(|| order_date + Duration::days(2)),
            store_id,
            staff_id,
        };

        let line_count = 1 + n % 3;
        let items = (0..line_count)
            .map(|k| {
                let (product_id, price) = products[(n + k * 5) % (products.len() - n % 4)];
                OrderItem {
                    order_id: 0,
                    item_id: 0,
                    product_id,
                    quantity: 1 + (k as i32 % 2),
                    list_price: price,
                    discount: [0.05, 0.07, 0.1, 0.2][(n + k) % 4],
                }
            })
            .collect::<Vec<_>>();

        order_repo.insert_order_with_items(&order, &items)?;
    }

    Ok(())
}

fn demo_staff(first: &str, last: &str, store_id: i64, manager_id: Option<i64>) -> NewStaff {
    NewStaff {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@bikes.shop", first.to_lowercase(), last.to_lowercase()),
        phone: None,
        active: true,
        store_id,
        manager_id,
    }
}

fn print_quick_counts(conn: &Arc<Mutex<Connection>>) -> anyhow::Result<()> {
    let conn = conn
        .lock()
        .map_err(|e| anyhow::anyhow!("锁获取失败: {}", e))?;
    let tables = [
        "brands",
        "categories",
        "stores",
        "staffs",
        "customers",
        "products",
        "orders",
        "order_items",
    ];

    for t in tables {
        let sql = format!("SELECT COUNT(*) FROM {}", t);
        let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
        tracing::info!(table = t, count, "行数");
    }
    Ok(())
}
