use std::fmt::Write;

use super::{brand_options, category_options, escape_html, layout, opt, store_options};
use crate::api::HomeOverview;
use crate::app::http::FlashQuery;

/// 首页：三张列表 + 新增表单 + 商品筛选
pub fn render(data: &HomeOverview, flash: &FlashQuery) -> String {
    let mut body = String::new();

    // ===== 员工 =====
    body.push_str("<h2>Staff</h2>\n<table id=\"staff\"><tr><th>ID</th><th>Name</th><th>Email</th><th>Phone</th><th>Active</th><th>Store</th></tr>\n");
    for row in &data.staffs {
        let s = &row.staff;
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            s.staff_id,
            escape_html(&s.full_name()),
            escape_html(&s.email),
            opt(&s.phone),
            if s.active { "Yes" } else { "No" },
            opt(&row.store_name),
        );
    }
    body.push_str("</table>\n");

    let _ = write!(
        body,
        r#"<form method="post" action="/home/staff"><fieldset><legend>New staff</legend>
<input name="first_name" placeholder="First name" required>
<input name="last_name" placeholder="Last name" required>
<input name="email" type="email" placeholder="Email" required>
<input name="phone" placeholder="Phone">
<select name="active"><option value="true">Active</option><option value="false">Inactive</option></select>
<select name="store_id">{stores}</select>
<input name="manager_id" placeholder="Manager ID">
<button type="submit">Create</button>
</fieldset></form>
"#,
        stores = store_options(&data.stores)
    );

    // ===== 客户 =====
    body.push_str("<h2>Customers</h2>\n<table id=\"customers\"><tr><th>ID</th><th>Name</th><th>Email</th><th>Phone</th><th>City</th><th>State</th></tr>\n");
    for c in &data.customers {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            c.customer_id,
            escape_html(&c.full_name()),
            escape_html(&c.email),
            opt(&c.phone),
            opt(&c.city),
            opt(&c.state),
        );
    }
    body.push_str("</table>\n");

    body.push_str(
        r#"<form method="post" action="/home/customers"><fieldset><legend>New customer</legend>
<input name="first_name" placeholder="First name" required>
<input name="last_name" placeholder="Last name" required>
<input name="email" type="email" placeholder="Email" required>
<input name="phone" placeholder="Phone">
<input name="street" placeholder="Street">
<input name="city" placeholder="City">
<input name="state" placeholder="State">
<input name="zip_code" placeholder="Zip" maxlength="5">
<button type="submit">Create</button>
</fieldset></form>
"#,
    );

    // ===== 商品 =====
    let brands = brand_options(&data.brands);
    let categories = category_options(&data.categories);
    let _ = write!(
        body,
        r#"<h2>Products</h2>
<div id="product-filter">
<select id="filter-brand"><option value="0">All brands</option>{brands}</select>
<select id="filter-category"><option value="0">All categories</option>{categories}</select>
<button type="button" onclick="filterProducts()">Filter</button>
</div>
<table id="products"><thead><tr><th>ID</th><th>Name</th><th>Brand</th><th>Category</th><th>Model year</th><th>List price</th></tr></thead><tbody>
"#
    );
    for p in &data.products {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td></tr>",
            p.product_id,
            escape_html(&p.product_name),
            opt(&p.brand_name),
            opt(&p.category_name),
            p.model_year,
            p.list_price,
        );
    }
    body.push_str("</tbody></table>\n");

    let _ = write!(
        body,
        r#"<form method="post" action="/home/products"><fieldset><legend>New product</legend>
<input name="product_name" placeholder="Product name" required>
<select name="brand_id">{brands}</select>
<select name="category_id">{categories}</select>
<input name="model_year" type="number" placeholder="Model year" required>
<input name="list_price" type="number" step="0.01" min="0" placeholder="List price" required>
<button type="submit">Create</button>
</fieldset></form>
"#
    );

    body.push_str(FILTER_SCRIPT);

    layout("Home", "Home", flash, &body)
}

const FILTER_SCRIPT: &str = r#"<script>
function esc(s) {
  return String(s == null ? '' : s).replace(/[&<>"']/g, function (c) {
    return {'&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'}[c];
  });
}
function filterProducts() {
  var b = document.getElementById('filter-brand').value;
  var c = document.getElementById('filter-category').value;
  fetch('/home/products?brand_id=' + b + '&category_id=' + c, {headers: {'Accept': 'application/json'}})
    .then(function (r) { return r.json(); })
    .then(function (rows) {
      if (!Array.isArray(rows)) { alert(rows.message); return; }
      var body = document.querySelector('#products tbody');
      body.innerHTML = rows.map(function (p) {
        return '<tr><td>' + p.product_id + '</td><td>' + esc(p.product_name) + '</td><td>' +
          esc(p.brand_name) + '</td><td>' + esc(p.category_name) + '</td><td>' +
          p.model_year + '</td><td>' + Number(p.list_price).toFixed(2) + '</td></tr>';
      }).join('');
    });
}
</script>
"#;
