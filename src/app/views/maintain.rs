use std::fmt::Write;

use super::{brand_options, category_options, escape_html, layout, opt, store_options};
use crate::api::MaintainOverview;
use crate::app::http::FlashQuery;

fn delete_button(entity: &str, id: i64) -> String {
    format!(
        "<form class=\"inline\" method=\"post\" action=\"/maintain/{entity}/{id}/delete\" onsubmit=\"return confirm('Delete?')\"><button type=\"submit\">Delete</button></form>"
    )
}

fn edit_button(entity: &str, id: i64) -> String {
    format!("<button type=\"button\" onclick=\"loadRow('{entity}', {id})\">Edit</button>")
}

/// 维护页：列表 + 行内编辑/删除
pub fn render(data: &MaintainOverview, flash: &FlashQuery) -> String {
    let mut body = String::new();

    let mut manager_options = String::from("<option value=\"\">(none)</option>");
    for m in &data.managers {
        let _ = write!(
            manager_options,
            "<option value=\"{}\">{}</option>",
            m.staff_id,
            escape_html(&m.full_name())
        );
    }

    // ===== 员工 =====
    body.push_str("<h2>Staff</h2>\n<table><tr><th>ID</th><th>Name</th><th>Email</th><th>Active</th><th>Store</th><th>Manager</th><th></th></tr>\n");
    for row in &data.staffs {
        let s = &row.staff;
        let manager = s
            .manager_id
            .and_then(|id| data.managers.iter().find(|m| m.staff_id == id))
            .map(|m| escape_html(&m.full_name()))
            .unwrap_or_default();
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{} {}</td></tr>",
            s.staff_id,
            escape_html(&s.full_name()),
            escape_html(&s.email),
            if s.active { "Yes" } else { "No" },
            opt(&row.store_name),
            manager,
            edit_button("staff", s.staff_id),
            delete_button("staff", s.staff_id),
        );
    }
    body.push_str("</table>\n");

    let _ = write!(
        body,
        r#"<form id="edit-staff" method="post" action="/maintain/staff/edit"><fieldset><legend>Edit staff</legend>
<input name="staff_id" readonly>
<input name="first_name" placeholder="First name">
<input name="last_name" placeholder="Last name">
<input name="email" placeholder="Email">
<input name="phone" placeholder="Phone">
<select name="active"><option value="true">Active</option><option value="false">Inactive</option></select>
<select name="store_id">{stores}</select>
<select name="manager_id">{managers}</select>
<button type="submit">Save</button>
</fieldset></form>
"#,
        stores = store_options(&data.stores),
        managers = manager_options,
    );

    // ===== 客户 =====
    body.push_str("<h2>Customers</h2>\n<table><tr><th>ID</th><th>Name</th><th>Email</th><th>Phone</th><th>Address</th><th></th></tr>\n");
    for c in &data.customers {
        let address = [&c.street, &c.city, &c.state, &c.zip_code]
            .iter()
            .filter_map(|part| part.as_deref())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{} {}</td></tr>",
            c.customer_id,
            escape_html(&c.full_name()),
            escape_html(&c.email),
            opt(&c.phone),
            escape_html(&address),
            edit_button("customers", c.customer_id),
            delete_button("customers", c.customer_id),
        );
    }
    body.push_str("</table>\n");

    body.push_str(
        r#"<form id="edit-customers" method="post" action="/maintain/customers/edit"><fieldset><legend>Edit customer</legend>
<input name="customer_id" readonly>
<input name="first_name" placeholder="First name">
<input name="last_name" placeholder="Last name">
<input name="email" placeholder="Email">
<input name="phone" placeholder="Phone">
<input name="street" placeholder="Street">
<input name="city" placeholder="City">
<input name="state" placeholder="State">
<input name="zip_code" placeholder="Zip">
<button type="submit">Save</button>
</fieldset></form>
"#,
    );

    // ===== 商品 =====
    body.push_str("<h2>Products</h2>\n<table><tr><th>ID</th><th>Name</th><th>Brand</th><th>Category</th><th>Model year</th><th>List price</th><th></th></tr>\n");
    for p in &data.products {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td><td>{} {}</td></tr>",
            p.product_id,
            escape_html(&p.product_name),
            opt(&p.brand_name),
            opt(&p.category_name),
            p.model_year,
            p.list_price,
            edit_button("products", p.product_id),
            delete_button("products", p.product_id),
        );
    }
    body.push_str("</table>\n");

    let _ = write!(
        body,
        r#"<form id="edit-products" method="post" action="/maintain/products/edit"><fieldset><legend>Edit product</legend>
<input name="product_id" readonly>
<input name="product_name" placeholder="Product name">
<select name="brand_id">{brands}</select>
<select name="category_id">{categories}</select>
<input name="model_year" type="number">
<input name="list_price" type="number" step="0.01" min="0">
<button type="submit">Save</button>
</fieldset></form>
"#,
        brands = brand_options(&data.brands),
        categories = category_options(&data.categories),
    );

    body.push_str(EDIT_SCRIPT);

    layout("Maintain", "Maintain", flash, &body)
}

// 读取单行并填入对应编辑表单（字段名与 JSON 键一致）
const EDIT_SCRIPT: &str = r#"<script>
function loadRow(entity, id) {
  fetch('/maintain/' + entity + '/' + id, {headers: {'Accept': 'application/json'}})
    .then(function (r) { return r.json(); })
    .then(function (data) {
      if (!data.success) { alert(data.message); return; }
      var form = document.getElementById('edit-' + entity);
      Array.prototype.forEach.call(form.elements, function (el) {
        if (el.name && Object.prototype.hasOwnProperty.call(data, el.name)) {
          var v = data[el.name];
          el.value = v == null ? '' : String(v);
        }
      });
      form.scrollIntoView();
    });
}
</script>
"#;
