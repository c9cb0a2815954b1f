//! HTML fragments for partial-page replacement

use std::fmt::Write;

use crate::model::{Category, Product};
use crate::render::{RenderError, Rendered, Renderer};
use crate::store::CategoryNames;

pub const NO_PRODUCTS: &str = "<p class='text-muted'>No products found.</p>";
pub const NO_CATEGORIES: &str = "<p class='text-muted'>No categories found.</p>";

const TABLE_OPEN: &str = "<div class=\"table-responsive\">\n<table class=\"table table-hover\">\n";
const TABLE_CLOSE: &str = "</tbody></table></div>";

/// Table fragments with edit and delete actions per row
pub struct FragmentRenderer;

impl Renderer for FragmentRenderer {
  fn needs_category_names(&self) -> bool {
    true
  }

  fn products(&self, products: &[Product], names: &CategoryNames) -> Result<Rendered, RenderError> {
    if products.is_empty() {
      return Ok(Rendered::html(NO_PRODUCTS.to_string()));
    }

    let mut html = String::from(TABLE_OPEN);
    html.push_str(
      "<thead><tr><th>ID</th><th>Name</th><th>Price</th><th>Stock</th><th>Category</th><th>Actions</th></tr></thead>\n<tbody>",
    );
    for p in products {
      let category = names.resolve(p.category_id);
      // writing into a String cannot fail
      let _ = write!(
        html,
        "\n<tr><td>{id}</td><td>{name}</td><td>Rp {price}</td><td>{stock}</td><td>{category}</td>\
         <td><button class=\"btn btn-sm btn-warning me-1\" onclick=\"editProduct({id}, '{js_name}', {price}, {stock}, {category_id})\">Edit</button>\
         <button class=\"btn btn-sm btn-danger\" onclick=\"deleteProduct({id})\">Delete</button></td></tr>",
        id = p.id,
        name = escape(&p.name),
        price = p.price,
        stock = p.stock,
        category = escape(category),
        js_name = escape(&js_literal(&p.name)),
        category_id = p.category_id,
      );
    }
    html.push_str(TABLE_CLOSE);
    Ok(Rendered::html(html))
  }

  fn categories(&self, categories: &[Category]) -> Result<Rendered, RenderError> {
    if categories.is_empty() {
      return Ok(Rendered::html(NO_CATEGORIES.to_string()));
    }

    let mut html = String::from(TABLE_OPEN);
    html.push_str(
      "<thead><tr><th>ID</th><th>Name</th><th>Description</th><th>Actions</th></tr></thead>\n<tbody>",
    );
    for c in categories {
      let _ = write!(
        html,
        "\n<tr><td>{id}</td><td>{name}</td><td>{description}</td>\
         <td><button class=\"btn btn-sm btn-warning me-1\" onclick=\"editCategory({id}, '{js_name}', '{js_description}')\">Edit</button>\
         <button class=\"btn btn-sm btn-danger\" onclick=\"deleteCategory({id})\">Delete</button></td></tr>",
        id = c.id,
        name = escape(&c.name),
        description = escape(&c.description),
        js_name = escape(&js_literal(&c.name)),
        js_description = escape(&js_literal(&c.description)),
      );
    }
    html.push_str(TABLE_CLOSE);
    Ok(Rendered::html(html))
  }
}

/// `<option>` list for the product form's category dropdown
pub fn category_options(categories: &[Category]) -> Rendered {
  let mut html = String::new();
  for c in categories {
    let _ = write!(html, "<option value=\"{}\">{}</option>", c.id, escape(&c.name));
  }
  Rendered::html(html)
}

/// Escape text for HTML element content and quoted attributes
fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(ch),
    }
  }
  out
}

/// Escape text for a single-quoted JavaScript string literal
fn js_literal(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '\\' => out.push_str("\\\\"),
      '\'' => out.push_str("\\'"),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      _ => out.push(ch),
    }
  }
  out
}
