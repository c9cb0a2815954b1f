use crate::model::{Category, Product};
use crate::render::{RenderError, Rendered, Renderer};
use crate::store::CategoryNames;

/// Structured output. Lists serialize as JSON arrays; empty is `[]`.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
  fn needs_category_names(&self) -> bool {
    false
  }

  fn products(&self, products: &[Product], _names: &CategoryNames) -> Result<Rendered, RenderError> {
    Ok(Rendered::json(serde_json::to_string(products)?))
  }

  fn categories(&self, categories: &[Category]) -> Result<Rendered, RenderError> {
    Ok(Rendered::json(serde_json::to_string(categories)?))
  }
}
