//! Catalog records and their write inputs

use serde::{Deserialize, Serialize};

/// Store-assigned identifier. Signed so that any integer a client sends as a
/// category reference can be held and compared.
pub type Id = i64;

/// Product record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub id: Id,
  #[serde(rename = "nama")]
  pub name: String,
  /// Price in the smallest currency unit
  #[serde(rename = "harga")]
  pub price: i64,
  /// Stock on hand, negative for backorder
  #[serde(rename = "stok")]
  pub stock: i64,
  /// Not checked against existing categories
  pub category_id: Id,
}

/// Category record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id: Id,
  pub name: String,
  pub description: String,
}

/// Mutable product fields, as accepted by create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProductInput {
  #[serde(rename = "nama")]
  pub name: String,
  #[serde(rename = "harga")]
  pub price: i64,
  #[serde(rename = "stok")]
  pub stock: i64,
  pub category_id: Id,
}

/// Mutable category fields, as accepted by create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CategoryInput {
  pub name: String,
  pub description: String,
}

/// A stored record with a store-assigned identifier.
pub trait Entity: Clone {
  type Input;

  /// Name used in log lines and error messages
  const KIND: &'static str;

  fn create(id: Id, input: Self::Input) -> Self;

  fn id(&self) -> Id;

  /// Overwrite every mutable field. The identifier is left alone.
  fn apply(&mut self, input: Self::Input);
}

impl Entity for Product {
  type Input = ProductInput;

  const KIND: &'static str = "produk";

  fn create(id: Id, input: ProductInput) -> Self {
    Self {
      id,
      name: input.name,
      price: input.price,
      stock: input.stock,
      category_id: input.category_id,
    }
  }

  fn id(&self) -> Id {
    self.id
  }

  fn apply(&mut self, input: ProductInput) {
    self.name = input.name;
    self.price = input.price;
    self.stock = input.stock;
    self.category_id = input.category_id;
  }
}

impl Entity for Category {
  type Input = CategoryInput;

  const KIND: &'static str = "category";

  fn create(id: Id, input: CategoryInput) -> Self {
    Self {
      id,
      name: input.name,
      description: input.description,
    }
  }

  fn id(&self) -> Id {
    self.id
  }

  fn apply(&mut self, input: CategoryInput) {
    self.name = input.name;
    self.description = input.description;
  }
}

/// Counters reported by `/api/stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
  pub total_products: usize,
  pub total_categories: usize,
  pub last_product_id: Id,
  pub last_category_id: Id,
}
