//! Product list filtering

use crate::model::Product;

/// Filter applied by `GET /produk`.
///
/// A price bound of zero (or below) is treated as unset, so a caller cannot
/// ask for "price >= 0" or select products priced at or below zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
  /// Case-insensitive substring of the product name
  pub name: Option<String>,
  pub min_price: i64,
  pub max_price: i64,
}

impl ProductFilter {
  pub fn new(name: impl Into<String>, min_price: i64, max_price: i64) -> Self {
    let name = name.into();
    Self {
      name: (!name.is_empty()).then_some(name),
      min_price,
      max_price,
    }
  }

  /// Keep matching products, preserving input order
  pub fn apply<'a, I>(&self, products: I) -> Vec<Product>
  where
    I: IntoIterator<Item = &'a Product>,
  {
    let pattern = self.pattern();
    products
      .into_iter()
      .filter(|p| Self::contains(&p.name, pattern.as_deref()) && self.matches_price(p.price))
      .cloned()
      .collect()
  }

  fn pattern(&self) -> Option<String> {
    self
      .name
      .as_deref()
      .filter(|n| !n.is_empty())
      .map(str::to_lowercase)
  }

  fn contains(name: &str, pattern: Option<&str>) -> bool {
    match pattern {
      Some(pattern) => name.to_lowercase().contains(pattern),
      None => true,
    }
  }

  fn matches_price(&self, price: i64) -> bool {
    if self.min_price > 0 && price < self.min_price {
      return false;
    }
    if self.max_price > 0 && price > self.max_price {
      return false;
    }
    true
  }
}
