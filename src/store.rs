use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::filter::ProductFilter;
use crate::model::{Category, CategoryInput, Entity, Id, Product, ProductInput, Stats};

/// Placeholder shown for a product whose category does not exist
pub const NO_CATEGORY: &str = "No Category";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
  #[error("{kind} not found")]
  NotFound { kind: &'static str, id: Id },

  #[error("{0} collection lock poisoned")]
  Poisoned(&'static str),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// One entity type's records together with its identifier counter.
///
/// Records stay in insertion order. `last_id` only ever grows, so deleted
/// identifiers are never handed out again.
struct Collection<T> {
  items: Vec<T>,
  last_id: Id,
}

/// A lock-guarded collection. Each entity type gets its own lock so the two
/// collections never have to be held at the same time.
struct Table<T> {
  inner: RwLock<Collection<T>>,
}

impl<T: Entity> Table<T> {
  fn new() -> Self {
    Self {
      inner: RwLock::new(Collection {
        items: Vec::new(),
        last_id: 0,
      }),
    }
  }

  fn read(&self) -> Result<RwLockReadGuard<'_, Collection<T>>> {
    self.inner.read().map_err(|_| StoreError::Poisoned(T::KIND))
  }

  fn write(&self) -> Result<RwLockWriteGuard<'_, Collection<T>>> {
    self.inner.write().map_err(|_| StoreError::Poisoned(T::KIND))
  }

  fn not_found(id: Id) -> StoreError {
    StoreError::NotFound { kind: T::KIND, id }
  }

  fn create(&self, input: T::Input) -> Result<T> {
    let mut data = self.write()?;
    data.last_id += 1;
    let entity = T::create(data.last_id, input);
    data.items.push(entity.clone());
    Ok(entity)
  }

  fn all(&self) -> Result<Vec<T>> {
    Ok(self.read()?.items.clone())
  }

  fn get(&self, id: Id) -> Result<T> {
    let data = self.read()?;
    data
      .items
      .iter()
      .find(|e| e.id() == id)
      .cloned()
      .ok_or_else(|| Self::not_found(id))
  }

  fn update(&self, id: Id, input: T::Input) -> Result<T> {
    let mut data = self.write()?;
    let entity = data
      .items
      .iter_mut()
      .find(|e| e.id() == id)
      .ok_or_else(|| Self::not_found(id))?;
    entity.apply(input);
    Ok(entity.clone())
  }

  fn delete(&self, id: Id) -> Result<()> {
    let mut data = self.write()?;
    let pos = data
      .items
      .iter()
      .position(|e| e.id() == id)
      .ok_or_else(|| Self::not_found(id))?;
    // Vec::remove keeps the order of the remaining records
    data.items.remove(pos);
    Ok(())
  }

  /// Current length and last assigned identifier
  fn counts(&self) -> Result<(usize, Id)> {
    let data = self.read()?;
    Ok((data.items.len(), data.last_id))
  }
}

/// Point-in-time `category id -> name` lookup.
///
/// Built from a category snapshot so product rows can be rendered after
/// every collection lock has been released.
#[derive(Debug, Clone, Default)]
pub struct CategoryNames {
  names: HashMap<Id, String>,
}

impl CategoryNames {
  pub fn from_categories(categories: &[Category]) -> Self {
    Self {
      names: categories
        .iter()
        .map(|c| (c.id, c.name.clone()))
        .collect(),
    }
  }

  /// Name of the referenced category, or [`NO_CATEGORY`] if it is gone
  pub fn resolve(&self, id: Id) -> &str {
    self.names.get(&id).map(String::as_str).unwrap_or(NO_CATEGORY)
  }
}

/// In-memory product and category catalog.
///
/// Reads take a shared lock on one collection, writes an exclusive one.
/// No method holds both collection locks at once, and every returned value
/// is an owned copy so callers can render without holding a lock.
pub struct CatalogStore {
  products: Table<Product>,
  categories: Table<Category>,
}

impl CatalogStore {
  /// Create a new empty store
  pub fn new() -> Self {
    Self {
      products: Table::new(),
      categories: Table::new(),
    }
  }

  pub fn create_product(&self, input: ProductInput) -> Result<Product> {
    self.products.create(input)
  }

  /// Products matching `filter`, in insertion order
  pub fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
    let data = self.products.read()?;
    Ok(filter.apply(&data.items))
  }

  pub fn get_product(&self, id: Id) -> Result<Product> {
    self.products.get(id)
  }

  pub fn update_product(&self, id: Id, input: ProductInput) -> Result<Product> {
    self.products.update(id, input)
  }

  pub fn delete_product(&self, id: Id) -> Result<()> {
    self.products.delete(id)
  }

  pub fn create_category(&self, input: CategoryInput) -> Result<Category> {
    self.categories.create(input)
  }

  /// All categories, in insertion order
  pub fn list_categories(&self) -> Result<Vec<Category>> {
    self.categories.all()
  }

  pub fn get_category(&self, id: Id) -> Result<Category> {
    self.categories.get(id)
  }

  pub fn update_category(&self, id: Id, input: CategoryInput) -> Result<Category> {
    self.categories.update(id, input)
  }

  pub fn delete_category(&self, id: Id) -> Result<()> {
    self.categories.delete(id)
  }

  /// Snapshot of category names for rendering product rows
  pub fn category_names(&self) -> Result<CategoryNames> {
    let data = self.categories.read()?;
    Ok(CategoryNames::from_categories(&data.items))
  }

  /// Totals and last assigned identifiers.
  ///
  /// The two collections are read one after the other, so the pair is not
  /// an atomic view across both.
  pub fn stats(&self) -> Result<Stats> {
    let (total_products, last_product_id) = self.products.counts()?;
    let (total_categories, last_category_id) = self.categories.counts()?;
    Ok(Stats {
      total_products,
      total_categories,
      last_product_id,
      last_category_id,
    })
  }
}

impl Default for CatalogStore {
  fn default() -> Self {
    Self::new()
  }
}
