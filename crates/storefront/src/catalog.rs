//! Catalog loading and in-memory lookup.
//!
//! The catalog is a static JSON document read from disk once per process.
//! The first request to need it performs the load; everyone after that
//! gets the cached copy. Concurrent first requests serialize behind the
//! in-flight load, and a failed load is not cached - the next request
//! retries.

use std::collections::HashMap;
use std::path::PathBuf;

use tokio::sync::OnceCell;
use tracing::{info, instrument};

use ilara_core::catalog::{Category, Product};
use ilara_core::types::ProductId;

/// Catalog loading errors. Both variants mean the same thing to callers:
/// product data is unavailable and listings should degrade to empty.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog document: {0}")]
    Io(String),
    #[error("failed to parse catalog document: {0}")]
    Parse(String),
}

/// The loaded catalog: the ordered product list plus an id index.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from an ordered product list.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let by_id = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Self { products, by_id }
    }

    /// All products, in document order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).and_then(|&i| self.products.get(i))
    }

    /// Featured products, excluding sold-out items.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.featured && !p.sold_out)
    }

    /// Bestsellers, excluding sold-out items.
    pub fn bestsellers(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.bestseller && !p.sold_out)
    }

    /// New arrivals, excluding sold-out items.
    pub fn new_arrivals(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.new_in && !p.sold_out)
    }

    /// All products in a category, sold-out items included (the listing
    /// pages show them with a sold-out badge).
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }
}

/// Lazily-loaded, process-cached catalog store.
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    loaded: OnceCell<Catalog>,
}

impl CatalogStore {
    /// Create a store reading from the given document path. Nothing is
    /// loaded until the first [`get`](Self::get).
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            loaded: OnceCell::const_new(),
        }
    }

    /// The catalog, loading it on first call.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the document cannot be read or parsed;
    /// the failure is not cached and a later call retries the load.
    #[instrument(skip(self))]
    pub async fn get(&self) -> Result<&Catalog, CatalogError> {
        self.loaded.get_or_try_init(|| self.load()).await
    }

    async fn load(&self) -> Result<Catalog, CatalogError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CatalogError::Io(format!("{}: {e}", self.path.display())))?;
        let products: Vec<Product> =
            serde_json::from_slice(&bytes).map_err(|e| CatalogError::Parse(e.to_string()))?;

        info!(count = products.len(), path = %self.path.display(), "catalog loaded");
        Ok(Catalog::new(products))
    }
}
