//! In-memory catalog for demos and tests.

use crate::error::CatalogError;
use crate::lookup::CatalogLookup;
use crate::product::ProductRecord;
use crate::query::clean_query;
use async_trait::async_trait;

/// A fixed catalog held in memory, matched in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: Vec<ProductRecord>,
}

impl MemoryCatalog {
    /// Creates a catalog from a list of products.
    #[must_use]
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    /// The demo catalog: the one sample product the shop ships with.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(vec![
            ProductRecord::new(
                "Filtro de Aire Honda XR 250 Tornado",
                "$9.478",
                "https://ejemplo.com/filtro-aire-honda-xr-250",
            )
            .with_description(
                "Filtro de aire de calidad original para Honda XR 250 Tornado. \
                 Hecho en Argentina.",
            ),
        ])
    }

    /// Returns the number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogLookup for MemoryCatalog {
    async fn search(&self, raw_query: &str) -> Result<Option<ProductRecord>, CatalogError> {
        let cleaned = clean_query(raw_query);
        Ok(self
            .products
            .iter()
            .find(|p| p.name.to_lowercase().contains(&cleaned))
            .cloned())
    }
}
