//! Product records.

use serde::{Deserialize, Serialize};

/// One entry of the parts catalog.
///
/// The name doubles as the lookup key; prices are display strings exactly
/// as the shop lists them (e.g. `$9.478`), never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product name.
    pub name: String,
    /// Display price.
    pub price: String,
    /// Optional description.
    pub description: Option<String>,
    /// Canonical shop URL.
    pub url: String,
}

impl ProductRecord {
    /// Creates a record without a description.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: None,
            url: url.into(),
        }
    }

    /// Adds a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_builder() {
        let record = ProductRecord::new(
            "Filtro de Aire Honda XR 250 Tornado",
            "$9.478",
            "https://ejemplo.com/filtro-aire-honda-xr-250",
        )
        .with_description("Filtro de aire de calidad original.");

        assert_eq!(record.name, "Filtro de Aire Honda XR 250 Tornado");
        assert!(record.description.is_some());
    }
}
