//! SQLite-backed catalog.

use crate::error::CatalogError;
use crate::lookup::CatalogLookup;
use crate::product::ProductRecord;
use crate::query::clean_query;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use std::str::FromStr;

/// Row type for product queries.
#[derive(FromRow)]
struct ProductRow {
    name: String,
    price: String,
    description: Option<String>,
    url: String,
}

impl ProductRow {
    fn into_record(self) -> ProductRecord {
        ProductRecord {
            name: self.name,
            price: self.price,
            description: self.description,
            url: self.url,
        }
    }
}

/// Catalog lookup over a SQLite `products` table.
///
/// The table is created by the server's migrations; this type only reads.
#[derive(Debug, Clone)]
pub struct SqlCatalog {
    pool: SqlitePool,
}

impl SqlCatalog {
    /// Opens a connection pool for the given database URL, creating the
    /// database file if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the database cannot be
    /// opened.
    pub async fn connect(database_url: &str) -> Result<Self, CatalogError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| CatalogError::StorageFailed {
                reason: e.to_string(),
            })?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| CatalogError::StorageFailed {
                reason: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Returns the underlying pool, e.g. for running migrations at startup.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CatalogLookup for SqlCatalog {
    async fn search(&self, raw_query: &str) -> Result<Option<ProductRecord>, CatalogError> {
        let cleaned = clean_query(raw_query);
        let pattern = format!("%{cleaned}%");

        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT name, price, description, url
            FROM products
            WHERE lower(name) LIKE ?1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(&pattern)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::QueryFailed {
            reason: e.to_string(),
        })?;

        Ok(row.map(ProductRow::into_record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    async fn seeded_catalog(db: &NamedTempFile) -> SqlCatalog {
        let url = format!("sqlite://{}", db.path().display());
        let catalog = SqlCatalog::connect(&url).await.expect("connect");

        sqlx::query(
            r#"
            CREATE TABLE products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                price TEXT NOT NULL,
                description TEXT,
                url TEXT NOT NULL
            )
            "#,
        )
        .execute(catalog.pool())
        .await
        .expect("create table");

        for (name, price, url) in [
            (
                "Filtro de Aire Honda XR 250 Tornado",
                "$9.478",
                "https://ejemplo.com/filtro-aire-honda-xr-250",
            ),
            (
                "Kit de Arrastre Yamaha YBR 125",
                "$24.900",
                "https://ejemplo.com/kit-arrastre-ybr-125",
            ),
        ] {
            sqlx::query("INSERT INTO products (name, price, url) VALUES (?1, ?2, ?3)")
                .bind(name)
                .bind(price)
                .bind(url)
                .execute(catalog.pool())
                .await
                .expect("insert product");
        }

        catalog
    }

    #[tokio::test]
    async fn search_finds_substring_match() {
        let db = NamedTempFile::new().expect("temp db");
        let catalog = seeded_catalog(&db).await;

        let found = catalog
            .search("buscar filtro de aire")
            .await
            .expect("search")
            .expect("should match");

        assert_eq!(found.name, "Filtro de Aire Honda XR 250 Tornado");
        assert_eq!(found.price, "$9.478");
    }

    #[tokio::test]
    async fn search_returns_none_without_match() {
        let db = NamedTempFile::new().expect("temp db");
        let catalog = seeded_catalog(&db).await;

        let found = catalog.search("buscar bujía NGK").await.expect("search");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn search_is_first_match_in_catalog_order() {
        let db = NamedTempFile::new().expect("temp db");
        let catalog = seeded_catalog(&db).await;

        // Both rows contain "a"; the earlier row wins.
        let found = catalog.search("a").await.expect("search").expect("match");
        assert_eq!(found.name, "Filtro de Aire Honda XR 250 Tornado");
    }
}
