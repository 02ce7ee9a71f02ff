//! User-facing reply texts.
//!
//! The assistant answers in Spanish; these strings are the full set of
//! canned replies around catalog results and failures.

use motochat_catalog::ProductRecord;

/// Marketplace search used when the shop catalog has no match.
const MERCADO_LIBRE_SEARCH: &str = "https://listado.mercadolibre.com.ar/";

/// Reply for a catalog hit.
#[must_use]
pub fn product_found(record: &ProductRecord) -> String {
    format!(
        "He encontrado este repuesto en tu tienda:\n\n\
         * **Producto:** {}\n\
         * **Precio:** {}\n\
         * **Enlace:** {}",
        record.name, record.price, record.url
    )
}

/// Reply when nothing matched: point the visitor at a marketplace search
/// for the cleaned query.
#[must_use]
pub fn product_not_found(cleaned_query: &str) -> String {
    format!(
        "No he encontrado resultados para \"{cleaned_query}\" en tu tienda. \
         Puedes intentar buscar en Mercado Libre: {MERCADO_LIBRE_SEARCH}{}",
        urlencoding::encode(cleaned_query)
    )
}

/// Reply when the catalog store cannot be consulted.
#[must_use]
pub fn catalog_unavailable() -> &'static str {
    "Lo siento, no pude realizar la búsqueda en este momento."
}

/// Reply when the generative backend fails.
#[must_use]
pub fn processing_failed() -> &'static str {
    "Lo siento, hubo un problema al procesar tu solicitud."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_reply_lists_name_price_and_url() {
        let record = ProductRecord::new(
            "Filtro de Aire Honda XR 250 Tornado",
            "$9.478",
            "https://ejemplo.com/filtro-aire-honda-xr-250",
        );
        let text = product_found(&record);
        assert!(text.contains("Filtro de Aire Honda XR 250 Tornado"));
        assert!(text.contains("$9.478"));
        assert!(text.contains("https://ejemplo.com/filtro-aire-honda-xr-250"));
    }

    #[test]
    fn not_found_reply_url_encodes_the_query() {
        let text = product_not_found("bujía ngk");
        assert!(text.contains("https://listado.mercadolibre.com.ar/buj%C3%ADa%20ngk"));
        assert!(text.contains("\"bujía ngk\""));
    }
}
