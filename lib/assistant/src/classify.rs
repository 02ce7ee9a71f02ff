//! Message route classification.

use motochat_catalog::contains_trigger;

/// The two mutually exclusive reply-generation routes a turn may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Answer from the product catalog.
    Catalog,
    /// Delegate to the generative backend.
    Generative,
}

/// Classifies a message by its text.
///
/// This is a hard switch, not a score: any trigger word present anywhere
/// in the text forces the catalog route, even as a substring of another
/// word.
#[must_use]
pub fn classify(text: &str) -> Route {
    if contains_trigger(text) {
        Route::Catalog
    } else {
        Route::Generative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_words_route_to_catalog() {
        assert_eq!(classify("buscar filtro de aire"), Route::Catalog);
        assert_eq!(classify("decime el precio del filtro"), Route::Catalog);
        assert_eq!(classify("¿dónde comprar una bujía?"), Route::Catalog);
    }

    #[test]
    fn plain_chat_routes_to_generative() {
        assert_eq!(classify("¿qué aceite le pongo a la Tornado?"), Route::Generative);
        assert_eq!(classify(""), Route::Generative);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("BUSCAR bujía"), Route::Catalog);
    }

    #[test]
    fn trigger_substring_inside_other_word_still_wins() {
        // "precioso" contains "precio"; the switch fires anyway.
        assert_eq!(classify("un atardecer precioso"), Route::Catalog);
    }
}
