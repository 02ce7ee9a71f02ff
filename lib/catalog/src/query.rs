//! Query normalization and trigger words.
//!
//! The trigger-word set does double duty: the router classifies a message
//! as a catalog lookup when any trigger appears in it, and the lookup
//! strips those same words before matching against product names. The
//! stripping step is part of the lookup contract because it determines
//! what the classifier treats as a findable query.

/// Keywords that force catalog-lookup routing.
pub const TRIGGER_WORDS: [&str; 3] = ["buscar", "precio", "dónde comprar"];

/// Returns true if the text contains any trigger word.
///
/// Matching is case-insensitive and purely substring-based: a trigger
/// inside an unrelated word (e.g. "precioso") still counts. That quirk is
/// deliberate and covered by tests.
#[must_use]
pub fn contains_trigger(text: &str) -> bool {
    let lowered = text.to_lowercase();
    TRIGGER_WORDS.iter().any(|word| lowered.contains(word))
}

/// Normalizes a raw message into a catalog search term.
///
/// Lower-cases, strips the first occurrence of each trigger word, drops
/// quote characters, and trims surrounding whitespace.
#[must_use]
pub fn clean_query(raw: &str) -> String {
    let mut cleaned = raw.to_lowercase();
    for word in TRIGGER_WORDS {
        cleaned = cleaned.replacen(word, "", 1);
    }
    cleaned.replace('"', "").trim().to_string()
}
