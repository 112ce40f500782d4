//! Static knowledge base mapping classifier labels to display metadata.
//!
//! The label set is fixed and baked in at build time; lookups are total.
//! Unknown labels resolve to the non-herbal fallback entry.

use crate::entities::KnowledgeEntry;
use crate::enums::Category;

/// Description returned for labels the knowledge base does not know.
pub const FALLBACK_DESCRIPTION: &str = "plant information unavailable";

/// Labels the knowledge base carries an entry for.
#[must_use]
pub const fn known_labels() -> &'static [&'static str] {
    &["saga", "kelor", "beras", "tomat", "kentang"]
}

/// Resolve a classifier label to its display metadata.
///
/// Total function: unknown labels yield the non-herbal fallback entry rather
/// than an error.
#[must_use]
pub fn lookup(label: &str) -> KnowledgeEntry {
    let (category, description) = match label {
        "saga" => (
            Category::Herbal,
            "Saga (Abrus precatorius) is a traditional medicinal plant; its \
             leaves are used to relieve coughs, fever, and inflammation, and \
             the seeds also appear in herbal preparations.",
        ),
        "kelor" => (
            Category::Herbal,
            "Moringa (Moringa oleifera) leaves are rich in vitamins A and C \
             and in minerals. Known as a superfood, they support the immune \
             system and carry strong antioxidant properties.",
        ),
        "beras" => (
            Category::NonHerbal,
            "Rice (Oryza sativa) is the staple carbohydrate crop. Although \
             not a medicinal plant, its leaves contain silica.",
        ),
        "tomat" => (
            Category::NonHerbal,
            "Tomato (Solanum lycopersicum) is a food crop rich in lycopene. \
             The leaves are not eaten because they contain toxic solanine.",
        ),
        "kentang" => (
            Category::NonHerbal,
            "Potato (Solanum tuberosum) is a carbohydrate staple. Its leaves \
             contain toxic glycoalkaloids and must not be consumed.",
        ),
        _ => (Category::NonHerbal, FALLBACK_DESCRIPTION),
    };

    KnowledgeEntry {
        category,
        description: description.to_string(),
    }
}
