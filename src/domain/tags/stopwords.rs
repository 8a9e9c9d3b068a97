//! Stopword filtering for tag generation

use std::collections::HashSet;
use std::sync::OnceLock;

/// Common filler words and junk tokens that never become tags on their own.
///
/// The list is hand-curated for rental-catalog copy: grammatical filler,
/// measurement noise ("ft", "diameter"), storefront boilerplate ("delivery",
/// "pickup"), and leftover markup entities ("br", "nbsp").
static STOPWORD_LIST: &[&str] = &[
    "the", "a", "an", "is", "this", "that", "by", "with", "only", "ft", "item",
    "items", "setup", "setups", "diameter", "width", "height", "length", "size",
    "sizes", "color", "colors", "style", "styles", "type", "types", "model",
    "models", "brand", "brands", "make", "br", "p", "x", "and", "or", "of", "on",
    "in", "for", "to", "as", "l", "m", "s", "xl", "xxl", "xxxl", "xxs", "xs", "i",
    "it", "if", "perfect", "new", "used", "like", "more", "less", "than", "about",
    "all", "some", "any", "every", "such", "no", "not", "per", "pers", "we", "you",
    "up", "dimensions", "dimension", "dimensionses", "delivery", "deliveries",
    "rentals", "rental", "rents", "rent", "available", "availables", "availablity",
    "availablities", "service", "services", "pickup", "pickups", "pick-up",
    "setupes", "setuping", "product", "products", "w", "butt", "but", "butts",
    "itemes", "iteming", "itemses", "itemsing", "has", "have", "had", "having",
    "say", "hold", "holds", "holding", "holded", "holdes", "holdings",
    "holdingses", "use", "uses", "using", "useing", "usees", "usings", "usingses",
    "makes", "making", "mades", "mading", "madeing", "madees", "madeses", "do",
    "does", "doing", "did", "done", "doeses", "doings", "doed", "doesing", "go",
    "nbsp", "nbsps", "included", "includes", "including", "include", "includedes",
    "includings", "includeds", "organically", "organicallies", "organic",
    "organics", "organicses", "organicing", "organices", "organicinges", "and/or",
    "andor", "andors", "andorses", "andoring", "andored", "andores", "or/and",
    "orand", "orands", "orandses", "oranding", "oranded", "orandes", "really",
    "realies", "reals", "realses", "realing", "realed", "reales", "reallies",
    "people", "peoples", "person", "persons", "peopleing", "peoplees",
    "peopleinges", "personing", "persones", "personinges", "personings",
    "personingses", "thing", "things", "thinges", "thinging", "thingesing",
    "thingesed", "thingeses", "likes", "liking", "liked", "likeses", "likings",
    "likingses", "etc", "etcs", "etcetera", "etceteras", "timeless", "events",
    "timelesses", "ltd", "oz", "ozs", "ozes", "ozing", "ozed", "ozesing", "be",
    "tool", "tools",
];

fn stopword_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOPWORD_LIST.iter().copied().collect())
}

/// Check whether a lowercase token is a stopword
pub fn is_stopword(word: &str) -> bool {
    stopword_set().contains(word)
}
