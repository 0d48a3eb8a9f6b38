
/// Normalizes verbose taxon labels (e.g., truncating authorship info).
pub fn normalize_taxon_name(taxon_name: &str) -> String {
    taxon_name
        .split_whitespace()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Genus of a binomial, i.e. its first token.
pub fn genus_of(scientific_name: &str) -> Option<String> {
    scientific_name.split_whitespace().next().map(String::from)
}
