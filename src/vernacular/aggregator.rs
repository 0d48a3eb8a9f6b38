//! Picks the representative base name for a genus or family.
use crate::vernacular::extractor::extract_base_name;
use indexmap::IndexMap;
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

/// Anything that may carry a vernacular name.
pub trait VernacularNamed {
    fn vernacular_name(&self) -> Option<&str>;
}

impl VernacularNamed for &str {
    fn vernacular_name(&self) -> Option<&str> {
        Some(*self)
    }
}

impl VernacularNamed for String {
    fn vernacular_name(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl VernacularNamed for Option<&str> {
    fn vernacular_name(&self) -> Option<&str> {
        *self
    }
}

impl VernacularNamed for Option<String> {
    fn vernacular_name(&self) -> Option<&str> {
        self.as_deref()
    }
}

/// One distinct base name within a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameTally {
    /// First literal seen for this key, with original casing and accents.
    pub literal: String,
    pub key: String,
    pub count: usize,
}

/// Grouping key: NFD, combining marks (U+0300..=U+036F) removed, lower-cased.
pub fn normalized_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect::<String>()
        .to_lowercase()
}

fn base_names<T: VernacularNamed>(species: &[T]) -> Vec<String> {
    species
        .iter()
        .filter_map(|s| s.vernacular_name())
        .filter(|name| !name.trim().is_empty())
        .map(|name| extract_base_name(Some(name)))
        .filter(|base| !base.is_empty())
        .collect()
}

/// Counts base names by normalized key, in order of first occurrence.
pub fn tally_base_names<T: VernacularNamed>(species: &[T]) -> Vec<NameTally> {
    let mut table: IndexMap<String, NameTally> = IndexMap::new();
    for literal in base_names(species) {
        let key = normalized_key(&literal);
        table
            .entry(key.clone())
            .and_modify(|tally| tally.count += 1)
            .or_insert(NameTally {
                literal,
                key,
                count: 1,
            });
    }
    table.into_values().collect()
}

/// Selects the winning tally: highest count, then shortest literal, then
/// earliest first occurrence.
pub fn select_representative<T: VernacularNamed>(species: &[T]) -> Option<NameTally> {
    let mut best: Option<NameTally> = None;
    for tally in tally_base_names(species) {
        let better = match &best {
            None => true,
            Some(current) => {
                tally.count > current.count
                    || (tally.count == current.count
                        && tally.literal.chars().count() < current.literal.chars().count())
            }
        };
        if better {
            best = Some(tally);
        }
    }
    best
}

/// Returns the base name that best labels a group of species, or `None` when
/// none of them has a usable vernacular name.
pub fn representative_name<T: VernacularNamed>(species: &[T]) -> Option<String> {
    select_representative(species).map(|tally| tally.literal)
}
