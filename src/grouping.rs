//! Builds per-group labels and per-species base names from loaded records.
use crate::csv_handler::InputRecord;
use crate::taxon::normalizer::normalize_taxon_name;
use crate::vernacular::aggregator::select_representative;
use crate::vernacular::{VernacularNamed, trace_base_name};
use indexmap::IndexMap;
use indicatif::ProgressBar;
use log::{debug, warn};
use serde::Serialize;
use std::fmt;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonRank {
    Genus,
    Family,
}

impl TaxonRank {
    fn value_of<'a>(&self, record: &'a InputRecord) -> Option<&'a str> {
        match self {
            TaxonRank::Genus => record.genus.as_deref(),
            TaxonRank::Family => record.family.as_deref(),
        }
    }
}

impl fmt::Display for TaxonRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxonRank::Genus => write!(f, "genus"),
            TaxonRank::Family => write!(f, "family"),
        }
    }
}

/// Label chosen for one genus or family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub rank: TaxonRank,
    pub taxon: String,
    pub species_count: usize,
    pub named_species_count: usize,
    pub representative_name: Option<String>,
    pub votes: usize,
    /// Representative name, or the taxon itself when no species is named.
    pub label: String,
}

/// Base name of a single species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRow {
    pub scientific_name: String,
    pub vernacular_name: Option<String>,
    pub base_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<&'static str>,
}

/// Groups records by `rank` (first-seen order) and picks each group's label.
pub fn group_species(
    records: &[InputRecord],
    rank: TaxonRank,
    progress: &ProgressBar,
) -> Vec<GroupSummary> {
    let mut groups: IndexMap<&str, Vec<&InputRecord>> = IndexMap::new();
    for record in records {
        progress.inc(1);
        match rank.value_of(record) {
            Some(taxon) => groups.entry(taxon).or_default().push(record),
            None => warn!(
                "Skipping {}: no {} recorded.",
                record.scientific_name, rank
            ),
        }
    }

    groups
        .into_iter()
        .map(|(taxon, members)| {
            let names: Vec<Option<&str>> =
                members.iter().map(|m| m.vernacular_name()).collect();
            let named_species_count = names
                .iter()
                .filter(|n| n.is_some_and(|n| !n.trim().is_empty()))
                .count();
            let winner = select_representative(&names);
            debug!(
                "{} {}: {} species, representative {:?}",
                rank,
                taxon,
                members.len(),
                winner.as_ref().map(|w| w.literal.as_str())
            );
            let votes = winner.as_ref().map_or(0, |w| w.count);
            let representative_name = winner.map(|w| w.literal);
            GroupSummary {
                rank,
                taxon: taxon.to_string(),
                species_count: members.len(),
                named_species_count,
                label: representative_name
                    .clone()
                    .unwrap_or_else(|| taxon.to_string()),
                representative_name,
                votes,
            }
        })
        .collect()
}

/// Reduces every record's vernacular name to its base form. Rule ids are
/// kept only when `explain` is set.
pub fn name_rows(records: &[InputRecord], explain: bool, progress: &ProgressBar) -> Vec<NameRow> {
    records
        .iter()
        .map(|record| {
            progress.inc(1);
            let extraction = trace_base_name(record.vernacular_name.as_deref());
            NameRow {
                scientific_name: normalize_taxon_name(&record.scientific_name),
                vernacular_name: record.vernacular_name.clone(),
                base_name: extraction.base_name,
                rules: if explain {
                    extraction.applied
                } else {
                    Vec::new()
                },
            }
        })
        .collect()
}
