//! Vernacular-name normalization: base-name extraction and group labels.
pub mod aggregator;
pub mod extractor;
pub mod rules;
pub mod vocabulary;

pub use aggregator::{NameTally, VernacularNamed, normalized_key, representative_name};
pub use extractor::{Extraction, extract_base_name, trace_base_name};
