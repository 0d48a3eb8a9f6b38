pub mod cli;
pub mod csv_handler;
pub mod error;
pub mod grouping;
pub mod report;
pub mod taxon;
pub mod vernacular;

pub use vernacular::{extract_base_name, representative_name};
