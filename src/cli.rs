use crate::csv_handler::ColumnConfig;
use crate::grouping::TaxonRank;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the input species CSV file.
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,

    /// Path to the output file. Writes to stdout when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output mode: one label per group or one base name per species.
    #[arg(short, long, value_enum, default_value = "groups")]
    pub mode: OutputMode,

    /// Taxonomic rank used to group species in "groups" mode.
    #[arg(short, long, value_enum, default_value = "genus")]
    pub rank: TaxonRank,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "tsv")]
    pub format: OutputFormat,

    /// List the rules applied to each name ("names" mode).
    #[arg(long)]
    pub explain: bool,

    /// Show a progress bar on stderr.
    #[arg(long)]
    pub progress: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Header of the scientific name column.
    #[arg(long, default_value = "scientific_name")]
    pub column_scientific_name: String,

    /// Header of the vernacular name column.
    #[arg(long, default_value = "vernacular_name")]
    pub column_vernacular_name: String,

    /// Header of the genus column (derived from the scientific name if absent).
    #[arg(long, default_value = "genus")]
    pub column_genus: String,

    /// Header of the family column.
    #[arg(long, default_value = "family")]
    pub column_family: String,
}

impl Cli {
    pub fn column_config(&self) -> ColumnConfig {
        ColumnConfig {
            scientific_name: self.column_scientific_name.clone(),
            vernacular_name: self.column_vernacular_name.clone(),
            genus: self.column_genus.clone(),
            family: self.column_family.clone(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One representative name per genus or family.
    #[value(name = "groups")]
    Groups,
    /// One base name per species.
    #[value(name = "names")]
    Names,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated values with a header row.
    #[value(name = "tsv")]
    Tsv,
    /// Pretty-printed JSON array.
    #[value(name = "json")]
    Json,
}
