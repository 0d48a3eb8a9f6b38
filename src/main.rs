use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use nombre_base::cli::{Cli, OutputMode};
use nombre_base::csv_handler::load_and_validate_csv;
use nombre_base::error::Result;
use nombre_base::grouping::{group_species, name_rows};
use nombre_base::report::{write_groups, write_names};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides the level chosen with -v.
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_target(false)
        .format_timestamp_secs()
        .try_init()?;

    info!("Input file: {:?}", cli.input_file);
    info!("Output mode: {:?}", cli.mode);
    if let Some(output_file) = &cli.output_file {
        info!("Output file: {:?}", output_file);
    }

    let start_time = Instant::now();

    // 1. Load and Validate CSV
    let records = match load_and_validate_csv(&cli.input_file, &cli.column_config()) {
        Ok(records) => {
            info!("Loaded {} species records.", records.len());
            records
        }
        Err(e) => {
            error!("Failed to load or validate CSV: {}", e);
            return Err(e);
        }
    };

    // 2. Process Records
    let pb = if cli.progress {
        let pb = ProgressBar::new(records.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")?
                .progress_chars("##-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut writer: Box<dyn Write> = match &cli.output_file {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    // 3. Output Generation
    match cli.mode {
        OutputMode::Groups => {
            let summaries = group_species(&records, cli.rank, &pb);
            pb.finish_with_message("Grouping complete.");
            let unnamed = summaries
                .iter()
                .filter(|s| s.representative_name.is_none())
                .count();
            info!(
                "{} {} group(s), {} without a vernacular name.",
                summaries.len(),
                cli.rank,
                unnamed
            );
            write_groups(&summaries, cli.format, writer.as_mut())?;
        }
        OutputMode::Names => {
            let rows = name_rows(&records, cli.explain, &pb);
            pb.finish_with_message("Extraction complete.");
            let reduced = rows
                .iter()
                .filter(|r| {
                    r.vernacular_name
                        .as_deref()
                        .is_some_and(|v| v.trim() != r.base_name.as_str())
                })
                .count();
            info!(
                "{} species, {} name(s) reduced to a shorter base.",
                rows.len(),
                reduced
            );
            write_names(&rows, cli.format, writer.as_mut())?;
        }
    }
    writer.flush()?;

    info!("Total execution time: {:.2?}", start_time.elapsed());
    Ok(())
}
