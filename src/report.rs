//! TSV and JSON writers for group summaries and name rows.
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::grouping::{GroupSummary, NameRow};
use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;

fn write_json<T: Serialize>(rows: &[T], writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, rows)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes one line per genus or family.
pub fn write_groups(
    rows: &[GroupSummary],
    format: OutputFormat,
    writer: &mut dyn Write,
) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(rows, writer);
    }

    let mut tsv = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    tsv.write_record([
        "rank",
        "taxon",
        "species_count",
        "named_species_count",
        "representative_name",
        "votes",
        "label",
    ])?;
    for row in rows {
        tsv.write_record([
            row.rank.to_string().as_str(),
            row.taxon.as_str(),
            row.species_count.to_string().as_str(),
            row.named_species_count.to_string().as_str(),
            row.representative_name.as_deref().unwrap_or(""),
            row.votes.to_string().as_str(),
            row.label.as_str(),
        ])?;
    }
    tsv.flush()?;
    Ok(())
}

/// Writes one line per species.
pub fn write_names(rows: &[NameRow], format: OutputFormat, writer: &mut dyn Write) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(rows, writer);
    }

    let explain = rows.iter().any(|row| !row.rules.is_empty());
    let mut tsv = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    let mut header = vec!["scientific_name", "vernacular_name", "base_name"];
    if explain {
        header.push("rules");
    }
    tsv.write_record(&header)?;
    for row in rows {
        let mut fields = vec![
            row.scientific_name.clone(),
            row.vernacular_name.clone().unwrap_or_default(),
            row.base_name.clone(),
        ];
        if explain {
            fields.push(row.rules.join(","));
        }
        tsv.write_record(&fields)?;
    }
    tsv.flush()?;
    Ok(())
}
