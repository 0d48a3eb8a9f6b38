//! Reduces a vernacular name to the base name shared by related species.
use crate::vernacular::rules::PIPELINE;
use log::trace;
use serde::Serialize;

/// Result of a traced extraction: the base name plus the ids of the rules
/// that fired, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub base_name: String,
    pub applied: Vec<&'static str>,
}

/// Strips descriptive modifiers from a vernacular name.
///
/// Absent, empty and whitespace-only input yields an empty string. The rule
/// pipeline is re-run until a pass leaves the name unchanged, so the result
/// is already in base form.
pub fn extract_base_name(name: Option<&str>) -> String {
    trace_base_name(name).base_name
}

/// Same as [`extract_base_name`], also reporting which rules fired.
pub fn trace_base_name(name: Option<&str>) -> Extraction {
    let Some(trimmed) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        return Extraction::default();
    };

    let mut current = trimmed.to_string();
    let mut applied = Vec::new();
    loop {
        let fired_before = applied.len();
        for step in PIPELINE.iter() {
            if let Some((id, rewritten)) = step.apply(&current) {
                trace!("{id}: {current:?} -> {rewritten:?}");
                applied.push(id);
                current = rewritten;
            }
        }
        // Each firing strictly shortens the name, so this terminates.
        if applied.len() == fired_before {
            break;
        }
    }

    Extraction {
        base_name: current,
        applied,
    }
}
