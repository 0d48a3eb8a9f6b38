//! Ordered rule table for reducing a vernacular name to its base form.
use crate::vernacular::vocabulary::{
    BASE_TERMS, BODY_PART_NOUNS, COMPOUND_DESCRIPTORS, COMPOUND_MODIFIERS, DESCRIPTIVE_ADJECTIVES,
    ETHNONYM_MODIFIERS, PLACE_NOUNS, PROTECTED_PLACES, SIMPLE_DESCRIPTORS,
};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A single rewrite: when `pattern` matches, the matched text is replaced by
/// `replacement` (a capture template) and the result is trimmed.
///
/// Every replacement keeps a prefix of the match, so a rule can only shorten
/// the name.
pub struct Rule {
    pub id: &'static str,
    pattern: Regex,
    replacement: &'static str,
    unless: Option<fn(&Captures<'_>) -> bool>,
}

impl Rule {
    fn new(id: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            id,
            pattern: Regex::new(pattern).expect("valid base-name rule regex"),
            replacement,
            unless: None,
        }
    }

    fn unless(mut self, guard: fn(&Captures<'_>) -> bool) -> Self {
        self.unless = Some(guard);
        self
    }

    /// Returns the rewritten name, or `None` when the rule does not apply.
    pub fn apply(&self, name: &str) -> Option<String> {
        let caps = self.pattern.captures(name)?;
        if let Some(guard) = self.unless {
            if guard(&caps) {
                return None;
            }
        }
        let whole = caps.get(0)?;
        let mut rewritten = String::with_capacity(name.len());
        rewritten.push_str(&name[..whole.start()]);
        caps.expand(self.replacement, &mut rewritten);
        rewritten.push_str(&name[whole.end()..]);

        let rewritten = rewritten.trim();
        if rewritten == name {
            None
        } else {
            Some(rewritten.to_string())
        }
    }
}

/// One position in the pipeline. `FirstOf` tries its rules in order and stops
/// at the first one that fires.
pub enum Step {
    Single(Rule),
    FirstOf(Vec<Rule>),
}

impl Step {
    /// Applies the step, returning the id of the rule that fired and its output.
    pub fn apply(&self, name: &str) -> Option<(&'static str, String)> {
        match self {
            Step::Single(rule) => rule.apply(name).map(|out| (rule.id, out)),
            Step::FirstOf(rules) => rules
                .iter()
                .find_map(|rule| rule.apply(name).map(|out| (rule.id, out))),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        match self {
            Step::Single(rule) => std::slice::from_ref(rule),
            Step::FirstOf(rules) => rules,
        }
    }
}

// Capitalized run of words running to the end of the name.
const PROPER_PHRASE: &str = r"\p{Lu}\S*(?:\s+\p{Lu}\S*)*";

/// Builds a case-insensitive alternation. Longer entries come first and
/// spaces match any whitespace run.
fn alternation(words: &[&str]) -> String {
    let mut sorted: Vec<&str> = words.to_vec();
    sorted.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
    let joined = sorted
        .iter()
        .map(|w| regex::escape(w).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    format!("(?i:{})", joined)
}

fn is_protected_place(caps: &Captures<'_>) -> bool {
    let Some(place) = caps.name("place") else {
        return false;
    };
    let place = place.as_str().to_lowercase();
    PROTECTED_PLACES.iter().any(|protected| {
        let protected = protected.to_lowercase();
        place == protected || place.starts_with(&format!("{} ", protected))
    })
}

/// The full pipeline, in application order.
pub static PIPELINE: Lazy<Vec<Step>> = Lazy::new(|| {
    let body_parts = alternation(BODY_PART_NOUNS);
    let compound = alternation(COMPOUND_DESCRIPTORS);
    let descriptors = alternation(SIMPLE_DESCRIPTORS);
    let extended: Vec<&str> = SIMPLE_DESCRIPTORS
        .iter()
        .chain(BASE_TERMS)
        .copied()
        .collect();
    let extended = alternation(&extended);
    let places = alternation(PLACE_NOUNS);

    vec![
        Step::FirstOf(vec![
            Rule::new(
                "body-part-clause",
                &format!(r"\b(?P<keep>(?i:de)\s+{body_parts})\s+\S+\s+(?i:con|sin)\s.*$"),
                "${keep}",
            ),
            Rule::new(
                "body-part-adjective",
                &format!(r"\b(?P<keep>(?i:de)\s+{body_parts})(?:\s+\p{{Ll}}+)+$"),
                "${keep}",
            ),
        ]),
        Step::Single(Rule::new(
            "compound-descriptor",
            &format!(r"^(?P<keep>.*?\b(?i:de)\s+{compound})\s+(?i:de)\s+.+$"),
            "${keep}",
        )),
        Step::Single(Rule::new(
            "descriptor-locality",
            &format!(r"\b(?P<keep>{descriptors})\s+(?i:de)\s+\p{{Lu}}.*$"),
            "${keep}",
        )),
        Step::Single(Rule::new(
            "descriptor-dangling-de",
            &format!(r"\b(?P<keep>{descriptors})\s+(?i:de)$"),
            "${keep}",
        )),
        Step::Single(Rule::new(
            "base-term-trailing-word",
            &format!(r"^(?P<keep>\S.*?\s{extended})\s+\S+$"),
            "${keep}",
        )),
        Step::Single(Rule::new("con-clause", r"\s+(?i:con)\s.*$", "")),
        Step::Single(Rule::new(
            "de-proper-noun",
            r"\s+(?i:de)\s+\p{Lu}.*$",
            "",
        )),
        Step::Single(Rule::new(
            "del-place-trailing-word",
            &format!(r"\b(?P<keep>(?i:del)\s+{places})\s+\S+$"),
            "${keep}",
        )),
        Step::Single(
            Rule::new(
                "del-place",
                &format!(r"\s+(?i:del)\s+(?P<place>{PROPER_PHRASE})$"),
                "",
            )
            .unless(is_protected_place),
        ),
        Step::Single(Rule::new(
            "amante-de",
            r"\b(?P<keep>(?i:amante))\s+(?i:de)\s.*$",
            "${keep}",
        )),
        Step::Single(Rule::new(
            "en-forma-de",
            r"\b(?P<keep>(?i:en)\s+(?i:forma))\s+(?i:de)\s.*$",
            "${keep}",
        )),
        Step::Single(Rule::new(
            "compound-modifier",
            &format!(r"\s+{}$", alternation(COMPOUND_MODIFIERS)),
            "",
        )),
        Step::Single(Rule::new(
            "descriptive-adjective",
            &format!(r"\s+{}$", alternation(DESCRIPTIVE_ADJECTIVES)),
            "",
        )),
        Step::Single(Rule::new(
            "ethnonym",
            &format!(r"\s+{}$", alternation(ETHNONYM_MODIFIERS)),
            "",
        )),
    ]
});

/// Looks up a rule by id, for applying it in isolation.
pub fn rule(id: &str) -> Option<&'static Rule> {
    PIPELINE
        .iter()
        .flat_map(|step| step.rules())
        .find(|rule| rule.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(id: &str, name: &str) -> Option<String> {
        rule(id).unwrap_or_else(|| panic!("unknown rule {id}")).apply(name)
    }

    #[test]
    fn pipeline_order_is_stable() {
        let ids: Vec<&str> = PIPELINE
            .iter()
            .flat_map(|step| step.rules())
            .map(|rule| rule.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "body-part-clause",
                "body-part-adjective",
                "compound-descriptor",
                "descriptor-locality",
                "descriptor-dangling-de",
                "base-term-trailing-word",
                "con-clause",
                "de-proper-noun",
                "del-place-trailing-word",
                "del-place",
                "amante-de",
                "en-forma-de",
                "compound-modifier",
                "descriptive-adjective",
                "ethnonym",
            ]
        );
    }

    #[test]
    fn body_part_clause_drops_adjective_and_con() {
        assert_eq!(
            apply("body-part-clause", "Rana de vientre amarillo con manchas negras").as_deref(),
            Some("Rana de vientre")
        );
        assert_eq!(
            apply("body-part-clause", "Cutín de patas rojas sin membranas").as_deref(),
            Some("Cutín de patas")
        );
        assert_eq!(apply("body-part-clause", "Rana de vientre amarillo"), None);
    }

    #[test]
    fn body_part_adjective_truncates_after_noun() {
        assert_eq!(
            apply("body-part-adjective", "Rana de ojos rojos grande").as_deref(),
            Some("Rana de ojos")
        );
        assert_eq!(
            apply("body-part-adjective", "Cutín de cabeza ancha").as_deref(),
            Some("Cutín de cabeza")
        );
        assert_eq!(apply("body-part-adjective", "Rana de cabeza"), None);
        // A capitalized word is a locality, not an adjective.
        assert_eq!(apply("body-part-adjective", "Rana de bosque Tandayapa"), None);
    }

    #[test]
    fn body_part_steps_are_exclusive() {
        let step = &PIPELINE[0];
        let (id, out) = step
            .apply("Rana de dorso liso con puntos")
            .expect("step fires");
        assert_eq!(id, "body-part-clause");
        assert_eq!(out, "Rana de dorso");
    }

    #[test]
    fn compound_descriptor_keeps_descriptor() {
        assert_eq!(
            apply("compound-descriptor", "Rana de cristal de Pichincha").as_deref(),
            Some("Rana de cristal")
        );
        assert_eq!(
            apply("compound-descriptor", "Rana de dedos delgados de la Cordillera").as_deref(),
            Some("Rana de dedos delgados")
        );
        assert_eq!(apply("compound-descriptor", "Rana de cristal"), None);
    }

    #[test]
    fn descriptor_locality_requires_capital() {
        assert_eq!(
            apply("descriptor-locality", "Rana arlequín de Quito").as_deref(),
            Some("Rana arlequín")
        );
        assert_eq!(
            apply("descriptor-locality", "Rana venenosa de Santa Isabel").as_deref(),
            Some("Rana venenosa")
        );
        assert_eq!(apply("descriptor-locality", "Rana arlequín de río"), None);
    }

    #[test]
    fn descriptor_dangling_de_is_dropped() {
        assert_eq!(
            apply("descriptor-dangling-de", "Rana cohete de").as_deref(),
            Some("Rana cohete")
        );
        assert_eq!(apply("descriptor-dangling-de", "Rana de"), None);
    }

    #[test]
    fn base_term_drops_one_trailing_word() {
        assert_eq!(
            apply("base-term-trailing-word", "Rana de charco amazónica").as_deref(),
            Some("Rana de charco")
        );
        assert_eq!(
            apply("base-term-trailing-word", "Sapito arlequín pintado").as_deref(),
            Some("Sapito arlequín")
        );
        // The base term must be preceded by something.
        assert_eq!(apply("base-term-trailing-word", "Rana arlequín"), None);
        assert_eq!(apply("base-term-trailing-word", "Sapo común"), None);
    }

    #[test]
    fn con_and_de_proper_noun_clauses() {
        assert_eq!(
            apply("con-clause", "Salamandra con lengua de hongo").as_deref(),
            Some("Salamandra")
        );
        assert_eq!(
            apply("de-proper-noun", "Cutín de San Lorenzo").as_deref(),
            Some("Cutín")
        );
        assert_eq!(apply("de-proper-noun", "Rana de cristal"), None);
    }

    #[test]
    fn del_place_trailing_word_keeps_place() {
        assert_eq!(
            apply("del-place-trailing-word", "Rana del Chocó occidental").as_deref(),
            Some("Rana del Chocó")
        );
        assert_eq!(
            apply("del-place-trailing-word", "Cutín del Alto Amazonas sureño").as_deref(),
            Some("Cutín del Alto Amazonas")
        );
    }

    #[test]
    fn del_place_respects_protected_places() {
        assert_eq!(
            apply("del-place", "Rana del Río Napo").as_deref(),
            Some("Rana")
        );
        assert_eq!(apply("del-place", "Rana del Cóndor"), None);
        assert_eq!(apply("del-place", "Cutín del Alto Amazonas"), None);
        assert_eq!(apply("del-place", "Rana del Padre"), None);
        assert_eq!(
            apply("del-place", "Rana del Norte del Ecuador").as_deref(),
            Some("Rana del Norte")
        );
    }

    #[test]
    fn amante_and_en_forma() {
        assert_eq!(
            apply("amante-de", "Rana amante de la lluvia").as_deref(),
            Some("Rana amante")
        );
        assert_eq!(
            apply("en-forma-de", "Sapo en forma de hoja").as_deref(),
            Some("Sapo en forma")
        );
    }

    #[test]
    fn trailing_modifier_lists() {
        assert_eq!(
            apply("compound-modifier", "Rana diablo andino").as_deref(),
            Some("Rana")
        );
        assert_eq!(
            apply("compound-modifier", "Salamandra de cinco líneas").as_deref(),
            Some("Salamandra")
        );
        assert_eq!(
            apply("descriptive-adjective", "Cutín Moteado").as_deref(),
            Some("Cutín")
        );
        assert_eq!(
            apply("ethnonym", "Rana Príncipe Carlos").as_deref(),
            Some("Rana")
        );
        // A lone word is never emptied.
        assert_eq!(apply("descriptive-adjective", "Gigante"), None);
    }

    #[test]
    fn rules_never_lengthen() {
        let samples = [
            "Rana de vientre amarillo con manchas",
            "Rana de cristal de Pichincha",
            "Rana del Chocó occidental",
            "Rana amante de la lluvia",
            "Cutín Moteado",
        ];
        for step in PIPELINE.iter() {
            for sample in samples {
                if let Some((_, out)) = step.apply(sample) {
                    assert!(out.chars().count() < sample.chars().count());
                }
            }
        }
    }
}
