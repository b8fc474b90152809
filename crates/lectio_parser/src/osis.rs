//! OSIS output for resolved passages.

use lectio_language::Span;

use crate::config::{InvalidPassages, OsisCompaction};
use crate::passage::Passage;

/// One passage as OSIS, with its translations and location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OsisEntry {
    /// The OSIS id or id range.
    pub osis: String,
    /// Attached translation aliases.
    pub translations: Vec<String>,
    /// Location in the caller's text.
    pub span: Span,
}

fn shown<'p>(
    passages: &'p [Passage],
    invalid: InvalidPassages,
) -> impl Iterator<Item = &'p Passage> {
    passages
        .iter()
        .filter(move |p| invalid == InvalidPassages::Include || p.is_valid())
}

/// Renders every shown passage, comma-joined.
#[must_use]
pub fn osis(passages: &[Passage], compaction: OsisCompaction, invalid: InvalidPassages) -> String {
    shown(passages, invalid)
        .map(|p| p.osis(compaction))
        .collect::<Vec<_>>()
        .join(",")
}

/// Groups consecutive passages that share a translation list.
#[must_use]
pub fn osis_and_translations(
    passages: &[Passage],
    compaction: OsisCompaction,
    invalid: InvalidPassages,
) -> Vec<(String, String)> {
    let mut groups: Vec<(String, String)> = Vec::new();
    for passage in shown(passages, invalid) {
        let translations = passage.translation_list();
        let rendered = passage.osis(compaction);
        match groups.last_mut() {
            Some((osis, current)) if *current == translations => {
                osis.push(',');
                osis.push_str(&rendered);
            }
            _ => groups.push((rendered, translations)),
        }
    }
    groups
}

/// Renders each shown passage with its translations and span.
#[must_use]
pub fn osis_and_indices(
    passages: &[Passage],
    compaction: OsisCompaction,
    invalid: InvalidPassages,
) -> Vec<OsisEntry> {
    shown(passages, invalid)
        .map(|p| OsisEntry {
            osis: p.osis(compaction),
            translations: p.translations.iter().map(|t| t.alias.clone()).collect(),
            span: p.span,
        })
        .collect()
}
