//! Merging of touching passages.
//!
//! Within one citation, a passage that starts inside or directly after the
//! passage before it is folded into it: "John 3:16, 17" is one range.
//! Titles and `ff` passages keep their own identity.

use std::cmp::Ordering;

use lectio_versification::VersificationSystem;

use crate::passage::{Coverage, Passage, PassageKind};

/// Merges consecutive touching or overlapping passages.
///
/// Only forward merges happen, so running the result through `combine`
/// again changes nothing.
#[must_use]
pub fn combine(passages: Vec<Passage>, system: &VersificationSystem) -> Vec<Passage> {
    let mut combined: Vec<Passage> = Vec::with_capacity(passages.len());
    for next in passages {
        match combined.last_mut() {
            Some(current) if touches(current, &next, system) => absorb(current, next, system),
            _ => combined.push(next),
        }
    }
    combined
}

fn mergeable_kind(kind: PassageKind) -> bool {
    matches!(kind, PassageKind::Single | PassageKind::Range)
}

fn touches(current: &Passage, next: &Passage, system: &VersificationSystem) -> bool {
    if current.sequence != next.sequence
        || current.end.book != next.start.book
        || !current.is_valid()
        || !next.is_valid()
        || !mergeable_kind(current.kind)
        || !mergeable_kind(next.kind)
        || current.translation_list() != next.translation_list()
    {
        return false;
    }
    let limit = system.next_in_book(&current.end).unwrap_or(current.end);
    system.compare(&next.start, &current.start) != Ordering::Less
        && system.compare(&next.start, &limit) != Ordering::Greater
}

fn absorb(current: &mut Passage, next: Passage, system: &VersificationSystem) {
    const END_FLAGS: Coverage = Coverage::CHAPTER_END.union(Coverage::BOOK_END);

    if system.compare(&next.end, &current.end) == Ordering::Greater {
        current.end = next.end;
        current.requested.end = next.requested.end;
        current.coverage = current.coverage.difference(END_FLAGS) | (next.coverage & END_FLAGS);
    }
    current.kind = PassageKind::Range;
    current.span = current.span.to(next.span);
    current.validity = current.validity.merge(&next.validity);
    for (binding, other) in current.translations.iter_mut().zip(&next.translations) {
        binding.validity = match (&binding.validity, &other.validity) {
            (Some(a), Some(b)) => Some(a.merge(b)),
            (a, b) => a.clone().or_else(|| b.clone()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OsisCompaction;
    use crate::passage::{Bound, Reference};
    use lectio_foundation::Book;
    use lectio_language::Span;
    use proptest::prelude::*;

    fn passage(system: &VersificationSystem, start: Bound, end: Bound, at: usize) -> Passage {
        let kind = if start == end { PassageKind::Single } else { PassageKind::Range };
        Passage::new(system, Reference::range(start, end), kind, Span::new(at, at + 1), 0)
    }

    fn osis(passages: &[Passage]) -> Vec<String> {
        passages.iter().map(|p| p.osis(OsisCompaction::B)).collect()
    }

    #[test]
    fn adjacent_verses_merge() {
        let system = VersificationSystem::default_system();
        let v16 = Bound::Verse(Book::John, 3, 16);
        let v17 = Bound::Verse(Book::John, 3, 17);
        let merged = combine(
            vec![passage(&system, v16, v16, 0), passage(&system, v17, v17, 5)],
            &system,
        );
        assert_eq!(osis(&merged), vec!["John.3.16-John.3.17"]);
        assert_eq!(merged[0].kind, PassageKind::Range);
        assert_eq!(merged[0].span, Span::new(0, 6));
    }

    #[test]
    fn gaps_do_not_merge() {
        let system = VersificationSystem::default_system();
        let v16 = Bound::Verse(Book::John, 3, 16);
        let v18 = Bound::Verse(Book::John, 3, 18);
        let merged = combine(
            vec![passage(&system, v16, v16, 0), passage(&system, v18, v18, 5)],
            &system,
        );
        assert_eq!(osis(&merged), vec!["John.3.16", "John.3.18"]);
    }

    #[test]
    fn chapters_merge_across_the_boundary() {
        let system = VersificationSystem::default_system();
        let c3 = Bound::Chapter(Book::John, 3);
        let c4 = Bound::Chapter(Book::John, 4);
        let merged = combine(
            vec![passage(&system, c3, c3, 0), passage(&system, c4, c4, 5)],
            &system,
        );
        assert_eq!(osis(&merged), vec!["John.3-John.4"]);
    }

    #[test]
    fn backward_passages_stay_apart() {
        let system = VersificationSystem::default_system();
        let c4 = Bound::Chapter(Book::John, 4);
        let c3 = Bound::Chapter(Book::John, 3);
        let merged = combine(
            vec![passage(&system, c4, c4, 0), passage(&system, c3, c3, 5)],
            &system,
        );
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn contained_passages_are_absorbed() {
        let system = VersificationSystem::default_system();
        let chapter = Bound::Chapter(Book::John, 3);
        let verse = Bound::Verse(Book::John, 3, 16);
        let merged = combine(
            vec![passage(&system, chapter, chapter, 0), passage(&system, verse, verse, 5)],
            &system,
        );
        assert_eq!(osis(&merged), vec!["John.3"]);
    }

    #[test]
    fn ff_and_invalid_passages_stay_apart() {
        let system = VersificationSystem::default_system();
        let v2 = Bound::Verse(Book::Revelation, 4, 2);
        let mut ff = passage(&system, Bound::Chapter(Book::Revelation, 3), Bound::Book(Book::Revelation), 0);
        ff.kind = PassageKind::Ff;
        assert_eq!(combine(vec![ff, passage(&system, v2, v2, 5)], &system).len(), 2);

        let bad = Bound::Verse(Book::John, 3, 99);
        let v1 = Bound::Verse(Book::John, 4, 1);
        let c3 = Bound::Chapter(Book::John, 3);
        assert_eq!(
            combine(vec![passage(&system, c3, c3, 0), passage(&system, bad, bad, 5)], &system).len(),
            2
        );
        assert_eq!(
            combine(vec![passage(&system, bad, bad, 0), passage(&system, v1, v1, 5)], &system).len(),
            2
        );
    }

    proptest! {
        #[test]
        fn combining_is_idempotent(verses in prop::collection::vec((1u32..5, 1u32..12, 0u32..3), 0..12)) {
            let system = VersificationSystem::default_system();
            let passages: Vec<Passage> = verses
                .iter()
                .enumerate()
                .map(|(i, (chapter, verse, extra))| {
                    let start = Bound::Verse(Book::John, *chapter, *verse);
                    let end = Bound::Verse(Book::John, *chapter, verse + extra);
                    passage(&system, start, end, i * 4)
                })
                .collect();
            let once = combine(passages, &system);
            let twice = combine(once.clone(), &system);
            prop_assert_eq!(once, twice);
        }
    }
}
