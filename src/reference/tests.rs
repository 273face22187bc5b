//! Reference Parser Tests
//!
//! Validates the reference grammar, bounds checking, and canon scoping.
//!
//! ## Test Scopes
//! - **Grammar**: single verses, ranges, whole chapters, whole books, comma lists.
//! - **Bounds**: out-of-range chapters and verses carry the correct maximum.
//! - **Scoping**: per-translation canon rejection vs. union-canon parsing.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::canon::model::CanonModel;
    use crate::reference::parser::ReferenceParser;
    use crate::reference::types::{ParseError, Reference};

    fn fixture() -> ReferenceParser {
        let mut builder = CanonModel::builder();
        builder
            .add_translation("KJV", "King James Version", "en")
            .unwrap();
        builder.record_verse("KJV", "genesis", 1, 31).unwrap();
        builder.record_verse("KJV", "genesis", 2, 25).unwrap();
        builder.record_verse("KJV", "john", 3, 36).unwrap();
        builder.record_verse("KJV", "john", 4, 54).unwrap();
        builder.record_verse("KJV", "1john", 4, 21).unwrap();
        builder
            .record_verse("KJV", "song-of-solomon", 2, 17)
            .unwrap();
        for chapter in 1..=150 {
            builder.record_verse("KJV", "psalms", chapter, 6).unwrap();
        }
        builder
            .add_translation("VDCC", "Cornilescu Corectată", "ro")
            .unwrap();
        builder.record_verse("VDCC", "genesis", 1, 31).unwrap();
        ReferenceParser::new(Arc::new(builder.build().unwrap()))
    }

    // ============================================================
    // GRAMMAR
    // ============================================================

    #[test]
    fn test_single_verse() {
        let refs = fixture().parse("John 3:16", None).unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].book, "JHN");
        assert_eq!(refs[0].chapter, 3);
        assert_eq!(refs[0].verse_start, 16);
        assert_eq!(refs[0].verse_end, 16);
        assert!(refs[0].is_single_verse());
    }

    #[test]
    fn test_verse_range() {
        let refs = fixture().parse("Gen 1:1-3", None).unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].book, "GEN");
        assert_eq!(refs[0].verse_start, 1);
        assert_eq!(refs[0].verse_end, 3);
    }

    #[test]
    fn test_whole_chapter() {
        let refs = fixture().parse("Ps 23", None).unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].book, "PSA");
        assert_eq!(refs[0].chapter, 23);
        assert_eq!(refs[0].verse_start, 1);
        assert_eq!(refs[0].verse_end, 6);
    }

    #[test]
    fn test_whole_book_expands_per_chapter() {
        let refs = fixture().parse("Genesis", None).unwrap();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].chapter, 1);
        assert_eq!(refs[0].verse_end, 31);
        assert_eq!(refs[1].chapter, 2);
        assert_eq!(refs[1].verse_end, 25);
    }

    #[test]
    fn test_comma_separated_chapter_list() {
        let refs = fixture().parse("John 3:16, 4:7-9", None).unwrap();
        assert_eq!(refs.len(), 2);
        assert_eq!((refs[0].chapter, refs[0].verse_start), (3, 16));
        assert_eq!((refs[1].chapter, refs[1].verse_start, refs[1].verse_end), (4, 7, 9));
    }

    #[test]
    fn test_multi_word_book_names() {
        let parser = fixture();
        let refs = parser.parse("Song of Solomon 2:1", None).unwrap();
        assert_eq!(refs[0].book, "SNG");

        let refs = parser.parse("1 John 4:7", None).unwrap();
        assert_eq!(refs[0].book, "1JN");
        assert_eq!(refs[0].chapter, 4);
    }

    #[test]
    fn test_longest_prefix_wins() {
        // "1 John" must not resolve as "John" with a leading "1" left dangling.
        let refs = fixture().parse("1 John 4", None).unwrap();
        assert_eq!(refs[0].book, "1JN");
    }

    #[test]
    fn test_case_and_punctuation_tolerance() {
        let parser = fixture();
        assert_eq!(parser.parse("john 3:16.", None).unwrap()[0].verse_start, 16);
        assert_eq!(parser.parse("JOHN 3:16", None).unwrap()[0].book, "JHN");
    }

    // ============================================================
    // ERRORS
    // ============================================================

    #[test]
    fn test_unrecognized_book() {
        let err = fixture().parse("Genesiss 1:1", None).unwrap_err();
        assert!(matches!(err, ParseError::UnrecognizedBook { .. }));
        assert!(err.is_non_reference());
    }

    #[test]
    fn test_empty_input() {
        let err = fixture().parse("   ", None).unwrap_err();
        assert!(matches!(err, ParseError::UnrecognizedBook { .. }));
    }

    #[test]
    fn test_chapter_out_of_range_carries_max() {
        let err = fixture().parse("Psalm 151:1", Some("KJV")).unwrap_err();
        assert_eq!(
            err,
            ParseError::ChapterOutOfRange {
                book: "Psalms".to_string(),
                chapter: 151,
                max: 150,
            }
        );
        assert!(!err.is_non_reference());
    }

    #[test]
    fn test_verse_out_of_range_carries_max() {
        let err = fixture().parse("John 3:37", None).unwrap_err();
        assert_eq!(
            err,
            ParseError::VerseOutOfRange {
                book: "John".to_string(),
                chapter: 3,
                verse: 37,
                max: 36,
            }
        );
    }

    #[test]
    fn test_cross_chapter_range_is_unsupported() {
        let parser = fixture();
        let err = parser.parse("John 3:16-4:2", None).unwrap_err();
        assert_eq!(err, ParseError::Unsupported);

        let err = parser.parse("Gen 1-2", None).unwrap_err();
        assert_eq!(err, ParseError::Unsupported);
        assert!(err.is_non_reference());
    }

    #[test]
    fn test_malformed_tail() {
        let parser = fixture();
        let err = parser.parse("John three sixteen", None).unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
        assert!(err.is_non_reference());

        let err = parser.parse("Gen 1:3-1", None).unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
    }

    #[test]
    fn test_not_in_canon_for_scoped_translation() {
        // VDCC only loaded Genesis; John exists in the union but not its canon.
        let err = fixture().parse("John 3:16", Some("VDCC")).unwrap_err();
        assert_eq!(
            err,
            ParseError::NotInCanon {
                book: "John".to_string(),
                translation: Some("VDCC".to_string()),
            }
        );
        assert!(!err.is_non_reference());
    }

    #[test]
    fn test_unloaded_book_without_translation_is_non_reference() {
        // Job is in the registry but no loaded translation carries it; with no
        // translation named, that input is free text, not a canon violation.
        let err = fixture().parse("Job 1:1", None).unwrap_err();
        assert!(matches!(err, ParseError::UnrecognizedBook { .. }));
        assert!(err.is_non_reference());
    }

    #[test]
    fn test_translation_binding() {
        let refs = fixture().parse("John 3:16", Some("kjv")).unwrap();
        assert_eq!(refs[0].translation.as_deref(), Some("KJV"));

        let refs = fixture().parse("John 3:16", None).unwrap();
        assert!(refs[0].translation.is_none());
    }

    // ============================================================
    // VALUE TYPE
    // ============================================================

    #[test]
    fn test_render_round_trips() {
        let parser = fixture();
        for input in ["John 3:16", "Genesis 1:1-3", "Psalms 23:1"] {
            let refs = parser.parse(input, None).unwrap();
            assert_eq!(refs.len(), 1);
            let rendered = refs[0].to_string();
            let reparsed = parser.parse(&rendered, None).unwrap();
            assert_eq!(reparsed, refs, "'{}' -> '{}' must round-trip", input, rendered);
        }
    }

    #[test]
    fn test_canonical_ordering() {
        let parser = fixture();
        let gen = parser.parse("Gen 2:1", None).unwrap().remove(0);
        let psalm = parser.parse("Ps 23:1", None).unwrap().remove(0);
        let john = parser.parse("John 3:16", None).unwrap().remove(0);
        let john_later = parser.parse("John 3:17", None).unwrap().remove(0);

        let mut refs = vec![john_later.clone(), psalm.clone(), john.clone(), gen.clone()];
        refs.sort();
        assert_eq!(refs, vec![gen, psalm, john, john_later]);
    }

    #[test]
    fn test_display() {
        let parser = fixture();
        let single = parser.parse("Jn 3:16", None).unwrap().remove(0);
        assert_eq!(single.to_string(), "John 3:16");
        let range: Reference = parser.parse("Gen 1:1-3", None).unwrap().remove(0);
        assert_eq!(range.to_string(), "Genesis 1:1-3");
    }
}
