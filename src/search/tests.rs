//! Search Module Tests
//!
//! Validates the retrieval pipeline: text processing, ranking, scoping, and the
//! snapshot lifecycle.
//!
//! ## Test Scopes
//! - **Tokenizer**: normalization, diacritic folding, stemming, offsets.
//! - **Ranking**: tf-idf ordering, monotonicity, deterministic tie-breaks.
//! - **Snapshot**: not-built and rebuild-swap behaviour, top-k validation.

#[cfg(test)]
mod tests {
    use crate::canon::books;
    use crate::reference::types::Reference;
    use crate::search::index::SearchIndex;
    use crate::search::tokenizer::{fold_diacritics, stem, tokenize_query, tokenize_text};
    use crate::search::types::IndexError;
    use crate::store::types::Verse;

    fn verse(translation: &str, book: &str, chapter: u32, number: u32, text: &str) -> Verse {
        let book = books::by_key(book).unwrap();
        Verse {
            translation: translation.to_string(),
            reference: Reference::verse(book, chapter, number),
            text: text.to_string(),
            text_normalized: fold_diacritics(text),
        }
    }

    fn built(verses: &[Verse]) -> SearchIndex {
        let index = SearchIndex::new();
        index.rebuild(verses);
        index
    }

    // ============================================================
    // TOKENIZER
    // ============================================================

    #[test]
    fn test_tokenize_lowercases_and_strips_punctuation() {
        let terms: Vec<String> = tokenize_text("For God so loved the world,")
            .into_iter()
            .map(|t| t.term)
            .collect();
        assert_eq!(terms, vec!["for", "god", "so", "loved", "the", "world"]);
    }

    #[test]
    fn test_tokenize_keeps_offsets_into_raw_text() {
        let tokens = tokenize_text("Jesus wept.");
        assert_eq!(tokens.len(), 2);
        assert_eq!(&"Jesus wept."[tokens[0].start..tokens[0].end], "Jesus");
        assert_eq!(&"Jesus wept."[tokens[1].start..tokens[1].end], "wept");
    }

    #[test]
    fn test_tokenize_folds_diacritics() {
        let terms: Vec<String> = tokenize_query("Țara făgăduinței");
        assert_eq!(terms[0], "tara");
        assert!(terms[1].starts_with("fagaduin"));
    }

    #[test]
    fn test_fold_diacritics_cedilla_and_comma_below() {
        // Legacy cedilla and modern comma-below forms fold to the same base.
        assert_eq!(fold_diacritics("şi"), fold_diacritics("și"));
        assert_eq!(fold_diacritics("ţie"), fold_diacritics("ție"));
    }

    #[test]
    fn test_stemming_rules() {
        assert_eq!(stem("enemies"), "enemy");
        assert_eq!(stem("walketh"), "walk");
        assert_eq!(stem("gods"), "god");
        // ss is not a plural, short stems stay whole.
        assert_eq!(stem("witness"), "witness");
        assert_eq!(stem("his"), "his");
        assert_eq!(stem("was"), "was");
    }

    #[test]
    fn test_index_and_query_stem_identically() {
        // "enemies" in the text, "enemy" in the query, and vice versa.
        let text_terms: Vec<String> = tokenize_text("love your enemies")
            .into_iter()
            .map(|t| t.term)
            .collect();
        assert_eq!(tokenize_query("enemy"), vec![text_terms[2].clone()]);
    }

    #[test]
    fn test_numerals_are_kept() {
        assert_eq!(tokenize_query("144000"), vec!["144000"]);
    }

    #[test]
    fn test_query_preserves_order_and_duplicates() {
        let terms = tokenize_query("holy holy holy");
        assert_eq!(terms.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize_text("").is_empty());
        assert!(tokenize_query("...!?").is_empty());
    }

    // ============================================================
    // RANKING
    // ============================================================

    #[test]
    fn test_basic_query_finds_verse() {
        let index = built(&[
            verse("KJV", "JHN", 3, 16, "For God so loved the world"),
            verse("KJV", "GEN", 1, 1, "In the beginning God created"),
        ]);
        let results = index.query("loved the world", &[], 10).unwrap();
        // "the" also matches Genesis, but John matches all three terms.
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].reference.book, "JHN");
        assert_eq!(results[0].translation, "KJV");
        assert!(results[0].score > 0.0);
    }

    #[test]
    fn test_more_matched_terms_ranks_higher() {
        let index = built(&[
            verse("KJV", "MAT", 5, 44, "Love your enemies, bless them that curse you"),
            verse("KJV", "JHN", 15, 12, "That ye love one another"),
        ]);
        let results = index.query("love your enemies", &[], 10).unwrap();
        assert_eq!(results[0].reference.book, "MAT");
    }

    #[test]
    fn test_scoring_is_monotonic_in_term_frequency() {
        // Two otherwise-identical verses; the one with an extra occurrence of the
        // matched term must never score lower.
        let index = built(&[
            verse("KJV", "GEN", 1, 1, "light in the darkness"),
            verse("KJV", "GEN", 1, 2, "light upon light in the darkness"),
        ]);
        let results = index.query("light", &[], 10).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].reference.verse_start, 2);
        assert!(results[0].score >= results[1].score);
    }

    #[test]
    fn test_rarer_terms_weigh_more() {
        let mut verses = vec![verse("KJV", "ISA", 7, 14, "behold a virgin shall conceive")];
        for n in 1..=20 {
            verses.push(verse("KJV", "PSA", 119, n, "blessed are the undefiled"));
        }
        let index = built(&verses);
        // "virgin" appears once in 21 docs, "blessed" in 20 of them.
        let results = index.query("virgin blessed", &[], 1).unwrap();
        assert_eq!(results[0].reference.book, "ISA");
    }

    #[test]
    fn test_ties_break_in_canonical_order() {
        let index = built(&[
            verse("KJV", "REV", 22, 21, "grace be with you all"),
            verse("KJV", "GEN", 6, 8, "but Noah found grace"),
            verse("KJV", "JHN", 1, 17, "grace and truth came"),
        ]);
        let results = index.query("grace", &[], 10).unwrap();
        let books: Vec<&str> = results.iter().map(|r| r.reference.book.as_str()).collect();
        assert_eq!(books, vec!["GEN", "JHN", "REV"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let index = built(&[verse("KJV", "GEN", 1, 1, "In the beginning")]);
        assert!(index.query("xylophone", &[], 10).unwrap().is_empty());
        assert!(index.query("", &[], 10).unwrap().is_empty());
    }

    #[test]
    fn test_highlights_cover_matched_terms() {
        let text = "For God so loved the world";
        let index = built(&[verse("KJV", "JHN", 3, 16, text)]);
        let results = index.query("loved world", &[], 10).unwrap();
        let spans: Vec<&str> = results[0]
            .highlights
            .iter()
            .map(|(s, e)| &text[*s..*e])
            .collect();
        assert_eq!(spans, vec!["loved", "world"]);
    }

    // ============================================================
    // SCOPING
    // ============================================================

    #[test]
    fn test_translation_scope_filters_results() {
        let index = built(&[
            verse("KJV", "JHN", 3, 16, "For God so loved the world"),
            verse("VDCC", "JHN", 3, 16, "Fiindcă atât de mult a iubit Dumnezeu lumea"),
        ]);
        let all = index.query("lumea", &[], 10).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].translation, "VDCC");

        let scoped = index
            .query("lumea", &["KJV".to_string()], 10)
            .unwrap();
        assert!(scoped.is_empty());
    }

    #[test]
    fn test_scope_restricts_corpus_statistics() {
        let index = built(&[
            verse("KJV", "JHN", 3, 16, "God so loved the world"),
            verse("VDCC", "JHN", 3, 16, "Dumnezeu a iubit lumea"),
        ]);
        let scoped = index
            .query("world", &["kjv".to_string()], 10)
            .unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].translation, "KJV");
    }

    // ============================================================
    // SNAPSHOT LIFECYCLE
    // ============================================================

    #[test]
    fn test_query_before_build_is_not_built() {
        let index = SearchIndex::new();
        let err = index.query("anything", &[], 10).unwrap_err();
        assert_eq!(err, IndexError::NotBuilt);
    }

    #[test]
    fn test_invalid_top_k() {
        let index = built(&[verse("KJV", "GEN", 1, 1, "In the beginning")]);
        assert_eq!(
            index.query("beginning", &[], 0).unwrap_err(),
            IndexError::InvalidTopK { got: 0 }
        );
        assert_eq!(
            index.query("beginning", &[], -3).unwrap_err(),
            IndexError::InvalidTopK { got: -3 }
        );
    }

    #[test]
    fn test_top_k_truncates() {
        let verses: Vec<Verse> = (1..=10)
            .map(|n| verse("KJV", "PSA", 136, n, "for his mercy endureth for ever"))
            .collect();
        let index = built(&verses);
        let results = index.query("mercy", &[], 3).unwrap();
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_rebuild_swaps_wholesale() {
        let index = built(&[verse("KJV", "GEN", 1, 1, "In the beginning")]);
        assert_eq!(index.query("beginning", &[], 10).unwrap().len(), 1);

        index.rebuild(&[verse("KJV", "JHN", 11, 35, "Jesus wept")]);
        // The old corpus is gone entirely, not merged.
        assert!(index.query("beginning", &[], 10).unwrap().is_empty());
        assert_eq!(index.query("wept", &[], 10).unwrap().len(), 1);
    }

    #[test]
    fn test_concurrent_readers_see_one_snapshot() {
        use std::sync::Arc;

        let index = Arc::new(built(&[verse("KJV", "GEN", 1, 1, "light before")]));
        let reader = {
            let index = Arc::clone(&index);
            std::thread::spawn(move || {
                for _ in 0..200 {
                    // Either corpus is fine; a mix would return 2 hits for one term.
                    let hits = index.query("light", &[], 10).unwrap();
                    assert!(hits.len() <= 1);
                }
            })
        };
        for _ in 0..50 {
            index.rebuild(&[verse("KJV", "GEN", 1, 3, "light after")]);
            index.rebuild(&[verse("KJV", "GEN", 1, 1, "light before")]);
        }
        reader.join().unwrap();
    }
}
