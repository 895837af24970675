//! Property tests for segmentation and cosine similarity.

use lexica::{
    cosine_similarity, BoundaryRule, Document, RuleSetBuilder, Segmenter, Vocab,
};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["a", "b", "Cat", ".", "!", "?", ";", ",", "\n"])
}

fn words() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(word(), 0..40)
}

fn vector(dim: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(0.01f32..10.0, dim)
}

fn starts(doc: &Document) -> Vec<bool> {
    doc.tokens().iter().map(|t| t.is_sent_start()).collect()
}

proptest! {
    #[test]
    fn sentences_partition_the_document(words in words(), newline in any::<bool>()) {
        let mut doc = Document::from_words(Vocab::english(), &words);
        let segmenter = if newline { Segmenter::newline() } else { Segmenter::punctuation() };
        segmenter.mark_boundaries(&mut doc).unwrap();

        let mut expected_start = 0;
        for span in doc.sents().unwrap() {
            prop_assert_eq!(span.start(), expected_start);
            prop_assert!(span.end() > span.start());
            expected_start = span.end();
        }
        prop_assert_eq!(expected_start, doc.len());
    }

    #[test]
    fn extra_rules_only_add_boundaries(words in words()) {
        let mut base = Document::from_words(Vocab::english(), &words);
        let mut extended = base.unparsed_copy();

        Segmenter::punctuation().mark_boundaries(&mut base).unwrap();
        let rules = RuleSetBuilder::with_defaults()
            .rule(BoundaryRule::semicolon())
            .build()
            .unwrap();
        Segmenter::with_rules(rules).mark_boundaries(&mut extended).unwrap();

        for (before, after) in starts(&base).into_iter().zip(starts(&extended)) {
            prop_assert!(!before || after);
        }
    }

    #[test]
    fn cosine_is_symmetric(a in vector(8), b in vector(8)) {
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        prop_assert_eq!(ab, ba);
        prop_assert!((-1.0..=1.0).contains(&ab));
    }

    #[test]
    fn cosine_self_similarity_is_one(a in vector(16)) {
        prop_assert_eq!(cosine_similarity(&a, &a).unwrap(), 1.0);
    }
}
