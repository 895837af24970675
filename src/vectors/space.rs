//! The word vector space.

use crate::config::VectorConfig;
use crate::doc::{Document, Token};
use crate::error::{LexicaError, Result};
use crate::similarity::cosine_similarity;
use crate::storage::VectorTable;
use crate::vectors::analogy::{rank, AnalogyFilter};
use crate::vectors::ops::{add_assign, finish, norm, sub_assign};
use crate::vectors::{Lexeme, VectorSource};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type Entries = HashMap<String, Arc<[f32]>>;

/// Fixed-dimension word vectors with similarity and analogy queries.
///
/// Lookups are case-sensitive. When a source table is attached, a lookup
/// miss copies the entry from the source into the space (insert-on-miss).
/// Readers share the vocabulary; insertions take the write lock, so a word
/// missed by several threads at once is inserted exactly once.
///
/// Entries are never overwritten except by [`replace_all`](Self::replace_all).
pub struct VectorSpace {
    dimension: usize,
    entries: RwLock<Entries>,
    source: Option<Arc<dyn VectorSource>>,
    config: VectorConfig,
}

impl std::fmt::Debug for VectorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorSpace")
            .field("dimension", &self.dimension)
            .field("len", &self.len())
            .field("has_source", &self.source.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl VectorSpace {
    /// Creates an empty space of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self::with_config(dimension, VectorConfig::default())
    }

    /// Creates an empty space with explicit configuration.
    pub fn with_config(dimension: usize, config: VectorConfig) -> Self {
        Self {
            dimension,
            entries: RwLock::new(HashMap::new()),
            source: None,
            config,
        }
    }

    /// Creates an empty space that pulls entries from `source` on demand.
    pub fn with_source(source: Arc<dyn VectorSource>, config: VectorConfig) -> Self {
        Self {
            dimension: source.dimension(),
            entries: RwLock::new(HashMap::new()),
            source: Some(source),
            config,
        }
    }

    /// Dimensionality of every vector.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Configuration.
    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    /// Number of words currently in the vocabulary.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Checks if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Checks if `word` is already in the vocabulary. Does not consult the source.
    pub fn contains(&self, word: &str) -> bool {
        self.read().contains_key(word)
    }

    /// Vocabulary words in lexical order.
    pub fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.read().keys().cloned().collect();
        words.sort_unstable();
        words
    }

    /// Adds an entry. Returns false, leaving the stored vector untouched, if
    /// the word is already present.
    pub fn add(&self, word: impl Into<String>, vector: Vec<f32>) -> Result<bool> {
        self.check_dimension(&vector)?;
        let word = word.into();
        let mut entries = self.write();
        if entries.contains_key(&word) {
            return Ok(false);
        }
        entries.insert(word, Arc::from(vector));
        Ok(true)
    }

    /// Replaces the whole vocabulary. Nothing changes if any vector has the
    /// wrong dimension.
    pub fn replace_all<I>(&self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, Vec<f32>)>,
    {
        let mut fresh = Entries::new();
        for (word, vector) in entries {
            self.check_dimension(&vector)?;
            fresh.insert(word, Arc::from(vector));
        }
        info!("Replaced vocabulary with {} entries", fresh.len());
        *self.write() = fresh;
        Ok(())
    }

    /// Copies every table entry not yet in the vocabulary. Returns how many
    /// were added; existing words keep their vectors.
    ///
    /// Fails with [`LexicaError::DimensionMismatch`], adding nothing, if the
    /// table's dimension differs from the space's.
    pub fn load_table(&self, table: &VectorTable) -> Result<usize> {
        if table.dimension() != self.dimension {
            return Err(LexicaError::DimensionMismatch {
                expected: self.dimension,
                actual: table.dimension(),
            });
        }

        let mut added = 0;
        let mut entries = self.write();
        for (word, vector) in table.iter() {
            if !entries.contains_key(word) {
                entries.insert(word.to_string(), Arc::from(vector));
                added += 1;
            }
        }
        info!("Loaded {} of {} table entries ({} total)", added, table.len(), entries.len());
        Ok(added)
    }

    /// Copies every source entry not yet in the vocabulary. Returns how many
    /// were added.
    pub fn preload(&self) -> Result<usize> {
        let Some(source) = &self.source else {
            return Ok(0);
        };

        let mut added = 0;
        let mut entries = self.write();
        for word in source.words() {
            if entries.contains_key(&word) {
                continue;
            }
            if let Some(vector) = source.lookup(&word) {
                self.check_dimension(&vector)?;
                entries.insert(word, Arc::from(vector));
                added += 1;
            }
        }
        info!("Preloaded {} entries from source ({} total)", added, entries.len());
        Ok(added)
    }

    /// Vector for `word`.
    ///
    /// Fails with [`LexicaError::OutOfVocabulary`] if neither the vocabulary
    /// nor the source has it.
    pub fn get(&self, word: &str) -> Result<Arc<[f32]>> {
        if let Some(vector) = self.read().get(word) {
            return Ok(Arc::clone(vector));
        }

        let vector = self
            .source
            .as_ref()
            .and_then(|source| source.lookup(word))
            .ok_or_else(|| LexicaError::OutOfVocabulary(word.to_string()))?;
        self.check_dimension(&vector)?;

        let mut entries = self.write();
        let stored = entries.entry(word.to_string()).or_insert_with(|| {
            debug!("Loaded '{}' into vocabulary from source", word);
            Arc::from(vector)
        });
        Ok(Arc::clone(stored))
    }

    /// Word with its vector if it has one. Never fails.
    pub fn lexeme(&self, word: &str) -> Lexeme {
        Lexeme::new(word, self.get(word).ok())
    }

    /// Whether `word` has a vector.
    pub fn has_vector(&self, word: &str) -> bool {
        self.get(word).is_ok()
    }

    /// Norm of `word`'s vector; exactly 0.0 for out-of-vocabulary words.
    pub fn vector_norm(&self, word: &str) -> f64 {
        self.get(word).map_or(0.0, |v| norm(&v))
    }

    /// Cosine similarity of two vectors of this space's dimension.
    pub fn similarity(&self, a: &[f32], b: &[f32]) -> Result<f64> {
        self.check_dimension(a)?;
        self.check_dimension(b)?;
        cosine_similarity(a, b)
    }

    /// Cosine similarity of two words' vectors.
    pub fn word_similarity(&self, a: &str, b: &str) -> Result<f64> {
        let va = self.get(a)?;
        let vb = self.get(b)?;
        self.similarity(&va, &vb)
    }

    /// Mean vector of the tokens that have vectors.
    ///
    /// Fails with [`LexicaError::EmptyVectorableInput`] if none do.
    pub fn document_vector(&self, tokens: &[Token]) -> Result<Vec<f32>> {
        self.document_vector_words(tokens.iter().map(|t| t.text.as_str()))
    }

    /// Mean vector of the words that have vectors.
    pub fn document_vector_words<'a, I>(&self, words: I) -> Result<Vec<f32>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut acc = vec![0.0f64; self.dimension];
        let mut count = 0usize;

        for word in words {
            match self.get(word) {
                Ok(vector) => {
                    add_assign(&mut acc, &vector);
                    count += 1;
                }
                Err(LexicaError::OutOfVocabulary(_)) => continue,
                Err(err) => return Err(err),
            }
        }

        if count == 0 {
            return Err(LexicaError::EmptyVectorableInput);
        }
        Ok(finish(&acc, count as f64))
    }

    /// Cosine similarity of two documents' mean vectors.
    pub fn doc_similarity(&self, a: &Document, b: &Document) -> Result<f64> {
        let va = self.document_vector(a.tokens())?;
        let vb = self.document_vector(b.tokens())?;
        self.similarity(&va, &vb)
    }

    /// Ranks the vocabulary against `sum(positive) - sum(negative)` using the
    /// configured filters. `analogy(&["king", "woman"], &["man"])` answers
    /// "man is to king as woman is to ?".
    pub fn analogy(&self, positive: &[&str], negative: &[&str]) -> Result<Vec<(String, f64)>> {
        self.analogy_with(positive, negative, &AnalogyFilter::from(&self.config))
    }

    /// [`analogy`](Self::analogy) with an explicit filter.
    ///
    /// Returns the full ranking, best first, ties broken by ascending word.
    pub fn analogy_with(
        &self,
        positive: &[&str],
        negative: &[&str],
        filter: &AnalogyFilter,
    ) -> Result<Vec<(String, f64)>> {
        if positive.is_empty() {
            return Err(LexicaError::EmptyInput("analogy needs at least one positive word".to_string()));
        }

        let mut acc = vec![0.0f64; self.dimension];
        for word in positive {
            add_assign(&mut acc, &self.get(word)?);
        }
        for word in negative {
            sub_assign(&mut acc, &self.get(word)?);
        }
        let target = finish(&acc, 1.0);

        let inputs: Vec<&str> = positive.iter().chain(negative).copied().collect();
        self.rank_filtered(&target, filter, &inputs)
    }

    /// The `k` words closest to `word`, excluding the word itself.
    pub fn find_similar(&self, word: &str, k: usize) -> Result<Vec<(String, f64)>> {
        let target = self.get(word)?;
        let filter = AnalogyFilter {
            exclude_inputs: true,
            ..AnalogyFilter::from(&self.config)
        };
        let mut ranked = self.rank_filtered(&target, &filter, &[word])?;
        ranked.truncate(k);
        Ok(ranked)
    }

    /// The `k` words closest to `vector`.
    pub fn most_similar(&self, vector: &[f32], k: usize) -> Result<Vec<(String, f64)>> {
        self.check_dimension(vector)?;
        let filter = AnalogyFilter::from(&self.config);
        let mut ranked = self.rank_filtered(vector, &filter, &[])?;
        ranked.truncate(k);
        Ok(ranked)
    }

    fn rank_filtered(
        &self,
        target: &[f32],
        filter: &AnalogyFilter,
        inputs: &[&str],
    ) -> Result<Vec<(String, f64)>> {
        let entries = self.read();
        let candidates: Vec<(&str, &Arc<[f32]>)> = entries
            .iter()
            .filter(|(word, vector)| filter.accepts(word, vector, inputs))
            .map(|(word, vector)| (word.as_str(), vector))
            .collect();

        debug!(
            "Ranking {} of {} vocabulary entries",
            candidates.len(),
            entries.len()
        );

        rank(target, &candidates, self.config.parallel_threshold)
    }

    fn check_dimension(&self, vector: &[f32]) -> Result<()> {
        if vector.len() != self.dimension {
            return Err(LexicaError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        Ok(())
    }

    // The map is append-only between explicit replacements, so a poisoned
    // lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Vocab;

    fn royal_space() -> VectorSpace {
        let space = VectorSpace::new(3);
        // axes: royalty, gender (+ female), vehicle-ness
        space.add("king", vec![0.9, -0.8, 0.0]).unwrap();
        space.add("queen", vec![0.9, 0.8, 0.0]).unwrap();
        space.add("man", vec![0.1, -0.8, 0.0]).unwrap();
        space.add("woman", vec![0.1, 0.8, 0.0]).unwrap();
        space.add("bicycle", vec![0.0, 0.0, 1.0]).unwrap();
        space.add("Queen", vec![0.9, 0.8, 0.0]).unwrap();
        space
    }

    #[test]
    fn test_get_and_oov() {
        let space = royal_space();
        assert_eq!(&*space.get("king").unwrap(), &[0.9, -0.8, 0.0]);

        let err = space.get("nargle").unwrap_err();
        assert!(matches!(err, LexicaError::OutOfVocabulary(w) if w == "nargle"));
        assert!(!space.has_vector("nargle"));
        assert_eq!(space.vector_norm("nargle"), 0.0);
        assert!(space.lexeme("nargle").is_oov());
    }

    #[test]
    fn test_case_sensitive() {
        let space = royal_space();
        assert!(space.has_vector("Queen"));
        assert!(!space.has_vector("KING"));
    }

    #[test]
    fn test_add_does_not_overwrite() {
        let space = royal_space();
        assert!(!space.add("king", vec![0.0, 0.0, 1.0]).unwrap());
        assert_eq!(&*space.get("king").unwrap(), &[0.9, -0.8, 0.0]);
    }

    #[test]
    fn test_dimension_checked() {
        let space = royal_space();
        let err = space.add("tiny", vec![1.0]).unwrap_err();
        assert!(matches!(err, LexicaError::DimensionMismatch { expected: 3, actual: 1 }));

        let err = space.similarity(&[1.0, 0.0, 0.0], &[1.0]).unwrap_err();
        assert!(matches!(err, LexicaError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_replace_all_is_atomic() {
        let space = royal_space();
        let bad = vec![("a".to_string(), vec![1.0, 0.0, 0.0]), ("b".to_string(), vec![1.0])];
        assert!(space.replace_all(bad).is_err());
        assert_eq!(space.len(), 6);

        space
            .replace_all(vec![("a".to_string(), vec![1.0, 0.0, 0.0])])
            .unwrap();
        assert_eq!(space.words(), vec!["a"]);
    }

    #[test]
    fn test_word_similarity() {
        let space = royal_space();
        let kq = space.word_similarity("king", "queen").unwrap();
        let kb = space.word_similarity("king", "bicycle").unwrap();
        assert!(kq > kb);
        assert_eq!(space.word_similarity("king", "king").unwrap(), 1.0);
    }

    #[test]
    fn test_document_vector_skips_oov() {
        let space = royal_space();
        let doc = Document::from_words(Vocab::english(), &["king", "nargle", "man"]);
        let v = space.document_vector(doc.tokens()).unwrap();
        assert_eq!(v.len(), 3);
        assert!((v[0] - 0.5).abs() < 1e-6);
        assert!((v[1] + 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_document_vector_empty() {
        let space = royal_space();
        let doc = Document::from_words(Vocab::english(), &["nargle", "blibber"]);
        let err = space.document_vector(doc.tokens()).unwrap_err();
        assert!(matches!(err, LexicaError::EmptyVectorableInput));

        let err = space.document_vector(&[]).unwrap_err();
        assert!(matches!(err, LexicaError::EmptyVectorableInput));
    }

    #[test]
    fn test_analogy() {
        let space = royal_space();
        let ranked = space.analogy(&["king", "woman"], &["man"]).unwrap();
        assert_eq!(ranked[0].0, "queen");

        let score = |w: &str| ranked.iter().find(|(word, _)| word == w).map(|(_, s)| *s);
        assert!(score("queen").unwrap() > score("bicycle").unwrap());
        // uppercase entries are filtered by default
        assert!(score("Queen").is_none());
    }

    #[test]
    fn test_analogy_exclude_inputs() {
        let space = royal_space();
        let filter = AnalogyFilter {
            exclude_inputs: true,
            ..AnalogyFilter::default()
        };
        let ranked = space.analogy_with(&["king", "woman"], &["man"], &filter).unwrap();
        let words: Vec<&str> = ranked.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["queen", "bicycle"]);
    }

    #[test]
    fn test_analogy_errors() {
        let space = royal_space();
        assert!(matches!(
            space.analogy(&[], &["man"]),
            Err(LexicaError::EmptyInput(_))
        ));
        assert!(matches!(
            space.analogy(&["king", "nargle"], &["man"]),
            Err(LexicaError::OutOfVocabulary(_))
        ));
        assert!(matches!(
            space.analogy(&["king"], &["king"]),
            Err(LexicaError::DegenerateVector(_))
        ));
    }

    #[test]
    fn test_find_similar() {
        let space = royal_space();
        let similar = space.find_similar("king", 2).unwrap();
        assert_eq!(similar.len(), 2);
        assert_ne!(similar[0].0, "king");
        assert_eq!(similar[0].0, "man");
    }

    #[test]
    fn test_load_table() {
        let space = royal_space();
        let table = VectorTable::from_entries(
            3,
            vec![
                ("king".to_string(), vec![0.0, 0.0, 1.0]),
                ("prince".to_string(), vec![0.8, -0.7, 0.1]),
            ],
        )
        .unwrap();

        assert_eq!(space.load_table(&table).unwrap(), 1);
        assert_eq!(&*space.get("prince").unwrap(), &[0.8, -0.7, 0.1]);
        assert_eq!(&*space.get("king").unwrap(), &[0.9, -0.8, 0.0]);
        assert_eq!(space.load_table(&table).unwrap(), 0);

        let wrong = VectorTable::new(2);
        assert!(matches!(
            space.load_table(&wrong),
            Err(LexicaError::DimensionMismatch { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_zero_norm_entries_skipped_when_admitted() {
        let space = royal_space();
        space.add("pad", vec![0.0, 0.0, 0.0]).unwrap();
        let filter = AnalogyFilter {
            require_vector: false,
            ..AnalogyFilter::default()
        };

        let ranked = space.analogy_with(&["king"], &[], &filter).unwrap();
        assert_eq!(ranked[0].0, "king");
        assert!(ranked.iter().all(|(w, _)| w != "pad"));
        assert_eq!(space.find_similar("queen", 10).unwrap().len(), 4);
    }

    #[test]
    fn test_most_similar() {
        let space = royal_space();
        let similar = space.most_similar(&[0.0, 0.0, 2.0], 1).unwrap();
        assert_eq!(similar[0].0, "bicycle");
        assert_eq!(similar[0].1, 1.0);
    }
}
