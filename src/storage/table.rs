//! Pretrained vector tables.

use crate::error::{LexicaError, Result};
use crate::storage::format::TableFormat;
use crate::storage::text::{read_text, write_text};
use crate::vectors::VectorSource;
use log::info;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

/// An in-memory table of pretrained word vectors.
///
/// Tables are what a [`VectorSpace`](crate::VectorSpace) loads from, either
/// in bulk or lazily through the [`VectorSource`] trait.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorTable {
    dimension: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl VectorTable {
    /// Creates an empty table.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: HashMap::new(),
        }
    }

    /// Builds a table from entries. Later duplicates replace earlier ones.
    pub fn from_entries<I>(dimension: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<f32>)>,
    {
        let mut table = Self::new(dimension);
        for (word, vector) in entries {
            table.insert(word, vector)?;
        }
        Ok(table)
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, word: impl Into<String>, vector: Vec<f32>) -> Result<()> {
        if vector.len() != self.dimension {
            return Err(LexicaError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        self.vectors.insert(word.into(), vector);
        Ok(())
    }

    /// Vector for `word`.
    pub fn get(&self, word: &str) -> Option<&[f32]> {
        self.vectors.get(word).map(Vec::as_slice)
    }

    /// Checks if `word` is in the table.
    pub fn contains(&self, word: &str) -> bool {
        self.vectors.contains_key(word)
    }

    /// Vector dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Checks if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Iterates over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.vectors.iter().map(|(w, v)| (w.as_str(), v.as_slice()))
    }

    /// Entries sorted by word.
    pub fn sorted_entries(&self) -> Vec<(String, Vec<f32>)> {
        let mut entries: Vec<(String, Vec<f32>)> = self
            .vectors
            .iter()
            .map(|(w, v)| (w.clone(), v.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Loads a table from a binary file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (header, entries) = TableFormat::read(path.as_ref())?;
        let table = Self::from_entries(header.dimension as usize, entries)?;
        info!(
            "Loaded {} vectors of dimension {} from {}",
            table.len(),
            table.dimension,
            path.as_ref().display()
        );
        Ok(table)
    }

    /// Saves the table to a binary file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        TableFormat::write(path.as_ref(), self.dimension, &self.sorted_entries())?;
        info!("Saved {} vectors to {}", self.len(), path.as_ref().display());
        Ok(())
    }

    /// Reads a table in word2vec text format.
    pub fn read_text<R: BufRead>(reader: R) -> Result<Self> {
        let (dimension, entries) = read_text(reader)?;
        Self::from_entries(dimension, entries)
    }

    /// Loads a table from a word2vec text file.
    pub fn load_text<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LexicaError::FileNotFound(path.to_path_buf()));
        }
        let table = Self::read_text(BufReader::new(File::open(path)?))?;
        info!(
            "Loaded {} text vectors of dimension {} from {}",
            table.len(),
            table.dimension,
            path.display()
        );
        Ok(table)
    }

    /// Writes the table to a word2vec text file, sorted by word.
    pub fn write_text<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        write_text(writer, self.dimension, &self.sorted_entries())
    }
}

impl VectorSource for VectorTable {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn lookup(&self, word: &str) -> Option<Vec<f32>> {
        self.vectors.get(word).cloned()
    }

    fn words(&self) -> Vec<String> {
        self.vectors.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn create_test_table() -> VectorTable {
        VectorTable::from_entries(
            2,
            vec![
                ("apple".to_string(), vec![1.0, 0.0]),
                ("banana".to_string(), vec![0.9, 0.1]),
                ("car".to_string(), vec![0.0, 1.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_insert_checks_dimension() {
        let mut table = VectorTable::new(2);
        assert!(table.insert("ok", vec![1.0, 2.0]).is_ok());
        assert!(matches!(
            table.insert("bad", vec![1.0]),
            Err(LexicaError::DimensionMismatch { expected: 2, actual: 1 })
        ));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fruit.lxvt");

        let table = create_test_table();
        table.save(&path).unwrap();

        let loaded = VectorTable::load(&path).unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_text_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fruit.txt");

        let table = create_test_table();
        table.write_text(&path).unwrap();

        let loaded = VectorTable::load_text(&path).unwrap();
        assert_eq!(loaded.dimension(), 2);
        assert_eq!(loaded.get("banana"), Some(&[0.9f32, 0.1][..]));
    }

    #[test]
    fn test_read_text() {
        let table = VectorTable::read_text(Cursor::new("a 1 0\nb 0 1\n")).unwrap();
        assert!(table.contains("a"));
        assert!(table.contains("b"));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            VectorTable::load_text("/nope/vectors.txt"),
            Err(LexicaError::FileNotFound(_))
        ));
        assert!(matches!(
            VectorTable::load("/nope/vectors.lxvt"),
            Err(LexicaError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_vector_source() {
        let table = create_test_table();
        let source: &dyn VectorSource = &table;
        assert_eq!(source.dimension(), 2);
        assert_eq!(source.lookup("car"), Some(vec![0.0, 1.0]));
        assert_eq!(source.lookup("bus"), None);
        assert_eq!(source.words().len(), 3);
    }
}
