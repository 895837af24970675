//! Pretrained vector tables the space can pull entries from on demand.

/// A read-only table of pretrained vectors.
///
/// [`VectorSpace`](crate::VectorSpace) consults its source on a lookup miss
/// and copies the entry into its own vocabulary.
pub trait VectorSource: Send + Sync {
    /// Dimensionality of every vector in the table.
    fn dimension(&self) -> usize;

    /// Vector for `word`, if the table has one.
    fn lookup(&self, word: &str) -> Option<Vec<f32>>;

    /// Every key in the table.
    fn words(&self) -> Vec<String>;
}
