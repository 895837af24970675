//! Word vectors: storage, similarity, document vectors and analogies.

pub mod analogy;
mod lexeme;
pub mod ops;
mod source;
mod space;

pub use analogy::AnalogyFilter;
pub use lexeme::Lexeme;
pub use source::VectorSource;
pub use space::VectorSpace;
