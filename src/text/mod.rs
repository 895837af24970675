//! Text processing: tokenization, token norms, lexical attributes and stop words.

pub mod attrs;
mod normalizer;
mod stopwords;
mod tokenizer;
mod vocab;

pub use attrs::LexFlags;
pub use normalizer::Normalizer;
pub use stopwords::StopWords;
pub use tokenizer::Tokenizer;
pub use vocab::Vocab;
