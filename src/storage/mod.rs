//! Persistence for pretrained vector tables.

pub mod format;
mod table;
pub mod text;

pub use format::{TableFormat, TableHeader};
pub use table::VectorTable;
