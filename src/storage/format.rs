//! Binary format for vector tables.
//!
//! ## Format Layout
//!
//! ```text
//! +------------------+
//! | Header (16 bytes)|
//! +------------------+
//! | Entries (bincode)|
//! | (variable)       |
//! +------------------+
//! ```
//!
//! ### Header (16 bytes, little-endian)
//! - Magic number (4 bytes): "LXVT"
//! - Version (2 bytes)
//! - Flags (2 bytes): reserved, zero
//! - Vector dimension (4 bytes)
//! - Number of entries (4 bytes)
//!
//! ### Entries
//! - bincode-encoded `Vec<(String, Vec<f32>)>`, sorted by word

use crate::error::{LexicaError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Magic number for Lexica vector table files.
const MAGIC: &[u8; 4] = b"LXVT";

/// Current format version.
const VERSION: u16 = 1;

/// Header size in bytes.
pub const HEADER_SIZE: usize = 16;

/// Vector table file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableHeader {
    /// Format version.
    pub version: u16,
    /// Flags.
    pub flags: u16,
    /// Vector dimension.
    pub dimension: u32,
    /// Number of entries.
    pub num_entries: u32,
}

impl TableHeader {
    /// Creates a header for the current version.
    pub fn new(dimension: u32, num_entries: u32) -> Self {
        Self {
            version: VERSION,
            flags: 0,
            dimension,
            num_entries,
        }
    }

    /// Writes the header to bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(MAGIC);
        bytes[4..6].copy_from_slice(&self.version.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.flags.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.dimension.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.num_entries.to_le_bytes());
        bytes
    }

    /// Reads a header from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(LexicaError::InvalidFormat("Header too short".to_string()));
        }

        if &bytes[0..4] != MAGIC {
            return Err(LexicaError::InvalidFormat("Invalid magic number".to_string()));
        }

        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        if version != VERSION {
            return Err(LexicaError::InvalidFormat(format!(
                "Unsupported version {}",
                version
            )));
        }

        Ok(Self {
            version,
            flags: u16::from_le_bytes([bytes[6], bytes[7]]),
            dimension: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            num_entries: u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
        })
    }
}

/// Binary reader/writer for vector table files.
pub struct TableFormat;

impl TableFormat {
    /// Writes entries to `path`. Entries must already be sorted.
    pub fn write<P: AsRef<Path>>(path: P, dimension: usize, entries: &[(String, Vec<f32>)]) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let header = TableHeader::new(to_u32(dimension, "dimension")?, to_u32(entries.len(), "entry count")?);
        writer.write_all(&header.to_bytes())?;
        bincode::serialize_into(&mut writer, entries)?;
        writer.flush()?;

        Ok(())
    }

    /// Reads a table file, validating the header against the body.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<(TableHeader, Vec<(String, Vec<f32>)>)> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LexicaError::FileNotFound(path.to_path_buf()));
        }

        let mut reader = BufReader::new(File::open(path)?);
        let mut header_bytes = [0u8; HEADER_SIZE];
        reader
            .read_exact(&mut header_bytes)
            .map_err(|_| LexicaError::InvalidFormat("Header too short".to_string()))?;
        let header = TableHeader::from_bytes(&header_bytes)?;

        let entries: Vec<(String, Vec<f32>)> = bincode::deserialize_from(&mut reader)?;
        if entries.len() != header.num_entries as usize {
            return Err(LexicaError::InvalidFormat(format!(
                "Header declares {} entries, body has {}",
                header.num_entries,
                entries.len()
            )));
        }
        if let Some((word, vector)) = entries
            .iter()
            .find(|(_, v)| v.len() != header.dimension as usize)
        {
            return Err(LexicaError::InvalidFormat(format!(
                "Entry '{}' has dimension {}, header declares {}",
                word,
                vector.len(),
                header.dimension
            )));
        }

        Ok((header, entries))
    }
}

fn to_u32(value: usize, what: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| LexicaError::InvalidFormat(format!("{} {} exceeds u32", what, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entries() -> Vec<(String, Vec<f32>)> {
        vec![
            ("cat".to_string(), vec![0.1, 0.2]),
            ("dog".to_string(), vec![0.3, 0.4]),
        ]
    }

    #[test]
    fn test_header_roundtrip() {
        let header = TableHeader::new(300, 42);
        let parsed = TableHeader::from_bytes(&header.to_bytes()).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_bad_magic() {
        let mut bytes = TableHeader::new(2, 1).to_bytes();
        bytes[0] = b'X';
        assert!(matches!(
            TableHeader::from_bytes(&bytes),
            Err(LexicaError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_bad_version() {
        let mut bytes = TableHeader::new(2, 1).to_bytes();
        bytes[4] = 9;
        assert!(matches!(
            TableHeader::from_bytes(&bytes),
            Err(LexicaError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_write_and_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vectors.lxvt");

        TableFormat::write(&path, 2, &entries()).unwrap();
        let (header, read) = TableFormat::read(&path).unwrap();

        assert_eq!(header.dimension, 2);
        assert_eq!(header.num_entries, 2);
        assert_eq!(read, entries());
    }

    #[test]
    fn test_dimension_mismatch_in_body() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vectors.lxvt");

        TableFormat::write(&path, 3, &entries()).unwrap();
        assert!(matches!(
            TableFormat::read(&path),
            Err(LexicaError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_truncated_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.lxvt");
        std::fs::write(&path, b"LXV").unwrap();
        assert!(matches!(
            TableFormat::read(&path),
            Err(LexicaError::InvalidFormat(_))
        ));
    }
}
