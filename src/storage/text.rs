//! word2vec-style text format.
//!
//! An optional `<count> <dimension>` header line, then one entry per line:
//! the word followed by its components, separated by whitespace.

use crate::error::{LexicaError, Result};
use log::warn;
use std::io::{BufRead, Write};

/// Parses text-format vectors. Returns the dimension and the entries in
/// file order.
///
/// The dimension comes from the header if present, otherwise from the first
/// entry. Lines with a different arity or unparsable components are skipped.
pub fn read_text<R: BufRead>(reader: R) -> Result<(usize, Vec<(String, Vec<f32>)>)> {
    let mut dimension: Option<usize> = None;
    let mut entries = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let Some(word) = fields.next() else {
            continue;
        };
        let rest: Vec<&str> = fields.collect();

        if line_no == 0 && rest.len() == 1 {
            if let (Ok(_count), Ok(dim)) = (word.parse::<usize>(), rest[0].parse::<usize>()) {
                dimension = Some(dim);
                continue;
            }
        }

        let vector: std::result::Result<Vec<f32>, _> = rest.iter().map(|x| x.parse::<f32>()).collect();
        let Ok(vector) = vector else {
            warn!("Skipping line {}: unparsable component", line_no + 1);
            continue;
        };

        if vector.is_empty() {
            warn!("Skipping line {}: no components", line_no + 1);
            continue;
        }

        let dim = *dimension.get_or_insert(vector.len());
        if vector.len() != dim {
            warn!(
                "Skipping line {}: expected {} components, found {}",
                line_no + 1,
                dim,
                vector.len()
            );
            continue;
        }

        entries.push((word.to_string(), vector));
    }

    match dimension {
        Some(dim) if dim > 0 => Ok((dim, entries)),
        _ => Err(LexicaError::InvalidFormat(
            "cannot determine vector dimension".to_string(),
        )),
    }
}

/// Writes entries in text format with a header line.
pub fn write_text<W: Write>(mut writer: W, dimension: usize, entries: &[(String, Vec<f32>)]) -> Result<()> {
    writeln!(writer, "{} {}", entries.len(), dimension)?;
    for (word, vector) in entries {
        write!(writer, "{}", word)?;
        for x in vector {
            write!(writer, " {}", x)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
