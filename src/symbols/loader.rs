//! Extraction of symbol names from module data files.

use super::SymbolTable;
use crate::error::ReadError;
use crate::reader::TokenReader;
use crate::statement::skip_block;
use std::fs;
use std::path::Path;

/// Strategy used to pull record names out of a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loader {
    /// One name per line, the whole file.
    Lines,
    /// Every token starting with the tag is a record id; the tag is stripped.
    Tagged(&'static str),
    /// First token of every non-numeric line after the two header lines.
    Leading,
    /// Structural walk of `scripts.txt`.
    Scripts,
}

/// Load the table at `path` with the given strategy.
///
/// # Errors
///
/// Returns a [`ReadError`] if the file cannot be read, or if a structural
/// walk runs off the end of the file.
pub fn load_table(path: &Path, loader: Loader) -> Result<SymbolTable, ReadError> {
    match loader {
        Loader::Scripts => {
            let mut reader = TokenReader::open(path)?;
            load_scripts(&mut reader)
        }
        text_loader => {
            let text = fs::read_to_string(path)?;
            Ok(names_from_text(&text, text_loader))
        }
    }
}

/// Apply a text-based strategy to an already-read file.
pub(crate) fn names_from_text(text: &str, loader: Loader) -> SymbolTable {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    match loader {
        Loader::Lines => SymbolTable::new(text.lines()),
        Loader::Tagged(tag) => SymbolTable::new(
            text.split_whitespace()
                .filter_map(|token| token.strip_prefix(tag))
                .filter(|name| !name.is_empty()),
        ),
        Loader::Leading => SymbolTable::new(
            text.lines()
                .skip(2)
                .filter_map(|line| line.split_whitespace().next())
                .filter(|token| token.parse::<f64>().is_err()),
        ),
        Loader::Scripts => SymbolTable::default(),
    }
}

/// Walk `scripts.txt`: signature, count, then per script a name, a flags
/// value and a statement block.
pub(crate) fn load_scripts<R: std::io::BufRead>(
    reader: &mut TokenReader<R>,
) -> Result<SymbolTable, ReadError> {
    reader.next_line()?;
    let count = reader.next_i64()?;
    let mut names = Vec::with_capacity(usize::try_from(count).unwrap_or(0).min(1024));
    for _ in 0..count {
        names.push(reader.next_word()?);
        reader.next_word()?;
        skip_block(reader)?;
    }
    Ok(SymbolTable::new(names))
}
