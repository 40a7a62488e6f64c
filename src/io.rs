use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

/// Separator written between two wrapped blocks.
const BLOCK_SEPARATOR: &str = "\n\n";

#[derive(Error, Debug)]
pub enum IoError {
    #[error("Input file not found: {0}")]
    FileNotFound(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("I/O error: {0}")]
    GenericIo(#[from] io::Error),
}

impl IoError {
    fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => IoError::FileNotFound(path.display().to_string()),
            io::ErrorKind::PermissionDenied => {
                IoError::PermissionDenied(path.display().to_string())
            }
            _ => IoError::GenericIo(err),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LimitError {
    #[error("Invalid limit format: {value}")]
    Malformed {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Invalid limit {0}: width must be at least 1")]
    NonPositive(i64),
}

/// One (text, limit) entry read from the input file.
///
/// The limit is kept as written so a bad value can be reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPair {
    pub text: String,
    pub limit: String,
}

impl InputPair {
    pub fn new(text: impl Into<String>, limit: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: limit.into(),
        }
    }

    pub fn parse_limit(&self) -> Result<usize, LimitError> {
        let value: i64 = self.limit.parse().map_err(|source| LimitError::Malformed {
            value: self.limit.clone(),
            source,
        })?;
        usize::try_from(value)
            .ok()
            .filter(|limit| *limit > 0)
            .ok_or(LimitError::NonPositive(value))
    }
}

// Only spaces are stripped; tabs stay part of the line.
fn trim_spaces(line: &str) -> &str {
    line.trim_matches(' ')
}

/// Parses alternating text and limit lines into pairs.
pub fn parse_pairs(content: &str) -> Vec<InputPair> {
    let mut pairs = Vec::new();
    let mut lines = content.lines();

    while let Some(text_line) = lines.next() {
        // A text line with nothing after it is dropped
        let Some(limit_line) = lines.next() else {
            break;
        };

        let text = trim_spaces(text_line);
        if text.is_empty() {
            continue;
        }
        pairs.push(InputPair::new(text, trim_spaces(limit_line)));
    }

    pairs
}

pub fn read_input_file(path: &Path) -> Result<Vec<InputPair>, IoError> {
    let content = std::fs::read_to_string(path).map_err(|e| IoError::from_io(e, path))?;
    Ok(parse_pairs(&content))
}

/// Joins wrapped blocks with one blank line between them.
///
/// A single trailing line break is removed from each block first.
pub fn format_blocks<S: AsRef<str>>(blocks: &[S]) -> String {
    blocks
        .iter()
        .map(|block| {
            let block = block.as_ref();
            block.strip_suffix('\n').unwrap_or(block)
        })
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

pub fn write_output_file<S: AsRef<str>>(path: &Path, blocks: &[S]) -> Result<(), IoError> {
    let file = File::create(path).map_err(|e| IoError::from_io(e, path))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(format_blocks(blocks).as_bytes())?;
    writer.flush()?;
    Ok(())
}
