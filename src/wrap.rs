// Greedy line wrapper
use thiserror::Error;

/// Separator placed between two words on the same line.
const SEPARATOR: char = ' ';
/// Line break emitted after every finalized line.
const NEWLINE: char = '\n';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WrapError {
    #[error("Invalid wrap width {0}: width must be at least 1")]
    InvalidLimit(usize),
}

/// Position of the next word to place.
///
/// `pending` holds whatever is left of an over-long word after a slice of
/// it was emitted. While set, it stands in for `words[index]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor<'a> {
    pub index: usize,
    pub pending: Option<&'a str>,
}

impl<'a> Cursor<'a> {
    /// The word under the cursor, or `None` once every word is placed.
    pub fn word(&self, words: &[&'a str]) -> Option<&'a str> {
        self.pending.or_else(|| words.get(self.index).copied())
    }

    fn advance(self) -> Self {
        Cursor {
            index: self.index + 1,
            pending: None,
        }
    }

    fn with_remainder(self, rest: &'a str) -> Self {
        Cursor {
            index: self.index,
            pending: Some(rest),
        }
    }
}

/// One finalized line and where the next line starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBreak<'a> {
    pub line: String,
    pub next: Cursor<'a>,
}

/// Splits on single spaces.
///
/// Runs of spaces produce empty words, which are kept. Trailing empty words
/// are dropped, so `"a b  "` yields `["a", "b"]` and `""` yields nothing.
pub fn split_words(text: &str) -> Vec<&str> {
    let mut words: Vec<&str> = text.split(SEPARATOR).collect();
    while words.last().is_some_and(|word| word.is_empty()) {
        words.pop();
    }
    words
}

fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Splits `word` after its first `at` chars.
fn split_at_char(word: &str, at: usize) -> (&str, &str) {
    match word.char_indices().nth(at) {
        Some((byte_idx, _)) => word.split_at(byte_idx),
        None => (word, ""),
    }
}

/// Builds a single line starting at `start`.
///
/// Words are appended greedily while `line + ' ' + word` stays within
/// `limit`. A word longer than `limit` is sliced only when it opens the
/// line; otherwise the line is closed in front of it and the word is left
/// for the next line.
pub fn build_line<'a>(words: &[&'a str], start: Cursor<'a>, limit: usize) -> LineBreak<'a> {
    let mut line = String::new();
    let mut counter = 0;
    let mut cursor = start;

    while let Some(word) = cursor.word(words) {
        let word_len = char_len(word);

        if word_len > limit {
            if counter == 0 {
                let (head, rest) = split_at_char(word, limit);
                return LineBreak {
                    line: head.to_string(),
                    next: cursor.with_remainder(rest),
                };
            }
            break;
        }

        if counter == 0 {
            // An empty word leaves the line empty, so leading spaces vanish.
            line.push_str(word);
            counter = word_len;
        } else if counter + 1 + word_len <= limit {
            line.push(SEPARATOR);
            line.push_str(word);
            counter += 1 + word_len;
        } else {
            break;
        }

        cursor = cursor.advance();
    }

    LineBreak { line, next: cursor }
}

/// Wraps `text` into lines of at most `limit` chars, without separators.
pub fn wrap_lines(text: &str, limit: usize) -> Result<Vec<String>, WrapError> {
    if limit == 0 {
        return Err(WrapError::InvalidLimit(limit));
    }

    let words = split_words(text);
    let mut lines = Vec::new();
    let mut cursor = Cursor::default();

    while cursor.word(&words).is_some() {
        let LineBreak { line, next } = build_line(&words, cursor, limit);
        lines.push(line);
        cursor = next;
    }

    Ok(lines)
}

/// Wraps `text` to `limit` chars per line.
///
/// Every line, the last one included, is followed by `'\n'`. Empty text
/// gives an empty string.
///
/// # Errors
///
/// Returns [`WrapError::InvalidLimit`] when `limit` is zero.
pub fn wrap(text: &str, limit: usize) -> Result<String, WrapError> {
    let lines = wrap_lines(text, limit)?;
    let mut out = String::with_capacity(text.len() + lines.len());
    for line in lines {
        out.push_str(&line);
        out.push(NEWLINE);
    }
    Ok(out)
}

/// Like [`wrap`], treating absent text as empty.
pub fn wrap_optional(text: Option<&str>, limit: usize) -> Result<String, WrapError> {
    wrap(text.unwrap_or_default(), limit)
}
