//! Word sources
//!
//! A [`WordSource`] produces a finite sequence of words and is not restartable.
//! The [`MasterSource`] stacks them: reads come from the top source, and an
//! exhausted source is popped before the read is retried against the one
//! beneath it. Pushing a source while another is mid-stream therefore behaves
//! like a procedure call.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use core_types::{ClacError, ClacResult};

/// A lazy producer of words
pub trait WordSource {
    /// Next word, or `None` once the source is exhausted
    fn next_word(&mut self) -> Option<String>;
}

/// Split a line into words.
///
/// Words are separated by whitespace, except that a word beginning with `"`
/// runs to the next `"` on the same line (or to the end of the line), keeping
/// any whitespace in between.
///
/// ```
/// use interpreter::source::tokenize;
///
/// assert_eq!(tokenize(r#"1 "a b" +"#), vec!["1", "\"a b\"", "+"]);
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut rest = line.trim_start();
    while !rest.is_empty() {
        let end = if let Some(quoted) = rest.strip_prefix('"') {
            quoted.find('"').map_or(rest.len(), |close| close + 2)
        } else {
            rest.find(char::is_whitespace).unwrap_or(rest.len())
        };
        words.push(rest[..end].to_string());
        rest = rest[end..].trim_start();
    }
    words
}

/// Words of one in-memory line of text
#[derive(Debug, Clone, Default)]
pub struct LineSource {
    words: VecDeque<String>,
}

impl LineSource {
    /// Source over the words of `text`; embedded newlines separate lines
    pub fn new(text: &str) -> Self {
        Self {
            words: text.lines().flat_map(tokenize).collect(),
        }
    }
}

impl WordSource for LineSource {
    fn next_word(&mut self) -> Option<String> {
        self.words.pop_front()
    }
}

/// Words of a file, read one line at a time
pub struct FileSource {
    name: String,
    reader: Box<dyn BufRead>,
    pending: VecDeque<String>,
    exhausted: bool,
}

impl FileSource {
    /// Open `path` for reading
    pub fn open(path: impl AsRef<Path>) -> ClacResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ClacError::io(format!("Unable to open {}: {}", path.display(), e))
        })?;
        Ok(Self::from_reader(
            path.display().to_string(),
            BufReader::new(file),
        ))
    }

    /// Source over any buffered reader; `name` is used in log output
    pub fn from_reader(name: impl Into<String>, reader: impl BufRead + 'static) -> Self {
        Self {
            name: name.into(),
            reader: Box::new(reader),
            pending: VecDeque::new(),
            exhausted: false,
        }
    }
}

impl std::fmt::Debug for FileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSource")
            .field("name", &self.name)
            .field("pending", &self.pending)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

impl WordSource for FileSource {
    fn next_word(&mut self) -> Option<String> {
        while self.pending.is_empty() && !self.exhausted {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => self.exhausted = true,
                Ok(_) => self.pending.extend(tokenize(&line)),
                Err(e) => {
                    tracing::warn!(file = %self.name, error = %e, "read failed, closing source");
                    self.exhausted = true;
                }
            }
        }
        self.pending.pop_front()
    }
}

/// Stack of word sources
#[derive(Default)]
pub struct MasterSource {
    sources: Vec<Box<dyn WordSource>>,
}

impl MasterSource {
    /// Create an empty master source
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Install `source` as the new top
    pub fn push(&mut self, source: Box<dyn WordSource>) {
        self.sources.push(source);
        tracing::debug!(depth = self.sources.len(), "word source pushed");
    }

    /// Number of sources not yet exhausted or popped
    pub fn depth(&self) -> usize {
        self.sources.len()
    }

    /// Discard every source
    pub fn clear(&mut self) {
        self.sources.clear();
    }
}

impl std::fmt::Debug for MasterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterSource")
            .field("depth", &self.sources.len())
            .finish()
    }
}

impl WordSource for MasterSource {
    fn next_word(&mut self) -> Option<String> {
        loop {
            let top = self.sources.last_mut()?;
            if let Some(word) = top.next_word() {
                return Some(word);
            }
            self.sources.pop();
            tracing::debug!(depth = self.sources.len(), "word source exhausted");
        }
    }
}
