//! Input source: a named file or stdin, read as a lazy stream of
//! whitespace-delimited words.
use crate::error::InputError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub struct Input {
    name: String,
    reader: Box<dyn BufRead>,
}

/// Open `path` for reading, or stdin when no path is given.
pub fn open(path: Option<&Path>) -> Result<Input, InputError> {
    open_or(path, || Input::from_reader("stdin", io::stdin().lock()))
}

/// Open `path` for reading, or fall back to `default` when no path is given.
pub fn open_or(path: Option<&Path>, default: impl FnOnce() -> Input) -> Result<Input, InputError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| InputError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Input::from_reader(
                path.display().to_string(),
                BufReader::new(file),
            ))
        }
        None => Ok(default()),
    }
}

impl Input {
    pub fn from_reader(name: impl Into<String>, reader: impl BufRead + 'static) -> Self {
        Input {
            name: name.into(),
            reader: Box::new(reader),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consume the input as a sequence of raw words.
    ///
    /// Lines are decoded lossily, so invalid UTF-8 becomes U+FFFD instead of
    /// an error. The first I/O failure is yielded once and ends the sequence.
    pub fn words(self) -> Words {
        Words {
            name: self.name,
            reader: self.reader,
            line: Vec::new(),
            pending: Vec::new().into_iter(),
            done: false,
        }
    }
}

pub struct Words {
    name: String,
    reader: Box<dyn BufRead>,
    line: Vec<u8>,
    pending: std::vec::IntoIter<String>,
    done: bool,
}

impl Iterator for Words {
    type Item = Result<String, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.pending.next() {
                return Some(Ok(word));
            }
            if self.done {
                return None;
            }
            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {
                    let text = String::from_utf8_lossy(&self.line);
                    self.pending = text
                        .split_whitespace()
                        .map(str::to_owned)
                        .collect::<Vec<_>>()
                        .into_iter();
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    self.done = true;
                    return Some(Err(InputError::Read {
                        name: self.name.clone(),
                        source,
                    }));
                }
            }
        }
    }
}
