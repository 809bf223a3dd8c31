use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::identifiers::VocabularyVersion;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot open {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed record on line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },
    #[error("Read error: {0}")]
    Read(#[from] std::io::Error),
    #[error("Source is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// One parsed `<token> <value>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyRecord {
    pub token: String,
    pub value: i64,
}

impl VocabularyRecord {
    /// Parses exactly two whitespace-separated fields, the second an integer.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let token = fields.next()?;
        let value = fields.next()?.parse().ok()?;
        if fields.next().is_some() {
            return None;
        }
        Some(Self {
            token: token.to_string(),
            value,
        })
    }
}

/// A fully parsed value table.
///
/// Parsing is all-or-nothing: a `Vocabulary` only exists once every line
/// has been accepted, so a trie is never built from a partial source.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub records: Vec<VocabularyRecord>,
    pub version: VocabularyVersion,
}

impl Vocabulary {
    pub fn parse(raw: &str) -> Result<Self, LoadError> {
        let records = raw
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                VocabularyRecord::parse(line).ok_or_else(|| LoadError::MalformedRecord {
                    line: idx + 1,
                    content: line.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let version = VocabularyVersion::from_content(raw.as_bytes());
        log::debug!("parsed {} vocabulary records ({version})", records.len());

        Ok(Self { records, version })
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoadError> {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;
        Self::parse(&String::from_utf8(raw)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let file = fs::File::open(path).map_err(|source| LoadError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Inserts every record in file order, so a repeated token keeps its
    /// last value.
    pub fn build<T>(&self) -> T
    where
        T: FromIterator<(String, i64)>,
    {
        self.records
            .iter()
            .map(|record| (record.token.clone(), record.value))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
