//! Dictionary mapping verb stems to their conjugation pattern.
//!
//! Each record is a pattern label followed by a tab and example tokens in the
//! tagger's `surface/tag/reading` format:
//!
//! ```text
//! v5k-s	行/動詞/い く/語尾/く
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use fixed_map::Map;
use flate2::read::GzDecoder;
use thiserror::Error;

use crate::group::Group;

/// Default location of the dictionary resource.
pub const DEFAULT_DICTIONARY: &str = "verb_dict.kytea";

/// Error raised when a dictionary record cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("Line {line}: expected `<pattern>\\t<tokens>`")]
    MissingTokens { line: usize },
    #[error("Line {line}: expected `surface/tag/reading` example, but got `{token}`")]
    Malformed { line: usize, token: String },
}

/// Lookup from a dictionary stem and group to a pattern label.
pub struct PatternDictionary {
    by_group: Map<Group, HashMap<Box<str>, Box<str>>>,
    len: usize,
}

impl PatternDictionary {
    /// Construct an empty dictionary.
    pub fn new() -> Self {
        let mut by_group = Map::new();

        for group in Group::ALL {
            by_group.insert(group, HashMap::new());
        }

        Self { by_group, len: 0 }
    }

    /// Open the dictionary at the given path.
    ///
    /// Paths ending in `.gz` are decompressed while reading.
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let input = File::open(path).with_context(|| anyhow!("{}", path.display()))?;

        let mut string = String::new();

        let result = if path.extension() == Some("gz".as_ref()) {
            GzDecoder::new(input).read_to_string(&mut string)
        } else {
            let mut input = input;
            input.read_to_string(&mut string)
        };

        result.with_context(|| anyhow!("{}", path.display()))?;

        let dictionary = Self::parse(&string).with_context(|| anyhow!("{}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            entries = dictionary.len(),
            "Loaded pattern dictionary"
        );

        Ok(dictionary)
    }

    /// Parse dictionary records.
    pub fn parse(input: &str) -> Result<Self, DictionaryError> {
        let mut this = Self::new();

        for (n, line) in input.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            let Some((label, tokens)) = line.split_once('\t') else {
                return Err(DictionaryError::MissingTokens { line: n + 1 });
            };

            let label = label.trim();

            let Some(first) = tokens.split_whitespace().next() else {
                return Err(DictionaryError::MissingTokens { line: n + 1 });
            };

            let mut fields = first.split('/');

            let (Some(stem), Some(_), Some(reading)) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(DictionaryError::Malformed {
                    line: n + 1,
                    token: first.to_owned(),
                });
            };

            // Labels such as `v1` carry no group letter.
            let code = if label.chars().count() > 2 {
                label.chars().nth(2)
            } else {
                Some(Group::Ichidan.code())
            };

            let Some(group) = code.and_then(Group::from_code) else {
                tracing::debug!(line = n + 1, label, "Skipping record without a known group");
                continue;
            };

            this.insert(stem, group, label);
            this.insert(reading, group, label);
        }

        Ok(this)
    }

    /// Insert a stem. A later insert of the same stem and group replaces the
    /// earlier pattern.
    pub fn insert(&mut self, stem: &str, group: Group, label: &str) {
        if let Some(stems) = self.by_group.get_mut(group) {
            if stems.insert(stem.into(), label.into()).is_none() {
                self.len += 1;
            }
        }
    }

    /// Look up the pattern label for the given stem and group.
    pub fn lookup(&self, stem: &str, group: Group) -> Option<&str> {
        let label = self.by_group.get(group)?.get(stem)?;
        Some(label)
    }

    /// Number of distinct stem and group pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for PatternDictionary {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
