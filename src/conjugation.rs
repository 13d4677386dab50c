//! Conjugation tables rewriting verb endings between informal and polite
//! forms.
//!
//! Suffixes are space separated tokens as produced by the tagger, such as
//! `わ な い` or `い ま せ ん`.

mod forms;
mod godan;

#[cfg(test)]
mod tests;

use std::collections::hash_map::{self, HashMap};

use thiserror::Error;

use crate::format::Direction;
use crate::group::Group;

/// An error raised while constructing conjugation tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConjugationError {
    #[error("Pattern `{label}` does not end in a known group code")]
    UnknownGroup { label: String },
    #[error("Pattern `{label}` defines informal form `{informal}` more than once")]
    DuplicateForm { label: String, informal: String },
    #[error("Pattern `{label}` maps both `{first}` and `{second}` to polite form `{polite}`")]
    NotInjective {
        label: String,
        polite: String,
        first: String,
        second: String,
    },
}

/// The full rule set of one conjugation pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    label: Box<str>,
    group: Group,
    to_polite: HashMap<String, String>,
    to_informal: HashMap<String, String>,
}

impl Pattern {
    /// Construct a pattern from informal to polite suffix pairs.
    ///
    /// The polite to informal table is derived by inverting the pairs, so
    /// neither side may repeat.
    pub fn new<I>(label: &str, pairs: I) -> Result<Self, ConjugationError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let Some(group) = label.chars().next_back().and_then(Group::from_code) else {
            return Err(ConjugationError::UnknownGroup {
                label: label.to_owned(),
            });
        };

        let mut to_polite = HashMap::new();
        let mut to_informal = HashMap::<String, String>::new();

        for (informal, polite) in pairs {
            if to_polite.contains_key(&informal) {
                return Err(ConjugationError::DuplicateForm {
                    label: label.to_owned(),
                    informal,
                });
            }

            match to_informal.entry(polite.clone()) {
                hash_map::Entry::Occupied(e) => {
                    return Err(ConjugationError::NotInjective {
                        label: label.to_owned(),
                        polite,
                        first: e.get().clone(),
                        second: informal,
                    });
                }
                hash_map::Entry::Vacant(e) => {
                    e.insert(informal.clone());
                }
            }

            to_polite.insert(informal, polite);
        }

        Ok(Self {
            label: label.into(),
            group,
            to_polite,
            to_informal,
        })
    }

    /// The label of the pattern, such as `v5k`.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The group the pattern belongs to.
    #[inline]
    pub fn group(&self) -> Group {
        self.group
    }

    /// Rewrite the given suffix towards `direction`.
    pub fn get(&self, direction: Direction, suffix: &str) -> Option<&str> {
        Some(self.table(direction).get(suffix)?.as_str())
    }

    /// Iterate over all informal to polite pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.to_polite.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of enumerated forms.
    #[inline]
    pub fn len(&self) -> usize {
        self.to_polite.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.to_polite.is_empty()
    }

    fn table(&self, direction: Direction) -> &HashMap<String, String> {
        match direction {
            Direction::Polite => &self.to_polite,
            Direction::Informal => &self.to_informal,
        }
    }
}

/// All conjugation patterns together with a flattened suffix to group index
/// for each direction.
#[derive(Debug, Clone)]
pub struct Conjugations {
    patterns: Vec<Pattern>,
    /// Informal suffixes, used when converting to polite.
    to_polite: HashMap<String, Group>,
    /// Polite suffixes, used when converting to informal.
    to_informal: HashMap<String, Group>,
}

impl Conjugations {
    /// Build the tables for every regular godan group and ichidan verbs.
    pub fn new() -> Result<Self, ConjugationError> {
        let mut patterns = Vec::with_capacity(godan::ROWS.len());

        for row in godan::ROWS {
            let mut pairs = Vec::new();
            forms::godan(row, |informal, polite| pairs.push((informal, polite)));
            patterns.push(Pattern::new(row.label, pairs)?);
        }

        Ok(Self::from_patterns(patterns))
    }

    /// Construct tables from a custom set of patterns.
    ///
    /// When patterns share a suffix, the last one decides its group in the
    /// suffix index.
    pub fn from_patterns(patterns: Vec<Pattern>) -> Self {
        let mut to_polite = HashMap::new();
        let mut to_informal = HashMap::new();

        for pattern in &patterns {
            for (informal, polite) in pattern.iter() {
                to_polite.insert(informal.to_owned(), pattern.group);
                to_informal.insert(polite.to_owned(), pattern.group);
            }
        }

        tracing::trace!(
            patterns = patterns.len(),
            to_polite = to_polite.len(),
            to_informal = to_informal.len(),
            "Built conjugation tables"
        );

        Self {
            patterns,
            to_polite,
            to_informal,
        }
    }

    /// Look up a pattern by its label.
    pub fn pattern(&self, label: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.label() == label)
    }

    /// Iterate over all patterns in declaration order.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> + '_ {
        self.patterns.iter()
    }

    /// Look up the group of an exact suffix in the index for `direction`.
    pub fn suffix_group(&self, direction: Direction, suffix: &str) -> Option<Group> {
        let index = match direction {
            Direction::Polite => &self.to_polite,
            Direction::Informal => &self.to_informal,
        };

        index.get(suffix).copied()
    }
}
