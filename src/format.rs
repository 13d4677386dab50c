use core::fmt;
use core::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Raised when an output format is not one of the recognized values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not an acceptable output format (should be informal|polite|formal)")]
pub struct UnknownFormat(String);

/// The requested output formality.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    Informal,
    #[default]
    Polite,
    /// Currently an alias for [`Format::Polite`].
    Formal,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Informal, Format::Polite, Format::Formal];

    /// The direction in which verb endings are rewritten.
    pub fn direction(&self) -> Direction {
        match self {
            Format::Informal => Direction::Informal,
            Format::Polite | Format::Formal => Direction::Polite,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Format::Informal => "informal",
            Format::Polite => "polite",
            Format::Formal => "formal",
        }
    }
}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for format in Format::ALL {
            if format.name() == s {
                return Ok(format);
            }
        }

        Err(UnknownFormat(s.to_owned()))
    }
}

impl fmt::Display for Format {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The target side of a conjugation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Rewrite polite endings into informal ones.
    Informal,
    /// Rewrite informal endings into polite ones.
    Polite,
}
