//! Tagged sentences in the tagger's `surface/tag/reading` format.

use core::fmt;

use arrayvec::ArrayVec;

/// Escaped space which the tagger emits as its own unknown token.
const ESCAPED_SPACE_UNKNOWN: &str = "\\ /補助記号/UNK";
/// A literal slash token, which can't be split on `/` like other triples.
const SLASH_TRIPLE: &str = "//補助記号/・";

/// A single tagged token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedToken<'a> {
    pub surface: &'a str,
    pub tag: &'a str,
    pub reading: &'a str,
}

impl<'a> TaggedToken<'a> {
    #[inline]
    pub const fn new(surface: &'a str, tag: &'a str, reading: &'a str) -> Self {
        Self {
            surface,
            tag,
            reading,
        }
    }

    /// Parse a single `surface/tag/reading` triple.
    pub fn parse(triple: &'a str) -> Option<Self> {
        if triple == SLASH_TRIPLE {
            return Some(Self::new("/", "補助記号", "・"));
        }

        let mut fields = ArrayVec::<&str, 3>::new();

        for field in triple.split('/') {
            fields.try_push(field).ok()?;
        }

        let [surface, tag, reading] = fields.into_inner().ok()?;
        Some(Self::new(surface, tag, reading))
    }
}

impl fmt::Display for TaggedToken<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.surface, self.tag, self.reading)
    }
}

/// Undo the tagger's escaping of spaces and slashes and normalize
/// whitespace.
pub fn unescape(line: &str) -> String {
    let line = line.replace(ESCAPED_SPACE_UNKNOWN, "");
    let line = line.replace("\\/", "/");
    let line = line.replace("\\ ", "");

    let mut out = String::with_capacity(line.len());

    for part in line.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }

        out.push_str(part);
    }

    out
}

/// A sentence of tagged tokens.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    tokens: Vec<TaggedToken<'a>>,
}

impl<'a> Sentence<'a> {
    /// Parse an unescaped line into tokens.
    ///
    /// Triples which don't have exactly three fields are logged and dropped.
    pub fn parse(line: &'a str) -> Self {
        let mut tokens = Vec::new();

        for triple in line.split_whitespace() {
            let Some(token) = TaggedToken::parse(triple) else {
                tracing::error!(triple, "Can't divide this into token/tag/reading");
                continue;
            };

            tokens.push(token);
        }

        Self { tokens }
    }

    /// The tokens of the sentence.
    #[inline]
    pub fn tokens(&self) -> &[TaggedToken<'a>] {
        &self.tokens
    }

    /// Iterate over token surfaces.
    pub fn surfaces(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.tokens.iter().map(|t| t.surface)
    }

    /// Iterate over token tags.
    pub fn tags(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.tokens.iter().map(|t| t.tag)
    }

    /// Iterate over token readings.
    pub fn readings(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.tokens.iter().map(|t| t.reading)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
