//! Processing of a single tagged input line.

use crate::convert::Converter;
use crate::sentence::{self, Sentence};
use crate::span;

/// Rewrites the main verb of tagged lines.
pub struct Processor<'a> {
    converter: Converter<'a>,
}

impl<'a> Processor<'a> {
    pub fn new(converter: Converter<'a>) -> Self {
        Self { converter }
    }

    /// Process one raw tagged line, returning its space separated surfaces
    /// with the main verb converted.
    pub fn process(&self, line: &str) -> String {
        let line = sentence::unescape(line);
        let sentence = Sentence::parse(&line);
        let surfaces = sentence.surfaces().collect::<Vec<_>>();

        let span = span::locate(sentence.tokens());

        if span.is_empty() {
            return surfaces.join(" ");
        }

        let verb = span.to_string();
        tracing::debug!(%verb, "Found main verb");

        let converted = self.converter.convert(&verb);

        if converted == verb {
            return surfaces.join(" ");
        }

        tracing::debug!(%verb, %converted, "Converted");

        let Some(at) = find(&surfaces, span.tokens()) else {
            tracing::debug!(%verb, "Verb not found as a contiguous span");
            return surfaces.join(" ");
        };

        let end = at + span.tokens().len();

        let mut out = Vec::with_capacity(surfaces.len());
        out.extend_from_slice(&surfaces[..at]);
        out.extend(converted.split_whitespace());
        out.extend_from_slice(&surfaces[end..]);
        out.join(" ")
    }
}

/// Find the first occurrence of `needle` as a contiguous run of tokens.
fn find(haystack: &[&str], needle: &[&str]) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }

    haystack.windows(needle.len()).position(|w| w == needle)
}
