//! Locating the conjugated verb or copula in a tagged sentence.

use core::fmt;

use crate::sentence::TaggedToken;

/// Tag of a verb head.
pub const VERB_TAG: &str = "動詞";
/// Tag of an auxiliary verb.
pub const AUXILIARY_TAG: &str = "助動詞";
/// Tags of inflectional endings and auxiliaries following a head.
pub const TAIL_TAGS: [&str; 3] = ["語尾", "助動", "助動詞"];
/// Surface forms of the copula.
pub const COPULA: [&str; 2] = ["だ", "で"];

/// The tokens making up a conjugated predicate, in sentence order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VerbSpan<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> VerbSpan<'a> {
    /// Surfaces of the span.
    #[inline]
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for VerbSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.tokens.iter();

        if let Some(first) = it.next() {
            f.write_str(first)?;

            for token in it {
                write!(f, " {token}")?;
            }
        }

        Ok(())
    }
}

/// Scan from the end of the sentence for the main verb.
///
/// Tail tokens are collected until a copula or verb head is found. Other
/// tokens are skipped. If no head is found the collected tails are returned
/// as they are.
pub fn locate<'a>(tokens: &[TaggedToken<'a>]) -> VerbSpan<'a> {
    let mut span = Vec::new();

    for token in tokens.iter().rev() {
        tracing::trace!(surface = token.surface, tag = token.tag);

        if COPULA.contains(&token.surface) && token.tag == AUXILIARY_TAG {
            span.push(token.surface);
            break;
        }

        if token.tag == VERB_TAG {
            span.push(token.surface);
            break;
        }

        if TAIL_TAGS.contains(&token.tag) {
            span.push(token.surface);
        }
    }

    span.reverse();
    VerbSpan { tokens: span }
}
