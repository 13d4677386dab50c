//! Rewriting a verb span to the requested formality.

use std::borrow::Cow;

use crate::classify::classify;
use crate::conjugation::Conjugations;
use crate::dictionary::PatternDictionary;
use crate::format::{Direction, Format};

/// The plain copula.
pub const COPULA_INFORMAL: &str = "だ";
/// The polite copula, as tokenized by the tagger.
pub const COPULA_POLITE: &str = "で す";

/// Converts verb spans using the conjugation tables and pattern dictionary.
pub struct Converter<'a> {
    conjugations: &'a Conjugations,
    dictionary: &'a PatternDictionary,
    format: Format,
}

impl<'a> Converter<'a> {
    pub fn new(
        conjugations: &'a Conjugations,
        dictionary: &'a PatternDictionary,
        format: Format,
    ) -> Self {
        Self {
            conjugations,
            dictionary,
            format,
        }
    }

    /// The format verbs are converted to.
    #[inline]
    pub fn format(&self) -> Format {
        self.format
    }

    /// Convert a space separated verb span.
    ///
    /// Verbs which can't be converted are returned unchanged.
    pub fn convert<'s>(&self, verb: &'s str) -> Cow<'s, str> {
        let direction = self.format.direction();

        match (verb, direction) {
            (COPULA_POLITE, Direction::Informal) => return Cow::Borrowed(""),
            (COPULA_INFORMAL, Direction::Polite) => return Cow::Borrowed(COPULA_POLITE),
            (COPULA_POLITE | COPULA_INFORMAL, _) => return Cow::Borrowed(verb),
            _ => {}
        }

        let mut pieces = verb.split_whitespace();

        let Some(stem) = pieces.next() else {
            return Cow::Borrowed(verb);
        };

        let suffix = pieces.collect::<Vec<_>>().join(" ");
        tracing::debug!(stem, %suffix);

        let Some(group) = classify(self.conjugations, &suffix, direction) else {
            tracing::debug!(stem, %suffix, "Unable to classify verb group");
            return Cow::Borrowed(verb);
        };

        tracing::debug!(%group, "Verb in group");

        let Some(label) = self.dictionary.lookup(stem, group) else {
            tracing::debug!(stem, %group, "Unable to find matching pattern");
            return Cow::Borrowed(verb);
        };

        tracing::debug!(label, "Identified pattern");

        let replacement = self
            .conjugations
            .pattern(label)
            .and_then(|pattern| pattern.get(direction, &suffix));

        let Some(replacement) = replacement else {
            tracing::debug!(label, %suffix, "Unable to convert verb conjugation");
            return Cow::Borrowed(verb);
        };

        Cow::Owned(format!("{stem} {replacement}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> PatternDictionary {
        PatternDictionary::parse(concat!(
            "v5u\t戦/動詞/たたか う/語尾/う\n",
            "v5k\t書/動詞/か く/語尾/く\n",
            "v5k-s\t行/動詞/い く/語尾/く\n",
            "v5m\t読/動詞/よ む/語尾/む\n",
            "v1\t食/動詞/た べ/語尾/べ る/語尾/る\n",
        ))
        .unwrap()
    }

    #[test]
    fn copula() {
        let c = Conjugations::new().unwrap();
        let d = dictionary();

        let polite = Converter::new(&c, &d, Format::Polite);
        let formal = Converter::new(&c, &d, Format::Formal);
        let informal = Converter::new(&c, &d, Format::Informal);

        assert_eq!(polite.convert("だ"), "で す");
        assert_eq!(formal.convert("だ"), "で す");
        assert_eq!(polite.convert("で す"), "で す");
        assert_eq!(informal.convert("で す"), "");
        assert_eq!(informal.convert("だ"), "だ");
    }

    #[test]
    fn to_polite() {
        let c = Conjugations::new().unwrap();
        let d = dictionary();
        let polite = Converter::new(&c, &d, Format::Polite);

        assert_eq!(polite.convert("戦 わ な い"), "戦 い ま せ ん");
        assert_eq!(polite.convert("書 い た"), "書 き ま し た");
        assert_eq!(polite.convert("読 ま な い"), "読 み ま せ ん");
        assert_eq!(polite.convert("読 ま れ な かっ た"), "読 ま れ ま せ ん で し た");
    }

    #[test]
    fn to_informal() {
        let c = Conjugations::new().unwrap();
        let d = dictionary();
        let informal = Converter::new(&c, &d, Format::Informal);

        assert_eq!(informal.convert("戦 い ま せ ん"), "戦 わ な い");
        assert_eq!(informal.convert("か き ま す"), "か く");
        assert_eq!(informal.convert("食 ま せ ん で し た"), "食 な かっ た");
    }

    #[test]
    fn already_in_target_format() {
        let c = Conjugations::new().unwrap();
        let d = dictionary();

        let polite = Converter::new(&c, &d, Format::Polite);
        let informal = Converter::new(&c, &d, Format::Informal);

        assert_eq!(polite.convert("戦 い ま せ ん"), "戦 い ま せ ん");
        assert_eq!(informal.convert("戦 わ な い"), "戦 わ な い");
    }

    #[test]
    fn unknown_stem_or_form() {
        let c = Conjugations::new().unwrap();
        let d = dictionary();
        let polite = Converter::new(&c, &d, Format::Polite);

        assert_eq!(polite.convert("走 ら な い"), "走 ら な い");
        // Pattern without conjugation tables.
        assert_eq!(polite.convert("行 か な い"), "行 か な い");
        // Form outside of the enumerated set.
        assert_eq!(polite.convert("書 か な く て"), "書 か な く て");
        assert_eq!(polite.convert("書"), "書");
        // `ん だ` is shared by several groups and indexes to the last of them.
        assert_eq!(polite.convert("読 ん だ"), "読 ん だ");
        assert_eq!(polite.convert(""), "");
    }
}
