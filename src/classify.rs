//! Infer a conjugation group from the inflectional suffix of a verb.

use crate::conjugation::Conjugations;
use crate::format::Direction;
use crate::group::Group;

/// Classify the space separated `suffix` of a verb which is about to be
/// converted towards `direction`.
///
/// An exact match in the suffix index takes precedence. Otherwise the first
/// suffix token is tested against the characteristic kana of each group in
/// [`Group::PRIORITY`] order.
pub fn classify(conjugations: &Conjugations, suffix: &str, direction: Direction) -> Option<Group> {
    if suffix.is_empty() {
        return None;
    }

    if let Some(group) = conjugations.suffix_group(direction, suffix) {
        return Some(group);
    }

    let first = suffix.split_whitespace().next()?;

    Group::PRIORITY
        .into_iter()
        .find(|group| group.kana().contains(&first))
}
