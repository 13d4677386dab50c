//! Generators for the enumerated informal to polite forms.

use super::godan::Row;

/// Voice stems which follow the a-row ending: passive, causative and
/// causative-passive.
const VOICES: [&str; 3] = ["れ", "せ", "せ られ"];

/// Join non-empty tokens with a single space.
pub(super) fn join(parts: &[&str]) -> String {
    let mut out = String::new();

    for part in parts.iter().filter(|p| !p.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }

        out.push_str(part);
    }

    out
}

/// Generate every informal to polite suffix pair for the given row.
#[rustfmt::skip]
pub(super) fn godan(row: &Row, mut r: impl FnMut(String, String)) {
    let &Row { a, i, u, past, .. } = row;

    r(join(&[u]), join(&[i, "ま す"]));
    r(join(&[a, "な い"]), join(&[i, "ま せ ん"]));
    r(join(&[past]), join(&[i, "ま し た"]));
    r(join(&[a, "な かっ た"]), join(&[i, "ま せ ん で し た"]));

    for voice in VOICES {
        r(join(&[a, voice, "る"]), join(&[a, voice, "ま す"]));
        r(join(&[a, voice, "な い"]), join(&[a, voice, "ま せ ん"]));
        r(join(&[a, voice, "た"]), join(&[a, voice, "ま し た"]));
        r(join(&[a, voice, "な かっ た"]), join(&[a, voice, "ま せ ん で し た"]));
    }
}
