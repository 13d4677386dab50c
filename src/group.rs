use core::fmt;

use fixed_map::Key;

/// A consonant-stem conjugation group, or ichidan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Key)]
pub enum Group {
    U,
    K,
    S,
    T,
    N,
    M,
    R,
    G,
    B,
    Ichidan,
}

impl Group {
    pub const ALL: [Group; 10] = [
        Group::U,
        Group::K,
        Group::S,
        Group::T,
        Group::N,
        Group::M,
        Group::R,
        Group::G,
        Group::B,
        Group::Ichidan,
    ];

    /// Order in which groups are tested when a suffix has to be classified
    /// by its first kana alone.
    pub const PRIORITY: [Group; 9] = [
        Group::U,
        Group::K,
        Group::S,
        Group::T,
        Group::N,
        Group::M,
        Group::R,
        Group::G,
        Group::B,
    ];

    /// The single letter code of the group, as used in pattern labels such as
    /// `v5k` or `v1`.
    pub fn code(&self) -> char {
        match self {
            Group::U => 'u',
            Group::K => 'k',
            Group::S => 's',
            Group::T => 't',
            Group::N => 'n',
            Group::M => 'm',
            Group::R => 'r',
            Group::G => 'g',
            Group::B => 'b',
            Group::Ichidan => '1',
        }
    }

    /// Parse a group from its single letter code.
    pub fn from_code(c: char) -> Option<Group> {
        Some(match c {
            'u' => Group::U,
            'k' => Group::K,
            's' => Group::S,
            't' => Group::T,
            'n' => Group::N,
            'm' => Group::M,
            'r' => Group::R,
            'g' => Group::G,
            'b' => Group::B,
            '1' => Group::Ichidan,
            _ => return None,
        })
    }

    /// Characteristic stem-final kana of the group.
    ///
    /// Ichidan verbs conjugate uniformly and have none.
    pub fn kana(&self) -> &'static [&'static str] {
        match self {
            Group::U => &["う", "い", "わ"],
            Group::K => &["く", "き", "か"],
            Group::S => &["す", "し", "さ"],
            Group::T => &["つ", "ち", "た"],
            Group::N => &["ぬ", "に", "な"],
            Group::M => &["む", "み", "ま"],
            Group::R => &["る", "り", "ら"],
            Group::G => &["ぐ", "ぎ", "が"],
            Group::B => &["ぶ", "び", "ば"],
            Group::Ichidan => &[],
        }
    }
}

impl fmt::Display for Group {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
