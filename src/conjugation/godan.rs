//! Kana rows used to generate the conjugation tables.

#[derive(Debug, Clone, Copy)]
pub(crate) struct Row {
    /// Pattern label, such as `v5u`.
    pub(super) label: &'static str,
    /// Negative / passive / causative stem ending.
    pub(super) a: &'static str,
    /// Polite stem ending.
    pub(super) i: &'static str,
    /// Dictionary form ending.
    pub(super) u: &'static str,
    /// Past tense ending, as space separated tokens.
    pub(super) past: &'static str,
}

/// The U godan row, e.g. 言う.
pub(super) static U: Row = Row {
    label: "v5u",
    a: "わ",
    i: "い",
    u: "う",
    past: "っ た",
};

/// The KU godan row, e.g. 開く.
pub(super) static KU: Row = Row {
    label: "v5k",
    a: "か",
    i: "き",
    u: "く",
    past: "い た",
};

/// The SU godan row, e.g. 話す.
pub(super) static SU: Row = Row {
    label: "v5s",
    a: "さ",
    i: "し",
    u: "す",
    past: "し た",
};

/// The TSU godan row, e.g. 持つ.
pub(super) static TSU: Row = Row {
    label: "v5t",
    a: "た",
    i: "ち",
    u: "つ",
    past: "っ た",
};

/// The NU godan row, e.g. 死ぬ.
pub(super) static NU: Row = Row {
    label: "v5n",
    a: "な",
    i: "に",
    u: "ぬ",
    past: "ん だ",
};

/// The MU godan row, e.g. 読む.
pub(super) static MU: Row = Row {
    label: "v5m",
    a: "ま",
    i: "み",
    u: "む",
    past: "ん だ",
};

/// The RU godan row, e.g. 走る.
pub(super) static RU: Row = Row {
    label: "v5r",
    a: "ら",
    i: "り",
    u: "る",
    past: "っ た",
};

/// The GU godan row, e.g. 泳ぐ.
pub(super) static GU: Row = Row {
    label: "v5g",
    a: "が",
    i: "ぎ",
    u: "ぐ",
    past: "い だ",
};

/// The BU godan row, e.g. 呼ぶ.
pub(super) static BU: Row = Row {
    label: "v5b",
    a: "ば",
    i: "び",
    u: "ぶ",
    past: "ん だ",
};

/// Ichidan verbs, e.g. 食べる. The tagger splits the stem off before any
/// ending so the a and i endings are empty.
pub(super) static ICHIDAN: Row = Row {
    label: "v1",
    a: "",
    i: "",
    u: "る",
    past: "た",
};

/// All rows in declaration order. Later rows take precedence when suffixes
/// are flattened into a group index.
pub(super) static ROWS: [&Row; 10] = [&U, &KU, &SU, &TSU, &NU, &MU, &RU, &GU, &BU, &ICHIDAN];
