use super::*;

fn pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

#[test]
fn every_pattern_has_sixteen_forms() {
    let c = Conjugations::new().unwrap();

    let labels = c.patterns().map(|p| p.label()).collect::<Vec<_>>();

    assert_eq!(
        labels,
        ["v5u", "v5k", "v5s", "v5t", "v5n", "v5m", "v5r", "v5g", "v5b", "v1"]
    );

    for pattern in c.patterns() {
        assert_eq!(pattern.len(), 16, "{}", pattern.label());
    }
}

#[test]
fn round_trip() {
    let c = Conjugations::new().unwrap();

    for pattern in c.patterns() {
        for (informal, polite) in pattern.iter() {
            assert_eq!(pattern.get(Direction::Polite, informal), Some(polite));
            assert_eq!(pattern.get(Direction::Informal, polite), Some(informal));
        }
    }
}

#[test]
fn godan_u_forms() {
    let c = Conjugations::new().unwrap();
    let u = c.pattern("v5u").unwrap();

    assert_eq!(u.group(), Group::U);
    assert_eq!(u.get(Direction::Polite, "う"), Some("い ま す"));
    assert_eq!(u.get(Direction::Polite, "わ な い"), Some("い ま せ ん"));
    assert_eq!(u.get(Direction::Polite, "っ た"), Some("い ま し た"));
    assert_eq!(
        u.get(Direction::Polite, "わ な かっ た"),
        Some("い ま せ ん で し た")
    );
    assert_eq!(
        u.get(Direction::Polite, "わ せ な かっ た"),
        Some("わ せ ま せ ん で し た")
    );
    assert_eq!(
        u.get(Direction::Polite, "わ せ られ な かっ た"),
        Some("わ せ られ ま せ ん で し た")
    );
    assert_eq!(u.get(Direction::Informal, "わ れ ま す"), Some("わ れ る"));
}

#[test]
fn past_endings() {
    let c = Conjugations::new().unwrap();

    let expected = [
        ("v5k", "い た", "き ま し た"),
        ("v5s", "し た", "し ま し た"),
        ("v5t", "っ た", "ち ま し た"),
        ("v5n", "ん だ", "に ま し た"),
        ("v5m", "ん だ", "み ま し た"),
        ("v5r", "っ た", "り ま し た"),
        ("v5g", "い だ", "ぎ ま し た"),
        ("v5b", "ん だ", "び ま し た"),
        ("v1", "た", "ま し た"),
    ];

    for (label, informal, polite) in expected {
        let pattern = c.pattern(label).unwrap();
        assert_eq!(pattern.get(Direction::Polite, informal), Some(polite), "{label}");
    }
}

#[test]
fn ichidan_forms() {
    let c = Conjugations::new().unwrap();
    let v1 = c.pattern("v1").unwrap();

    assert_eq!(v1.group(), Group::Ichidan);
    assert_eq!(v1.get(Direction::Polite, "る"), Some("ま す"));
    assert_eq!(v1.get(Direction::Polite, "な い"), Some("ま せ ん"));
    assert_eq!(v1.get(Direction::Polite, "れ る"), Some("れ ま す"));
    assert_eq!(v1.get(Direction::Polite, "せ られ た"), Some("せ られ ま し た"));
    assert_eq!(v1.get(Direction::Informal, "ま せ ん で し た"), Some("な かっ た"));
}

#[test]
fn suffix_index_last_pattern_wins() {
    let c = Conjugations::new().unwrap();

    assert_eq!(c.suffix_group(Direction::Polite, "わ な い"), Some(Group::U));
    // Shared by v5u, v5t and v5r.
    assert_eq!(c.suffix_group(Direction::Polite, "っ た"), Some(Group::R));
    // Shared by v5n, v5m and v5b.
    assert_eq!(c.suffix_group(Direction::Polite, "ん だ"), Some(Group::B));
    // Shared by v5r and v1.
    assert_eq!(c.suffix_group(Direction::Polite, "る"), Some(Group::Ichidan));
    assert_eq!(c.suffix_group(Direction::Informal, "き ま す"), Some(Group::K));
    assert_eq!(c.suffix_group(Direction::Informal, "わ な い"), None);
    assert_eq!(c.suffix_group(Direction::Polite, "い ま す"), None);
}

#[test]
fn reject_lossy_reverse() {
    let error = Pattern::new(
        "v5k",
        pairs(&[("く", "き ま す"), ("か な い", "き ま す")]),
    )
    .unwrap_err();

    assert_eq!(
        error,
        ConjugationError::NotInjective {
            label: "v5k".into(),
            polite: "き ま す".into(),
            first: "く".into(),
            second: "か な い".into(),
        }
    );
}

#[test]
fn reject_duplicate_form() {
    let error = Pattern::new(
        "v5u",
        pairs(&[("う", "い ま す"), ("う", "い ま す")]),
    )
    .unwrap_err();

    assert_eq!(
        error,
        ConjugationError::DuplicateForm {
            label: "v5u".into(),
            informal: "う".into(),
        }
    );
}

#[test]
fn reject_unknown_group() {
    assert!(matches!(
        Pattern::new("vs-i", pairs(&[("る", "ま す")])),
        Err(ConjugationError::UnknownGroup { .. })
    ));
}
