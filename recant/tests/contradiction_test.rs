use recant::models::{InconsistencyKind, MatchedPair, Segment, Statement};
use recant::intelligence::ContradictionClassifier;
use recant::processing::{Language, LanguageResources};

fn check(resources: &LanguageResources, content1: &str, content2: &str) -> bool {
    let segment = Segment::new("unused", 0.0, 1.0);
    let a = Statement::from_segment(content1, &segment);
    let b = Statement::from_segment(content2, &segment);
    ContradictionClassifier::new(resources).classify(&MatchedPair::new(&a, &b, 0.9))
        == Some(InconsistencyKind::Contradiction)
}

#[test]
fn test_contradiction_negation_markers_english() {
    let resources = LanguageResources::for_language(Language::English);

    let cases = vec![
        ("I was at home all day", "I was not at home all day", true),
        ("I saw the car", "I never saw the car", true),
        ("Somebody called me", "Nobody called me", true),
        ("I heard something", "I heard nothing", true),
        ("He had a key", "He had no key", true),
        ("Neither of them left", "Both of them left", true),
    ];

    for (content1, content2, expected) in cases {
        assert_eq!(
            check(&resources, content1, content2),
            expected,
            "Failed for: '{content1}' vs '{content2}'"
        );
    }
}

#[test]
fn test_contradiction_negation_markers_spanish() {
    let resources = LanguageResources::for_language(Language::Spanish);

    let cases = vec![
        ("Estuve en casa todo el día", "No estuve en casa todo el día", true),
        ("Vi a alguien en la puerta", "No vi a nadie en la puerta", true),
        ("Lo he visto antes", "Jamás lo he visto", true),
        ("Tenía una llave", "No tenía ninguna llave", true),
    ];

    for (content1, content2, expected) in cases {
        assert_eq!(
            check(&resources, content1, content2),
            expected,
            "Failed for: '{content1}' vs '{content2}'"
        );
    }
}

#[test]
fn test_no_contradiction_when_both_or_neither_negated() {
    let resources = LanguageResources::for_language(Language::English);

    let cases = vec![
        ("I saw him at the store", "I also saw him at the store", false),
        ("I was not there", "I was never there", false),
        ("Nobody came", "Nothing happened", false),
        ("The door was open", "The door was closed", false),
    ];

    for (content1, content2, expected) in cases {
        assert_eq!(
            check(&resources, content1, content2),
            expected,
            "Failed for: '{content1}' vs '{content2}'"
        );
    }
}

#[test]
fn test_markers_are_language_specific() {
    let spanish = LanguageResources::for_language(Language::Spanish);
    // "not" and "never" are not Spanish markers
    assert!(!check(&spanish, "I was there", "I was not there"));
    // "no" is a marker in both
    assert!(check(&spanish, "I was there", "No I was there"));
}

#[test]
fn test_classifier_is_case_insensitive() {
    let resources = LanguageResources::for_language(Language::English);
    assert!(check(&resources, "I WAS THERE", "I was NOT there"));
}
