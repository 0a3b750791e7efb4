use std::io::Write;

use super::*;
use crate::types::{AdjectiveClass, VerbClass};

#[test]
fn parse_default_toml() {
    let lexicon = parse_lexicon_toml(DEFAULT_LEXICON_TOML).unwrap();
    assert!(lexicon.verbs.len() >= 20, "got {} verbs", lexicon.verbs.len());
    assert!(lexicon.adjectives.len() >= 8);
    assert!(lexicon
        .verbs
        .iter()
        .any(|v| v.class == VerbClass::Irregular));
    assert!(lexicon
        .adjectives
        .iter()
        .any(|a| a.class == AdjectiveClass::Na));
}

#[test]
fn default_lexicon_singleton() {
    let lexicon = default_lexicon();
    let kaku = lexicon.find_verb("書く").unwrap();
    assert_eq!(kaku.reading, "かく");
    assert_eq!(kaku.gloss, "to write");
    assert!(std::ptr::eq(lexicon, default_lexicon()));
}

#[test]
fn find_by_surface_or_reading() {
    let lexicon = parse_lexicon_toml(DEFAULT_LEXICON_TOML).unwrap();
    assert_eq!(lexicon.find_verb("たべる").unwrap().surface, "食べる");
    assert_eq!(lexicon.find_adjective("静か").unwrap().reading, "しずか");
    assert!(lexicon.find_verb("しずか").is_none());
    assert!(lexicon.find_adjective("ない").is_none());
}

#[test]
fn parse_minimal_toml() {
    let toml = r#"
[[verbs]]
surface = "書く"
reading = "かく"
class = "godan"
"#;
    let lexicon = parse_lexicon_toml(toml).unwrap();
    assert_eq!(lexicon.len(), 1);
    assert!(lexicon.adjectives.is_empty());
    assert!(lexicon.verbs[0].gloss.is_empty());
}

#[test]
fn lexical_gaps_are_accepted() {
    let toml = r#"
[[verbs]]
surface = "ある"
reading = "ある"
class = "godan"
"#;
    assert!(parse_lexicon_toml(toml).is_ok());
}

#[test]
fn error_empty() {
    let err = parse_lexicon_toml("").unwrap_err();
    assert!(matches!(err, LexiconError::Empty));
}

#[test]
fn error_invalid_toml() {
    let err = parse_lexicon_toml("not valid toml {{{").unwrap_err();
    assert!(matches!(err, LexiconError::Parse(_)));
}

#[test]
fn error_unknown_class() {
    let toml = r#"
[[verbs]]
surface = "書く"
reading = "かく"
class = "yodan"
"#;
    let err = parse_lexicon_toml(toml).unwrap_err();
    assert!(matches!(err, LexiconError::Parse(_)));
}

#[test]
fn error_katakana_reading() {
    let toml = r#"
[[verbs]]
surface = "書く"
reading = "カク"
class = "godan"
"#;
    let err = parse_lexicon_toml(toml).unwrap_err();
    assert!(matches!(err, LexiconError::InvalidReading { .. }));
    assert!(err.to_string().contains("カク"));
}

#[test]
fn error_empty_surface() {
    let toml = r#"
[[adjectives]]
surface = ""
reading = "たかい"
class = "i"
"#;
    let err = parse_lexicon_toml(toml).unwrap_err();
    assert!(matches!(err, LexiconError::EmptySurface(_)));
}

#[test]
fn error_malformed_entry() {
    let toml = r#"
[[verbs]]
surface = "食べ"
reading = "たべ"
class = "ichidan"
"#;
    let err = parse_lexicon_toml(toml).unwrap_err();
    match err {
        LexiconError::Entry { surface, source } => {
            assert_eq!(surface, "食べ");
            assert!(matches!(source, MorphologyError::MalformedEntry { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn error_unknown_row() {
    let toml = r#"
[[verbs]]
surface = "書か"
reading = "かか"
class = "godan"
"#;
    let err = parse_lexicon_toml(toml).unwrap_err();
    assert!(err.to_string().contains("書か"));
    assert!(matches!(
        err,
        LexiconError::Entry {
            source: MorphologyError::UnknownRow { .. },
            ..
        }
    ));
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[[adjectives]]\nsurface = \"静か\"\nreading = \"しずか\"\nclass = \"na\"\ngloss = \"quiet\""
    )
    .unwrap();
    let lexicon = Lexicon::load(file.path()).unwrap();
    assert_eq!(lexicon.adjectives[0].gloss, "quiet");
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Lexicon::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, LexiconError::Io(_)));
}

#[test]
fn every_default_entry_conjugates() {
    let lexicon = default_lexicon();
    for verb in &lexicon.verbs {
        for (spec, result) in crate::conjugate_verb_all(verb) {
            match result {
                Ok(r) => assert!(!r.surface.is_empty(), "{} {spec}", verb.surface),
                Err(e) => assert!(e.is_lexical_gap(), "{} {spec}: {e}", verb.surface),
            }
        }
    }
    for adj in &lexicon.adjectives {
        for (spec, result) in crate::conjugate_adjective_all(adj) {
            assert!(result.is_ok(), "{} {spec}", adj.surface);
        }
    }
}

#[test]
fn init_custom_rejects_invalid_toml() {
    // Validation runs before the singleton is touched.
    let err = init_custom("[[verbs]]\nsurface = 1\n".to_string()).unwrap_err();
    assert!(matches!(err, LexiconError::Parse(_)));
}

#[test]
fn bare_ru_ichidan_rejected_at_load() {
    let toml = r#"
[[verbs]]
surface = "る"
reading = "る"
class = "ichidan"
"#;
    let err = parse_lexicon_toml(toml).unwrap_err();
    assert!(matches!(
        err,
        LexiconError::Entry {
            source: MorphologyError::MalformedEntry { .. },
            ..
        }
    ));
}

#[test]
fn public_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Lexicon>();
    assert_send_sync::<LexiconError>();
    assert_send_sync::<MorphologyError>();
    assert_send_sync::<crate::VerbEntry>();
    assert_send_sync::<crate::AdjectiveEntry>();
    assert_send_sync::<crate::VerbFormSpec>();
    assert_send_sync::<crate::AdjFormSpec>();
    assert_send_sync::<crate::ConjugationResult>();
    assert_send_sync::<&'static Lexicon>();
}
