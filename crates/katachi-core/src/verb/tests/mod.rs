
use super::*;

pub(super) fn godan(surface: &str, reading: &str) -> VerbEntry {
    VerbEntry::new(surface, reading, VerbClass::Godan)
}

pub(super) fn ichidan(surface: &str, reading: &str) -> VerbEntry {
    VerbEntry::new(surface, reading, VerbClass::Ichidan)
}

pub(super) fn irregular(surface: &str, reading: &str) -> VerbEntry {
    VerbEntry::new(surface, reading, VerbClass::Irregular)
}

pub(super) fn masu(tense: Tense, polarity: Polarity) -> VerbFormSpec {
    VerbFormSpec::Masu { tense, polarity }
}

pub(super) const MASU: VerbFormSpec = VerbFormSpec::Masu {
    tense: Tense::Present,
    polarity: Polarity::Affirmative,
};

pub(super) fn plain(kind: fn(Politeness) -> VerbFormSpec) -> VerbFormSpec {
    kind(Politeness::Plain)
}

pub(super) fn polite(kind: fn(Politeness) -> VerbFormSpec) -> VerbFormSpec {
    kind(Politeness::Polite)
}

pub(super) fn potential(politeness: Politeness) -> VerbFormSpec {
    VerbFormSpec::Potential { politeness }
}

pub(super) fn passive(politeness: Politeness) -> VerbFormSpec {
    VerbFormSpec::Passive { politeness }
}

pub(super) fn causative(politeness: Politeness) -> VerbFormSpec {
    VerbFormSpec::Causative { politeness }
}

pub(super) fn volitional(politeness: Politeness) -> VerbFormSpec {
    VerbFormSpec::Volitional { politeness }
}

/// Surface of a successful conjugation.
pub(super) fn surface(entry: &VerbEntry, spec: VerbFormSpec) -> String {
    conjugate_verb(entry, &spec)
        .unwrap_or_else(|e| panic!("{} {spec}: {e}", entry.surface))
        .surface
}

/// Reading of a successful conjugation.
pub(super) fn reading(entry: &VerbEntry, spec: VerbFormSpec) -> String {
    conjugate_verb(entry, &spec)
        .unwrap_or_else(|e| panic!("{} {spec}: {e}", entry.surface))
        .reading
        .expect("verb results carry a reading")
}

#[test]
fn round_trip_scenarios() {
    let kaku = godan("書く", "かく");
    assert_eq!(surface(&kaku, VerbFormSpec::Te), "書いて");
    assert_eq!(surface(&kaku, masu(Tense::Past, Polarity::Negative)), "書きませんでした");
}

#[test]
fn identical_calls_give_identical_results() {
    let entries = [
        godan("書く", "かく"),
        ichidan("食べる", "たべる"),
        irregular("来る", "くる"),
    ];
    for entry in &entries {
        for spec in VerbFormSpec::all() {
            assert_eq!(conjugate_verb(entry, &spec), conjugate_verb(entry, &spec));
        }
    }
}

#[test]
fn conjugate_all_covers_every_spec() {
    let table = conjugate_verb_all(&godan("話す", "はなす"));
    assert_eq!(table.len(), VerbFormSpec::all().len());
    assert!(table.iter().all(|(_, r)| r.is_ok()));
    assert_eq!(table[0].0, MASU);
    assert_eq!(table[0].1.as_ref().unwrap().surface, "話します");
}

#[test]
fn errors_name_entry_and_kind() {
    let err = conjugate_verb(&godan("ある", "ある"), &plain(potential)).unwrap_err();
    assert_eq!(
        err,
        MorphologyError::UnsupportedForm {
            surface: "ある".to_string(),
            reading: "ある".to_string(),
            kind: "potential",
        }
    );
}

#[test]
fn malformed_entries_never_produce_a_surface() {
    let bad = [
        ichidan("食べ", "たべ"),
        godan("書か", "かか"),
        godan("書", "かく"),
        irregular("行く", "いく"),
    ];
    for entry in &bad {
        for spec in VerbFormSpec::all() {
            assert!(conjugate_verb(entry, &spec).is_err(), "{} {spec}", entry.surface);
        }
    }
}
