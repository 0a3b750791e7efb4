//! Verb conjugation.
//!
//! `conjugate_verb` resolves the entry into a class paradigm (irregulars are
//! intercepted before the regular rules), derives the stem the requested kind
//! needs, and attaches the suffix.

pub mod euphony;
pub mod irregular;
pub mod rows;
pub mod stem;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span, warn};

use crate::error::MorphologyError;
use crate::types::{
    ConjugationResult, Polarity, Politeness, Tense, VerbClass, VerbEntry, VerbFormSpec,
};

use euphony::PLAIN;
use irregular::{is_aru, IrregularVerb};
use rows::Grade;
use stem::{ichidan_stem, GodanVerb, Stem};

/// Conjugate `entry` into the form described by `spec`.
///
/// Malformed entries and forms the verb lacks are logged and returned as
/// errors; no surface is ever guessed.
pub fn conjugate_verb(
    entry: &VerbEntry,
    spec: &VerbFormSpec,
) -> Result<ConjugationResult, MorphologyError> {
    let _span = debug_span!("conjugate_verb", surface = %entry.surface, kind = spec.kind()).entered();
    synthesize(entry, spec)
        .map(Stem::into_result)
        .inspect_err(|err| {
            if err.is_lexical_gap() {
                debug!(surface = %entry.surface, %spec, "form not available");
            } else {
                warn!(
                    surface = %entry.surface,
                    reading = %entry.reading,
                    class = ?entry.class,
                    %spec,
                    %err,
                    "verb conjugation failed"
                );
            }
        })
}

/// Every form in [`VerbFormSpec::all`] order, each with its own outcome.
pub fn conjugate_verb_all(
    entry: &VerbEntry,
) -> Vec<(VerbFormSpec, Result<ConjugationResult, MorphologyError>)> {
    VerbFormSpec::all()
        .into_iter()
        .map(|spec| {
            let result = conjugate_verb(entry, &spec);
            (spec, result)
        })
        .collect()
}

fn masu_suffix(tense: Tense, polarity: Polarity) -> &'static str {
    match (tense, polarity) {
        (Tense::Present, Polarity::Affirmative) => "ます",
        (Tense::Present, Polarity::Negative) => "ません",
        (Tense::Past, Polarity::Affirmative) => "ました",
        (Tense::Past, Polarity::Negative) => "ませんでした",
    }
}

fn synthesize(entry: &VerbEntry, spec: &VerbFormSpec) -> Result<Stem, MorphologyError> {
    let paradigm = Paradigm::resolve(entry)?;
    let unsupported = || MorphologyError::unsupported(&entry.surface, &entry.reading, spec.kind());

    match *spec {
        VerbFormSpec::Masu { tense, polarity } => {
            Ok(paradigm.continuative().join(masu_suffix(tense, polarity)))
        }
        VerbFormSpec::Te => paradigm.te_ta(entry, false),
        VerbFormSpec::Ta => paradigm.te_ta(entry, true),
        VerbFormSpec::Negative => Ok(paradigm.negative(entry)),
        VerbFormSpec::Volitional {
            politeness: Politeness::Plain,
        } => Ok(paradigm.volitional()),
        VerbFormSpec::Volitional {
            politeness: Politeness::Polite,
        } => Ok(paradigm.continuative().join("ましょう")),
        VerbFormSpec::Potential { politeness } => {
            let plain = paradigm.potential(entry).ok_or_else(unsupported)?;
            polite_ru(plain, politeness).ok_or_else(unsupported)
        }
        VerbFormSpec::Passive { politeness } => {
            polite_ru(paradigm.passive(), politeness).ok_or_else(unsupported)
        }
        VerbFormSpec::Causative { politeness } => {
            polite_ru(paradigm.causative(), politeness).ok_or_else(unsupported)
        }
    }
}

/// Polite forms of the る-final derived verbs (potential, passive,
/// causative) swap the trailing る for ます: 書ける → 書けます. Each derived
/// form is itself ichidan; this is not a rule for arbitrary verbs.
fn polite_ru(plain: Stem, politeness: Politeness) -> Option<Stem> {
    match politeness {
        Politeness::Plain => Some(plain),
        Politeness::Polite => Some(plain.strip_suffix("る")?.join("ます")),
    }
}

/// Class-specific stem source, resolved once per call.
#[derive(Debug)]
enum Paradigm {
    Ichidan(Stem),
    Godan(GodanVerb),
    Irregular(IrregularVerb),
}

impl Paradigm {
    fn resolve(entry: &VerbEntry) -> Result<Self, MorphologyError> {
        match entry.class {
            VerbClass::Ichidan => ichidan_stem(entry).map(Paradigm::Ichidan),
            VerbClass::Godan => GodanVerb::new(entry).map(Paradigm::Godan),
            VerbClass::Irregular => IrregularVerb::resolve(entry).map(Paradigm::Irregular),
        }
    }

    fn continuative(&self) -> Stem {
        match self {
            Paradigm::Ichidan(stem) => stem.clone(),
            Paradigm::Godan(verb) => verb.stem(Grade::I),
            Paradigm::Irregular(verb) => verb.continuative(),
        }
    }

    fn te_ta(&self, entry: &VerbEntry, past: bool) -> Result<Stem, MorphologyError> {
        match self {
            Paradigm::Ichidan(stem) => Ok(stem.join(PLAIN.pick(past))),
            Paradigm::Godan(_) => euphony::godan_te_ta(entry, past),
            Paradigm::Irregular(verb) => Ok(verb.te_stem().join(PLAIN.pick(past))),
        }
    }

    fn negative(&self, entry: &VerbEntry) -> Stem {
        match self {
            Paradigm::Ichidan(stem) => stem.join("ない"),
            Paradigm::Godan(_) if is_aru(entry) => Stem::new("ない", "ない"),
            Paradigm::Godan(verb) => verb.stem(Grade::A).join("ない"),
            Paradigm::Irregular(verb) => verb.negative_stem().join("ない"),
        }
    }

    fn volitional(&self) -> Stem {
        match self {
            Paradigm::Ichidan(stem) => stem.join("よう"),
            Paradigm::Godan(verb) => verb.stem(Grade::O).join("う"),
            Paradigm::Irregular(verb) => verb.volitional(),
        }
    }

    /// `None` when the verb has no potential form.
    fn potential(&self, entry: &VerbEntry) -> Option<Stem> {
        match self {
            Paradigm::Ichidan(stem) => Some(stem.join("られる")),
            Paradigm::Godan(_) if is_aru(entry) => None,
            Paradigm::Godan(verb) => Some(verb.stem(Grade::E).join("る")),
            Paradigm::Irregular(verb) => Some(verb.potential()),
        }
    }

    /// Ichidan passive shares its surface with the potential.
    fn passive(&self) -> Stem {
        match self {
            Paradigm::Ichidan(stem) => stem.join("られる"),
            Paradigm::Godan(verb) => verb.stem(Grade::A).join("れる"),
            Paradigm::Irregular(verb) => verb.passive(),
        }
    }

    fn causative(&self) -> Stem {
        match self {
            Paradigm::Ichidan(stem) => stem.join("させる"),
            Paradigm::Godan(verb) => verb.stem(Grade::A).join("せる"),
            Paradigm::Irregular(verb) => verb.causative(),
        }
    }
}
