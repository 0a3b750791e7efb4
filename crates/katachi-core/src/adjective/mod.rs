//! Adjective conjugation.
//!
//! い-adjectives inflect on their stem (高い → 高く…); な-adjectives take the
//! copula after the unmodified dictionary form (静か → 静かだ…).


use tracing::{debug, debug_span, warn};

use crate::error::MorphologyError;
use crate::types::{
    AdjFormSpec, AdjectiveClass, AdjectiveEntry, ConjugationResult, Polarity, Politeness, Tense,
};
use crate::verb::stem::Stem;

/// Conjugate `entry` into the form described by `spec`.
pub fn conjugate_adjective(
    entry: &AdjectiveEntry,
    spec: &AdjFormSpec,
) -> Result<ConjugationResult, MorphologyError> {
    let _span =
        debug_span!("conjugate_adjective", surface = %entry.surface, kind = spec.kind()).entered();
    synthesize(entry, spec).inspect_err(|err| {
        if err.is_lexical_gap() {
            debug!(surface = %entry.surface, %spec, "form not available");
        } else {
            warn!(
                surface = %entry.surface,
                reading = %entry.reading,
                class = ?entry.class,
                %spec,
                %err,
                "adjective conjugation failed"
            );
        }
    })
}

/// Every form in [`AdjFormSpec::all`] order, each with its own outcome.
pub fn conjugate_adjective_all(
    entry: &AdjectiveEntry,
) -> Vec<(AdjFormSpec, Result<ConjugationResult, MorphologyError>)> {
    AdjFormSpec::all()
        .into_iter()
        .map(|spec| {
            let result = conjugate_adjective(entry, &spec);
            (spec, result)
        })
        .collect()
}

fn synthesize(
    entry: &AdjectiveEntry,
    spec: &AdjFormSpec,
) -> Result<ConjugationResult, MorphologyError> {
    match entry.class {
        AdjectiveClass::I => {
            let adj = IAdjective::new(entry)?;
            Ok(match *spec {
                AdjFormSpec::Declarative {
                    politeness,
                    tense,
                    polarity,
                } => adj.declarative(politeness, tense, polarity),
                AdjFormSpec::Te => adj.stem.join("くて").into_result(),
                AdjFormSpec::Adverbial => adj.stem.join("く").into_result(),
            })
        }
        AdjectiveClass::Na => {
            let base = Stem::new(entry.surface.as_str(), entry.reading.as_str());
            if base.is_empty() {
                return Err(MorphologyError::malformed(
                    &entry.surface,
                    &entry.reading,
                    "な-adjective has an empty surface or reading",
                ));
            }
            Ok(match *spec {
                AdjFormSpec::Declarative {
                    politeness,
                    tense,
                    polarity,
                } => na_declarative(&base, politeness, tense, polarity),
                AdjFormSpec::Te => base.join("で").into_result(),
                AdjFormSpec::Adverbial => base.join("に").into_result(),
            })
        }
    }
}

/// An い-adjective split into its dictionary form and inflecting stem.
struct IAdjective {
    dictionary: Stem,
    stem: Stem,
}

impl IAdjective {
    /// Only an entry read exactly いい takes the よ stem. Compounds such as
    /// かっこいい are not recognized and drop their final い like any other
    /// い-adjective (かっこいくない).
    fn new(entry: &AdjectiveEntry) -> Result<Self, MorphologyError> {
        let dictionary = Stem::new(entry.surface.as_str(), entry.reading.as_str());
        // いい inflects on the stem of よい: よくない, よかった.
        if entry.reading == "いい" {
            let surface = if entry.surface.starts_with('良') { "良" } else { "よ" };
            return Ok(IAdjective {
                dictionary,
                stem: Stem::new(surface, "よ"),
            });
        }
        let stem = dictionary.strip_suffix("い").ok_or_else(|| {
            MorphologyError::malformed(&entry.surface, &entry.reading, "い-adjective must end in い")
        })?;
        if stem.is_empty() {
            return Err(MorphologyError::malformed(
                &entry.surface,
                &entry.reading,
                "い-adjective has no stem before い",
            ));
        }
        Ok(IAdjective { dictionary, stem })
    }

    fn declarative(
        &self,
        politeness: Politeness,
        tense: Tense,
        polarity: Polarity,
    ) -> ConjugationResult {
        let plain = match (tense, polarity) {
            (Tense::Present, Polarity::Affirmative) => self.dictionary.clone(),
            (Tense::Present, Polarity::Negative) => self.stem.join("くない"),
            (Tense::Past, Polarity::Affirmative) => self.stem.join("かった"),
            (Tense::Past, Polarity::Negative) => self.stem.join("くなかった"),
        };
        match politeness {
            Politeness::Plain => plain.into_result(),
            Politeness::Polite => {
                let alternates = match (tense, polarity) {
                    (Tense::Present, Polarity::Negative) => {
                        vec![self.stem.join("くありません").surface]
                    }
                    (Tense::Past, Polarity::Negative) => {
                        vec![self.stem.join("くありませんでした").surface]
                    }
                    _ => Vec::new(),
                };
                plain.join("です").into_result().with_alternates(alternates)
            }
        }
    }
}

fn na_declarative(
    base: &Stem,
    politeness: Politeness,
    tense: Tense,
    polarity: Polarity,
) -> ConjugationResult {
    let (primary, alternates): (&str, &[&str]) = match (politeness, tense, polarity) {
        (Politeness::Plain, Tense::Present, Polarity::Affirmative) => ("だ", &[]),
        (Politeness::Plain, Tense::Present, Polarity::Negative) => ("じゃない", &["ではない"]),
        (Politeness::Plain, Tense::Past, Polarity::Affirmative) => ("だった", &[]),
        (Politeness::Plain, Tense::Past, Polarity::Negative) => {
            ("じゃなかった", &["ではなかった"])
        }
        (Politeness::Polite, Tense::Present, Polarity::Affirmative) => ("です", &[]),
        (Politeness::Polite, Tense::Present, Polarity::Negative) => {
            ("じゃありません", &["じゃないです", "ではありません"])
        }
        (Politeness::Polite, Tense::Past, Polarity::Affirmative) => ("でした", &[]),
        (Politeness::Polite, Tense::Past, Polarity::Negative) => (
            "じゃありませんでした",
            &["じゃなかったです", "ではありませんでした"],
        ),
    };
    base.join(primary).into_result().with_alternates(
        alternates
            .iter()
            .map(|suffix| format!("{}{suffix}", base.surface))
            .collect(),
    )
}
