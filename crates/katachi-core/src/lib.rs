//! Rule-based conjugation of Japanese verbs and adjectives.
//!
//! A caller hands a dictionary-form entry (tagged with its conjugation class
//! and kana reading) together with a form specification to
//! [`conjugate_verb`] or [`conjugate_adjective`] and receives the inflected
//! surface, its reading, and any accepted alternates. Every call is a pure
//! function of its inputs.

pub mod adjective;
mod error;
pub mod lexicon;
mod types;
pub mod unicode;
pub mod verb;

pub use adjective::{conjugate_adjective, conjugate_adjective_all};
pub use error::MorphologyError;
pub use types::{
    AdjFormSpec, AdjectiveClass, AdjectiveEntry, ConjugationResult, Polarity, Politeness, Tense,
    VerbClass, VerbEntry, VerbFormSpec,
};
pub use verb::{conjugate_verb, conjugate_verb_all};
