//! Te/ta formation for godan verbs.
//!
//! The conjunctive and plain past attach through a sound change chosen by the
//! final kana, not through the grade table: 買う → 買って, 読む → 読んで,
//! 書く → 書いて, 泳ぐ → 泳いで, 話す → 話して.

use crate::error::MorphologyError;
use crate::types::VerbEntry;

use super::irregular::is_iku;
use super::rows::Row;
use super::stem::{GodanVerb, Stem};

/// Te and ta endings of one sound-change group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeTa {
    pub te: &'static str,
    pub ta: &'static str,
}

impl TeTa {
    pub fn pick(self, past: bool) -> &'static str {
        if past {
            self.ta
        } else {
            self.te
        }
    }
}

/// Geminate: う / つ / る.
pub const SOKUON: TeTa = TeTa { te: "って", ta: "った" };
/// Nasal: む / ぶ / ぬ.
pub const HATSUON: TeTa = TeTa { te: "んで", ta: "んだ" };
pub const I_ONBIN: TeTa = TeTa { te: "いて", ta: "いた" };
pub const I_ONBIN_VOICED: TeTa = TeTa { te: "いで", ta: "いだ" };
pub const SHI: TeTa = TeTa { te: "して", ta: "した" };
/// Ichidan and irregular stems take the bare endings.
pub const PLAIN: TeTa = TeTa { te: "て", ta: "た" };

pub fn group(row: Row) -> TeTa {
    match row {
        Row::U | Row::T | Row::R => SOKUON,
        Row::M | Row::B | Row::N => HATSUON,
        Row::K => I_ONBIN,
        Row::G => I_ONBIN_VOICED,
        Row::S => SHI,
    }
}

/// Godan te (`past == false`) or ta form of `entry`.
pub fn godan_te_ta(entry: &VerbEntry, past: bool) -> Result<Stem, MorphologyError> {
    let verb = GodanVerb::new(entry)?;
    let endings = if is_iku(entry) {
        SOKUON
    } else {
        group(verb.row)
    };
    Ok(verb.base.join(endings.pick(past)))
}
