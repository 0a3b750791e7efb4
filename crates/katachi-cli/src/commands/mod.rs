pub mod conjugate_ops;
pub mod lexicon_ops;

use clap::ValueEnum;

use katachi_core::{
    AdjFormSpec, AdjectiveClass, Polarity, Politeness, Tense, VerbClass, VerbFormSpec,
};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
pub(crate) use die;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VerbClassArg {
    Ichidan,
    Godan,
    Irregular,
}

impl From<VerbClassArg> for VerbClass {
    fn from(arg: VerbClassArg) -> Self {
        match arg {
            VerbClassArg::Ichidan => VerbClass::Ichidan,
            VerbClassArg::Godan => VerbClass::Godan,
            VerbClassArg::Irregular => VerbClass::Irregular,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AdjClassArg {
    I,
    Na,
}

impl From<AdjClassArg> for AdjectiveClass {
    fn from(arg: AdjClassArg) -> Self {
        match arg {
            AdjClassArg::I => AdjectiveClass::I,
            AdjClassArg::Na => AdjectiveClass::Na,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VerbKindArg {
    Masu,
    Te,
    Ta,
    Negative,
    Volitional,
    Potential,
    Passive,
    Causative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AdjKindArg {
    Declarative,
    Te,
    Adverbial,
}

/// `--polite` / `--past` / `--negative` as typed categories. Kinds that do not
/// inflect for a category ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inflection {
    pub politeness: Politeness,
    pub tense: Tense,
    pub polarity: Polarity,
}

impl Inflection {
    pub fn from_flags(polite: bool, past: bool, negative: bool) -> Self {
        Self {
            politeness: if polite {
                Politeness::Polite
            } else {
                Politeness::Plain
            },
            tense: if past { Tense::Past } else { Tense::Present },
            polarity: if negative {
                Polarity::Negative
            } else {
                Polarity::Affirmative
            },
        }
    }

    pub fn verb_spec(self, kind: VerbKindArg) -> VerbFormSpec {
        let politeness = self.politeness;
        match kind {
            VerbKindArg::Masu => VerbFormSpec::Masu {
                tense: self.tense,
                polarity: self.polarity,
            },
            VerbKindArg::Te => VerbFormSpec::Te,
            VerbKindArg::Ta => VerbFormSpec::Ta,
            VerbKindArg::Negative => VerbFormSpec::Negative,
            VerbKindArg::Volitional => VerbFormSpec::Volitional { politeness },
            VerbKindArg::Potential => VerbFormSpec::Potential { politeness },
            VerbKindArg::Passive => VerbFormSpec::Passive { politeness },
            VerbKindArg::Causative => VerbFormSpec::Causative { politeness },
        }
    }

    pub fn adj_spec(self, kind: AdjKindArg) -> AdjFormSpec {
        match kind {
            AdjKindArg::Declarative => AdjFormSpec::Declarative {
                politeness: self.politeness,
                tense: self.tense,
                polarity: self.polarity,
            },
            AdjKindArg::Te => AdjFormSpec::Te,
            AdjKindArg::Adverbial => AdjFormSpec::Adverbial,
        }
    }
}
