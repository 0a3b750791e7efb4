use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbClass {
    /// Stem never changes; dictionary form ends in る.
    Ichidan,
    /// Final kana cycles through one consonant row.
    Godan,
    /// する, 来る, and compounds built on them.
    Irregular,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbEntry {
    /// Dictionary form in mixed script, e.g. `書く`.
    pub surface: String,
    /// Full hiragana reading of the same form, e.g. `かく`.
    pub reading: String,
    pub class: VerbClass,
    #[serde(default)]
    pub gloss: String,
}

impl VerbEntry {
    pub fn new(surface: &str, reading: &str, class: VerbClass) -> Self {
        Self {
            surface: surface.to_string(),
            reading: reading.to_string(),
            class,
            gloss: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjectiveClass {
    #[serde(rename = "i")]
    I,
    #[serde(rename = "na")]
    Na,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjectiveEntry {
    pub surface: String,
    pub reading: String,
    pub class: AdjectiveClass,
    #[serde(default)]
    pub gloss: String,
}

impl AdjectiveEntry {
    pub fn new(surface: &str, reading: &str, class: AdjectiveClass) -> Self {
        Self {
            surface: surface.to_string(),
            reading: reading.to_string(),
            class,
            gloss: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    #[default]
    Plain,
    Polite,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    #[default]
    Present,
    Past,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    #[default]
    Affirmative,
    Negative,
}

impl fmt::Display for Politeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Politeness::Plain => "plain",
            Politeness::Polite => "polite",
        })
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tense::Present => "present",
            Tense::Past => "past",
        })
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Polarity::Affirmative => "affirmative",
            Polarity::Negative => "negative",
        })
    }
}

const POLITENESS: [Politeness; 2] = [Politeness::Plain, Politeness::Polite];
const TENSES: [Tense; 2] = [Tense::Present, Tense::Past];
const POLARITIES: [Polarity; 2] = [Polarity::Affirmative, Polarity::Negative];

/// Requested verb form. Each kind carries only the categories it inflects
/// for, so e.g. a negative te-form cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VerbFormSpec {
    /// Continuative stem + ます family.
    Masu {
        #[serde(default)]
        tense: Tense,
        #[serde(default)]
        polarity: Polarity,
    },
    Te,
    Ta,
    /// Plain present negative (ない).
    Negative,
    Volitional {
        #[serde(default)]
        politeness: Politeness,
    },
    Potential {
        #[serde(default)]
        politeness: Politeness,
    },
    Passive {
        #[serde(default)]
        politeness: Politeness,
    },
    Causative {
        #[serde(default)]
        politeness: Politeness,
    },
}

impl VerbFormSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            VerbFormSpec::Masu { .. } => "masu",
            VerbFormSpec::Te => "te",
            VerbFormSpec::Ta => "ta",
            VerbFormSpec::Negative => "negative",
            VerbFormSpec::Volitional { .. } => "volitional",
            VerbFormSpec::Potential { .. } => "potential",
            VerbFormSpec::Passive { .. } => "passive",
            VerbFormSpec::Causative { .. } => "causative",
        }
    }

    /// Every constructible verb spec, in paradigm-table order.
    pub fn all() -> Vec<VerbFormSpec> {
        let mut specs = Vec::with_capacity(15);
        for tense in TENSES {
            for polarity in POLARITIES {
                specs.push(VerbFormSpec::Masu { tense, polarity });
            }
        }
        specs.extend([VerbFormSpec::Te, VerbFormSpec::Ta, VerbFormSpec::Negative]);
        for politeness in POLITENESS {
            specs.push(VerbFormSpec::Volitional { politeness });
        }
        for politeness in POLITENESS {
            specs.push(VerbFormSpec::Potential { politeness });
        }
        for politeness in POLITENESS {
            specs.push(VerbFormSpec::Passive { politeness });
        }
        for politeness in POLITENESS {
            specs.push(VerbFormSpec::Causative { politeness });
        }
        specs
    }
}

impl fmt::Display for VerbFormSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerbFormSpec::Masu { tense, polarity } => {
                write!(f, "{} ({tense}, {polarity})", self.kind())
            }
            VerbFormSpec::Volitional { politeness }
            | VerbFormSpec::Potential { politeness }
            | VerbFormSpec::Passive { politeness }
            | VerbFormSpec::Causative { politeness } => {
                write!(f, "{} ({politeness})", self.kind())
            }
            VerbFormSpec::Te | VerbFormSpec::Ta | VerbFormSpec::Negative => {
                f.write_str(self.kind())
            }
        }
    }
}

/// Requested adjective form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdjFormSpec {
    Declarative {
        #[serde(default)]
        politeness: Politeness,
        #[serde(default)]
        tense: Tense,
        #[serde(default)]
        polarity: Polarity,
    },
    Te,
    Adverbial,
}

impl AdjFormSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            AdjFormSpec::Declarative { .. } => "declarative",
            AdjFormSpec::Te => "te",
            AdjFormSpec::Adverbial => "adverbial",
        }
    }

    pub fn all() -> Vec<AdjFormSpec> {
        let mut specs = Vec::with_capacity(10);
        for politeness in POLITENESS {
            for tense in TENSES {
                for polarity in POLARITIES {
                    specs.push(AdjFormSpec::Declarative {
                        politeness,
                        tense,
                        polarity,
                    });
                }
            }
        }
        specs.extend([AdjFormSpec::Te, AdjFormSpec::Adverbial]);
        specs
    }
}

impl fmt::Display for AdjFormSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdjFormSpec::Declarative {
                politeness,
                tense,
                polarity,
            } => write!(f, "{} ({politeness}, {tense}, {polarity})", self.kind()),
            AdjFormSpec::Te | AdjFormSpec::Adverbial => f.write_str(self.kind()),
        }
    }
}

/// Output of a single conjugation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationResult {
    pub surface: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
    /// Other renderings the language accepts for the same form.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternates: Vec<String>,
}

impl ConjugationResult {
    pub fn new(surface: String, reading: String) -> Self {
        Self {
            surface,
            reading: Some(reading),
            alternates: Vec::new(),
        }
    }

    pub fn with_alternates(mut self, alternates: Vec<String>) -> Self {
        self.alternates = alternates;
        self
    }
}
