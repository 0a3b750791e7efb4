//! Irregular verbs and the lexical exceptions among regular ones.
//!
//! する and 来る have hand-specified stems for every grade. Compounds that end
//! in either verb (勉強する, 持って来る) inflect only that tail; the prefix is
//! carried verbatim.

use crate::error::MorphologyError;
use crate::types::VerbEntry;

use super::stem::Stem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrregularKind {
    Suru,
    Kuru,
}

/// An irregular verb split into its compound prefix and irregular tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrregularVerb {
    pub kind: IrregularKind,
    /// Compound prefix (`勉強` / `べんきょう`); empty for bare する / 来る.
    pub prefix: Stem,
    /// Whether the surface writes 来る with its kanji.
    kanji_root: bool,
}

impl IrregularVerb {
    pub fn resolve(entry: &VerbEntry) -> Result<Self, MorphologyError> {
        let (surface, reading) = (entry.surface.as_str(), entry.reading.as_str());

        if let Some(reading_prefix) = reading.strip_suffix("する") {
            let surface_prefix = surface.strip_suffix("する").ok_or_else(|| {
                MorphologyError::malformed(surface, reading, "surface of a する verb must end in する")
            })?;
            return Ok(IrregularVerb {
                kind: IrregularKind::Suru,
                prefix: Stem::new(surface_prefix, reading_prefix),
                kanji_root: false,
            });
        }

        if let Some(reading_prefix) = reading.strip_suffix("くる") {
            let (surface_prefix, kanji_root) = if let Some(p) = surface.strip_suffix("来る") {
                (p, true)
            } else if let Some(p) = surface.strip_suffix("くる") {
                (p, false)
            } else {
                return Err(MorphologyError::malformed(
                    surface,
                    reading,
                    "surface of a くる verb must end in 来る or くる",
                ));
            };
            return Ok(IrregularVerb {
                kind: IrregularKind::Kuru,
                prefix: Stem::new(surface_prefix, reading_prefix),
                kanji_root,
            });
        }

        Err(MorphologyError::malformed(
            surface,
            reading,
            "irregular verb must end in する or くる",
        ))
    }

    /// Prefix plus the root mora, read as `kana`. A kanji surface keeps 来
    /// whatever its reading (来ない is read こない).
    fn root(&self, kana: &str) -> Stem {
        let written = if self.kanji_root { "来" } else { kana };
        Stem::new(
            format!("{}{written}", self.prefix.surface),
            format!("{}{kana}", self.prefix.reading),
        )
    }

    /// Continuative (ます) stem: し / き.
    pub fn continuative(&self) -> Stem {
        match self.kind {
            IrregularKind::Suru => self.root("し"),
            IrregularKind::Kuru => self.root("き"),
        }
    }

    /// Stem before ない: し / こ.
    pub fn negative_stem(&self) -> Stem {
        match self.kind {
            IrregularKind::Suru => self.root("し"),
            IrregularKind::Kuru => self.root("こ"),
        }
    }

    /// Stem before て / た: し / き.
    pub fn te_stem(&self) -> Stem {
        self.continuative()
    }

    pub fn volitional(&self) -> Stem {
        self.negative_stem().join("よう")
    }

    pub fn potential(&self) -> Stem {
        match self.kind {
            IrregularKind::Suru => self.prefix.join("できる"),
            IrregularKind::Kuru => self.root("こ").join("られる"),
        }
    }

    pub fn passive(&self) -> Stem {
        match self.kind {
            IrregularKind::Suru => self.root("さ").join("れる"),
            IrregularKind::Kuru => self.root("こ").join("られる"),
        }
    }

    pub fn causative(&self) -> Stem {
        match self.kind {
            IrregularKind::Suru => self.root("さ").join("せる"),
            IrregularKind::Kuru => self.root("こ").join("させる"),
        }
    }
}

/// 行く takes って / った although it ends in く. Decided on the reading
/// alone, so a 行く entry read ゆく follows the regular く rule.
pub fn is_iku(entry: &VerbEntry) -> bool {
    entry.reading.ends_with("いく")
}

/// ある negates suppletively (ない) and has no potential form.
pub fn is_aru(entry: &VerbEntry) -> bool {
    entry.reading == "ある"
}
