//! Godan consonant rows and vowel grades.
//!
//! Each godan verb ends in a kana from exactly one of nine rows. Inflection
//! swaps that final kana for the same row's kana at another vowel grade
//! (書く → 書か / 書き / 書け / 書こ).

use crate::error::MorphologyError;

/// Consonant row of a godan verb's final kana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    U,
    K,
    G,
    S,
    T,
    N,
    B,
    M,
    R,
}

/// Vowel grade, in あいうえお order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    I,
    U,
    E,
    O,
}

/// Kana per row, indexed by `Row` then `Grade`.
const ROW_TABLE: [[char; 5]; 9] = [
    ['あ', 'い', 'う', 'え', 'お'],
    ['か', 'き', 'く', 'け', 'こ'],
    ['が', 'ぎ', 'ぐ', 'げ', 'ご'],
    ['さ', 'し', 'す', 'せ', 'そ'],
    ['た', 'ち', 'つ', 'て', 'と'],
    ['な', 'に', 'ぬ', 'ね', 'の'],
    ['ば', 'び', 'ぶ', 'べ', 'ぼ'],
    ['ま', 'み', 'む', 'め', 'も'],
    ['ら', 'り', 'る', 'れ', 'ろ'],
];

impl Row {
    pub const ALL: [Row; 9] = [
        Row::U,
        Row::K,
        Row::G,
        Row::S,
        Row::T,
        Row::N,
        Row::B,
        Row::M,
        Row::R,
    ];

    /// Raw table entry for this row at `grade`.
    pub fn kana(self, grade: Grade) -> char {
        ROW_TABLE[self as usize][grade as usize]
    }

    /// Kana that replaces the dictionary ending when building a stem.
    ///
    /// Identical to [`Row::kana`] except for the a-grade of the う row, which
    /// surfaces as わ (買う → 買わない, 買われる, 買わせる).
    pub fn stem_kana(self, grade: Grade) -> char {
        match (self, grade) {
            (Row::U, Grade::A) => 'わ',
            _ => self.kana(grade),
        }
    }
}

/// Classify a godan reading by its final kana.
///
/// A reading whose final kana is not a u-grade entry of some row is
/// malformed lexical data.
pub fn classify_row(reading: &str) -> Result<Row, MorphologyError> {
    let kana = reading.chars().next_back();
    kana.and_then(|k| Row::ALL.into_iter().find(|row| row.kana(Grade::U) == k))
        .ok_or_else(|| MorphologyError::UnknownRow {
            reading: reading.to_string(),
            kana,
        })
}
