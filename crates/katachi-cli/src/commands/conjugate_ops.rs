use std::fmt::Display;
use std::path::Path;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use katachi_core::lexicon::{default_lexicon, Lexicon};
use katachi_core::{
    conjugate_adjective, conjugate_adjective_all, conjugate_verb, conjugate_verb_all,
    AdjFormSpec, AdjectiveEntry, ConjugationResult, MorphologyError, VerbEntry, VerbFormSpec,
};

use super::die;

const LABEL_WIDTH: usize = 32;
const SURFACE_WIDTH: usize = 24;

pub fn verb(entry: &VerbEntry, spec: &VerbFormSpec, json: bool) {
    let result = die!(conjugate_verb(entry, spec), "Error: {}");
    print_result(&result, json);
}

pub fn adjective(entry: &AdjectiveEntry, spec: &AdjFormSpec, json: bool) {
    let result = die!(conjugate_adjective(entry, spec), "Error: {}");
    print_result(&result, json);
}

fn print_result(result: &ConjugationResult, json: bool) {
    if json {
        println!("{}", die!(serde_json::to_string(result), "Error: {}"));
        return;
    }
    match &result.reading {
        Some(reading) if *reading != result.surface => {
            println!("{}\t{reading}", result.surface)
        }
        _ => println!("{}", result.surface),
    }
    for alt in &result.alternates {
        println!("  also: {alt}");
    }
}

/// One line of a paradigm table.
#[derive(Debug, Serialize)]
pub struct TableRow<S: Serialize> {
    pub form: S,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ConjugationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<S: Serialize + Display> TableRow<S> {
    fn new(form: S, outcome: Result<ConjugationResult, MorphologyError>) -> Self {
        let label = form.to_string();
        let (result, error) = match outcome {
            Ok(r) => (Some(r), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            form,
            label,
            result,
            error,
        }
    }

    /// Fixed-width text line. Widths count East Asian characters as two
    /// columns so kanji surfaces line up.
    pub fn render(&self) -> String {
        match (&self.result, &self.error) {
            (Some(result), _) => {
                let reading = result.reading.as_deref().unwrap_or("");
                let mut line = format!(
                    "  {:<width$}{}{reading}",
                    self.label,
                    pad(&result.surface, SURFACE_WIDTH),
                    width = LABEL_WIDTH
                );
                if !result.alternates.is_empty() {
                    line.push_str(&format!("  (also {})", result.alternates.join(", ")));
                }
                line
            }
            (None, Some(error)) => format!("  {:<width$}-  {error}", self.label, width = LABEL_WIDTH),
            (None, None) => format!("  {:<width$}-", self.label, width = LABEL_WIDTH),
        }
    }
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w).max(1)))
}

/// Print every form of a lexicon word, verb entries first.
pub fn table(word: &str, lexicon_file: Option<&str>, json: bool) {
    let loaded;
    let lexicon: &Lexicon = match lexicon_file {
        Some(file) => {
            loaded = die!(
                Lexicon::load(Path::new(file)),
                "Error loading lexicon {file}: {}"
            );
            &loaded
        }
        None => default_lexicon(),
    };

    if let Some(entry) = lexicon.find_verb(word) {
        let rows: Vec<_> = conjugate_verb_all(entry)
            .into_iter()
            .map(|(spec, outcome)| TableRow::new(spec, outcome))
            .collect();
        let header = format!(
            "{} ({}) {:?}: {}",
            entry.surface, entry.reading, entry.class, entry.gloss
        );
        print_table(&header, &rows, json);
    } else if let Some(entry) = lexicon.find_adjective(word) {
        let rows: Vec<_> = conjugate_adjective_all(entry)
            .into_iter()
            .map(|(spec, outcome)| TableRow::new(spec, outcome))
            .collect();
        let header = format!(
            "{} ({}) {:?}: {}",
            entry.surface, entry.reading, entry.class, entry.gloss
        );
        print_table(&header, &rows, json);
    } else {
        eprintln!("Not found in lexicon: {word}");
        std::process::exit(1);
    }
}

fn print_table<S: Serialize + Display>(header: &str, rows: &[TableRow<S>], json: bool) {
    if json {
        println!("{}", die!(serde_json::to_string_pretty(rows), "Error: {}"));
        return;
    }
    println!("{header}");
    for row in rows {
        println!("{}", row.render());
    }
}
