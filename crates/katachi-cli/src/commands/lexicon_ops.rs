use std::fs;

use katachi_core::lexicon::{default_toml, parse_lexicon_toml, Lexicon};

use super::die;

pub fn lexicon_export() {
    print!("{}", default_toml());
}

pub fn lexicon_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let lexicon = die!(parse_lexicon_toml(&content), "Error: {}");
    println!("{}", summary(&lexicon));
}

fn summary(lexicon: &Lexicon) -> String {
    format!(
        "OK: {} verbs, {} adjectives",
        lexicon.verbs.len(),
        lexicon.adjectives.len()
    )
}
