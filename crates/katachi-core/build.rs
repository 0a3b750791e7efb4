fn main() {
    // Validate the embedded lexicon at compile time.
    validate_lexicon(
        "src/lexicon/default_lexicon.toml",
        include_str!("src/lexicon/default_lexicon.toml"),
    );
}

fn validate_lexicon(path: &str, content: &str) {
    let table: toml::Table = match content.parse() {
        Ok(table) => table,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    let entries: usize = ["verbs", "adjectives"]
        .iter()
        .filter_map(|key| table.get(*key).and_then(|v| v.as_array()))
        .map(|entries| entries.len())
        .sum();
    if entries == 0 {
        panic!("{path} has no [[verbs]] or [[adjectives]] entries");
    }
}
