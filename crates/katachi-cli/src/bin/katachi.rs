use clap::{Parser, Subcommand};

use katachi_cli::commands::{
    conjugate_ops, lexicon_ops, AdjClassArg, AdjKindArg, Inflection, VerbClassArg, VerbKindArg,
};
use katachi_cli::trace_init::init_tracing;
use katachi_core::{AdjectiveEntry, VerbEntry};

#[derive(Parser)]
#[command(name = "katachi", about = "Japanese verb and adjective conjugation tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct InflectionFlags {
    /// Polite register (ます/です forms)
    #[arg(long)]
    polite: bool,
    /// Past tense
    #[arg(long)]
    past: bool,
    /// Negative polarity
    #[arg(long)]
    negative: bool,
}

impl InflectionFlags {
    fn inflection(&self) -> Inflection {
        Inflection::from_flags(self.polite, self.past, self.negative)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Conjugate a verb
    Verb {
        /// Dictionary form as written (kanji/kana)
        surface: String,
        /// Dictionary form in hiragana
        reading: String,
        /// Conjugation class
        #[arg(value_enum)]
        class: VerbClassArg,
        /// Form to produce
        #[arg(value_enum)]
        kind: VerbKindArg,
        #[command(flatten)]
        flags: InflectionFlags,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Conjugate an adjective
    Adj {
        /// Dictionary form as written (kanji/kana)
        surface: String,
        /// Dictionary form in hiragana
        reading: String,
        /// い or な adjective
        #[arg(value_enum)]
        class: AdjClassArg,
        /// Form to produce
        #[arg(value_enum)]
        kind: AdjKindArg,
        #[command(flatten)]
        flags: InflectionFlags,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every form of a lexicon word
    Table {
        /// Surface or reading to look up
        word: String,
        /// Lexicon TOML file (default: built-in lexicon)
        #[arg(long)]
        lexicon: Option<String>,
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the built-in lexicon as TOML
    LexiconExport,
    /// Validate a custom lexicon TOML file
    LexiconValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Verb {
            surface,
            reading,
            class,
            kind,
            flags,
            json,
        } => {
            let entry = VerbEntry::new(&surface, &reading, class.into());
            let spec = flags.inflection().verb_spec(kind);
            conjugate_ops::verb(&entry, &spec, json);
        }
        Command::Adj {
            surface,
            reading,
            class,
            kind,
            flags,
            json,
        } => {
            let entry = AdjectiveEntry::new(&surface, &reading, class.into());
            let spec = flags.inflection().adj_spec(kind);
            conjugate_ops::adjective(&entry, &spec, json);
        }
        Command::Table {
            word,
            lexicon,
            json,
        } => conjugate_ops::table(&word, lexicon.as_deref(), json),
        Command::LexiconExport => lexicon_ops::lexicon_export(),
        Command::LexiconValidate { file } => lexicon_ops::lexicon_validate(&file),
    }
}
