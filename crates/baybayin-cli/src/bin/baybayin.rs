use std::path::PathBuf;

use clap::{Parser, Subcommand};

use baybayin_cli::commands::{accuracy_ops, config_ops, convert_ops, translate_ops};

#[derive(Parser)]
#[command(name = "baybayin", about = "Latin to Baybayin transliteration tool")]
struct Cli {
    /// Custom grapheme table TOML (see `table-export`)
    #[arg(long, global = true)]
    table: Option<String>,
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write JSON trace logs to this directory (requires --features trace)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text (or each line of stdin) to Baybayin
    Convert {
        /// Latin text; reads stdin when omitted
        text: Option<String>,
        /// Vowel canceller: + x ] _
        #[arg(short, long)]
        canceller: Option<String>,
        /// Font name, e.g. "Tawbid Ukit"
        #[arg(short, long)]
        font: Option<String>,
    },
    /// Show the conversion of each word
    Inspect {
        /// Latin text
        text: String,
        #[arg(short, long)]
        canceller: Option<String>,
        #[arg(short, long)]
        font: Option<String>,
    },
    /// Show which canceller a font would use for a request
    Resolve {
        /// Requested canceller symbol
        canceller: String,
        /// Font name
        font: String,
    },
    /// List fonts and the cancellers each supports
    Fonts,
    /// List vowel cancellers (optionally only those a font supports)
    Cancellers {
        #[arg(short, long)]
        font: Option<String>,
    },
    /// Run transliteration checks from a TOML corpus
    Accuracy {
        /// Path to the corpus TOML file
        corpus_file: String,
        /// Only run cases with this tag
        #[arg(long)]
        tag: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Translate text through a streaming endpoint, then transliterate it
    Translate {
        /// Text to translate
        prompt: String,
        /// Endpoint accepting {"prompt": ...} and answering with `data:` events
        #[arg(long)]
        endpoint: String,
        #[arg(short, long, default_value = "+")]
        canceller: String,
        #[arg(short, long, default_value = "Baybayin Simple")]
        font: String,
    },
    /// Export the default grapheme table as TOML
    TableExport,
    /// Validate a custom grapheme table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    baybayin_engine::init_tracing(cli.log_dir.as_deref());
    config_ops::load_overrides(cli.table.as_deref(), cli.settings.as_deref());

    match cli.command {
        Command::Convert {
            text,
            canceller,
            font,
        } => convert_ops::convert_cmd(text.as_deref(), canceller.as_deref(), font.as_deref()),
        Command::Inspect {
            text,
            canceller,
            font,
        } => convert_ops::inspect_cmd(&text, canceller.as_deref(), font.as_deref()),
        Command::Resolve { canceller, font } => convert_ops::resolve_cmd(&canceller, &font),
        Command::Fonts => convert_ops::fonts_cmd(),
        Command::Cancellers { font } => convert_ops::cancellers_cmd(font.as_deref()),
        Command::Accuracy {
            corpus_file,
            tag,
            verbose,
            json,
        } => accuracy_ops::accuracy_cmd(&corpus_file, tag.as_deref(), verbose, json),
        Command::Translate {
            prompt,
            endpoint,
            canceller,
            font,
        } => translate_ops::translate_cmd(&endpoint, &prompt, &canceller, &font),
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
