use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use lipi_core::akt;
use lipi_core::defaults;
use lipi_core::store::SchemeStore;
use lipi_core::translit::transliterate_with_direction;

#[derive(Parser)]
#[command(name = "lipi", about = "Keymap-driven Indic transliteration")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text with a named keymap (direction follows the scheme kind)
    Convert {
        /// Keymap id (see `lipi list`)
        scheme: String,
        /// Input text; stdin is read line by line when omitted
        text: Vec<String>,
        /// Directory of keymap JSON files; embedded schemes are used when omitted
        #[arg(long)]
        keymaps: Option<PathBuf>,
    },

    /// List available keymap ids
    List {
        /// Directory of keymap JSON files; embedded schemes are used when omitted
        #[arg(long)]
        keymaps: Option<PathBuf>,
    },

    /// Import a legacy .akt keymap and write canonical JSON
    Import {
        /// Path to the legacy keymap
        input: PathBuf,
        /// Path for the JSON output
        output: PathBuf,
    },
}

fn open_store(keymaps: Option<&PathBuf>) -> SchemeStore {
    let store = SchemeStore::new();
    match keymaps {
        Some(dir) => {
            store.load_keymaps(dir).unwrap_or_else(|e| {
                eprintln!("Failed to load keymaps from {}: {}", dir.display(), e);
                process::exit(1);
            });
        }
        None => {
            defaults::register_embedded(&store).unwrap_or_else(|e| {
                eprintln!("Failed to load embedded keymaps: {}", e);
                process::exit(1);
            });
        }
    }
    store
}

fn convert_or_exit(store: &SchemeStore, scheme: &str, input: &str) -> String {
    transliterate_with_direction(store, scheme, input).unwrap_or_else(|e| {
        eprintln!("Conversion failed: {}", e);
        process::exit(1);
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lipi_core=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            scheme,
            text,
            keymaps,
        } => {
            let store = open_store(keymaps.as_ref());
            if text.is_empty() {
                for line in io::stdin().lock().lines() {
                    let line = line.unwrap_or_else(|e| {
                        eprintln!("Failed to read stdin: {}", e);
                        process::exit(1);
                    });
                    println!("{}", convert_or_exit(&store, &scheme, &line));
                }
            } else {
                println!("{}", convert_or_exit(&store, &scheme, &text.join(" ")));
            }
        }

        Command::List { keymaps } => {
            let store = open_store(keymaps.as_ref());
            for id in store.list_ids() {
                println!("{}", id);
            }
        }

        Command::Import { input, output } => {
            let source = fs::read_to_string(&input).unwrap_or_else(|e| {
                eprintln!("Failed to read {}: {}", input.display(), e);
                process::exit(1);
            });
            let import = akt::parse_akt(&source).unwrap_or_else(|e| {
                eprintln!("Failed to parse {}: {}", input.display(), e);
                process::exit(1);
            });
            if !import.missing_fields.is_empty() {
                eprintln!(
                    "Warning: mandatory fields missing (placeholders substituted): {}",
                    import.missing_fields.join(", ")
                );
            }

            let json = serde_json::to_string_pretty(&import.scheme).unwrap_or_else(|e| {
                eprintln!("Failed to serialize scheme: {}", e);
                process::exit(1);
            });
            fs::write(&output, json + "\n").unwrap_or_else(|e| {
                eprintln!("Failed to write {}: {}", output.display(), e);
                process::exit(1);
            });
            eprintln!(
                "Imported {} -> {} ({})",
                input.display(),
                output.display(),
                import.scheme.id
            );
        }
    }
}
