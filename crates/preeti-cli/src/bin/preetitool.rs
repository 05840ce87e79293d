use clap::{Parser, Subcommand};

use preeti_cli::commands::config_ops;
use preeti_cli::commands::convert_ops::{self, ConvertOptions, Source};
use preeti_cli::trace_init::init_tracing;
use preeti_core::Direction;

#[derive(Parser)]
#[command(name = "preetitool", about = "Preeti ⇄ Unicode Devanagari converter")]
struct Cli {
    /// Custom mapping table TOML (replaces the built-in table)
    #[arg(long, global = true)]
    table: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert Preeti text to Unicode
    ToUnicode {
        /// Text to convert (reads --input or stdin when omitted)
        text: Option<String>,
        /// Input file
        #[arg(short, long, conflicts_with = "text")]
        input: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
        /// Exit with an error if Preeti keys are left in the output
        #[arg(long)]
        strict: bool,
    },
    /// Convert Unicode text to Preeti
    ToPreeti {
        /// Text to convert (reads --input or stdin when omitted)
        text: Option<String>,
        /// Input file
        #[arg(short, long, conflicts_with = "text")]
        input: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show each conversion step for a text
    Explain {
        /// Text to explain
        text: String,
        /// Explain Unicode → Preeti instead of Preeti → Unicode
        #[arg(long)]
        reverse: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the built-in mapping table as TOML
    TableExport,
    /// Validate a custom mapping table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Some(ref table) = cli.table {
        config_ops::install_table(table);
    }

    match cli.command {
        Command::ToUnicode {
            text,
            input,
            output,
            strict,
        } => convert_ops::convert_cmd(
            Direction::PreetiToUnicode,
            Source::from_args(text.as_deref(), input.as_deref()),
            &ConvertOptions {
                output: output.as_deref(),
                strict,
            },
        ),
        Command::ToPreeti {
            text,
            input,
            output,
        } => convert_ops::convert_cmd(
            Direction::UnicodeToPreeti,
            Source::from_args(text.as_deref(), input.as_deref()),
            &ConvertOptions {
                output: output.as_deref(),
                strict: false,
            },
        ),
        Command::Explain {
            text,
            reverse,
            json,
        } => {
            let direction = if reverse {
                Direction::UnicodeToPreeti
            } else {
                Direction::PreetiToUnicode
            };
            convert_ops::explain_cmd(direction, &text, json);
        }
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
    }
}
