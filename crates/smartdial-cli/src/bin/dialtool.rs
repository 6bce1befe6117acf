use std::path::PathBuf;

use clap::{Parser, Subcommand};

use smartdial_cli::commands::{config_ops, highlight_ops};
use smartdial_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "dialtool", about = "Smart-dial highlight diagnostics")]
struct Cli {
    /// Custom keypad TOML to use instead of the built-in layout
    #[arg(long, global = true)]
    keypad: Option<String>,
    /// Custom settings TOML to use instead of the built-in defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Directory for the JSON trace log (requires the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show how a display name is segmented and spelled
    Segment {
        /// Display name
        name: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Correct a candidate highlight on a display name
    Resolve {
        /// Display name
        name: String,
        /// Digits typed on the keypad
        digits: String,
        /// Candidate span start from the name matcher
        #[arg(long, allow_hyphen_values = true)]
        start: i32,
        /// Candidate span end from the name matcher
        #[arg(long, allow_hyphen_values = true)]
        end: i32,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Clamp a candidate highlight on a phone number
    Phone {
        /// Phone number as displayed
        number: String,
        #[arg(long, allow_hyphen_values = true)]
        start: i32,
        #[arg(long, allow_hyphen_values = true)]
        end: i32,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Resolve JSONL cases ({"name","digits","start","end"} per line)
    Batch {
        /// Path to the input JSONL file
        input_file: String,
        /// Path to the output JSONL file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Lay out suggestion entries (JSON array) on the strip
    Strip {
        /// Path to the entries JSON file
        entries_file: String,
        /// Digits typed on the keypad
        digits: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the built-in keypad TOML
    KeypadExport,
    /// Validate a keypad TOML file
    KeypadValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Print the built-in settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.log_dir {
        init_tracing(dir);
    }
    if let Some(file) = &cli.keypad {
        config_ops::keypad_load(file);
    }
    if let Some(file) = &cli.settings {
        config_ops::settings_load(file);
    }

    match cli.command {
        Command::Segment { name, json } => highlight_ops::segment_cmd(&name, json),
        Command::Resolve {
            name,
            digits,
            start,
            end,
            json,
        } => highlight_ops::resolve_cmd(&name, &digits, start, end, json),
        Command::Phone {
            number,
            start,
            end,
            json,
        } => highlight_ops::phone_cmd(&number, start, end, json),
        Command::Batch { input_file, output } => {
            highlight_ops::batch_cmd(&input_file, output.as_deref())
        }
        Command::Strip {
            entries_file,
            digits,
            json,
        } => highlight_ops::strip_cmd(&entries_file, &digits, json),
        Command::KeypadExport => config_ops::keypad_export(),
        Command::KeypadValidate { file } => config_ops::keypad_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
