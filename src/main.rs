use blink1_report::{encode, write_report, COLORS, COMMANDS};
use clap::Parser;
use color_eyre::eyre::Result;
use std::io::{self, Write};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blink", author, version, about, long_about = None)]
#[command(after_help = command_summary())]
struct Cli {
    /// List defined colors
    #[arg(short = 'c', long = "colors")]
    list_colors: bool,

    /// Command letter followed by its fields, e.g. `c red 50`
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    tokens: Vec<String>,
}

/// Renders the per-command summary shown below the generated help
fn command_summary() -> String {
    let mut summary = String::from("Commands:\n");
    for command in &COMMANDS {
        summary.push_str(&format!("  {}  {}\n", command.letter, command.desc));
    }
    summary
}

fn main() -> Result<()> {
    // Initialize tracing; stdout carries the raw report, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| EnvFilter::new("blink1_report=warn")),
        )
        .with_writer(io::stderr)
        .compact()
        .init();

    // Initialize color-eyre for pretty error reporting
    color_eyre::install()?;

    let cli = Cli::parse();
    debug!("Parsed command line arguments");

    if cli.list_colors {
        let mut stdout = io::stdout().lock();
        for color in &COLORS {
            writeln!(stdout, "{}", color.name)?;
        }
        return Ok(());
    }

    let mut tokens = cli.tokens.iter();
    let mut letters = tokens.next().map(String::as_str).unwrap_or("").chars();
    let letter = match (letters.next(), letters.next()) {
        (Some(letter), None) => letter,
        _ => {
            error!("Missing or malformed command token");
            return Err(blink1_report::Error::InvalidCommandToken.into());
        }
    };
    let fields: Vec<&str> = tokens.map(String::as_str).collect();

    let report = match encode(letter, &fields) {
        Ok(report) => report,
        Err(e) => {
            error!("Failed to encode command '{}': {}", letter, e);
            return Err(e.into());
        }
    };

    write_report(&mut io::stdout().lock(), &report)?;

    Ok(())
}
