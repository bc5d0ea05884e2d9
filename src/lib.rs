/*!
 # blink(1) Report Encoder Library

 A Rust library for building the 9-byte HID reports understood by the ThingM
 blink(1) USB notification light.

 ## Features

 * Set an RGB color immediately
 * Fade to an RGB color over a duration
 * Play/pause the onboard pattern from a given position
 * Program one of the 12 pattern entries
 * Serverdown (watchdog tickle) mode
 * Named color palette and hex color parsing
 * Duration parsing with `s`/`ms` unit suffixes

 ## Example

 ```rust
 use blink1_report::*;

 fn main() -> Result<()> {
     // Fade to red over half a second
     let report = encode('c', &["red", ".5s"])?;

     // Hand the raw bytes to whatever owns the device node
     let mut sink = Vec::new();
     write_report(&mut sink, &report)?;
     assert_eq!(sink.len(), REPORT_SIZE);

     Ok(())
 }
 ```
*/

use thiserror::Error;

/// Custom error types for the blink(1) report encoder library
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong number of fields for a known command
    #[error("{desc}\n{usage}")]
    WrongArgumentCount {
        /// One-line description of the command
        desc: &'static str,
        /// Usage text with example invocations
        usage: &'static str,
    },

    /// Missing command token, or a token longer than one character
    #[error("expected a single-letter command; try 'blink -h' for more information")]
    InvalidCommandToken,

    /// Command letter not in the supported set
    #[error("unknown command '{0}'; try 'blink -h' for help")]
    UnknownCommand(char),

    /// Token is neither a named color nor a hex value within 24 bits
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    /// Token fails duration parsing, or a negative duration reached a
    /// command that requires one
    #[error("invalid duration '{0}'")]
    InvalidDuration(String),

    /// Pattern position outside the device's 12 slots
    #[error("invalid position {0}")]
    InvalidPosition(i64),

    /// The report could not be fully written to the output sink
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

// Import needed for Result type extension
pub type Result<T> = std::result::Result<T, Error>;

// Re-export modules
pub mod color;
pub mod command;
pub mod duration;
pub mod report;

// Re-export key types
pub use color::{resolve_color, NamedColor, COLORS};
pub use command::{encode, Command, COMMANDS};
pub use duration::{parse_duration, DURATION_MAX, DURATION_NONE};
pub use report::{write_report, Report, REPORT_SIZE};
