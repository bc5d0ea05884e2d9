/*!
 # Command table and report encoding

 This module maps a command letter and its field tokens to an assembled
 [`Report`]. Field encoding runs as an ordered sequence of stages; the
 pattern-entry command applies the position, fade and color stages, the
 fade command applies fade and color, the set command color alone, so the
 shared byte layout of the three lives in one place.
*/

use tracing::{debug, instrument};

use crate::duration::parse_duration;
use crate::report::Report;
use crate::{color, Error, Result};

const USAGE_FADE: &str = "Usage: blink c COLOR FADE\n\
                          Example: blink c red 50";

const USAGE_SET: &str = "Usage: blink n COLOR\n\
                         Example: blink n 454545";

const USAGE_PLAY: &str = "Usage: blink p 0|1 POSITION\n\
                          Example: blink p 0 0 # Pause\n\
                          \x20        blink p 1 4 # Play from 5th position";

const USAGE_PATT: &str = "Usage: blink P COLOR FADE POSITION\n\
                          Example: blink P green .5s 2 # 3rd pattern green with 500ms fade time";

const USAGE_SDOWN: &str = "Usage: blink D 0|1 DURATION\n\
                           Example: blink D 0 0 # stop server tickle mode\n\
                           \x20        blink D 1 2000ms # start server tickle mode with 2s time";

/// Highest addressable pattern entry on the device
const POSITION_MAX: i64 = 11;

/// A supported command and its invocation shape
#[derive(Debug, Clone, Copy)]
pub struct Command {
    /// Single-letter command name
    pub letter: char,
    /// Number of field tokens the command takes
    pub argc: usize,
    /// Usage text with example invocations
    pub usage: &'static str,
    /// One-line description
    pub desc: &'static str,
}

/// Supported commands
pub const COMMANDS: [Command; 5] = [
    Command { letter: 'c', argc: 2, usage: USAGE_FADE, desc: "Fade to RGB color" },
    Command { letter: 'D', argc: 2, usage: USAGE_SDOWN, desc: "Serverdown tickle/off" },
    Command { letter: 'n', argc: 1, usage: USAGE_SET, desc: "Set RGB color now" },
    Command { letter: 'p', argc: 2, usage: USAGE_PLAY, desc: "Play/Pause" },
    Command { letter: 'P', argc: 3, usage: USAGE_PATT, desc: "Set pattern entry" },
];

/// Permissive integer coercion for play/position fields: anything that does
/// not parse as an integer becomes 0.
fn coerce_int(token: &str) -> i64 {
    token.parse().unwrap_or(0)
}

fn color_stage(report: &mut Report, token: &str) -> Result<()> {
    report.set_color(color::resolve_color(token)?);
    Ok(())
}

fn fade_stage(report: &mut Report, token: &str) -> Result<()> {
    let duration = parse_duration(token)?;
    if duration < 0 {
        return Err(Error::InvalidDuration(token.to_owned()));
    }
    report.set_fade(duration as u16);
    Ok(())
}

fn position_stage(report: &mut Report, token: &str) -> Result<()> {
    let position = coerce_int(token);
    if !(0..=POSITION_MAX).contains(&position) {
        return Err(Error::InvalidPosition(position));
    }
    report.set_pattern_position(position as u8);
    Ok(())
}

fn serverdown_stage(report: &mut Report, token: &str) -> Result<()> {
    let duration = parse_duration(token)?;
    if duration < 0 {
        return Err(Error::InvalidDuration(token.to_owned()));
    }
    report.set_serverdown_window(duration as u16);
    Ok(())
}

/// Encodes one command invocation into a device report.
///
/// The field count is checked against the command table before any token is
/// parsed; the first failing stage aborts the rest.
#[instrument]
pub fn encode(letter: char, args: &[&str]) -> Result<Report> {
    if let Some(command) = COMMANDS.iter().find(|c| c.letter == letter) {
        if args.len() != command.argc {
            return Err(Error::WrongArgumentCount {
                desc: command.desc,
                usage: command.usage,
            });
        }
    }

    let mut report = Report::new(letter);

    match letter {
        'P' => {
            position_stage(&mut report, args[2])?;
            fade_stage(&mut report, args[1])?;
            color_stage(&mut report, args[0])?;
        }
        'c' => {
            fade_stage(&mut report, args[1])?;
            color_stage(&mut report, args[0])?;
        }
        'n' => {
            color_stage(&mut report, args[0])?;
        }
        'p' => {
            report.set_play(coerce_int(args[0]) != 0);
            report.set_play_position(coerce_int(args[1]).clamp(0, POSITION_MAX) as u8);
        }
        'D' => {
            report.set_play(coerce_int(args[0]) != 0);
            serverdown_stage(&mut report, args[1])?;
        }
        _ => return Err(Error::UnknownCommand(letter)),
    }

    debug!("report: {:02x?}", report.as_bytes());
    Ok(report)
}
