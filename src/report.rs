/*!
 # blink(1) HID report

 This module owns the 9-byte report layout. A [`Report`] starts with the
 marker and command bytes set and everything else zeroed; each command then
 applies the field setters it declares. Overlapping offsets are intentional,
 the device reads bytes 2-4 differently per command.

 Layout:

 | byte | meaning                                        |
 |------|------------------------------------------------|
 | 0    | report marker, always 1                        |
 | 1    | command letter, raw ASCII                      |
 | 2-4  | RGB triplet, or play flag + position/duration  |
 | 5-6  | fade duration, big-endian                      |
 | 7    | pattern position                               |
 | 8    | reserved, always 0                             |
*/

use std::io::Write;

use tracing::trace;

use crate::color::channels;
use crate::Result;

/// blink(1) hidraw report size
pub const REPORT_SIZE: usize = 9;

/// Leading marker byte of every report
pub const REPORT_MARKER: u8 = 1;

/// A fully assembled 9-byte device report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    bytes: [u8; REPORT_SIZE],
}

impl Report {
    /// Creates a report for the given command letter with all field bytes
    /// zeroed. The marker and command bytes are fixed here, before any
    /// command-specific stage runs.
    pub fn new(command: char) -> Self {
        let mut bytes = [0; REPORT_SIZE];
        bytes[0] = REPORT_MARKER;
        bytes[1] = command as u8;
        Report { bytes }
    }

    /// Writes an RGB triplet into bytes 2-4
    pub fn set_color(&mut self, rgb: u32) {
        let [r, g, b] = channels(rgb);
        self.bytes[2] = r;
        self.bytes[3] = g;
        self.bytes[4] = b;
    }

    /// Writes a fade duration into bytes 5-6, big-endian
    pub fn set_fade(&mut self, duration: u16) {
        self.bytes[5] = (duration >> 8) as u8;
        self.bytes[6] = (duration & 0xFF) as u8;
    }

    /// Writes a pattern position into byte 7
    pub fn set_pattern_position(&mut self, position: u8) {
        self.bytes[7] = position;
    }

    /// Writes a play/pause flag into byte 2
    pub fn set_play(&mut self, play: bool) {
        self.bytes[2] = play as u8;
    }

    /// Writes a playback start position into byte 3
    pub fn set_play_position(&mut self, position: u8) {
        self.bytes[3] = position;
    }

    /// Writes a serverdown window into bytes 3-4, big-endian
    pub fn set_serverdown_window(&mut self, duration: u16) {
        self.bytes[3] = (duration >> 8) as u8;
        self.bytes[4] = (duration & 0xFF) as u8;
    }

    /// Raw wire bytes of the report
    pub fn as_bytes(&self) -> &[u8; REPORT_SIZE] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Report {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Writes the full report to the given sink and flushes it.
///
/// Anything short of all 9 bytes reaching the sink is an error.
pub fn write_report<W: Write>(writer: &mut W, report: &Report) -> Result<()> {
    trace!("writing {} report bytes", REPORT_SIZE);
    writer.write_all(report.as_bytes())?;
    writer.flush()?;
    Ok(())
}
