//! End-to-end checks of the public encoding API: command in, wire bytes out.

use blink1_report::{encode, parse_duration, resolve_color, write_report, Error, REPORT_SIZE};

fn wire_bytes(letter: char, fields: &[&str]) -> Vec<u8> {
    let report = encode(letter, fields).expect("encoding should succeed");
    let mut sink = Vec::new();
    write_report(&mut sink, &report).expect("writing to a Vec cannot fail");
    sink
}

#[test]
fn every_command_produces_nine_bytes_with_marker_and_letter() {
    let invocations: [(char, &[&str]); 5] = [
        ('n', &["red"]),
        ('c', &["blue", "10"]),
        ('p', &["1", "0"]),
        ('P', &["white", "1s", "0"]),
        ('D', &["0", "0"]),
    ];

    for (letter, fields) in invocations {
        let bytes = wire_bytes(letter, fields);
        assert_eq!(bytes.len(), REPORT_SIZE);
        assert_eq!(bytes[0], 1);
        assert_eq!(bytes[1], letter as u8);
    }
}

#[test]
fn pattern_entry_scenario() {
    assert_eq!(
        wire_bytes('P', &["green", ".5s", "2"]),
        [1, b'P', 0x00, 0xFF, 0x00, 0x00, 0x32, 2, 0]
    );
}

#[test]
fn serverdown_scenario() {
    assert_eq!(
        wire_bytes('D', &["1", "2000ms"]),
        [1, b'D', 1, 0x00, 0xC8, 0, 0, 0, 0]
    );
}

#[test]
fn pause_scenario() {
    assert_eq!(wire_bytes('p', &["0", "0"]), [1, b'p', 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn hex_color_fade() {
    assert_eq!(
        wire_bytes('c', &["454545", "100"]),
        [1, b'c', 0x45, 0x45, 0x45, 0x00, 0x64, 0, 0]
    );
}

#[test]
fn failed_encoding_produces_no_bytes() {
    assert!(encode('n', &["red", "extra"]).is_err());
    assert!(encode('q', &[]).is_err());
}

#[test]
fn re_encoding_is_byte_identical() {
    assert_eq!(
        wire_bytes('c', &["purple", "2s"]),
        wire_bytes('c', &["purple", "2s"])
    );
}

#[test]
fn resolver_and_parser_agree_with_the_scenarios() {
    assert_eq!(resolve_color("red").unwrap(), 0xFF0000);
    assert_eq!(parse_duration(".5s").unwrap(), 50);
    assert!(matches!(
        encode('c', &["red", "abc"]),
        Err(Error::InvalidDuration(_))
    ));
}
