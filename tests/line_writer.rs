//! Tests for the line-writer backend header layout.

mod common;

use common::{SharedBuf, bare_writer};
use logshim::{
    Level, LevelName, LineWriter, Logger, Message, Record, Sink, SourceLocation, StdLogger,
};
use std::panic::Location;

#[test]
fn writes_level_word_then_body() {
    let buf = SharedBuf::new();
    let sink = bare_writer(&buf);

    sink.write(&Record {
        level: LevelName::Warn,
        body: " disk: 91% nearly full",
        caller: Location::caller(),
    })
    .unwrap();

    assert_eq!(buf.contents(), "WARN disk: 91% nearly full\n");
}

#[test]
fn prefix_at_line_start() {
    let buf = SharedBuf::new();
    let log = StdLogger::new(bare_writer(&buf).prefix("[svc] "), Level::Info);

    log.info().msg("up");

    assert_eq!(buf.lines(), vec!["[svc] INFO up"]);
}

#[test]
fn prefix_moved_before_message() {
    let buf = SharedBuf::new();
    let sink = LineWriter::new(buf.clone())
        .timestamp_format("TS")
        .source(SourceLocation::None)
        .prefix("svc: ")
        .prefix_before_message(true);
    let log = StdLogger::new(sink, Level::Info);

    log.info().msg("up");

    assert_eq!(buf.lines(), vec!["TS svc: INFO up"]);
}

#[test]
fn timestamp_uses_format() {
    let buf = SharedBuf::new();
    let sink = LineWriter::new(buf.clone())
        .timestamp_format("at-%Y")
        .utc(true)
        .source(SourceLocation::None);
    let log = StdLogger::new(sink, Level::Info);

    log.info().msg("m");

    let line = &buf.lines()[0];
    let (stamp, rest) = line.split_once(' ').unwrap();
    assert!(stamp.starts_with("at-"));
    assert_eq!(stamp.len(), "at-2024".len());
    assert!(stamp[3..].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(rest, "INFO m");
}

#[test]
fn default_header_has_timestamp_and_short_location() {
    let buf = SharedBuf::new();
    let log = StdLogger::new(LineWriter::new(buf.clone()), Level::Info);

    log.info().msg("m");

    let line = &buf.lines()[0];
    // `2024/01/31 23:59:59 line_writer.rs:NN: INFO m`
    let mut parts = line.splitn(4, ' ');
    let date = parts.next().unwrap();
    let time = parts.next().unwrap();
    let location = parts.next().unwrap();
    assert_eq!(date.len(), 10);
    assert_eq!(date.matches('/').count(), 2);
    assert_eq!(time.len(), 8);
    assert!(location.starts_with("line_writer.rs:"));
    assert!(location.ends_with(':'));
    assert_eq!(parts.next().unwrap(), "INFO m");
}

#[test]
fn short_location_points_at_commit_call() {
    let buf = SharedBuf::new();
    let sink = LineWriter::new(buf.clone())
        .without_timestamp()
        .source(SourceLocation::Short);
    let log = StdLogger::new(sink, Level::Info);

    let line_no = line!() + 1;
    log.info().str("k", "v").msg("m");

    assert_eq!(
        buf.lines(),
        vec![format!("line_writer.rs:{line_no}: INFO k: v m")]
    );
}

#[test]
fn long_location_keeps_path() {
    let buf = SharedBuf::new();
    let sink = LineWriter::new(buf.clone())
        .without_timestamp()
        .source(SourceLocation::Long);
    let log = StdLogger::new(sink, Level::Info);

    log.info().msgf(format_args!("m"));

    let line = &buf.lines()[0];
    let path = line.split(':').next().unwrap();
    assert!(path.ends_with("line_writer.rs"));
    assert!(path.contains("tests"));
}

#[test]
fn malformed_timestamp_format_still_writes_line() {
    let buf = SharedBuf::new();
    let sink = LineWriter::new(buf.clone())
        .timestamp_format("%Q")
        .source(SourceLocation::None);
    let log = StdLogger::new(sink, Level::Info);

    log.info().msg("m");

    assert_eq!(buf.lines(), vec!["INFO m"]);
}

#[test]
fn into_inner_returns_writer() {
    let sink = LineWriter::new(Vec::new())
        .without_timestamp()
        .source(SourceLocation::None);
    sink.write(&Record {
        level: LevelName::Debug,
        body: " x",
        caller: Location::caller(),
    })
    .unwrap();
    sink.flush().unwrap();

    assert_eq!(sink.into_inner(), b"DEBUG x\n");
}

#[test]
fn body_ending_in_newline_stays_one_line() {
    let buf = SharedBuf::new();
    let log = StdLogger::new(bare_writer(&buf), Level::Info);

    log.info().msg("x\n");
    log.info().msg("y");

    assert_eq!(buf.contents(), "INFO x\nINFO y\n");
}
