//! Tests for log levels and their translation to backend words.

use logshim::{InvalidLevel, Level, LevelName, RawLevel, translate};

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Notice);
    assert!(Level::Notice < Level::Warn);
    assert!(Level::Warn < Level::Error);
}

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Notice.to_string(), "notice");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
}

#[test]
fn level_from_str() {
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("notice".parse::<Level>().unwrap(), Level::Notice);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
}

#[test]
fn level_from_str_invalid() {
    let err = "trace".parse::<Level>().unwrap_err();
    assert_eq!(err.to_string(), "unknown log level: 'trace'");
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}

#[test]
fn codes_round_trip_through_raw_level() {
    for level in Level::all() {
        let raw = RawLevel::from(level);
        assert_eq!(raw.0, level.code());
        assert_eq!(Level::try_from(raw), Ok(level));
    }
}

#[test]
fn translate_valid_levels() {
    assert_eq!(translate(Level::Error), Ok(LevelName::Error));
    assert_eq!(translate(Level::Warn), Ok(LevelName::Warn));
    assert_eq!(translate(Level::Info), Ok(LevelName::Info));
    assert_eq!(translate(Level::Debug), Ok(LevelName::Debug));
}

#[test]
fn translate_notice_shares_info_word() {
    assert_eq!(translate(Level::Notice), translate(Level::Info));
    assert_eq!(translate(Level::Notice).unwrap().as_str(), "INFO");
}

#[test]
fn translate_out_of_range_falls_back_to_warn() {
    for code in [-1, 5, 42, i32::MAX, i32::MIN] {
        let err: InvalidLevel = translate(code).unwrap_err();
        assert_eq!(err.value(), code);
        assert_eq!(err.fallback(), LevelName::Warn);
    }
}

#[test]
fn invalid_level_message_names_value_and_fallback() {
    let err = translate(9).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid log level 9, defaulting to WARN level"
    );
}

#[test]
fn level_name_display() {
    assert_eq!(LevelName::Error.to_string(), "ERROR");
    assert_eq!(LevelName::Warn.to_string(), "WARN");
    assert_eq!(LevelName::Info.to_string(), "INFO");
    assert_eq!(LevelName::Debug.to_string(), "DEBUG");
}
