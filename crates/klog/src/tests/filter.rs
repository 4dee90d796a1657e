use super::*;
use log::Level;

#[test]
fn test_level_filtering() {
    let (log, output) = capture(LogLevel::Warning);

    test_log!(log, Level::Error, "error");
    test_log!(log, Level::Warn, "warning");
    test_log!(log, Level::Info, "info");
    test_log!(log, Level::Debug, "debug");

    let lines = output.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("error"));
    assert!(lines[1].contains("warning"));
}

#[test]
fn test_dynamic_level_change() {
    let (log, output) = capture(LogLevel::Info);

    test_log!(log, Level::Debug, "debug1");
    log.set_level(LogLevel::Debug);
    test_log!(log, Level::Debug, "debug2");

    let lines = output.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("debug2"));
    assert_eq!(log.level(), LogLevel::Debug);
}

#[test]
fn test_off_suppresses_everything() {
    let (log, output) = capture(LogLevel::Off);
    test_log!(log, Level::Error, "error");
    assert!(output.lines().is_empty());
}

#[test]
fn test_enabled_matches_threshold() {
    let (log, _) = capture(LogLevel::Info);
    let info = log::Metadata::builder().level(Level::Info).build();
    let debug = log::Metadata::builder().level(Level::Debug).build();
    assert!(log::Log::enabled(&log, &info));
    assert!(!log::Log::enabled(&log, &debug));
}

#[test]
fn test_parse_level_names() {
    assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warning);
    assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warning);
    assert_eq!(" debug ".parse::<LogLevel>().unwrap(), LogLevel::Debug);
    assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel::Off);
    assert!("verbose".parse::<LogLevel>().is_err());
}

#[test]
fn test_from_u8_round_trips_every_level() {
    for level in [
        LogLevel::Off,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        assert_eq!(LogLevel::from_u8(level as u8), level);
    }
}
