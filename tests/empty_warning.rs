//! The empty-result warning goes through the `log` facade.

use std::sync::Mutex;

use hodgman::{Polygon, PolygonClipper};
use log::{Level, LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = RECORDS.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

fn square(min: f64, max: f64) -> Polygon<f64> {
    Polygon::from_coords(&[(min, min), (min, max), (max, max), (max, min)])
}

fn warnings() -> Vec<String> {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, message)| message.clone())
        .collect()
}

// Single test: the logger and its records are process-wide.
#[test]
fn test_warning_only_when_enabled_and_empty() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let near = square(-1.0, 1.0);
    let far = square(10.0, 12.0);

    PolygonClipper::new(false).clip(&near, &far);
    assert!(warnings().is_empty());

    PolygonClipper::new(true).clip(&near, &square(0.0, 2.0));
    assert!(warnings().is_empty());

    let result = PolygonClipper::new(true).clip(&near, &far);
    assert!(result.is_empty());
    let warned = warnings();
    assert_eq!(warned.len(), 1);
    assert!(warned[0].contains("clockwise"));

    PolygonClipper::new(true).clip_masked(&near, &far);
    assert_eq!(warnings().len(), 2);

    // Per-pass trace records are emitted too.
    let traces = RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Trace)
        .count();
    assert!(traces > 0);
}
