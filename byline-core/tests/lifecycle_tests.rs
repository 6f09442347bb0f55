//! Resource lifecycle tests: the source must be closed exactly once on
//! every termination path.

mod common;

use byline_core::{LineReader, ReaderState};
use common::{close_count, ScriptedSource};

#[test]
fn test_close_once_on_exhaustion() {
    let (source, closes) = ScriptedSource::new(&[b"a\nb\n"]);
    let reader = LineReader::from_source(Box::new(source));

    let lines: Vec<_> = reader.map(|r| r.unwrap().line).collect();
    assert_eq!(lines, ["a", "b"]);
    assert_eq!(close_count(&closes), 1);
}

#[test]
fn test_close_once_on_early_break() {
    let (source, closes) = ScriptedSource::new(&[b"a\nb\nc\n"]);
    let mut reader = LineReader::from_source(Box::new(source));

    assert_eq!(reader.next().unwrap().unwrap().line, "a");
    drop(reader);
    assert_eq!(close_count(&closes), 1);
}

#[test]
fn test_close_once_without_any_pull() {
    let (source, closes) = ScriptedSource::new(&[b"never read\n"]);
    let reader = LineReader::from_source(Box::new(source));

    drop(reader);
    assert_eq!(close_count(&closes), 1);
}

#[test]
fn test_close_once_on_mid_stream_failure() {
    let (source, closes) = ScriptedSource::failing_after(&[b"a\n"]);
    let mut reader = LineReader::from_source(Box::new(source));

    assert_eq!(reader.next().unwrap().unwrap().line, "a");
    assert!(reader.next().unwrap().is_err());
    assert_eq!(reader.state(), ReaderState::Failed);
    assert_eq!(close_count(&closes), 1);

    // Dropping the failed reader must not close again.
    drop(reader);
    assert_eq!(close_count(&closes), 1);
}

#[test]
fn test_explicit_close_then_drop_closes_once() {
    let (source, closes) = ScriptedSource::new(&[b"a\n"]);
    let mut reader = LineReader::from_source(Box::new(source));

    reader.close();
    reader.close();
    assert_eq!(reader.state(), ReaderState::Closed);
    drop(reader);
    assert_eq!(close_count(&closes), 1);
}

#[test]
fn test_lines_before_failure_remain_valid() {
    let (source, _) = ScriptedSource::failing_after(&[b"a\nb\n", b"c\n"]);
    let mut reader = LineReader::from_source(Box::new(source));

    assert_eq!(reader.next().unwrap().unwrap().line, "a");
    assert_eq!(reader.next().unwrap().unwrap().line, "b");
    assert_eq!(reader.next().unwrap().unwrap().line, "c");
    assert!(reader.next().unwrap().is_err());
}

#[test]
fn test_fused_after_failure() {
    let (source, _) = ScriptedSource::failing_after(&[]);
    let mut reader = LineReader::from_source(Box::new(source));

    assert!(reader.next().unwrap().is_err());
    assert!(reader.next().is_none());
    assert!(reader.next().is_none());
}

#[test]
fn test_unterminated_tail_still_closes_once() {
    let (source, closes) = ScriptedSource::new(&[b"no newline"]);
    let mut reader = LineReader::from_source(Box::new(source));

    assert_eq!(reader.next().unwrap().unwrap().line, "no newline");
    assert_eq!(close_count(&closes), 1);
    assert!(reader.next().is_none());
    assert_eq!(close_count(&closes), 1);
}

#[test]
fn test_failure_during_unwinding_still_closes() {
    let (source, closes) = ScriptedSource::new(&[b"a\nb\n"]);
    let reader = LineReader::from_source(Box::new(source));

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        for record in reader {
            let record = record.unwrap();
            if record.number == 1 {
                panic!("consumer bailed out");
            }
        }
    }));

    assert!(result.is_err());
    assert_eq!(close_count(&closes), 1);
}
