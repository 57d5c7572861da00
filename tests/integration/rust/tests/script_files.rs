//! Script file tests
//!
//! Scripts on disk drive the interpreter through nested word sources and the
//! persisted-object words.

use std::fs;
use std::path::Path;

use core_types::{ErrorKind, Value};
use interpreter::{persist, Interpreter, Message, Status};
use tempfile::TempDir;

fn script(dir: &TempDir, name: &str, text: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path.display().to_string()
}

fn rendered(clac: &Interpreter) -> Vec<String> {
    clac.stack()
        .iter()
        .map(|v| v.render(clac.display()))
        .collect()
}

#[test]
fn test_nested_scripts_drain_before_returning() {
    let dir = tempfile::tempdir().unwrap();
    let inner = script(&dir, "inner.clac", "2\n3\n");
    let outer = script(&dir, "outer.clac", &format!("1 \"{}\" eval\n4\n", inner));

    let mut clac = Interpreter::new();
    clac.include_file(&outer).unwrap();
    assert_eq!(clac.run(), Status::Exhausted);
    assert_eq!(rendered(&clac), vec!["4", "3", "2", "1"]);
}

#[test]
fn test_included_script_runs_before_rest_of_line() {
    let dir = tempfile::tempdir().unwrap();
    let square = script(&dir, "square.clac", "dup *");

    let mut clac = Interpreter::new();
    clac.evaluate(&format!("7 \"{}\" run 1 +", square));
    assert_eq!(clac.top_text().as_deref(), Some("50"));
}

#[test]
fn test_quit_in_script_stops_everything() {
    let dir = tempfile::tempdir().unwrap();
    let stop = script(&dir, "stop.clac", "1 quit 2");

    let mut clac = Interpreter::new();
    assert_eq!(clac.evaluate(&format!("\"{}\" eval 3", stop)), Status::Stopped);
    assert_eq!(rendered(&clac), vec!["1"]);
}

#[test]
fn test_script_defines_variables_for_caller() {
    let dir = tempfile::tempdir().unwrap();
    let setup = script(&dir, "setup.clac", "6.0 \"rate\"\nsto\n");

    let mut clac = Interpreter::new();
    clac.evaluate(&format!("\"{}\" eval 2 rate *", setup));
    assert_eq!(clac.top_text().as_deref(), Some("12.000"));
}

#[test]
fn test_written_object_reads_back_in_new_interpreter() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("third.obj").display().to_string();

    let mut first = Interpreter::new();
    first.evaluate(&format!("1 3 / \"{}\" write", file));
    assert!(first.take_messages().is_empty());
    assert_eq!(rendered(&first), vec!["1/3"]);

    let mut second = Interpreter::new();
    second.evaluate(&format!("\"{}\" read 1/3 +", file));
    assert_eq!(second.top_text().as_deref(), Some("2/3"));
}

#[test]
fn test_read_rejects_foreign_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = script(&dir, "notes.txt", "just some text that is long enough");

    let mut clac = Interpreter::new();
    clac.evaluate(&format!("\"{}\" read", path));
    let messages = clac.take_messages();
    assert!(matches!(
        messages.as_slice(),
        [Message::Error(e)] if e.kind == ErrorKind::IoFailure
    ));
    assert_eq!(clac.stack().height(), 1);
}

#[test]
fn test_persisted_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("v.obj");
    persist::write_object(&path, &Value::string("abc")).unwrap();

    let bytes = fs::read(Path::new(&path)).unwrap();
    assert_eq!(&bytes[..10], persist::SIGNATURE);
    assert_eq!(bytes[18], 10);
}
