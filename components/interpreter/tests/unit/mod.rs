//! Unit tests for interpreter components

use core_types::{ErrorKind, Kind, Value};
use interpreter::{Interpreter, LineSource, MasterSource, Message, OperandStack, Status, WordSource};

fn run(line: &str) -> Interpreter {
    let mut clac = Interpreter::new();
    clac.evaluate(line);
    clac
}

fn levels(clac: &Interpreter) -> Vec<String> {
    clac.stack()
        .iter()
        .map(|v| v.render(clac.display()))
        .collect()
}

fn errors(clac: &mut Interpreter) -> Vec<ErrorKind> {
    clac.take_messages()
        .into_iter()
        .filter_map(|m| match m {
            Message::Error(e) => Some(e.kind),
            Message::Info(_) => None,
        })
        .collect()
}

// ============================================================================
// Operand stack
// ============================================================================

#[test]
fn test_stack_push_height_top() {
    let mut stack = OperandStack::new();
    for n in 0..10 {
        stack.push(Value::integer(n));
        assert_eq!(stack.height() as i64, n + 1);
        assert_eq!(stack.get(0), Some(&Value::integer(n)));
    }
}

#[test]
fn test_stack_roll_round_trip() {
    for k in 0..=5 {
        let mut stack = OperandStack::new();
        for n in 0..5 {
            stack.push(Value::integer(n));
        }
        let before = stack.clone();
        stack.roll_up(k.min(5)).unwrap();
        stack.roll_down(k.min(5)).unwrap();
        assert_eq!(stack, before, "k = {}", k);
    }
}

#[test]
fn test_stack_double_swap_is_identity() {
    let mut stack = OperandStack::new();
    stack.push(Value::string("a"));
    stack.push(Value::Float(1.0));
    let before = stack.clone();
    stack.swap().unwrap();
    assert_ne!(stack, before);
    stack.swap().unwrap();
    assert_eq!(stack, before);
}

#[test]
fn test_stack_pop_empty() {
    let mut stack = OperandStack::new();
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.drop().unwrap_err().kind, ErrorKind::Underflow);
    assert_eq!(stack.height(), 0);
}

// ============================================================================
// Word sources
// ============================================================================

#[test]
fn test_master_source_nesting() {
    let mut master = MasterSource::new();
    master.push(Box::new(LineSource::new("a b")));
    assert_eq!(master.next_word().as_deref(), Some("a"));
    master.push(Box::new(LineSource::new("x y")));
    assert_eq!(master.depth(), 2);
    let rest: Vec<String> = std::iter::from_fn(|| master.next_word()).collect();
    assert_eq!(rest, vec!["x", "y", "b"]);
    assert_eq!(master.next_word(), None);
}

// ============================================================================
// Evaluation scenarios
// ============================================================================

#[test]
fn test_scenario_add() {
    let clac = run("3 4 +");
    assert_eq!(levels(&clac), vec!["7"]);
}

#[test]
fn test_scenario_mod() {
    assert_eq!(levels(&run("10 3 mod")), vec!["1"]);
}

#[test]
fn test_scenario_dup_multiply() {
    assert_eq!(levels(&run("5 dup *")), vec!["25"]);
}

#[test]
fn test_scenario_rot() {
    assert_eq!(levels(&run("1 2 3 rot")), vec!["1", "3", "2"]);
}

#[test]
fn test_scenario_bogus_word() {
    let mut clac = run("bogusword");
    assert!(clac.take_messages().is_empty());
    assert_eq!(clac.stack().height(), 0);
}

#[test]
fn test_dispatch_priority_over_literals() {
    // "-" must resolve to subtraction, not a malformed literal.
    assert_eq!(levels(&run("5 3 -")), vec!["2"]);
    assert_eq!(levels(&run("-3")), vec!["-3"]);
}

#[test]
fn test_mixed_kind_arithmetic() {
    assert_eq!(levels(&run("1 2 /")), vec!["1/2"]);
    assert_eq!(levels(&run("1/2 0.5 +")), vec!["1.000"]);
    assert_eq!(levels(&run("(1,2) 1 +")), vec!["(2.000, 2.000)"]);
}

#[test]
fn test_conversion_words() {
    assert_eq!(levels(&run("3.7 >INT")), vec!["3"]);
    assert_eq!(levels(&run("255 >BIN")), vec!["#FFh"]);
    assert_eq!(levels(&run("42 >STR")), vec!["42"]);
    let clac = run("42 >STR");
    assert_eq!(clac.stack().get(0).map(Value::kind), Some(Kind::String));
}

#[test]
fn test_display_words() {
    assert_eq!(levels(&run("#FF dec")), vec!["#255d"]);
    assert_eq!(levels(&run("3.14159 2 fix")), vec!["3.14"]);
    assert_eq!(levels(&run("1234.5 2 sci")), vec!["1.23E+03"]);
    assert_eq!(levels(&run("90 rad sin deg 90 sin")).len(), 2);
}

#[test]
fn test_word_size() {
    assert_eq!(levels(&run("8 stws #FF #1 +")), vec!["#0h"]);
    let mut clac = run("0 stws");
    assert_eq!(errors(&mut clac), vec![ErrorKind::Domain]);
    assert_eq!(clac.stack().height(), 1);
}

#[test]
fn test_narrowed_word_size_applies_to_held_binaries() {
    assert_eq!(levels(&run("#FFFF 8 stws #FF ==")), vec!["1"]);
    assert_eq!(levels(&run("#FFFF 8 stws #FE >")), vec!["1"]);
    assert_eq!(levels(&run("#FFFF 8 stws >INT")), vec!["255"]);
    assert_eq!(levels(&run("#1FF 8 stws >BIN 16 stws")), vec!["#FFh"]);
}

#[test]
fn test_huge_power_is_rejected() {
    let mut clac = run("2 4000000000 ^");
    assert_eq!(errors(&mut clac), vec![ErrorKind::Domain]);
    assert_eq!(clac.stack().height(), 2);
}

#[test]
fn test_stack_words() {
    assert_eq!(levels(&run("1 2 3 2 dupn")), vec!["3", "2", "3", "2", "1"]);
    assert_eq!(levels(&run("1 2 3 2 dropn")), vec!["1"]);
    assert_eq!(levels(&run("1 2 3 3 roll")), vec!["1", "3", "2"]);
    assert_eq!(levels(&run("1 2 3 3 rolld")), vec!["2", "1", "3"]);
    assert_eq!(levels(&run("1 2 swap")), vec!["1", "2"]);
    assert!(levels(&run("1 2 3 clear")).is_empty());
}

#[test]
fn test_failures_do_not_abort_line() {
    let mut clac = run("swap 1 0 / 2");
    assert_eq!(
        errors(&mut clac),
        vec![ErrorKind::InsufficientHeight, ErrorKind::Domain]
    );
    assert_eq!(levels(&clac), vec!["2", "0", "1"]);
}

#[test]
fn test_kind_errors() {
    let mut clac = run("\"a\" 1 +");
    assert_eq!(errors(&mut clac), vec![ErrorKind::ConversionUnavailable]);
    let mut clac = run("\"a\" neg");
    assert_eq!(errors(&mut clac), vec![ErrorKind::KindUnsupported]);
    let mut clac = run("1 eval");
    assert_eq!(errors(&mut clac), vec![ErrorKind::TypeMismatch]);
}

#[test]
fn test_exit_and_off_do_not_stop() {
    let mut clac = Interpreter::new();
    assert_eq!(clac.evaluate("exit off 1"), Status::Exhausted);
    let messages = clac.take_messages();
    assert_eq!(messages.len(), 2);
    assert!(messages
        .iter()
        .all(|m| m.to_string() == "Use 'quit' to terminate Clac"));
    assert_eq!(levels(&clac), vec!["1"]);
}

#[test]
fn test_info_banner() {
    let mut clac = run("info");
    let messages = clac.take_messages();
    assert!(matches!(&messages[..], [Message::Info(text)] if text.contains("Clac")));
}

#[test]
fn test_string_literals_keep_spaces() {
    assert_eq!(levels(&run("\"hello world\" \"!\" +")), vec!["hello world!"]);
}

#[test]
fn test_submit_then_run() {
    let mut clac = Interpreter::new();
    clac.submit("1");
    clac.submit("2");
    // The most recent submission is read first.
    assert_eq!(clac.run(), Status::Exhausted);
    assert_eq!(levels(&clac), vec!["1", "2"]);
}
