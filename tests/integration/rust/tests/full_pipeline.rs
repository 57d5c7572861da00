//! Full pipeline tests
//!
//! Words go through the tokenizer, literal parser, dispatch tables and value
//! tower; results are checked as rendered text.

use core_types::ErrorKind;
use integration_tests::{eval_stack, eval_top};
use interpreter::{Interpreter, Message, Status};

#[test]
fn test_basic_arithmetic_scenarios() {
    assert_eq!(eval_top("3 4 +").as_deref(), Some("7"));
    assert_eq!(eval_top("10 3 mod").as_deref(), Some("1"));
    assert_eq!(eval_top("5 dup *").as_deref(), Some("25"));
    assert_eq!(eval_stack("1 2 3 rot"), vec!["1", "3", "2"]);
}

#[test]
fn test_integer_division_promotes_to_rational() {
    assert_eq!(eval_top("6 3 /").as_deref(), Some("2"));
    assert_eq!(eval_top("1 2 /").as_deref(), Some("1/2"));
    assert_eq!(eval_top("2 -1 ^").as_deref(), Some("1/2"));
    assert_eq!(eval_top("1/3 1/6 +").as_deref(), Some("1/2"));
}

#[test]
fn test_mixed_kinds_coerce() {
    assert_eq!(eval_top("1/4 0.5 +").as_deref(), Some("0.750"));
    assert_eq!(eval_top("(1,2) 1 +").as_deref(), Some("(2.000, 2.000)"));
    assert_eq!(eval_top("#ff 1 +").as_deref(), Some("256"));
    assert_eq!(eval_top("#ff #1 +").as_deref(), Some("#100h"));
}

#[test]
fn test_big_integers_do_not_overflow() {
    assert_eq!(
        eval_top("2 100 ^").as_deref(),
        Some("1267650600228229401496703205376")
    );
}

#[test]
fn test_negative_square_root_is_complex() {
    assert_eq!(eval_top("-4 sqrt").as_deref(), Some("(0.000, 2.000)"));
    assert_eq!(eval_top("16 sqrt").as_deref(), Some("4"));
}

#[test]
fn test_angle_modes() {
    assert_eq!(eval_top("90 sin").as_deref(), Some("1.000"));
    assert_eq!(eval_top("grad 100 sin").as_deref(), Some("1.000"));
    assert_eq!(eval_top("rad 0 cos").as_deref(), Some("1.000"));
    assert_eq!(eval_top("1 atan").as_deref(), Some("45.000"));
}

#[test]
fn test_float_modes() {
    assert_eq!(eval_top("2 fix 3.14159").as_deref(), Some("3.14"));
    assert_eq!(eval_top("2 sci 12345.0").as_deref(), Some("1.23E+04"));
    assert_eq!(eval_top("2 eng 12340.0").as_deref(), Some("12.34E+03"));
}

#[test]
fn test_comparisons_yield_integers() {
    assert_eq!(eval_top("1 2 <").as_deref(), Some("1"));
    assert_eq!(eval_top("1/2 0.5 ==").as_deref(), Some("1"));
    assert_eq!(eval_top("\"a\" \"b\" ==").as_deref(), Some("0"));
}

#[test]
fn test_strings_and_conversions() {
    assert_eq!(eval_top("\"hello \" \"world\" +").as_deref(), Some("hello world"));
    assert_eq!(eval_top("7 >STR \"!\" +").as_deref(), Some("7!"));
    assert_eq!(eval_top("9.99 >INT").as_deref(), Some("9"));
    assert_eq!(eval_top("0.25 >RAT").as_deref(), Some("1/4"));
}

#[test]
fn test_binary_words() {
    assert_eq!(eval_top("#1 sl sl").as_deref(), Some("#4h"));
    assert_eq!(eval_top("#8 sr").as_deref(), Some("#4h"));
    assert_eq!(eval_top("8 stws #1ff").as_deref(), Some("#FFh"));
    assert_eq!(eval_top("#1010b dec").as_deref(), Some("#10d"));
}

#[test]
fn test_failures_report_and_continue() {
    let mut clac = Interpreter::new();
    assert_eq!(clac.evaluate("\"x\" 1 + \"y\" *"), Status::Exhausted);
    let messages = clac.take_messages();
    let kinds: Vec<ErrorKind> = messages
        .iter()
        .filter_map(|m| match m {
            Message::Error(e) => Some(e.kind),
            Message::Info(_) => None,
        })
        .collect();
    assert_eq!(kinds, vec![ErrorKind::ConversionUnavailable, ErrorKind::ConversionUnavailable]);
    assert_eq!(clac.stack().height(), 3);
}

#[test]
fn test_unknown_words_vanish() {
    assert!(eval_stack("bogusword").is_empty());
    assert_eq!(eval_stack("1 bogusword 2"), vec!["2", "1"]);
}

#[test]
fn test_variables() {
    assert_eq!(eval_top("3 \"x\" sto x x *").as_deref(), Some("9"));
}
