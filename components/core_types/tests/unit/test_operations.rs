//! Unit tests for operations across kinds

use core_types::{apply_binary, BinaryOp, DisplayState, ErrorKind, FloatMode, Kind, UnaryOp, Value};
use num_bigint::BigInt;

#[cfg(test)]
mod arithmetic_tests {
    use super::*;

    #[test]
    fn test_integer_sum_renders() {
        let state = DisplayState::new();
        let sum = apply_binary(BinaryOp::Add, &Value::integer(3), &Value::integer(4), &state).unwrap();
        assert_eq!(sum.render(&state), "7");
    }

    #[test]
    fn test_big_integers_do_not_overflow() {
        let state = DisplayState::new();
        let big = apply_binary(BinaryOp::Pow, &Value::integer(2), &Value::integer(100), &state).unwrap();
        assert_eq!(big.render(&state), "1267650600228229401496703205376");
    }

    #[test]
    fn test_rational_arithmetic_stays_exact() {
        let state = DisplayState::new();
        let third = Value::rational(BigInt::from(1), BigInt::from(3)).unwrap();
        let sum = apply_binary(BinaryOp::Add, &third, &third, &state).unwrap();
        let sum = apply_binary(BinaryOp::Add, &sum, &third, &state).unwrap();
        assert_eq!(sum.render(&state), "1/1");
    }

    #[test]
    fn test_complex_multiplication() {
        let state = DisplayState::new();
        let i = Value::complex(0.0, 1.0);
        let product = apply_binary(BinaryOp::Mul, &i, &i, &state).unwrap();
        assert_eq!(product, Value::complex(-1.0, 0.0));
    }

    #[test]
    fn test_integer_with_complex_coerces_to_complex() {
        let state = DisplayState::new();
        let sum = apply_binary(BinaryOp::Add, &Value::integer(1), &Value::complex(0.0, 1.0), &state).unwrap();
        assert_eq!(sum.kind(), Kind::Complex);
    }

    #[test]
    fn test_unsupported_unary_reports_kind() {
        let state = DisplayState::new();
        let err = Value::Program("x".into()).apply_unary(UnaryOp::Sin, &state).unwrap_err();
        assert_eq!(err.kind, ErrorKind::KindUnsupported);
        assert!(err.message.contains("PGM"));
    }

    #[test]
    fn test_float_display_modes() {
        let mut state = DisplayState::new();
        let x = Value::Float(1234.5);
        assert_eq!(x.render(&state), "1234.500");
        state.set_float_mode(FloatMode::Scientific, 1);
        assert_eq!(x.render(&state), "1.2E+03");
    }

    #[test]
    fn test_conversion_to_string_uses_rendering() {
        let state = DisplayState::new();
        let text = Value::Float(0.25).convert(Kind::String, &state).unwrap();
        assert_eq!(text, Value::string("0.250"));
    }
}
