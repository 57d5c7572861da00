//! Unit tests for ClacError

use core_types::{ClacError, ErrorKind, Kind};

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_error_kinds_are_distinct() {
        let kinds = [
            ErrorKind::Underflow,
            ErrorKind::InsufficientHeight,
            ErrorKind::KindUnsupported,
            ErrorKind::ConversionUnavailable,
            ErrorKind::TypeMismatch,
            ErrorKind::MalformedLiteral,
            ErrorKind::IoFailure,
            ErrorKind::Domain,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_underflow_message() {
        let error = ClacError::underflow();
        assert_eq!(error.kind, ErrorKind::Underflow);
        assert_eq!(format!("{}", error), "Stack underflow");
    }

    #[test]
    fn test_unsupported_names_kind() {
        let error = ClacError::unsupported("negate", Kind::String);
        assert_eq!(error.kind, ErrorKind::KindUnsupported);
        assert_eq!(error.message, "Unable to negate a STR object");
    }

    #[test]
    fn test_type_mismatch_names_found_kind() {
        let error = ClacError::type_mismatch("String", Kind::Integer);
        assert_eq!(error.kind, ErrorKind::TypeMismatch);
        assert!(error.message.contains("INT"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&ClacError::io("cannot open"));
    }

    #[test]
    fn test_error_clone_and_eq() {
        let a = ClacError::malformed_literal("12x");
        assert_eq!(a.clone(), a);
    }
}
