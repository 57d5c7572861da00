//! Unit tests for the Value enum

use core_types::{DisplayState, Kind, Value};
use num_bigint::BigInt;
use std::collections::BTreeMap;

fn samples() -> Vec<Value> {
    let mut entries = BTreeMap::new();
    entries.insert("a".to_string(), Value::integer(1));
    vec![
        Value::Binary(0x2A),
        Value::complex(1.0, -1.0),
        Value::Directory(entries),
        Value::Float(2.5),
        Value::integer(-7),
        Value::labeled("x", Value::Float(1.0)),
        Value::List(vec![Value::integer(1), Value::string("s")]),
        Value::Matrix(vec![vec![Value::integer(1), Value::integer(2)]]),
        Value::Program("dup *".to_string()),
        Value::rational(BigInt::from(2), BigInt::from(3)).unwrap(),
        Value::string("hello"),
        Value::Vector(vec![Value::Float(0.5)]),
    ]
}

#[cfg(test)]
mod value_kind_tests {
    use super::*;

    #[test]
    fn test_samples_cover_every_kind() {
        let kinds: Vec<Kind> = samples().iter().map(Value::kind).collect();
        assert_eq!(kinds, Kind::ALL.to_vec());
    }

    #[test]
    fn test_binary_masks_on_construction() {
        let mut state = DisplayState::new();
        state.word_size = 4;
        assert_eq!(Value::binary(0xFF, &state), Value::Binary(0xF));
    }
}

#[cfg(test)]
mod duplicate_tests {
    use super::*;

    #[test]
    fn test_duplicate_same_kind_and_text() {
        let state = DisplayState::new();
        for value in samples() {
            let copy = value.duplicate();
            assert_eq!(copy.kind(), value.kind());
            assert_eq!(copy.render(&state), value.render(&state));
        }
    }

    #[test]
    fn test_duplicate_of_aggregate_is_independent() {
        let original = Value::Vector(vec![Value::integer(1), Value::integer(2)]);
        let mut copy = original.duplicate();
        if let Value::Vector(items) = &mut copy {
            items[0] = Value::integer(99);
            items.push(Value::integer(3));
        }
        assert_eq!(
            original,
            Value::Vector(vec![Value::integer(1), Value::integer(2)])
        );
    }

    #[test]
    fn test_duplicate_of_directory_is_independent() {
        let mut entries = BTreeMap::new();
        entries.insert("k".to_string(), Value::List(vec![]));
        let original = Value::Directory(entries);
        let mut copy = original.duplicate();
        if let Value::Directory(map) = &mut copy {
            map.insert("other".to_string(), Value::integer(0));
        }
        if let Value::Directory(map) = &original {
            assert_eq!(map.len(), 1);
        }
    }
}
