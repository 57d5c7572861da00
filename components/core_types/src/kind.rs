//! The discriminant of the twelve value kinds.

use std::fmt;

/// The kind of a [`Value`](crate::Value).
///
/// The declaration order is significant: [`Kind::index`] is used to index the
/// conversion table and as the type tag of persisted objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// Fixed-width unsigned word
    Binary,
    /// Double precision complex number
    Complex,
    /// Name to value mapping
    Directory,
    /// Double precision real number
    Float,
    /// Arbitrary precision integer
    Integer,
    /// A value with a name attached
    Labeled,
    /// Ordered sequence of values
    List,
    /// Two dimensional grid of values
    Matrix,
    /// Opaque program text
    Program,
    /// Arbitrary precision fraction
    Rational,
    /// Text
    String,
    /// Ordered sequence of values with arithmetic
    Vector,
}

impl Kind {
    /// Number of kinds
    pub const COUNT: usize = 12;

    /// Every kind, in index order
    pub const ALL: [Kind; Kind::COUNT] = [
        Kind::Binary,
        Kind::Complex,
        Kind::Directory,
        Kind::Float,
        Kind::Integer,
        Kind::Labeled,
        Kind::List,
        Kind::Matrix,
        Kind::Program,
        Kind::Rational,
        Kind::String,
        Kind::Vector,
    ];

    /// Position of this kind in [`Kind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look a kind up by its index
    pub fn from_index(index: usize) -> Option<Kind> {
        Kind::ALL.get(index).copied()
    }

    /// Three letter abbreviation shown in stack listings
    ///
    /// ```
    /// use core_types::Kind;
    ///
    /// assert_eq!(Kind::Integer.abbreviation(), "INT");
    /// assert_eq!(Kind::Program.abbreviation(), "PGM");
    /// ```
    pub fn abbreviation(self) -> &'static str {
        match self {
            Kind::Binary => "BIN",
            Kind::Complex => "CPX",
            Kind::Directory => "DIR",
            Kind::Float => "FLT",
            Kind::Integer => "INT",
            Kind::Labeled => "LBL",
            Kind::List => "LST",
            Kind::Matrix => "MAT",
            Kind::Program => "PGM",
            Kind::Rational => "RAT",
            Kind::String => "STR",
            Kind::Vector => "VEC",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}
