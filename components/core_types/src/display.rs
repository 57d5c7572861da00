//! Display state: the formatting configuration consulted when rendering values.
//!
//! There is exactly one `DisplayState` per interpreter. Action words such as
//! `hex`, `deg` or `fix` mutate it; every render reads it.

use std::f64::consts::PI;

/// Unit used for angles in trigonometric functions and polar display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleMode {
    /// Radians
    Radian,
    /// Degrees (360 per turn)
    Degree,
    /// Gradians (400 per turn)
    Gradian,
}

/// Base used when rendering binary words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// Base 10
    Decimal,
    /// Base 2
    Binary,
    /// Base 16
    Hex,
    /// Base 8
    Octal,
}

impl Base {
    /// Numeric radix
    pub fn radix(self) -> u32 {
        match self {
            Base::Decimal => 10,
            Base::Binary => 2,
            Base::Hex => 16,
            Base::Octal => 8,
        }
    }

    /// Suffix written after a binary word's digits
    pub fn suffix(self) -> char {
        match self {
            Base::Decimal => 'd',
            Base::Binary => 'b',
            Base::Hex => 'h',
            Base::Octal => 'o',
        }
    }

    /// Base named by a binary literal suffix
    pub fn from_suffix(suffix: char) -> Option<Base> {
        match suffix.to_ascii_lowercase() {
            'd' => Some(Base::Decimal),
            'b' => Some(Base::Binary),
            'h' => Some(Base::Hex),
            'o' => Some(Base::Octal),
            _ => None,
        }
    }
}

/// Presentation of complex numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexMode {
    /// `(re, im)`
    Rectangular,
    /// `(magnitude @ angle)`
    Polar,
}

/// Presentation of floating point numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatMode {
    /// Fixed number of decimals
    Fixed,
    /// Mantissa and exponent
    Scientific,
    /// Like scientific, with the exponent a multiple of three
    Engineering,
}

/// Process-wide display configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Angle unit
    pub angle_mode: AngleMode,
    /// Base for binary words
    pub base: Base,
    /// Complex presentation
    pub complex_mode: ComplexMode,
    /// Float presentation
    pub float_mode: FloatMode,
    /// Decimals shown by the float presentation
    pub decimal_count: usize,
    /// Width in bits of binary words, 1..=32
    pub word_size: u32,
}

impl DisplayState {
    /// Largest supported binary word size
    pub const MAX_WORD_SIZE: u32 = 32;

    /// Create the default display state
    pub fn new() -> Self {
        Self {
            angle_mode: AngleMode::Degree,
            base: Base::Hex,
            complex_mode: ComplexMode::Rectangular,
            float_mode: FloatMode::Fixed,
            decimal_count: 3,
            word_size: Self::MAX_WORD_SIZE,
        }
    }

    /// Select a float presentation and its decimal count
    pub fn set_float_mode(&mut self, mode: FloatMode, decimals: usize) {
        self.float_mode = mode;
        self.decimal_count = decimals;
    }

    /// Mask selecting the low `word_size` bits
    pub fn word_mask(&self) -> u64 {
        let bits = self.word_size.clamp(1, Self::MAX_WORD_SIZE);
        (1u64 << bits) - 1
    }

    /// The visible part of a stored binary word
    pub fn word(&self, bits: u32) -> u64 {
        u64::from(bits) & self.word_mask()
    }

    /// Convert an angle in the current unit to radians
    pub fn to_radians(&self, angle: f64) -> f64 {
        match self.angle_mode {
            AngleMode::Radian => angle,
            AngleMode::Degree => angle * PI / 180.0,
            AngleMode::Gradian => angle * PI / 200.0,
        }
    }

    /// Convert radians to an angle in the current unit
    pub fn from_radians(&self, radians: f64) -> f64 {
        match self.angle_mode {
            AngleMode::Radian => radians,
            AngleMode::Degree => radians / PI * 180.0,
            AngleMode::Gradian => radians / PI * 200.0,
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}
