use std::fmt;

use fixed::types::I16F16;

/// 16.16-bit signed fixed-point number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fixed(pub i32);

impl Fixed {
    pub const VERSION_0_5: Self = Self(0x0000_5000);
    pub const VERSION_1_0: Self = Self(0x0001_0000);
    pub const VERSION_1_1: Self = Self(0x0001_1000);

    /// The signed integer half
    pub const fn major(self) -> i16 {
        (self.0 >> 16) as i16
    }

    /// The unsigned fraction half
    pub const fn minor(self) -> u16 {
        self.0 as u16
    }

    /// Approximates the value as `major + minor / 65535`, matching the rounding
    /// font tools apply when they print revision numbers
    pub fn to_f32(self) -> f32 {
        f32::from(self.major()) + f32::from(self.minor()) / 65535.0
    }

    /// The exact binary value
    pub fn to_fixed(self) -> I16F16 {
        I16F16::from_bits(self.0)
    }
}

/// 16-bit signed integer that describes a quantity in FUnits, the smallest
/// measurable distance in em space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct FWord(pub i16);

/// The long internal format of a date in seconds since 12:00 midnight, January
/// 1, 1904. It is represented as a signed 64-bit integer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongDateTime(pub i64);

impl LongDateTime {
    /// Seconds between 1904-01-01 and 1970-01-01
    const UNIX_EPOCH_DELTA: i64 = 2_082_844_800;

    pub fn to_unix_timestamp(self) -> i64 {
        self.0 - Self::UNIX_EPOCH_DELTA
    }
}

/// Index of a glyph inside a font. Glyph 0 is `.notdef`, which doubles as the
/// "no mapping" result of every lookup
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlyphId(pub u32);

impl GlyphId {
    pub const NOTDEF: Self = Self(0);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn is_notdef(self) -> bool {
        self.0 == 0
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for GlyphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GlyphId({})", self.0)
    }
}

impl From<u16> for GlyphId {
    fn from(id: u16) -> Self {
        Self(u32::from(id))
    }
}
