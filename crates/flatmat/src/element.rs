use std::fmt;
use std::str::FromStr;

use num_traits::{Num, NumCast};
use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};

/// Runtime tag for the numeric type stored in a matrix.
///
/// Each kind has a one-character type code (`b h i q B H I Q f d`, the codes
/// of the classic `array` module) and a lowercase name (`i8` ... `f64`).
/// Parsing accepts either, plus `l`/`L` for the 64-bit integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ElementKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl ElementKind {
    pub const ALL: [ElementKind; 10] = [
        ElementKind::I8,
        ElementKind::I16,
        ElementKind::I32,
        ElementKind::I64,
        ElementKind::U8,
        ElementKind::U16,
        ElementKind::U32,
        ElementKind::U64,
        ElementKind::F32,
        ElementKind::F64,
    ];

    pub fn typecode(self) -> char {
        match self {
            ElementKind::I8 => 'b',
            ElementKind::I16 => 'h',
            ElementKind::I32 => 'i',
            ElementKind::I64 => 'q',
            ElementKind::U8 => 'B',
            ElementKind::U16 => 'H',
            ElementKind::U32 => 'I',
            ElementKind::U64 => 'Q',
            ElementKind::F32 => 'f',
            ElementKind::F64 => 'd',
        }
    }

    pub fn from_typecode(code: char) -> Result<Self> {
        match code {
            'b' => Ok(ElementKind::I8),
            'h' => Ok(ElementKind::I16),
            'i' => Ok(ElementKind::I32),
            'q' | 'l' => Ok(ElementKind::I64),
            'B' => Ok(ElementKind::U8),
            'H' => Ok(ElementKind::U16),
            'I' => Ok(ElementKind::U32),
            'Q' | 'L' => Ok(ElementKind::U64),
            'f' => Ok(ElementKind::F32),
            'd' => Ok(ElementKind::F64),
            other => Err(MatrixError::UnknownElementType(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::I8 => "i8",
            ElementKind::I16 => "i16",
            ElementKind::I32 => "i32",
            ElementKind::I64 => "i64",
            ElementKind::U8 => "u8",
            ElementKind::U16 => "u16",
            ElementKind::U32 => "u32",
            ElementKind::U64 => "u64",
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
        }
    }

    /// Size of one element in bytes.
    pub fn item_size(self) -> usize {
        match self {
            ElementKind::I8 | ElementKind::U8 => 1,
            ElementKind::I16 | ElementKind::U16 => 2,
            ElementKind::I32 | ElementKind::U32 | ElementKind::F32 => 4,
            ElementKind::I64 | ElementKind::U64 | ElementKind::F64 => 8,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, ElementKind::F32 | ElementKind::F64)
    }

    pub fn is_signed(self) -> bool {
        !matches!(
            self,
            ElementKind::U8 | ElementKind::U16 | ElementKind::U32 | ElementKind::U64
        )
    }
}

impl FromStr for ElementKind {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            return ElementKind::from_typecode(code);
        }
        ElementKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MatrixError::UnknownElementType(s.to_string()))
    }
}

impl TryFrom<String> for ElementKind {
    type Error = MatrixError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ElementKind> for &'static str {
    fn from(kind: ElementKind) -> Self {
        kind.name()
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric types that can be stored in a [`FlatMatrix`](crate::FlatMatrix).
pub trait Element:
    Copy + PartialEq + fmt::Debug + fmt::Display + Num + NumCast + Send + Sync + 'static
{
    const KIND: ElementKind;

    /// Convert an `f64`, failing when the value is out of range for `Self`.
    fn from_f64(value: f64) -> Option<Self> {
        <Self as NumCast>::from(value)
    }

    fn from_i64(value: i64) -> Option<Self> {
        <Self as NumCast>::from(value)
    }

    fn from_u64(value: u64) -> Option<Self> {
        <Self as NumCast>::from(value)
    }
}

macro_rules! impl_element {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const KIND: ElementKind = ElementKind::$kind;
            }
        )*
    };
}

impl_element!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
);
