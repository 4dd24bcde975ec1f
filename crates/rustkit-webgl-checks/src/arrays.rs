//! Typed array element types.
//!
//! Maps the storage kind of a typed array to the GL type constant that
//! describes its elements, and back.

use std::fmt;

use crate::catalog::{constants, GLenum};
use crate::error::{Result, WebGLCheckError};

/// Storage kind of a typed array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayKind {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
    BigInt64,
    BigUint64,
}

impl ArrayKind {
    /// Typed array constructor name, as shown in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ArrayKind::Int8 => "Int8Array",
            ArrayKind::Uint8 => "Uint8Array",
            ArrayKind::Uint8Clamped => "Uint8ClampedArray",
            ArrayKind::Int16 => "Int16Array",
            ArrayKind::Uint16 => "Uint16Array",
            ArrayKind::Int32 => "Int32Array",
            ArrayKind::Uint32 => "Uint32Array",
            ArrayKind::Float32 => "Float32Array",
            ArrayKind::Float64 => "Float64Array",
            ArrayKind::BigInt64 => "BigInt64Array",
            ArrayKind::BigUint64 => "BigUint64Array",
        }
    }

    /// Bytes per element.
    pub fn element_size(&self) -> usize {
        match self {
            ArrayKind::Int8 | ArrayKind::Uint8 | ArrayKind::Uint8Clamped => 1,
            ArrayKind::Int16 | ArrayKind::Uint16 => 2,
            ArrayKind::Int32 | ArrayKind::Uint32 | ArrayKind::Float32 => 4,
            ArrayKind::Float64 | ArrayKind::BigInt64 | ArrayKind::BigUint64 => 8,
        }
    }
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ==================== TypedArray ====================

/// Anything with a typed array storage kind.
pub trait TypedArray {
    fn kind(&self) -> ArrayKind;
}

/// Bytes that clamp on write, like `Uint8ClampedArray`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Clamped<T>(pub T);

impl<T: AsRef<[u8]>> TypedArray for Clamped<T> {
    fn kind(&self) -> ArrayKind {
        ArrayKind::Uint8Clamped
    }
}

impl TypedArray for ArrayKind {
    fn kind(&self) -> ArrayKind {
        *self
    }
}

impl<A: TypedArray + ?Sized> TypedArray for &A {
    fn kind(&self) -> ArrayKind {
        (**self).kind()
    }
}

macro_rules! impl_typed_array {
    ($($elem:ty => $kind:ident),* $(,)?) => {
        $(
            impl TypedArray for [$elem] {
                fn kind(&self) -> ArrayKind {
                    ArrayKind::$kind
                }
            }

            impl<const N: usize> TypedArray for [$elem; N] {
                fn kind(&self) -> ArrayKind {
                    ArrayKind::$kind
                }
            }

            impl TypedArray for Vec<$elem> {
                fn kind(&self) -> ArrayKind {
                    ArrayKind::$kind
                }
            }
        )*
    };
}

impl_typed_array! {
    i8 => Int8,
    u8 => Uint8,
    i16 => Int16,
    u16 => Uint16,
    i32 => Int32,
    u32 => Uint32,
    f32 => Float32,
    f64 => Float64,
    i64 => BigInt64,
    u64 => BigUint64,
}

// ==================== Coercions ====================

/// GL element type of `array`.
///
/// Fails for storage kinds GL has no element type for, such as `f64`.
pub fn type_from_array<A: TypedArray + ?Sized>(array: &A) -> Result<GLenum> {
    // Ordered by likelihood
    match array.kind() {
        ArrayKind::Float32 => Ok(constants::FLOAT),
        ArrayKind::Uint16 => Ok(constants::UNSIGNED_SHORT),
        ArrayKind::Uint32 => Ok(constants::UNSIGNED_INT),
        ArrayKind::Uint8 => Ok(constants::UNSIGNED_BYTE),
        ArrayKind::Uint8Clamped => Ok(constants::UNSIGNED_BYTE),
        ArrayKind::Int8 => Ok(constants::BYTE),
        ArrayKind::Int16 => Ok(constants::SHORT),
        ArrayKind::Int32 => Ok(constants::INT),
        ArrayKind::Float64 | ArrayKind::BigInt64 | ArrayKind::BigUint64 => {
            Err(WebGLCheckError::unsupported("Failed to deduce type from array"))
        }
    }
}

/// Array storage kind for GL element type `gl_type`.
///
/// Packed 16-bit pixel types share `Uint16` storage. `UNSIGNED_BYTE` maps
/// to `Uint8Clamped` when `clamped` is set.
pub fn array_kind_from_type(gl_type: GLenum, clamped: bool) -> Result<ArrayKind> {
    match gl_type {
        constants::FLOAT => Ok(ArrayKind::Float32),
        constants::UNSIGNED_SHORT
        | constants::UNSIGNED_SHORT_5_6_5
        | constants::UNSIGNED_SHORT_4_4_4_4
        | constants::UNSIGNED_SHORT_5_5_5_1 => Ok(ArrayKind::Uint16),
        // TODO: UNSIGNED_INT_2_10_10_10_REV, UNSIGNED_INT_10F_11F_11F_REV,
        // UNSIGNED_INT_5_9_9_9_REV and UNSIGNED_INT_24_8 also pack into Uint32.
        constants::UNSIGNED_INT => Ok(ArrayKind::Uint32),
        constants::UNSIGNED_BYTE if clamped => Ok(ArrayKind::Uint8Clamped),
        constants::UNSIGNED_BYTE => Ok(ArrayKind::Uint8),
        constants::BYTE => Ok(ArrayKind::Int8),
        constants::SHORT => Ok(ArrayKind::Int16),
        constants::INT => Ok(ArrayKind::Int32),
        _ => Err(WebGLCheckError::unsupported("Failed to deduce array kind from type")),
    }
}
