//! Permissive integer coercion, the `int()` builtin.
//!
//! Rules are tried in a fixed order:
//!
//! 1. Integers of any width are converted with `as i64`. There is no overflow
//!    check, so a `u64` above `i64::MAX` is reinterpreted bit for bit and comes
//!    out negative. It is not clamped.
//! 2. Floats are truncated toward zero. Values outside the `i64` range
//!    saturate and NaN becomes `0`.
//! 3. Strings are parsed as a base-10 integer first, then as a float which is
//!    truncated as above. Surrounding whitespace is not trimmed.
//! 4. Anything else is rejected.

use tracing::trace;

use crate::error::ConversionError;
use crate::value::Value;
use crate::Str;


/// Coerce `value` into an `i64`.
///
/// Note that `u64::MAX` becomes `-1`.
pub fn to_int(value: &Value<'_>) -> Result<i64, ConversionError> {
    let result = match *value {
        Value::I8(v) => Ok(v as i64),
        Value::I16(v) => Ok(v as i64),
        Value::I32(v) => Ok(v as i64),
        Value::I64(v) => Ok(v),
        Value::Isize(v) => Ok(v as i64),
        Value::U8(v) => Ok(v as i64),
        Value::U16(v) => Ok(v as i64),
        Value::U32(v) => Ok(v as i64),
        Value::U64(v) => Ok(v as i64),
        Value::Usize(v) => Ok(v as i64),
        Value::F32(v) => Ok(v as i64),
        Value::F64(v) => Ok(v as i64),
        Value::Str(ref v) => parse(v),
        Value::Unit | Value::Bool(_) | Value::List(_) | Value::Map(_) => {
            Err(ConversionError::UnsupportedType {
                type_name: value.type_name(),
            })
        }
    };

    if let Err(e) = &result {
        trace!(type_name = value.type_name(), error = %e, "int() rejected value");
    }

    result
}

fn parse(s: &str) -> Result<i64, ConversionError> {
    if let Ok(v) = s.parse::<i64>() {
        return Ok(v);
    }

    match s.parse::<f64>() {
        // out-of-range literals like `1e400` parse to infinity, only `inf` and `nan` may
        Ok(v) if v.is_finite() || is_non_finite_literal(s) => Ok(v as i64),
        _ => Err(ConversionError::UnparsableNumber {
            input: s.to_owned(),
        }),
    }
}

fn is_non_finite_literal(s: &str) -> bool {
    let s = s.strip_prefix(|c| c == '+' || c == '-').unwrap_or(s);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|name| s.eq_ignore_ascii_case(name))
}

/// Types which can be passed to `int()` directly.
pub trait CoerceInt {
    fn coerce_int(&self) -> Result<i64, ConversionError>;
}

impl CoerceInt for Value<'_> {
    #[inline]
    fn coerce_int(&self) -> Result<i64, ConversionError> {
        to_int(self)
    }
}

impl CoerceInt for str {
    #[inline]
    fn coerce_int(&self) -> Result<i64, ConversionError> {
        to_int(&Value::Str(Str::borrowed(self)))
    }
}

impl CoerceInt for String {
    #[inline]
    fn coerce_int(&self) -> Result<i64, ConversionError> {
        self.as_str().coerce_int()
    }
}

macro_rules! impl_coerce_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CoerceInt for $ty {
                #[inline]
                fn coerce_int(&self) -> Result<i64, ConversionError> {
                    to_int(&Value::from(*self))
                }
            }
        )*
    };
}

impl_coerce_int!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
