use std::fmt::{self, Display};

use crate::util::JoinIter as _;
use crate::{HashMap, Str};

/// A value whose type is only known at runtime.
///
/// This is everything a Loom program can hand to a prelude function.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value<'a> {
    #[default]
    Unit,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Str(Str<'a>),
    List(Vec<Value<'a>>),
    Map(HashMap<Str<'a>, Value<'a>>),
}

impl<'a> Value<'a> {
    /// Name of the runtime type, as reported in errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::Isize(_) => "isize",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::Usize(_) => "usize",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::I8(_)
                | Self::I16(_)
                | Self::I32(_)
                | Self::I64(_)
                | Self::Isize(_)
                | Self::U8(_)
                | Self::U16(_)
                | Self::U32(_)
                | Self::U64(_)
                | Self::Usize(_)
        )
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32(_) | Self::F64(_))
    }

    #[inline]
    pub fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(&**v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value<'a>]> {
        match self {
            Self::List(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&HashMap<Str<'a>, Value<'a>>> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Detach the value from any borrowed string data.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Self::Unit => Value::Unit,
            Self::Bool(v) => Value::Bool(v),
            Self::I8(v) => Value::I8(v),
            Self::I16(v) => Value::I16(v),
            Self::I32(v) => Value::I32(v),
            Self::I64(v) => Value::I64(v),
            Self::Isize(v) => Value::Isize(v),
            Self::U8(v) => Value::U8(v),
            Self::U16(v) => Value::U16(v),
            Self::U32(v) => Value::U32(v),
            Self::U64(v) => Value::U64(v),
            Self::Usize(v) => Value::Usize(v),
            Self::F32(v) => Value::F32(v),
            Self::F64(v) => Value::F64(v),
            Self::Str(v) => Value::Str(owned(v)),
            Self::List(items) => Value::List(items.into_iter().map(Value::into_owned).collect()),
            Self::Map(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (owned(k), v.into_owned()))
                    .collect(),
            ),
        }
    }
}

fn owned(s: Str<'_>) -> Str<'static> {
    Str::owned(s.into_owned())
}

macro_rules! scalar_conversions {
    ($($ty:ident),* $(,)?) => {
        paste::paste! {
            impl Value<'_> {
                $(
                    #[inline]
                    pub fn [<is_ $ty>](&self) -> bool {
                        matches!(self, Self::[<$ty:camel>](_))
                    }

                    #[inline]
                    pub fn [<as_ $ty>](&self) -> Option<$ty> {
                        match self {
                            Self::[<$ty:camel>](v) => Some(*v),
                            _ => None,
                        }
                    }
                )*
            }

            $(
                impl From<$ty> for Value<'_> {
                    #[inline]
                    fn from(value: $ty) -> Self {
                        Self::[<$ty:camel>](value)
                    }
                }
            )*
        }
    };
}

scalar_conversions!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<()> for Value<'_> {
    #[inline]
    fn from(_: ()) -> Self {
        Self::Unit
    }
}

impl<'a> From<&'a str> for Value<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::Str(Str::borrowed(value))
    }
}

impl From<String> for Value<'_> {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(Str::owned(value))
    }
}

impl<'a> From<Str<'a>> for Value<'a> {
    #[inline]
    fn from(value: Str<'a>) -> Self {
        Self::Str(value)
    }
}

impl<'a, T: Into<Value<'a>>> From<Vec<T>> for Value<'a> {
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<'a> From<HashMap<Str<'a>, Value<'a>>> for Value<'a> {
    #[inline]
    fn from(value: HashMap<Str<'a>, Value<'a>>) -> Self {
        Self::Map(value)
    }
}

impl<'a> FromIterator<Value<'a>> for Value<'a> {
    fn from_iter<I: IntoIterator<Item = Value<'a>>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(Str<'a>, Value<'a>)> for Value<'a> {
    fn from_iter<I: IntoIterator<Item = (Str<'a>, Value<'a>)>>(iter: I) -> Self {
        Self::Map(iter.into_iter().collect())
    }
}

/// Shortest representation, switching to exponent form with at least two
/// exponent digits when the decimal exponent is below -4 or at least 6,
/// e.g. `1e+06`, `1.5e-07`. Infinities are `+Inf`/`-Inf`.
fn fmt_float<T>(f: &mut fmt::Formatter<'_>, v: T, nan: bool, infinite: bool) -> fmt::Result
where
    T: Copy + Display + fmt::LowerExp + PartialOrd + Default,
{
    if nan {
        return f.write_str("NaN");
    }
    if infinite {
        return f.write_str(if v < T::default() { "-Inf" } else { "+Inf" });
    }

    let sci = format!("{v:e}");
    let (mantissa, exp) = match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= 6 {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exp.unsigned_abs())
    } else {
        Display::fmt(&v, f)
    }
}

struct MapEntry<'v, 'a>(&'v Str<'a>, &'v Value<'a>);

impl Display for MapEntry<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.0, self.1)
    }
}

impl Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("<nil>"),
            Self::Bool(v) => Display::fmt(v, f),
            Self::I8(v) => Display::fmt(v, f),
            Self::I16(v) => Display::fmt(v, f),
            Self::I32(v) => Display::fmt(v, f),
            Self::I64(v) => Display::fmt(v, f),
            Self::Isize(v) => Display::fmt(v, f),
            Self::U8(v) => Display::fmt(v, f),
            Self::U16(v) => Display::fmt(v, f),
            Self::U32(v) => Display::fmt(v, f),
            Self::U64(v) => Display::fmt(v, f),
            Self::Usize(v) => Display::fmt(v, f),
            Self::F32(v) => fmt_float(f, *v, v.is_nan(), v.is_infinite()),
            Self::F64(v) => fmt_float(f, *v, v.is_nan(), v.is_infinite()),
            Self::Str(v) => f.write_str(v),
            Self::List(items) => write!(f, "[{}]", items.iter().join(" ")),
            Self::Map(entries) => {
                // keys are printed in sorted order
                let mut entries = entries.iter().collect::<Vec<_>>();
                entries.sort_unstable_by(|(a, _), (b, _)| str::cmp(a, b));
                write!(
                    f,
                    "map[{}]",
                    entries.into_iter().map(|(k, v)| MapEntry(k, v)).join(" ")
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_widths_keep_their_variant() {
        assert!(Value::from(1u8).is_u8());
        assert!(Value::from(1i16).is_i16());
        assert!(Value::from(1usize).is_usize());
        assert_eq!(Value::from(-3i32).as_i32(), Some(-3));
        assert_eq!(Value::from(-3i32).as_i64(), None);
        assert!(Value::from(7u64).is_integer());
        assert!(!Value::from(7.0f64).is_integer());
        assert!(Value::from(7.0f32).is_float());
    }

    #[test]
    fn type_names() {
        let names = [
            Value::Unit,
            Value::from(true),
            Value::from(0i8),
            Value::from(0u64),
            Value::from(0.5f32),
            Value::from("x"),
            Value::from(vec![1, 2]),
            Value::Map(HashMap::default()),
        ]
        .iter()
        .map(Value::type_name)
        .collect::<Vec<_>>();

        assert_eq!(
            names,
            ["unit", "bool", "i8", "u64", "f32", "str", "list", "map"]
        );
    }

    #[test]
    fn display() {
        let map = [
            (Str::borrowed("b"), Value::from(2)),
            (Str::borrowed("a"), Value::from("x")),
        ]
        .into_iter()
        .collect::<Value>();

        assert_eq!(Value::Unit.to_string(), "<nil>");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from(-12i64).to_string(), "-12");
        assert_eq!(Value::from(3.0f64).to_string(), "3");
        assert_eq!(Value::from(2.5f32).to_string(), "2.5");
        assert_eq!(Value::from(0.1f32).to_string(), "0.1");
        assert_eq!(Value::from("hi there").to_string(), "hi there");
        assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "[1 2 3]");
        assert_eq!(Value::from(Vec::<Value>::new()).to_string(), "[]");
        assert_eq!(map.to_string(), "map[a:x b:2]");
    }

    #[test]
    fn float_display_switches_to_exponent_form() {
        let floats = [
            1e21,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NAN,
            1e-7,
            1e6,
            123456.0,
            -2.5e9,
            0.0001,
            0.00001,
            1e100,
            -0.0,
        ]
        .map(|v| Value::from(v).to_string());

        assert_eq!(
            floats,
            [
                "1e+21", "+Inf", "-Inf", "NaN", "1e-07", "1e+06", "123456", "-2.5e+09", "0.0001",
                "1e-05", "1e+100", "-0",
            ]
        );
        assert_eq!(Value::from(1.5e-7f32).to_string(), "1.5e-07");
        assert_eq!(Value::from(f32::NEG_INFINITY).to_string(), "-Inf");
        assert_eq!(Value::from(vec![1e21, 0.5]).to_string(), "[1e+21 0.5]");
    }

    #[test]
    fn into_owned_keeps_contents() {
        let text = String::from("nested");
        let value = Value::from(vec![Value::from(text.as_str()), Value::from(1u8)]);
        let owned: Value<'static> = value.into_owned();
        drop(text);

        assert_eq!(owned.to_string(), "[nested 1]");
        assert_eq!(owned.as_list().map(<[_]>::len), Some(2));
    }
}
