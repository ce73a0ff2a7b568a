#![allow(clippy::new_without_default, clippy::wrong_self_convention)]

//! Runtime prelude for Loom programs.
//!
//! Every compiled Loom program gets three builtins: [`print`], [`input`] and
//! [`int`]. They are exposed here both as plain functions over process stdio
//! and through [`Console`] and [`Builtin`] for hosts that want to supply
//! their own streams or dispatch calls by name.

#[macro_use]
mod macros;

pub mod builtins;
pub mod coerce;
pub mod console;
pub mod error;
pub mod value;

mod util;

pub use builtins::Builtin;
pub use coerce::CoerceInt;
pub use console::{Console, ConsoleBuilder};
pub use error::{ConsoleError, ConversionError, Error, Result};
pub use value::Value;

use beef::lean::Cow;
pub type Str<'a> = Cow<'a, str>;
pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// Coerce `value` to an `i64`.
///
/// See [`coerce::to_int`] for the exact rules.
#[inline]
pub fn int<'a>(value: impl Into<Value<'a>>) -> Result<i64, ConversionError> {
    coerce::to_int(&value.into())
}

/// Write `values` to stdout, separated by spaces and followed by a newline.
///
/// Stdin is left alone, so this does not wait on a pending [`input`].
pub fn print(values: &[Value<'_>]) -> Result<(), ConsoleError> {
    console::print_to(
        &mut std::io::stdout().lock(),
        console::DEFAULT_SEPARATOR,
        values,
    )
}

/// Write `prompt` to stdout and read one line from stdin.
///
/// The returned line does not include its line terminator.
pub fn input(prompt: &[Value<'_>]) -> Result<String, ConsoleError> {
    Console::stdio().input(prompt)
}
