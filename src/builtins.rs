//! Name-indexed table of the prelude functions.
//!
//! Hosts that interpret Loom call these by name, passing the evaluated
//! arguments and the console the program is attached to.

use std::fmt::{self, Display};
use std::io::{BufRead, Write};

use tracing::debug;

use crate::coerce::to_int;
use crate::console::Console;
use crate::error::{Error, Result};
use crate::value::Value;
use crate::Str;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Print,
    Input,
    Int,
}

impl Builtin {
    pub const ALL: [Builtin; 3] = [Self::Print, Self::Input, Self::Int];

    pub fn name(self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Input => "input",
            Self::Int => "int",
        }
    }

    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Number of arguments the function takes, or `None` if it is variadic.
    pub fn arity(self) -> Option<usize> {
        match self {
            Self::Print | Self::Input => None,
            Self::Int => Some(1),
        }
    }

    pub fn call<'a, R: BufRead, W: Write>(
        self,
        console: &mut Console<R, W>,
        args: Vec<Value<'a>>,
    ) -> Result<Value<'a>> {
        debug!(builtin = self.name(), args = args.len(), "call");
        match self {
            Self::Print => {
                console.print(&args)?;
                Ok(Value::Unit)
            }
            Self::Input => {
                let line = console.input(&args)?;
                Ok(Value::Str(Str::owned(line)))
            }
            Self::Int => match args.as_slice() {
                [value] => Ok(Value::I64(to_int(value)?)),
                _ => Err(Error::Arity {
                    name: self.name(),
                    expected: 1,
                    got: args.len(),
                }),
            },
        }
    }
}

impl Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up `name` and call it.
pub fn call_by_name<'a, R: BufRead, W: Write>(
    name: &str,
    console: &mut Console<R, W>,
    args: Vec<Value<'a>>,
) -> Result<Value<'a>> {
    match Builtin::lookup(name) {
        Some(builtin) => builtin.call(console, args),
        None => Err(Error::UnknownBuiltin {
            name: name.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn lookup() {
        for builtin in Builtin::ALL {
            assert_eq!(Builtin::lookup(builtin.name()), Some(builtin));
            assert_eq!(builtin.to_string(), builtin.name());
        }
        assert_eq!(Builtin::lookup("Print"), None);
        assert_eq!(Builtin::lookup("len"), None);
    }

    #[test]
    fn arity() {
        assert_eq!(Builtin::Print.arity(), None);
        assert_eq!(Builtin::Input.arity(), None);
        assert_eq!(Builtin::Int.arity(), Some(1));
    }

    #[test]
    fn print_returns_unit() {
        let mut c = console("");
        let ret = Builtin::Print
            .call(&mut c, values!["hi", 2].to_vec())
            .unwrap();

        assert_eq!(ret, Value::Unit);
        assert_eq!(c.into_parts().1, b"hi 2\n");
    }

    #[test]
    fn input_returns_owned_string() {
        let mut c = console("typed\n");
        let ret = Builtin::Input
            .call(&mut c, values!["? "].to_vec())
            .unwrap()
            .into_owned();

        assert_eq!(ret.as_str(), Some("typed"));
        assert_eq!(c.into_parts().1, b"? ");
    }

    #[test]
    fn int_coerces() {
        let mut c = console("");
        let ret = Builtin::Int.call(&mut c, values!["3.9"].to_vec()).unwrap();

        assert_eq!(ret, Value::I64(3));
    }

    #[test]
    fn int_checks_arity() {
        let mut c = console("");

        let err = Builtin::Int.call(&mut c, vec![]).unwrap_err();
        assert!(
            matches!(
                err,
                Error::Arity {
                    name: "int",
                    expected: 1,
                    got: 0
                }
            ),
            "{err:?}"
        );

        let err = Builtin::Int
            .call(&mut c, values![1, 2].to_vec())
            .unwrap_err();
        assert_eq!(err.to_string(), "int() expected 1 argument, got 2");
    }

    #[test]
    fn int_propagates_conversion_errors() {
        let mut c = console("");
        let err = Builtin::Int
            .call(&mut c, values![true].to_vec())
            .unwrap_err();

        assert!(
            matches!(
                err,
                Error::Conversion(ConversionError::UnsupportedType { type_name: "bool" })
            ),
            "{err:?}"
        );
    }

    #[test]
    fn unknown_name() {
        let mut c = console("");
        let err = call_by_name("len", &mut c, vec![]).unwrap_err();

        assert_eq!(err.to_string(), r#""len" is not a prelude function"#);
    }

    #[test]
    fn call_by_name_dispatches() {
        let mut c = console("");
        let ret = call_by_name("int", &mut c, values![u64::MAX].to_vec()).unwrap();

        assert_eq!(ret, Value::I64(-1));
    }
}
