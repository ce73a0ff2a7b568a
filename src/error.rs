use std::io;

pub type Result<T, E = Error> = ::std::result::Result<T, E>;

/// Failure to coerce a value into an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("int() can convert string or float to int, but not {type_name}")]
    UnsupportedType { type_name: &'static str },

    #[error("int() cannot parse {input:?} (str) as a number")]
    UnparsableNumber { input: String },
}

impl ConversionError {
    /// Runtime type name of the value that was rejected.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::UnsupportedType { type_name } => *type_name,
            Self::UnparsableNumber { .. } => "str",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The input stream ended before a line terminator was read.
    ///
    /// `partial` holds whatever was read before the end of the stream.
    #[error("input stream closed before end of line")]
    Closed { partial: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error("{name:?} is not a prelude function")]
    UnknownBuiltin { name: String },

    #[error("{name}() expected {expected} argument{}, got {got}", plural(.expected))]
    Arity {
        name: &'static str,
        expected: usize,
        got: usize,
    },
}

fn plural(n: &usize) -> &'static str {
    if *n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_messages() {
        let unsupported = ConversionError::UnsupportedType { type_name: "bool" };
        let unparsable = ConversionError::UnparsableNumber {
            input: "12x".into(),
        };

        assert_eq!(
            unsupported.to_string(),
            "int() can convert string or float to int, but not bool"
        );
        assert_eq!(unparsable.to_string(), r#"int() cannot parse "12x" (str) as a number"#);
        assert_eq!(unsupported.type_name(), "bool");
        assert_eq!(unparsable.type_name(), "str");
    }

    #[test]
    fn arity_message() {
        let one = Error::Arity {
            name: "int",
            expected: 1,
            got: 3,
        };
        let two = Error::Arity {
            name: "f",
            expected: 2,
            got: 0,
        };

        assert_eq!(one.to_string(), "int() expected 1 argument, got 3");
        assert_eq!(two.to_string(), "f() expected 2 arguments, got 0");
    }
}
