//! A tiny host that reads numbers and prints their running sum.
//!
//! Run with `RUST_LOG=loom_prelude=trace` to see the prelude's events.

use loom_prelude::{builtins, values, Console, ConsoleError, Error, Value};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut console = Console::stdio();
    let mut total = 0i64;

    loop {
        let line = match call(&mut console, "input", values!["number (empty to stop): "]) {
            Ok(Value::Str(line)) if line.is_empty() => break,
            Ok(line) => line,
            Err(Error::Console(ConsoleError::Closed { .. })) => break,
            Err(e) => fail(e),
        };

        match call(&mut console, "int", vec![line]) {
            Ok(Value::I64(n)) => total += n,
            Ok(other) => unreachable!("int() returned {other:?}"),
            Err(e) => {
                if let Err(e) = call(&mut console, "print", values![e.to_string()]) {
                    fail(e);
                }
                continue;
            }
        }

        if let Err(e) = call(&mut console, "print", values!["total", total]) {
            fail(e);
        }
    }
}

fn call<'a>(
    console: &mut Console<std::io::StdinLock<'static>, std::io::Stdout>,
    name: &str,
    args: impl Into<Vec<Value<'a>>>,
) -> Result<Value<'a>, Error> {
    builtins::call_by_name(name, console, args.into())
}

fn fail(e: Error) -> ! {
    eprintln!("{e}");
    std::process::exit(1)
}
