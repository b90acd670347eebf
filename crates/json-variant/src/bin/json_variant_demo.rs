//! Builds a few sample trees and prints their rendered form to stdout.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use json_variant::{value, IoSink, RenderError, Sink, Value};

fn print_named<S: Sink>(sink: &mut S, name: &str, value: &Value) -> Result<(), RenderError> {
    sink.write_str(name)?;
    sink.write_str(":\n")?;
    value.render(sink)?;
    sink.write_str("\n\n")
}

fn run() -> Result<(), RenderError> {
    let stdout = io::stdout();
    let mut sink = IoSink::new(BufWriter::new(stdout.lock()));

    let a = value!(5);
    let b = value!([5]);
    let c = value!([
        1,
        2,
        3,
        4,
        "derp",
        [1, 3, 3, 7],
        {
            "key": "value",
            "leet": 13.37,
            "some string": ["nested", "array"],
            "nested key": {"nested": "map"},
        },
    ]);

    print_named(&mut sink, "a", &a)?;
    print_named(&mut sink, "b", &b)?;
    print_named(&mut sink, "c", &c)?;

    let d = value!({"a": a, "b": b, "c": c});
    print_named(&mut sink, "d", &d)?;

    sink.into_inner().flush()?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("json-variant-demo: {err}");
            ExitCode::FAILURE
        }
    }
}
