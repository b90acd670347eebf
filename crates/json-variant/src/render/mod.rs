//! Indented text rendering of a [`Value`] tree.
//!
//! Layout, with `depth` starting at 0 for the root:
//!
//! - scalars are written inline: `null`, `true`, `42`, `1.5`, `"text"`;
//! - strings are wrapped in double quotes without any escaping;
//! - a container writes its opening bracket and a newline, then each child
//!   on its own line prefixed by `depth + 1` indent units, children separated
//!   by `,` and a newline, then a newline, `depth` indent units and the
//!   closing bracket. An empty container keeps the same shape: `[\n\n]`;
//! - object entries are written as `"key": value` in the table's iteration
//!   order.
//!
//! Output goes straight to the [`Sink`]; nothing is buffered tree-wide.

mod options;
mod sink;

pub use options::RenderOptions;
pub use sink::{FmtSink, IoSink, Sink};

use std::fmt;

use crate::error::RenderError;
use crate::value::Value;

/// Renders `value` into `sink` with the canonical tab layout.
///
/// ```
/// use json_variant::{render, value};
///
/// let mut out = String::new();
/// render(&value!([1, 2, 3]), &mut out).unwrap();
/// assert_eq!(out, "[\n\t1,\n\t2,\n\t3\n]");
/// ```
pub fn render<S: Sink + ?Sized>(value: &Value, sink: &mut S) -> Result<(), RenderError> {
    render_with(value, sink, &RenderOptions::default())
}

/// Renders `value` into `sink` using the given layout options.
pub fn render_with<S: Sink + ?Sized>(
    value: &Value,
    sink: &mut S,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    Renderer { sink, options }.node(value, 0)
}

struct Renderer<'a, S: ?Sized> {
    sink: &'a mut S,
    options: &'a RenderOptions,
}

impl<S: Sink + ?Sized> Renderer<'_, S> {
    fn node(&mut self, value: &Value, depth: usize) -> Result<(), RenderError> {
        match value {
            Value::Null => self.sink.write_str("null"),
            Value::Bool(b) => self.sink.write_str(if *b { "true" } else { "false" }),
            Value::Int(n) => self.sink.write_str(itoa::Buffer::new().format(*n)),
            Value::UInt(n) => self.sink.write_str(itoa::Buffer::new().format(*n)),
            // ryu prints NaN/inf/-inf for non-finite input.
            Value::Float(n) => self.sink.write_str(ryu::Buffer::new().format(*n)),
            Value::String(s) => self.quoted(s),
            Value::Array(items) => {
                self.open("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.separator()?;
                    }
                    self.indent(depth + 1)?;
                    self.node(item, depth + 1)?;
                }
                self.close("]", depth)
            }
            Value::Object(entries) => {
                self.open("{")?;
                for (i, (key, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        self.separator()?;
                    }
                    self.indent(depth + 1)?;
                    self.quoted(key)?;
                    self.sink.write_str(": ")?;
                    self.node(item, depth + 1)?;
                }
                self.close("}", depth)
            }
        }
    }

    fn quoted(&mut self, s: &str) -> Result<(), RenderError> {
        self.sink.write_str("\"")?;
        self.sink.write_str(s)?;
        self.sink.write_str("\"")
    }

    fn open(&mut self, bracket: &str) -> Result<(), RenderError> {
        self.sink.write_str(bracket)?;
        self.sink.write_str(&self.options.newline)
    }

    fn separator(&mut self) -> Result<(), RenderError> {
        self.sink.write_str(",")?;
        self.sink.write_str(&self.options.newline)
    }

    fn close(&mut self, bracket: &str, depth: usize) -> Result<(), RenderError> {
        self.sink.write_str(&self.options.newline)?;
        self.indent(depth)?;
        self.sink.write_str(bracket)
    }

    fn indent(&mut self, depth: usize) -> Result<(), RenderError> {
        for _ in 0..depth {
            self.sink.write_str(&self.options.indent)?;
        }
        Ok(())
    }
}

impl Value {
    /// Renders into `sink` with the canonical layout. See [`render`].
    pub fn render<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), RenderError> {
        render(self, sink)
    }

    /// Renders into a fresh `String` with the canonical layout.
    pub fn to_pretty_string(&self) -> String {
        let mut out = String::new();
        match render(self, &mut out) {
            Ok(()) => out,
            Err(err) => unreachable!("String sink reported an error: {err}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, &mut FmtSink::new(f)).map_err(|_| fmt::Error)
    }
}
