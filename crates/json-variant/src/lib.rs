//! Owned, dynamically typed JSON-like document tree.
//!
//! # Overview
//!
//! - [`Value`] - null, signed/unsigned integer, float, bool, string, array or
//!   string-keyed object, nested to any depth. Each node exclusively owns its
//!   children; cloning is a deep copy, moving never touches children.
//! - [`value!`] - builds a tree from JSON-like literal syntax.
//! - [`render`] / [`render_with`] - writes an indented text form to any
//!   [`Sink`].
//! - [`walk`] - depth-first visitor.
//!
//! # Example
//!
//! ```
//! use json_variant::{value, Value};
//!
//! let mut doc = value!({"list": [1, 2]});
//! let copy = doc.clone();
//! doc.get_mut("list").unwrap().push(3).unwrap();
//!
//! assert_eq!(copy.to_string(), "{\n\t\"list\": [\n\t\t1,\n\t\t2\n\t]\n}");
//! assert_eq!(doc.get("list").and_then(Value::as_array).map(Vec::len), Some(3));
//! ```

mod convert;
mod error;
mod macros;
mod render;
mod ser;
mod value;
mod walk;

pub use error::RenderError;
pub use render::{render, render_with, FmtSink, IoSink, RenderOptions, Sink};
pub use value::{Array, Object, Value, ValueKind};
pub use walk::walk;

#[doc(hidden)]
pub mod __private {
    pub use std::collections::HashMap;
    pub use std::string::String;
    pub use std::vec;
}
