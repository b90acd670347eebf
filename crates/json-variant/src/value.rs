//! Owned, recursive JSON-like document node.

use std::collections::HashMap;
use std::fmt;
use std::mem;

/// Ordered sequence of exclusively owned values.
pub type Array = Vec<Value>;

/// String-keyed table of exclusively owned values.
///
/// Backed by a hash table, so iteration order is unspecified and may differ
/// from construction order.
pub type Object = HashMap<String, Value>;

/// A dynamically typed document node.
///
/// Every [`Value::Array`] and [`Value::Object`] owns its children outright:
/// the tree has no sharing and no cycles, and dropping a node drops every
/// descendant.
///
/// Cloning is a deep copy. Moving (plain Rust moves, [`Value::take`],
/// [`Value::replace`]) transfers the storage without visiting children.
#[derive(Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    String(String),
    Array(Array),
    Object(Object),
}

/// Fieldless mirror of the [`Value`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Int,
    UInt,
    Float,
    Bool,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Null => Value::Null,
            Value::Int(n) => Value::Int(*n),
            Value::UInt(n) => Value::UInt(*n),
            Value::Float(n) => Value::Float(*n),
            Value::Bool(b) => Value::Bool(*b),
            Value::String(s) => Value::String(s.clone()),
            Value::Array(items) => Value::Array(items.clone()),
            // The table clone keeps the hasher and bucket layout, so the copy
            // iterates (and renders) in the same order as the original.
            Value::Object(entries) => Value::Object(entries.clone()),
        }
    }

    /// Deep copy into an existing node, reusing its container allocations
    /// when both sides are the same container kind.
    fn clone_from(&mut self, source: &Self) {
        match (self, source) {
            (Value::Array(dst), Value::Array(src)) => dst.clone_from(src),
            (Value::Object(dst), Value::Object(src)) => dst.clone_from(src),
            (Value::String(dst), Value::String(src)) => dst.clone_from(src),
            (dst, src) => *dst = src.clone(),
        }
    }
}

impl Value {
    /// Builds an [`Value::Array`] from items, each converted with [`Into<Value>`].
    ///
    /// Items that already are a [`Value`] are adopted as is.
    pub fn array<I, T>(items: I) -> Value
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Builds an [`Value::Object`] from `(key, item)` pairs.
    ///
    /// When a key repeats, the later pair replaces the earlier one.
    pub fn object<I, K, T>(pairs: I) -> Value
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Value>,
    {
        let pairs = pairs.into_iter();
        let mut entries = HashMap::with_capacity(pairs.size_hint().0);
        for (key, item) in pairs {
            entries.insert(key.into(), item.into());
        }
        Value::Object(entries)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Int(_) => ValueKind::Int,
            Value::UInt(_) => ValueKind::UInt,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Moves the contents out, leaving [`Value::Null`] behind.
    pub fn take(&mut self) -> Value {
        mem::take(self)
    }

    /// Moves `value` in and returns the previous contents.
    pub fn replace(&mut self, value: Value) -> Value {
        mem::replace(self, value)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::UInt(_) | Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Signed view of an integer node. [`Value::UInt`] converts when it fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::UInt(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Unsigned view of an integer node. Negative [`Value::Int`] yields `None`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UInt(n) => Some(*n),
            Value::Int(n) => u64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Any numeric node widened to `f64`; large integers may lose precision.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Int(n) => Some(*n as f64),
            Value::UInt(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up `key` on an object node. Any other kind yields `None`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|entries| entries.get(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.as_object_mut().and_then(|entries| entries.get_mut(key))
    }

    /// Appends to an array node. On any other kind the item is handed back.
    pub fn push(&mut self, item: impl Into<Value>) -> Result<(), Value> {
        match self {
            Value::Array(items) => {
                items.push(item.into());
                Ok(())
            }
            _ => Err(item.into()),
        }
    }

    /// Inserts into an object node, returning the displaced entry.
    /// On any other kind the item is handed back.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        item: impl Into<Value>,
    ) -> Result<Option<Value>, Value> {
        match self {
            Value::Object(entries) => Ok(entries.insert(key.into(), item.into())),
            _ => Err(item.into()),
        }
    }

    /// Number of nodes in the tree, the root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        crate::walk(self, &mut |_| count += 1);
        count
    }

    /// Container nesting depth: `0` for scalars, `1` for a flat container.
    pub fn depth(&self) -> usize {
        match self {
            Value::Array(items) => 1 + items.iter().map(Value::depth).max().unwrap_or(0),
            Value::Object(entries) => 1 + entries.values().map(Value::depth).max().unwrap_or(0),
            _ => 0,
        }
    }
}
