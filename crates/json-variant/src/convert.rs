//! Scalar and container conversions into [`Value`].
//!
//! Each numeric family keeps its own variant: signed integers become
//! [`Value::Int`], unsigned ones [`Value::UInt`], floats [`Value::Float`].

use std::collections::HashMap;

use crate::value::Value;

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::UInt(u64::from(n))
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::array(items)
    }
}

impl<T: Into<Value>> From<HashMap<String, T>> for Value {
    fn from(entries: HashMap<String, T>) -> Self {
        Value::object(entries)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::array(iter)
    }
}

impl<K: Into<String>, T: Into<Value>> FromIterator<(K, T)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Value::object(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_kinds_stay_distinct() {
        assert_eq!(Value::from(-3i32), Value::Int(-3));
        assert_eq!(Value::from(3u8), Value::UInt(3));
        assert_eq!(Value::from(3.5f64), Value::Float(3.5));
        assert_eq!(Value::from(0.5f32), Value::Float(0.5));
    }

    #[test]
    fn null_markers() {
        assert_eq!(Value::from(()), Value::Null);
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".into()));
    }

    #[test]
    fn text() {
        assert_eq!(Value::from('c'), Value::String("c".into()));
        assert_eq!(Value::from(String::from("s")), Value::String("s".into()));
    }

    #[test]
    fn collect_into_containers() {
        let arr: Value = (1u32..=3).collect();
        assert_eq!(
            arr,
            Value::Array(vec![Value::UInt(1), Value::UInt(2), Value::UInt(3)])
        );

        let obj: Value = vec![("a", 1i64), ("a", 2i64)].into_iter().collect();
        assert_eq!(obj.get("a"), Some(&Value::Int(2)));
        assert_eq!(obj.as_object().map(|o| o.len()), Some(1));
    }
}
