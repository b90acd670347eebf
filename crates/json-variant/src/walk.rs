//! Depth-first visitor over a [`Value`] tree.

use crate::value::Value;

/// Calls `callback` on `value`, then on every nested value.
///
/// Array elements are visited in order; object values in the table's
/// iteration order.
pub fn walk<F>(value: &Value, callback: &mut F)
where
    F: FnMut(&Value),
{
    callback(value);
    match value {
        Value::Array(items) => {
            for item in items {
                walk(item, callback);
            }
        }
        Value::Object(entries) => {
            for item in entries.values() {
                walk(item, callback);
            }
        }
        _ => {}
    }
}
