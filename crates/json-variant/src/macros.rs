/// Construct a [`Value`](crate::Value) from JSON-like literal syntax.
///
/// ```
/// use json_variant::{value, Value};
///
/// let inner = value!(["nested", "array"]);
/// let doc = value!({
///     "key": "value",
///     "leet": 13.37,
///     "list": [1, 2, -3, null],
///     "inner": inner,
/// });
/// assert_eq!(doc.get("leet"), Some(&Value::Float(13.37)));
/// assert_eq!(doc.get("inner"), Some(&value!(["nested", "array"])));
/// ```
///
/// Any expression convertible into a [`Value`](crate::Value) may appear in
/// element or entry position; values that already are a `Value` are adopted
/// as is. Object keys are single token trees: a literal, an identifier, or a
/// parenthesized expression. A repeated key keeps the later entry.
#[macro_export]
macro_rules! value {
    ($($tt:tt)+) => {
        $crate::value_internal!($($tt)+)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! value_internal {
    // Array elements are accumulated as `[$($elems:expr,)*]`.

    (@array [$($elems:expr,)*]) => {
        $crate::__private::vec![$($elems,)*]
    };

    (@array [$($elems:expr,)*] null $($rest:tt)*) => {
        $crate::value_internal!(@array [$($elems,)* $crate::Value::Null,] $($rest)*)
    };

    (@array [$($elems:expr,)*] [$($inner:tt)*] $($rest:tt)*) => {
        $crate::value_internal!(@array [$($elems,)* $crate::value_internal!([$($inner)*]),] $($rest)*)
    };

    (@array [$($elems:expr,)*] {$($inner:tt)*} $($rest:tt)*) => {
        $crate::value_internal!(@array [$($elems,)* $crate::value_internal!({$($inner)*}),] $($rest)*)
    };

    (@array [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        $crate::value_internal!(@array [$($elems,)* $crate::value_internal!($next),] $($rest)*)
    };

    (@array [$($elems:expr,)*] $last:expr) => {
        $crate::value_internal!(@array [$($elems,)* $crate::value_internal!($last),])
    };

    (@array [$($elems:expr,)*] , $($rest:tt)*) => {
        $crate::value_internal!(@array [$($elems,)*] $($rest)*)
    };

    // Object entries are accumulated as `[$((key, value),)*]` with owned keys.

    (@object [$($entries:tt)*]) => {
        $crate::Value::object($crate::__private::vec![$($entries)*])
    };

    (@object [$($entries:tt)*] $key:tt : null $($rest:tt)*) => {
        $crate::value_internal!(@object [$($entries)* ($crate::__private::String::from($key), $crate::Value::Null),] $($rest)*)
    };

    (@object [$($entries:tt)*] $key:tt : [$($inner:tt)*] $($rest:tt)*) => {
        $crate::value_internal!(@object [$($entries)* ($crate::__private::String::from($key), $crate::value_internal!([$($inner)*])),] $($rest)*)
    };

    (@object [$($entries:tt)*] $key:tt : {$($inner:tt)*} $($rest:tt)*) => {
        $crate::value_internal!(@object [$($entries)* ($crate::__private::String::from($key), $crate::value_internal!({$($inner)*})),] $($rest)*)
    };

    (@object [$($entries:tt)*] $key:tt : $value:expr, $($rest:tt)*) => {
        $crate::value_internal!(@object [$($entries)* ($crate::__private::String::from($key), $crate::value_internal!($value)),] $($rest)*)
    };

    (@object [$($entries:tt)*] $key:tt : $value:expr) => {
        $crate::value_internal!(@object [$($entries)* ($crate::__private::String::from($key), $crate::value_internal!($value)),])
    };

    (@object [$($entries:tt)*] , $($rest:tt)*) => {
        $crate::value_internal!(@object [$($entries)*] $($rest)*)
    };

    // Entry points.

    (null) => {
        $crate::Value::Null
    };

    ([]) => {
        $crate::Value::Array($crate::__private::vec![])
    };

    ([ $($tt:tt)+ ]) => {
        $crate::Value::Array($crate::value_internal!(@array [] $($tt)+))
    };

    ({}) => {
        $crate::Value::Object($crate::__private::HashMap::new())
    };

    ({ $($tt:tt)+ }) => {
        $crate::value_internal!(@object [] $($tt)+)
    };

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
