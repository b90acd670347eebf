//! Rendering layout matrix: scalars, flat and nested containers, sinks.

use std::io;

use json_variant::{render, render_with, value, FmtSink, IoSink, RenderError, RenderOptions, Value};

fn rendered(v: &Value) -> String {
    let mut out = String::new();
    render(v, &mut out).expect("string sink never fails");
    out
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

#[test]
fn scalar_identity_matrix() {
    let cases = vec![
        (Value::Null, "null"),
        (Value::Bool(true), "true"),
        (Value::Bool(false), "false"),
        (Value::Int(0), "0"),
        (Value::Int(-123), "-123"),
        (Value::UInt(1337), "1337"),
        (Value::Float(0.5), "0.5"),
        (Value::Float(-12321.25), "-12321.25"),
        (Value::String(String::new()), "\"\""),
        (Value::String("x".into()), "\"x\""),
        (Value::String("日本".into()), "\"日本\""),
    ];
    for (value, expected) in cases {
        assert_eq!(rendered(&value), expected, "rendering {value:?}");
    }
}

#[test]
fn float_uses_shortest_round_trip_form() {
    for n in [0.1, 13.37, 1e300, -2.5e-10, f64::MAX] {
        let text = rendered(&Value::Float(n));
        assert_eq!(text.parse::<f64>().unwrap(), n, "{text} must parse back");
    }
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

#[test]
fn flat_array() {
    assert_eq!(rendered(&value!([1, 2, 3])), "[\n\t1,\n\t2,\n\t3\n]");
}

#[test]
fn empty_array_keeps_brackets_on_separate_lines() {
    assert_eq!(rendered(&value!([])), "[\n\n]");
}

#[test]
fn nested_empty_array() {
    assert_eq!(rendered(&value!([[]])), "[\n\t[\n\n\t]\n]");
}

#[test]
fn object_entries_indent_one_level_deeper_than_braces() {
    assert_eq!(
        rendered(&value!({"a": [1]})),
        "{\n\t\"a\": [\n\t\t1\n\t]\n}"
    );
}

#[test]
fn deep_nesting_indents_per_level() {
    let v = value!([[[["deep"]]]]);
    assert_eq!(
        rendered(&v),
        "[\n\t[\n\t\t[\n\t\t\t[\n\t\t\t\t\"deep\"\n\t\t\t]\n\t\t]\n\t]\n]"
    );
}

#[test]
fn multi_entry_object_lines_are_present_in_any_order() {
    let v = value!({"alpha": 1, "beta": "two", "gamma": null});
    let text = rendered(&v);

    assert!(text.starts_with("{\n"));
    assert!(text.ends_with("\n}"));

    let mut body: Vec<&str> = text
        .trim_start_matches("{\n")
        .trim_end_matches("\n}")
        .split('\n')
        .map(|line| line.trim_end_matches(','))
        .collect();
    body.sort_unstable();
    assert_eq!(body, vec!["\t\"alpha\": 1", "\t\"beta\": \"two\"", "\t\"gamma\": null"]);

    // Exactly one entry (the last one written) has no trailing comma.
    assert_eq!(text.matches(",\n").count(), 2);
}

#[test]
fn keys_and_strings_are_written_raw() {
    let v = value!({"q\"k": "line\nbreak"});
    assert_eq!(rendered(&v), "{\n\t\"q\"k\": \"line\nbreak\"\n}");
}

#[test]
fn rendering_does_not_mutate() {
    let v = value!({"a": [1, 2, {"b": null}]});
    let before = v.clone();
    let _ = rendered(&v);
    assert_eq!(v, before);
}

// ---------------------------------------------------------------------------
// Options and sinks
// ---------------------------------------------------------------------------

#[test]
fn default_options_are_tab_and_newline() {
    let options = RenderOptions::default();
    assert_eq!(options.indent, "\t");
    assert_eq!(options.newline, "\n");
}

#[test]
fn render_with_space_indent() {
    let mut out = String::new();
    let options = RenderOptions::new().with_indent("    ");
    render_with(&value!({"k": [true]}), &mut out, &options).unwrap();
    assert_eq!(out, "{\n    \"k\": [\n        true\n    ]\n}");
}

#[test]
fn byte_and_io_sinks_match_string_sink() {
    let v = value!([1, "two", [3.5]]);
    let expected = rendered(&v);

    let mut bytes: Vec<u8> = Vec::new();
    render(&v, &mut bytes).unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), expected);

    let mut io_sink = IoSink::new(Vec::new());
    render(&v, &mut io_sink).unwrap();
    assert_eq!(String::from_utf8(io_sink.into_inner()).unwrap(), expected);

    let mut fmt_sink = FmtSink::new(String::new());
    render(&v, &mut fmt_sink).unwrap();
    assert_eq!(fmt_sink.into_inner(), expected);

    assert_eq!(format!("{v}"), expected);
}

struct FailAfter {
    remaining: usize,
}

impl io::Write for FailAfter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
        }
        self.remaining -= 1;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_failure_propagates_to_caller() {
    let v = value!([1, 2, 3, 4, 5]);
    let mut sink = IoSink::new(FailAfter { remaining: 3 });
    match render(&v, &mut sink) {
        Err(RenderError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::WriteZero),
        other => panic!("expected io error, got {other:?}"),
    }
}
