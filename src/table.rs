//! Recursive table rendering over serialized values.
//!
//! The renderer never inspects caller types directly; inputs are first
//! converted to a [`serde_json::Value`] tree and this module walks that tree.
//! Field order follows the order serialization produced, which for derived
//! structs is declaration order.

use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use serde_json::Value;

/// Render one value as a complete table fragment.
///
/// `label` is an optional type label emitted before the table markup.
pub(crate) fn value_table(
    value: &Value,
    config: &RenderConfig,
    label: Option<&str>,
) -> Result<String> {
    let mut out = String::new();
    if let Some(label) = label {
        out.push_str(label);
    }
    append_table(&mut out, value, config, 0)?;
    Ok(out)
}

fn append_table(out: &mut String, value: &Value, config: &RenderConfig, depth: usize) -> Result<()> {
    out.push_str(&config.content_start);
    match value {
        Value::Object(fields) => {
            for (i, (name, field)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str(&config.field_separator);
                }
                out.push_str(name);
                out.push_str(&config.field_name_value_separator);
                append_detail(out, field, config, depth + 1)?;
            }
        }
        // A bare scalar or sequence still gets one table with a single row.
        other => {
            out.push_str("value");
            out.push_str(&config.field_name_value_separator);
            append_detail(out, other, config, depth + 1)?;
        }
    }
    out.push_str(&config.content_end);
    Ok(())
}

fn append_detail(
    out: &mut String,
    value: &Value,
    config: &RenderConfig,
    depth: usize,
) -> Result<()> {
    if depth > config.max_depth {
        return Err(RenderError::DepthLimitExceeded {
            limit: config.max_depth,
        });
    }
    match value {
        Value::Null => out.push_str(&config.null_text),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(s),
        Value::Array(elements) => {
            // Elements inline, no enclosing brackets.
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push_str(&config.array_separator);
                }
                append_detail(out, element, config, depth + 1)?;
            }
        }
        // A composite field expands into a nested table inside the cell.
        Value::Object(_) => append_table(out, value, config, depth)?,
    }
    Ok(())
}

/// Strip module paths from a type name, keeping generic arguments short too.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub(crate) fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut ident = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            ident.push(ch);
        } else if ch == ':' {
            ident.clear();
        } else {
            out.push_str(&ident);
            ident.clear();
            out.push(ch);
        }
    }
    out.push_str(&ident);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_details() {
        let config = RenderConfig::default();
        let mut out = String::new();
        append_detail(&mut out, &json!("x"), &config, 1).unwrap();
        append_detail(&mut out, &json!(5), &config, 1).unwrap();
        append_detail(&mut out, &json!(true), &config, 1).unwrap();
        append_detail(&mut out, &Value::Null, &config, 1).unwrap();
        assert_eq!(out, "x5true<null>");
    }

    #[test]
    fn test_array_inline_without_brackets() {
        let config = RenderConfig::default();
        let mut out = String::new();
        append_detail(&mut out, &json!([1, 2, 3]), &config, 1).unwrap();
        assert_eq!(out, "1,2,3");
    }

    #[test]
    fn test_object_field_rows_in_order() {
        let config = RenderConfig::default();
        let table = value_table(&json!({"a": "x", "b": 5}), &config, None).unwrap();
        assert!(table.contains("<td>a</td><td>x</td>"));
        assert!(table.contains("<tr><td>b</td><td>5</td></tr>"));
        let a = table.find("<td>a</td>").unwrap();
        let b = table.find("<td>b</td>").unwrap();
        assert!(a < b, "fields must render in serialization order");
    }

    #[test]
    fn test_nested_object_becomes_nested_table() {
        let config = RenderConfig::default();
        let table = value_table(&json!({"inner": {"x": 1}}), &config, None).unwrap();
        assert_eq!(table.matches("<table").count(), 2);
        assert!(table.contains("<td>x</td><td>1</td>"));
    }

    #[test]
    fn test_depth_limit_is_an_error_not_a_crash() {
        let config = RenderConfig::default().with_max_depth(4);
        let mut value = json!({"leaf": 1});
        for _ in 0..8 {
            value = json!({ "inner": value });
        }
        let err = value_table(&value, &config, None).unwrap_err();
        assert!(matches!(err, RenderError::DepthLimitExceeded { limit: 4 }));
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("alloc::string::String"), "String");
        assert_eq!(
            short_type_name("alloc::vec::Vec<alloc::string::String>"),
            "Vec<String>"
        );
        assert_eq!(short_type_name("htmlify::table::tests::Local"), "Local");
    }
}
