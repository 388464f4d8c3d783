use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Text => Ok(render_text(&serde_json::to_value(value)?, 0)),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Indented `key: value` lines; arrays become numbered blocks.
fn render_text(value: &Value, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| match value {
                Value::Object(_) | Value::Array(_) => {
                    format!("{indent}{key}:\n{}", render_text(value, depth + 1))
                }
                scalar => format!("{indent}{key}: {}", scalar_to_text(scalar)),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Array(items) if items.is_empty() => format!("{indent}(none)"),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(_) | Value::Array(_) => {
                    format!("{indent}[{}]\n{}", index + 1, render_text(item, depth + 1))
                }
                scalar => format!("{indent}[{}] {}", index + 1, scalar_to_text(scalar)),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        scalar => format!("{indent}{}", scalar_to_text(scalar)),
    }
}

fn scalar_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        label: &'static str,
        year: i64,
        alerts: Vec<&'static str>,
    }

    fn example() -> Example {
        Example {
            label: "44 BCE",
            year: -44,
            alerts: vec![],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&example(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["label"], "44 BCE");
        assert_eq!(parsed["year"], -44);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&example(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn text_render_lists_keys() {
        let out = render(&example(), OutputFormat::Text).expect("text render should work");
        assert!(out.contains("label: 44 BCE"));
        assert!(out.contains("year: -44"));
        assert!(out.contains("alerts:\n  (none)"));
    }
}
