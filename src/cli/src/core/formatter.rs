use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn render_text_from_model<T: Serialize + ?Sized>(model: &T) -> Result<String, serde_json::Error> {
    let value = serde_json::to_value(model)?;
    Ok(render_value(&value, 0))
}

fn render_value(value: &Value, indent: usize) -> String {
    let pad = " ".repeat(indent);
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => format!("{pad}{b}\n"),
        Value::Number(n) => format!("{pad}{n}\n"),
        Value::String(s) => s.lines().map(|line| format!("{pad}{line}\n")).collect(),
        Value::Array(arr) => {
            let mut s = String::new();
            for item in arr {
                match item {
                    Value::Array(_) | Value::Object(_) => {
                        s.push_str(&format!("{pad}-\n"));
                        s.push_str(&render_value(item, indent + 2));
                    }
                    _ => s.push_str(&format!("{pad}- {}\n", scalar_cell(item))),
                }
            }
            s
        }
        Value::Object(map) => {
            let mut s = String::new();
            for (k, v) in map {
                match v {
                    Value::Array(_) | Value::Object(_) => {
                        s.push_str(&format!("{pad}{k}:\n"));
                        s.push_str(&render_value(v, indent + 2));
                    }
                    _ => s.push_str(&format!("{pad}{k}: {}\n", scalar_cell(v))),
                }
            }
            s
        }
    }
}

/// Single-line rendering of a scalar. Strings are escaped so embedded line
/// breaks stay on one row.
fn scalar_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.escape_debug().to_string(),
        Value::Array(arr) => arr.iter().map(scalar_cell).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// Aligned columns, one row per item, picking `columns` out of each
/// serialized object.
fn render_rows<T: Serialize>(list: &[T], columns: &[&str]) -> Result<String, serde_json::Error> {
    let rows = list
        .iter()
        .map(|item| {
            let value = serde_json::to_value(item)?;
            Ok(columns
                .iter()
                .map(|column| value.get(column).map(scalar_cell).unwrap_or_default())
                .collect::<Vec<String>>())
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    let mut widths = vec![0; columns.len()];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i + 1 < row.len() {
                line.push_str(&format!("{cell:<width$}  ", width = widths[i]));
            } else {
                line.push_str(cell);
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    pub fn format<T: Serialize>(&self, model: &T) -> Result<String, serde_json::Error> {
        match self.engine {
            OutputFormat::Text => render_text_from_model(model),
            OutputFormat::Json => Ok(with_newline(serde_json::to_string_pretty(model)?)),
        }
    }

    pub fn format_list<T: Serialize>(
        &self,
        list: &[T],
        title: &str,
        empty_msg: &str,
    ) -> Result<String, serde_json::Error> {
        match self.engine {
            OutputFormat::Text if list.is_empty() => Ok(with_newline(empty_msg.to_string())),
            OutputFormat::Text => {
                let content = render_text_from_model(list)?;
                if title.is_empty() {
                    Ok(content)
                } else {
                    Ok(format!("{title}\n{content}"))
                }
            }
            OutputFormat::Json => json_list(list),
        }
    }

    /// Like [`Formatter::format_list`], but text output is a column table.
    pub fn format_rows<T: Serialize>(
        &self,
        list: &[T],
        columns: &[&str],
        empty_msg: &str,
    ) -> Result<String, serde_json::Error> {
        match self.engine {
            OutputFormat::Text if list.is_empty() => Ok(with_newline(empty_msg.to_string())),
            OutputFormat::Text => render_rows(list, columns),
            OutputFormat::Json => json_list(list),
        }
    }
}

fn json_list<T: Serialize>(list: &[T]) -> Result<String, serde_json::Error> {
    Ok(with_newline(serde_json::to_string_pretty(list)?))
}

fn with_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
