//! Minimal CSV formatting for admin exports

/// Wrap a text field in double quotes, doubling embedded quotes
pub fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Header line plus rows, newline separated, no trailing newline
pub fn document(header: &str, rows: impl IntoIterator<Item = String>) -> String {
    let mut out = String::from(header);
    for row in rows {
        out.push('\n');
        out.push_str(&row);
    }
    out
}
