//! Evaluated constant values.

use serde::{Deserialize, Serialize};

/// A literal extracted from IDL constant-expression syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ConstValue {
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<ConstValue>),
    /// Ordered key/value pairs. Keys are unique, see [`ConstValue::map`].
    Map(Vec<(ConstValue, ConstValue)>),
    /// Unresolved reference to another constant or enum member.
    Identifier(String),
    Null,
}

impl ConstValue {
    /// Build a map value from entries in source order.
    ///
    /// A later entry whose key equals an earlier one replaces its value;
    /// the key keeps the position where it was first seen. Keys compare
    /// with [`same_value_zero`], so two `NaN` keys collide.
    pub fn map(entries: impl IntoIterator<Item = (ConstValue, ConstValue)>) -> Self {
        let mut pairs: Vec<(ConstValue, ConstValue)> = Vec::new();
        for (key, value) in entries {
            match pairs
                .iter_mut()
                .find(|(existing, _)| same_value_zero(existing, &key))
            {
                Some(slot) => slot.1 = value,
                None => pairs.push((key, value)),
            }
        }
        ConstValue::Map(pairs)
    }

    /// Plain textual form, without quoting.
    ///
    /// Matches what JavaScript's `String(value)` prints for scalars.
    pub fn to_text(&self) -> String {
        match self {
            ConstValue::Bool(b) => b.to_string(),
            ConstValue::Number(n) => format_number(*n),
            ConstValue::String(s) => s.clone(),
            ConstValue::Identifier(name) => name.clone(),
            ConstValue::Null => "null".to_string(),
            ConstValue::List(items) => items
                .iter()
                .map(ConstValue::to_text)
                .collect::<Vec<_>>()
                .join(","),
            ConstValue::Map(_) => self.to_literal(),
        }
    }

    /// TypeScript literal form of the value.
    pub fn to_literal(&self) -> String {
        match self {
            ConstValue::String(s) => quote(s),
            ConstValue::List(items) => {
                let items: Vec<String> = items.iter().map(ConstValue::to_literal).collect();
                format!("[{}]", items.join(", "))
            }
            ConstValue::Map(pairs) => {
                if pairs.is_empty() {
                    return "{}".to_string();
                }
                let entries: Vec<String> = pairs
                    .iter()
                    .map(|(k, v)| format!("{}: {}", property_key(k), v.to_literal()))
                    .collect();
                format!("{{ {} }}", entries.join(", "))
            }
            other => other.to_text(),
        }
    }
}

/// Key equality of a JavaScript `Map`: like `==` except `NaN` equals
/// `NaN`. Lists and maps compare element by element.
pub fn same_value_zero(a: &ConstValue, b: &ConstValue) -> bool {
    match (a, b) {
        (ConstValue::Number(x), ConstValue::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        (ConstValue::List(xs), ConstValue::List(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| same_value_zero(x, y))
        }
        (ConstValue::Map(xs), ConstValue::Map(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys)
                    .all(|((xk, xv), (yk, yv))| same_value_zero(xk, yk) && same_value_zero(xv, yv))
        }
        _ => a == b,
    }
}

/// Format a number the way JavaScript prints it.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // also covers -0
        return "0".to_string();
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }

    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

/// Single-quote a string for TypeScript output.
pub fn quote(s: &str) -> String {
    format!("'{}'", escape_single_quoted(s))
}

/// Escape a string for use between single quotes.
pub fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Whether `name` can be used unquoted as an object key.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn property_key(key: &ConstValue) -> String {
    match key {
        ConstValue::String(s) | ConstValue::Identifier(s) if is_identifier(s) => s.clone(),
        ConstValue::String(s) => quote(s),
        ConstValue::Number(n) if n.is_finite() => format_number(*n),
        // computed key keeps anything else valid
        other => format!("[{}]", other.to_literal()),
    }
}
