//! Constant expression evaluation.

use crate::ir::ConstValue;
use crate::thrift::ast::ConstNode;

/// Evaluate a constant expression into a plain value.
///
/// String, integer and double literals all go through numeric parsing, so
/// `"abc"` evaluates to `NaN` and `"42"` to `42`. Identifiers are kept
/// unresolved.
pub fn evaluate(node: &ConstNode) -> ConstValue {
    match node {
        ConstNode::Bool(b) => ConstValue::Bool(*b),
        ConstNode::String(text) | ConstNode::Int(text) | ConstNode::Double(text) => {
            ConstValue::Number(parse_number(text))
        }
        ConstNode::Map(entries) => ConstValue::map(
            entries
                .iter()
                .map(|(key, value)| (evaluate(key), evaluate(value))),
        ),
        ConstNode::List(elements) => ConstValue::List(elements.iter().map(evaluate).collect()),
        ConstNode::Identifier(name) => ConstValue::Identifier(name.clone()),
    }
}

/// Parse text the way JavaScript's `Number()` does.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust also accepts "inf" and "nan", JavaScript does not
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }

    trimmed.parse().unwrap_or(f64::NAN)
}

/// Digits after a radix prefix. No sign and no empty body; the value is
/// accumulated in `f64` so long literals lose precision instead of failing.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|digit| acc * f64::from(radix) + f64::from(digit))
        })
        .unwrap_or(f64::NAN)
}
