//! Repair for the backend's elided array encoding.
//!
//! The backend drops `null` elements it considers redundant, so a body such as
//! `[[["hola","hello"]],,"en"]` is not valid JSON. [`repair`] puts the nulls back
//! and [`parse_payload`] turns the result into a [`serde_json::Value`].

use serde_json::Value;

use crate::error::RepairError;

const NULL: &str = "null";

/// Insert `null` into every elided array slot.
///
/// A slot is elided when a `,` directly follows another `,` or a `[`, ignoring
/// whitespace. Text inside string literals is copied as is, so an already valid
/// literal comes back unchanged.
pub fn repair(raw: &str) -> String {
    // A pass inserts at most one null per separator, so the fixed point is
    // reached well before this many passes.
    let max_passes = raw.len() + 1;

    let mut current = raw.to_string();
    for _ in 0..max_passes {
        match repair_pass(&current) {
            Some(next) => current = next,
            None => return current,
        }
    }

    tracing::warn!("payload repair hit the pass limit ({max_passes})");
    current
}

/// Repair then parse the payload. Failure here is fatal for the caller.
pub fn parse_payload(raw: &str) -> Result<Value, RepairError> {
    let repaired = repair(raw);
    let value = serde_json::from_str(&repaired)?;
    Ok(value)
}

/// Single scan over the input. Returns `None` when nothing had to be inserted.
fn repair_pass(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len() + NULL.len() * 4);
    let mut changed = false;

    let mut in_string = false;
    let mut escaped = false;
    // Last non-whitespace character seen outside a string literal
    let mut last: Option<char> = None;

    for c in raw.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            ',' if matches!(last, Some(',') | Some('[')) => {
                out.push_str(NULL);
                changed = true;
            }
            c if c.is_whitespace() => {
                out.push(c);
                continue;
            }
            _ => {}
        }

        last = Some(c);
        out.push(c);
    }

    changed.then_some(out)
}
