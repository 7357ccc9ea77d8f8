//! Non-mutating helpers over sequences of values.
//!
//! Every function here borrows its input and returns fresh data; the
//! source sequence is never modified. Elements are typically mappings
//! (records), but each helper tolerates mixed content by skipping
//! elements it cannot interpret.

use crate::value::Value;

/// The named field of each mapping element, in order. Elements without
/// the field (including non-mapping elements) are skipped.
pub fn pluck(items: &[Value], key: &str) -> Vec<Value> {
    items
        .iter()
        .filter_map(|item| item.get(key).cloned())
        .collect()
}

/// Sum of the numeric values of the named field across elements.
/// Missing and non-numeric fields contribute nothing.
pub fn sum_field(items: &[Value], key: &str) -> f64 {
    items
        .iter()
        .filter_map(|item| item.get(key).and_then(Value::as_f64))
        .sum()
}

/// The element whose named field holds the largest number. Ties keep the
/// earliest element; `None` when no element has a numeric value there.
pub fn max_by_field<'a>(items: &'a [Value], key: &str) -> Option<&'a Value> {
    let mut best: Option<(&Value, f64)> = None;
    for item in items {
        if let Some(n) = item.get(key).and_then(Value::as_f64) {
            match best {
                Some((_, max)) if n <= max => {}
                _ => best = Some((item, n)),
            }
        }
    }
    best.map(|(item, _)| item)
}

/// Number of elements structurally equal to `target`.
pub fn count_matching(items: &[Value], target: &Value) -> usize {
    items.iter().filter(|item| *item == target).count()
}

/// First occurrence of each structurally distinct element, order
/// preserved. Quadratic in element count; `Value` has no total ordering
/// or hash to index by.
pub fn dedup(items: &[Value]) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::new();
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}
