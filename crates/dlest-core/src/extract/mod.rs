//! URL extraction from arbitrary JSON documents.
//!
//! Walks a `serde_json::Value` depth-first and collects every string leaf that
//! matches the URL pattern. Object values are visited in document order,
//! array elements in index order. Duplicates are kept.

mod pattern;

use serde_json::Value;

pub use pattern::is_url;

/// Returns every URL-shaped string in `value`, in first-encountered order.
///
/// Never fails: scalars, `null` and empty containers simply yield nothing.
pub fn extract_urls(value: &Value) -> Vec<String> {
    let mut urls = Vec::new();
    collect(value, &mut urls);
    urls
}

fn collect(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for v in map.values() {
                collect(v, out);
            }
        }
        Value::Array(items) => {
            for v in items {
                collect(v, out);
            }
        }
        Value::String(s) => {
            if is_url(s) {
                out.push(s.clone());
            }
        }
        Value::Number(_) | Value::Bool(_) | Value::Null => {}
    }
}
