//! Structural matching and rewriting of the `exemplar` query option.
//!
//! Grafana stores the option per query target as `"exemplar": true`. The
//! walk below visits every object and array in a dashboard model, so
//! targets nested in rows, library-panel snapshots, or templating all count.
//! Only a boolean `true` under the exact key `exemplar` is treated as
//! enabled; strings such as `"true"` are left alone.

use serde_json::{Map, Value};

/// Key of the legacy query option.
pub const EXEMPLAR_KEY: &str = "exemplar";

/// Whether any object in `model` binds `exemplar` to `true`.
pub fn contains_enabled_exemplar(model: &Map<String, Value>) -> bool {
    model.iter().any(|(key, value)| is_enabled(key, value) || value_contains(value))
}

/// Flip every `exemplar: true` in `model` to `false`, returning how many
/// occurrences changed. Running it again on the result changes nothing.
pub fn disable_exemplars(model: &mut Map<String, Value>) -> usize {
    let mut flipped = 0;
    for (key, value) in model.iter_mut() {
        if is_enabled(key, value) {
            *value = Value::Bool(false);
            flipped += 1;
        } else {
            flipped += disable_in_value(value);
        }
    }
    flipped
}

fn is_enabled(key: &str, value: &Value) -> bool {
    key == EXEMPLAR_KEY && *value == Value::Bool(true)
}

fn value_contains(value: &Value) -> bool {
    match value {
        Value::Object(map) => contains_enabled_exemplar(map),
        Value::Array(items) => items.iter().any(value_contains),
        _ => false,
    }
}

fn disable_in_value(value: &mut Value) -> usize {
    match value {
        Value::Object(map) => disable_exemplars(map),
        Value::Array(items) => items.iter_mut().map(disable_in_value).sum(),
        _ => 0,
    }
}
