//! Debug dump and tree emission.
//!
//! The dump walks a generic JSON view of the tree rather than the typed
//! records, so it renders exactly what the authoring pipeline will see,
//! including omitted optional fields.

use serde_json::Value as JsonValue;

use crate::error::PrefabError;
use crate::node::PrefabNode;

/// Render `node` as indented `key: value` lines, two spaces per nesting
/// level. Nested mappings get a bare `key:` line with their entries
/// indented below; everything else renders inline in its default string
/// form.
pub fn dump_lines(node: &PrefabNode) -> Vec<String> {
    let mut lines = Vec::new();
    match serde_json::to_value(node) {
        Ok(value) => push_lines(&value, 0, &mut lines),
        Err(err) => lines.push(format!("<unrenderable prefab: {err}>")),
    }
    lines
}

fn push_lines(value: &JsonValue, indent: usize, lines: &mut Vec<String>) {
    if let JsonValue::Object(map) = value {
        let pad = "  ".repeat(indent);
        for (key, entry) in map {
            if entry.is_object() {
                lines.push(format!("{pad}{key}:"));
                push_lines(entry, indent + 1, lines);
            } else {
                lines.push(format!("{pad}{key}: {}", scalar(entry)));
            }
        }
    }
}

fn scalar(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Array(items) => {
            let rendered: Vec<String> = items.iter().map(scalar).collect();
            format!("[{}]", rendered.join(", "))
        }
        other => other.to_string(),
    }
}

/// Emit [`dump_lines`] through the `log` facade at debug level.
pub fn print_prefab(node: &PrefabNode) {
    for line in dump_lines(node) {
        log::debug!("{line}");
    }
}

/// Pretty RON rendering of the tree, in the shape handed to the authoring
/// pipeline.
pub fn to_ron_string(node: &PrefabNode) -> Result<String, PrefabError> {
    ron::ser::to_string_pretty(node, ron::ser::PrettyConfig::default()).map_err(|err| {
        PrefabError::Emit {
            detail: err.to_string(),
        }
    })
}
