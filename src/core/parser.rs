//! AS-003: AppScalefile YAML decoding.
//!
//! Purely syntactic: the document must be a mapping. Option names and
//! values are not checked here; the downstream tools own that.

use super::error::{AppscaleError, Result};
use super::types::{OptionValue, ParsedConfig};
use indexmap::IndexMap;
use serde_yaml_ng::Value;

/// Parse AppScalefile contents into option order-preserving form.
///
/// A repeated key keeps its first position and its last value.
pub fn parse_config(yaml: &str) -> Result<ParsedConfig> {
    // IndexMap rather than serde_yaml_ng::Mapping: Mapping rejects duplicate keys.
    let doc: Option<IndexMap<Value, Value>> = serde_yaml_ng::from_str(yaml)
        .map_err(|e| AppscaleError::MalformedConfig(format!("YAML parse error: {}", e)))?;
    let mapping = doc.ok_or_else(|| {
        AppscaleError::MalformedConfig("expected a mapping of options, found an empty document".to_string())
    })?;

    let mut config = ParsedConfig::default();
    for (key, value) in mapping {
        let key = render(&key)?;
        let value = match value {
            Value::Null => continue,
            Value::Bool(true) => OptionValue::Flag,
            other => OptionValue::Scalar(render(&other)?),
        };
        config.options.insert(key, value);
    }

    tracing::debug!(options = config.len(), "parsed AppScalefile");
    Ok(config)
}

/// String form of a YAML node. Collections are rendered in JSON flow form.
fn render(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Tagged(t) => render(&t.value),
        Value::Sequence(_) | Value::Mapping(_) => match serde_json::to_string(value) {
            Ok(json) => Ok(json),
            // JSON needs string keys; fall back to YAML for anything else.
            Err(_) => serde_yaml_ng::to_string(value)
                .map(|yaml| yaml.trim_end().to_string())
                .map_err(|e| AppscaleError::MalformedConfig(format!("cannot render value: {}", e))),
        },
    }
}
