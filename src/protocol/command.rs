//! JSON command envelopes.
//!
//! Every request to the device is a flat JSON object whose `Command` key
//! names the operation and whose remaining keys are the parameters. The
//! envelope serializes with `Command` first and parameters in insertion
//! order, which keeps request logs readable and tests deterministic.
//!
//! # Example
//!
//! ```
//! use pixoo_client::protocol::Command;
//!
//! let command = Command::new("Channel/SetBrightness").with("Brightness", 90);
//! assert_eq!(
//!     serde_json::to_string(&command).unwrap(),
//!     r#"{"Command":"Channel/SetBrightness","Brightness":90}"#
//! );
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// One outbound request envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    name: &'static str,
    params: Vec<(String, Value)>,
}

impl Command {
    /// Starts an envelope for the given wire command name.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            params: Vec::new(),
        }
    }

    /// Adds one parameter. Parameters keep their insertion order on the
    /// wire.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.push((key.to_string(), value.into()));
        self
    }

    /// Wire command name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Looks up a parameter by key.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Full envelope as a JSON value, including the `Command` key.
    pub fn to_json(&self) -> Value {
        let mut object = serde_json::Map::new();
        object.insert("Command".to_string(), Value::String(self.name.to_string()));
        for (key, value) in &self.params {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}

impl Serialize for Command {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.params.len() + 1))?;
        map.serialize_entry("Command", self.name)?;
        for (key, value) in &self.params {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_command_serializes_to_name_only() {
        let command = Command::new("Device/SysReboot");
        assert_eq!(
            serde_json::to_string(&command).unwrap(),
            r#"{"Command":"Device/SysReboot"}"#
        );
    }

    #[test]
    fn test_parameters_keep_insertion_order() {
        let command = Command::new("Tools/SetScoreBoard")
            .with("BlueScore", 3)
            .with("RedScore", 7);
        assert_eq!(
            serde_json::to_string(&command).unwrap(),
            r#"{"Command":"Tools/SetScoreBoard","BlueScore":3,"RedScore":7}"#
        );
    }

    #[test]
    fn test_heterogeneous_parameter_types() {
        let command = Command::new("Draw/SendHttpText")
            .with("TextString", "hello")
            .with("TextId", 4)
            .with("color", "#ff0000");
        assert_eq!(command.param("TextString"), Some(&json!("hello")));
        assert_eq!(command.param("TextId"), Some(&json!(4)));
        assert_eq!(command.param("missing"), None);
    }

    #[test]
    fn test_to_json_includes_command_key() {
        let command = Command::new("Channel/OnOffScreen").with("OnOff", 1);
        assert_eq!(
            command.to_json(),
            json!({"Command": "Channel/OnOffScreen", "OnOff": 1})
        );
    }

    #[test]
    fn test_array_parameters() {
        let command = Command::new("Draw/SendHttpGif").with("LcdArray", vec![0, 1, 0, 0, 0]);
        assert_eq!(command.param("LcdArray"), Some(&json!([0, 1, 0, 0, 0])));
    }
}
