use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 工单作业结果，任意 JSON 对象
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkResults(pub Map<String, Value>);

impl WorkResults {
    /// A payload is empty when no key carries a meaningful value.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Self::is_blank)
    }

    fn is_blank(value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            Value::Array(items) => items.iter().all(Self::is_blank),
            Value::Object(fields) => fields.values().all(Self::is_blank),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

impl From<Map<String, Value>> for WorkResults {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
