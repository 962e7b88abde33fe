//! Per-execution key/value scratch space.

use serde_json::Value;
use std::collections::HashMap;

/// Mutable state scoped to a single workflow execution.
///
/// Created fresh by every [`WorkflowEngine`](super::WorkflowEngine) run and
/// discarded when the run returns; never shared across concurrent executions,
/// so it needs no locking. Steps use it for auxiliary cross-step data beyond
/// the threaded payload.
#[derive(Debug, Default)]
pub struct WorkflowState {
    values: HashMap<String, Value>,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Remove a key, returning its value if it was present.
    pub fn delete(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Snapshot of all current keys.
    pub fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_get_has() {
        let mut state = WorkflowState::new();
        assert!(!state.has("parcel"));
        state.set("parcel", json!({ "id": "p-1" }));
        assert!(state.has("parcel"));
        assert_eq!(state.get("parcel").unwrap()["id"], "p-1");
    }

    #[test]
    fn test_delete_returns_value() {
        let mut state = WorkflowState::new();
        state.set("count", json!(3));
        assert_eq!(state.delete("count"), Some(json!(3)));
        assert_eq!(state.delete("count"), None);
        assert!(!state.has("count"));
    }

    #[test]
    fn test_keys_and_clear() {
        let mut state = WorkflowState::new();
        state.set("a", json!(1));
        state.set("b", json!(2));
        let mut keys = state.keys();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(state.len(), 2);

        state.clear();
        assert!(state.is_empty());
        assert!(state.keys().is_empty());
    }

    #[test]
    fn test_overwrite() {
        let mut state = WorkflowState::new();
        state.set("key", json!("first"));
        state.set("key", json!("second"));
        assert_eq!(state.get("key"), Some(&json!("second")));
        assert_eq!(state.len(), 1);
    }
}
