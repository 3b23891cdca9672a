use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::InputAction;

/// Key name to logical button table. Lookups ignore ASCII case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    keys: BTreeMap<String, InputAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut b = Self::empty();
        b.bind("a", InputAction::Left);
        b.bind("left", InputAction::Left);
        b.bind("d", InputAction::Right);
        b.bind("right", InputAction::Right);
        b.bind("space", InputAction::Jump);
        b.bind("lshift", InputAction::Sprint);
        b.bind("rshift", InputAction::Sprint);
        b
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            keys: BTreeMap::new(),
        }
    }

    /// Bind `key` to `action`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: &str, action: InputAction) {
        self.keys.insert(key.to_ascii_lowercase(), action);
    }

    pub fn unbind(&mut self, key: &str) -> Option<InputAction> {
        self.keys.remove(&key.to_ascii_lowercase())
    }

    pub fn action_for(&self, key: &str) -> Option<InputAction> {
        self.keys.get(&key.to_ascii_lowercase()).copied()
    }

    /// All keys bound to `action`, in sorted order.
    pub fn keys_for(&self, action: InputAction) -> Vec<&str> {
        self.keys
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| k.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let b = KeyBindings::default();
        assert_eq!(b.action_for("A"), Some(InputAction::Left));
        assert_eq!(b.action_for("d"), Some(InputAction::Right));
        assert_eq!(b.action_for("Space"), Some(InputAction::Jump));
        assert_eq!(b.action_for("RSHIFT"), Some(InputAction::Sprint));
        assert_eq!(b.action_for("q"), None);
    }

    #[test]
    fn both_shift_keys_sprint() {
        let b = KeyBindings::default();
        assert_eq!(b.keys_for(InputAction::Sprint), vec!["lshift", "rshift"]);
    }

    #[test]
    fn rebinding_replaces() {
        let mut b = KeyBindings::default();
        b.bind("a", InputAction::Jump);
        assert_eq!(b.action_for("a"), Some(InputAction::Jump));
        assert_eq!(b.unbind("A"), Some(InputAction::Jump));
        assert_eq!(b.action_for("a"), None);
    }
}
