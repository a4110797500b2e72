use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ToggleAllVolumes` → `"KeyB"`).
    /// Actions missing from a loaded table keep their default keys.
    #[serde(deserialize_with = "over_defaults")]
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::ToggleAllVolumes, "KeyB".into()),
            (KeyAction::CycleVolumeKind, "KeyV".into()),
            (KeyAction::ResetCamera, "KeyR".into()),
            (KeyAction::ShowHelp, "KeyH".into()),
            (KeyAction::Quit, "KeyQ".into()),
            (KeyAction::Cancel, "Escape".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

/// Deserialize a binding table laid over the default bindings.
fn over_defaults<'de, D>(
    deserializer: D,
) -> Result<HashMap<KeyAction, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let loaded = HashMap::<KeyAction, String>::deserialize(deserializer)?;
    let mut bindings = KeybindingOptions::default().bindings;
    bindings.extend(loaded);
    Ok(bindings)
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let previous = self.key_to_action.insert(key.clone(), *action);
            if let Some(previous) = previous {
                log::warn!(
                    "key {key} bound to both {previous:?} and {action:?}"
                );
            }
        }
    }

    /// Bind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Key bound to `action`, if any.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }
}
