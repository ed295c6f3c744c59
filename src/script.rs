//! Scripted keyboard input for headless runs.
//!
//! A script is a JSON list of steps, each holding a set of keys for a number
//! of frames:
//!
//! ```json
//! [
//!   { "frames": 30, "keys": ["Right"] },
//!   { "frames": 1,  "keys": ["Right", "Space"] },
//!   { "frames": 60, "keys": [] }
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::resources::input::{Key, KeyboardSnapshot};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub frames: u32,
    #[serde(default)]
    pub keys: Vec<Key>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputScript {
    pub steps: Vec<ScriptStep>,
}

impl InputScript {
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Failed to parse input script: {}", e))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read input script {}: {}", path.display(), e))?;
        Self::from_json(&text)
    }

    pub fn total_frames(&self) -> u64 {
        self.steps.iter().map(|s| s.frames as u64).sum()
    }

    /// One keyboard snapshot per frame, in order.
    pub fn frames(&self) -> impl Iterator<Item = KeyboardSnapshot> + '_ {
        self.steps.iter().flat_map(|step| {
            let snapshot = KeyboardSnapshot::with_keys(step.keys.iter().copied());
            std::iter::repeat_n(snapshot, step.frames as usize)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_expands_steps() {
        let script = InputScript::from_json(
            r#"[{"frames": 2, "keys": ["Right"]}, {"frames": 1}]"#,
        )
        .unwrap();
        assert_eq!(script.total_frames(), 3);
        let frames: Vec<_> = script.frames().collect();
        assert_eq!(frames.len(), 3);
        assert!(frames[0].is_down(Key::Right));
        assert!(frames[1].is_down(Key::Right));
        assert!(frames[2].held.is_empty());
    }

    #[test]
    fn unknown_key_is_an_error() {
        let err = InputScript::from_json(r#"[{"frames": 1, "keys": ["Jump"]}]"#).unwrap_err();
        assert!(err.contains("input script"));
    }
}
