use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use hopper_mechanics::{KeyCode, KeyboardEvent};

use crate::config::ConfigError;

/// Keys a script can drive, mapped onto the game's bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptKey {
    Left,
    Right,
    Jump,
    Pause,
}

impl ScriptKey {
    fn key_code(self) -> KeyCode {
        match self {
            ScriptKey::Left => KeyCode::Char('a'),
            ScriptKey::Right => KeyCode::Char('d'),
            ScriptKey::Jump => KeyCode::Space,
            ScriptKey::Pause => KeyCode::Escape,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAction {
    Press,
    Release,
}

/// One press or release at a given tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScriptedAction {
    pub tick: u64,
    pub key: ScriptKey,
    pub action: KeyAction,
}

/// A time-indexed keyboard script, the headless stand-in for a player at
/// the keys. Loaded from TOML or built in code by tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputScript {
    #[serde(default)]
    pub actions: Vec<ScriptedAction>,
}

impl InputScript {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let script = toml::from_str(&content)?;
        info!("loaded input script from {}", path.display());
        Ok(script)
    }

    /// The keyboard events due at `tick`, in script order.
    pub fn events_at(&self, tick: u64) -> impl Iterator<Item = KeyboardEvent> + '_ {
        self.actions
            .iter()
            .filter(move |action| action.tick == tick)
            .map(|action| {
                let key = action.key.key_code();
                match action.action {
                    KeyAction::Press => KeyboardEvent::press(key),
                    KeyAction::Release => KeyboardEvent::release(key),
                }
            })
    }

    /// A scripted clear of the sample level: jump over the enemy, jump
    /// the pit, run into the victory zone.
    pub fn sample() -> Self {
        let actions = vec![
            (0, ScriptKey::Right, KeyAction::Press),
            (80, ScriptKey::Jump, KeyAction::Press),
            (140, ScriptKey::Jump, KeyAction::Release),
            (185, ScriptKey::Jump, KeyAction::Press),
            (250, ScriptKey::Jump, KeyAction::Release),
            (300, ScriptKey::Right, KeyAction::Release),
        ];
        Self {
            actions: actions
                .into_iter()
                .map(|(tick, key, action)| ScriptedAction { tick, key, action })
                .collect(),
        }
    }
}
