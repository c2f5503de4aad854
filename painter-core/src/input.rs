/// Held-key tracking for logical key names such as `"w"` or `"ArrowLeft"`
use std::collections::HashMap;

/// Anything that can answer "is this key held right now"
pub trait KeyState {
    fn is_down(&self, key: &str) -> bool;
}

/// Key states fed by press/release events. Unknown keys read as up.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.keys.insert(key.to_string(), true);
    }

    pub fn release(&mut self, key: &str) {
        self.keys.insert(key.to_string(), false);
    }

    /// Mark every key as up
    pub fn release_all(&mut self) {
        self.keys.values_mut().for_each(|down| *down = false);
    }
}

impl KeyState for InputState {
    fn is_down(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }
}
