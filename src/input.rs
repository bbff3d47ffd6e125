//! Keyboard port
//!
//! The simulation only ever asks "is this key held right now?". Hosts answer
//! through [`KeyInput`]; [`HeldKeys`] is the simple set-backed answer used by
//! headless drivers and tests.

use std::collections::HashSet;

/// Key-held predicate queried once per controller per frame
pub trait KeyInput {
    fn is_key_down(&self, code: u32) -> bool;
}

impl<F> KeyInput for F
where
    F: Fn(u32) -> bool,
{
    fn is_key_down(&self, code: u32) -> bool {
        self(code)
    }
}

/// Set of currently held key codes
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: HashSet<u32>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, code: u32) {
        self.held.insert(code);
    }

    pub fn release(&mut self, code: u32) {
        self.held.remove(&code);
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl KeyInput for HeldKeys {
    fn is_key_down(&self, code: u32) -> bool {
        self.held.contains(&code)
    }
}

/// Nothing held
pub struct NoKeys;

impl KeyInput for NoKeys {
    fn is_key_down(&self, _code: u32) -> bool {
        false
    }
}

/// Vertical direction from an up/down key pair: down is +1, up is -1
pub fn axis(keys: &dyn KeyInput, up: u32, down: u32) -> f32 {
    let down = if keys.is_key_down(down) { 1.0 } else { 0.0 };
    let up = if keys.is_key_down(up) { 1.0 } else { 0.0 };
    down - up
}
