//! Debug domain: state for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Keep the player at full health and out of harm's way
    pub invincible: bool,
    /// Log a player snapshot every `log_interval` ticks
    pub log_state: bool,
    pub log_interval: u64,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            invincible: false,
            log_state: false,
            log_interval: 60,
        }
    }
}

impl DebugState {
    pub fn should_log(&self, tick: u64) -> bool {
        self.log_state && self.log_interval > 0 && tick % self.log_interval == 0
    }
}
