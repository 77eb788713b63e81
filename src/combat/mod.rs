//! Combat domain: health, stamina, attack/parry timers and strikes.

mod components;
mod resources;
mod strikes;

pub use components::{CombatState, Health, Stamina, StrikeOutcome};
pub use resources::CombatTuning;
pub use strikes::{Strike, Team, attack_hitbox};
