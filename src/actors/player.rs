//! Actors domain: the input-driven player.

use bevy::prelude::*;

use super::{Actor, Appearance, TickContext};
use crate::abilities::{Ability, AbilityFlags};
use crate::combat::{
    CombatState, CombatTuning, Health, Stamina, Strike, StrikeOutcome, Team, attack_hitbox,
};
use crate::movement::{KinematicState, MotionContext, MovementTuning, PlayerInput, controller};
use crate::physics::Aabb;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Aabb,
    pub motion: KinematicState,
    pub combat: CombatState,
    pub health: Health,
    pub stamina: Stamina,
}

impl Player {
    pub fn new(x: f32, y: f32, movement: &MovementTuning, combat: &CombatTuning) -> Self {
        Self {
            body: Aabb::new(x, y, movement.body_width, movement.body_height),
            motion: KinematicState::default(),
            combat: CombatState::default(),
            health: Health::new(combat.max_health),
            stamina: Stamina::new(combat.max_stamina, combat.stamina_regen),
        }
    }

    /// Move to a spawn point, dropping any momentum and contact state.
    pub fn place_at(&mut self, x: f32, y: f32) {
        self.body.x = x;
        self.body.y = y;
        self.motion = KinematicState {
            facing: self.motion.facing,
            ..Default::default()
        };
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_dead()
    }

    pub fn receive_strike(&mut self, strike: &Strike, tuning: &CombatTuning) -> StrikeOutcome {
        self.combat.receive_strike(&mut self.health, strike.damage, tuning)
    }

    fn strike(&self, damage: f32, tuning: &CombatTuning) -> Strike {
        Strike {
            hitbox: attack_hitbox(
                &self.body,
                self.motion.facing,
                tuning.attack_width,
                tuning.attack_height,
            ),
            damage,
            team: Team::Player,
        }
    }

    /// Parry, attack and charged-attack handling after movement, so hitboxes
    /// sit on the resolved position.
    fn handle_combat(
        &mut self,
        input: &PlayerInput,
        abilities: &AbilityFlags,
        tuning: &CombatTuning,
    ) -> Option<Strike> {
        if input.parry_pressed {
            self.combat.try_parry(&mut self.stamina, tuning);
        }

        let mut strike = None;
        if input.attack_pressed
            && self
                .combat
                .try_attack(&mut self.stamina, tuning.attack_cost, tuning)
        {
            strike = Some(self.strike(tuning.attack_damage, tuning));
        }

        if abilities.has(Ability::ChargedAttack) {
            if input.attack_held {
                self.combat.charge = self.combat.charge.saturating_add(1);
            } else if self.combat.charge > 0 {
                let ready = self.combat.charge >= tuning.charge_ticks;
                self.combat.charge = 0;
                if ready
                    && self
                        .combat
                        .try_attack(&mut self.stamina, tuning.charged_cost, tuning)
                {
                    debug!("Charged attack released");
                    strike = Some(self.strike(
                        tuning.attack_damage * tuning.charged_damage_mult,
                        tuning,
                    ));
                }
            }
        }

        strike
    }
}

impl Actor for Player {
    fn update(&mut self, ctx: &mut TickContext<'_>) -> Option<Strike> {
        self.combat.tick_timers();
        self.motion.tick_timers();
        self.stamina.regenerate();

        let motion_ctx = MotionContext {
            obstacles: ctx.obstacles,
            abilities: ctx.abilities,
            tuning: ctx.movement,
        };
        controller::integrate(
            &mut self.body,
            &mut self.motion,
            &mut self.stamina,
            ctx.input,
            &motion_ctx,
        );

        self.handle_combat(ctx.input, ctx.abilities, ctx.combat)
    }

    fn bounding_box(&self) -> Aabb {
        self.body
    }

    fn appearance(&self) -> Appearance {
        // Flicker while invulnerable
        let visible = !self.combat.invulnerable || self.combat.invulnerable_timer % 6 < 3;
        Appearance {
            rect: self.body,
            color: Color::srgb(0.9, 0.2, 0.2),
            visible,
        }
    }
}
