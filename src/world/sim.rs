//! World domain: the simulation context advanced once per fixed tick.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

use crate::abilities::{AbilityFlags, PickupOutcome};
use crate::actors::{Actor, ActorKind, ActorTuning, Npc, Player, TickContext};
use crate::combat::{CombatTuning, Strike, StrikeOutcome};
use crate::content::{ContentRegistry, GameplayDefaults};
use crate::level::{Level, spawn_actors};
use crate::movement::{Facing, MovementTuning, PlayerInput, WallContact};
use crate::physics::Aabb;

#[derive(Debug, Clone, PartialEq)]
pub struct GameplayTuning {
    pub movement: MovementTuning,
    pub combat: CombatTuning,
    pub actors: ActorTuning,
}

impl From<&GameplayDefaults> for GameplayTuning {
    fn from(defaults: &GameplayDefaults) -> Self {
        Self {
            movement: defaults.movement.clone(),
            combat: defaults.combat.clone(),
            actors: defaults.actors.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorldError {
    UnknownLevel(String),
}

impl std::fmt::Display for WorldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorldError::UnknownLevel(id) => write!(f, "Level '{}' is not loaded", id),
        }
    }
}

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub player_strike: Option<Strike>,
    pub damage_dealt: f32,
    pub player_hits: Vec<StrikeOutcome>,
    pub pickups: Vec<PickupOutcome>,
    pub defeated: Vec<String>,
    pub entered_level: Option<String>,
    pub player_died: bool,
}

/// The player's externally visible state after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    pub bbox: Aabb,
    pub on_ground: bool,
    pub touching_wall: WallContact,
    pub is_dashing: bool,
    pub is_wall_sliding: bool,
    pub is_attacking: bool,
    pub is_parrying: bool,
    pub invulnerable: bool,
    pub facing: Facing,
    pub stamina: f32,
    pub max_stamina: f32,
    pub health: f32,
    pub max_health: f32,
}

#[derive(Resource, Debug)]
pub struct SimWorld {
    pub level: Level,
    pub player: Player,
    pub actors: Vec<ActorKind>,
    pub abilities: AbilityFlags,
    /// Ids of pickups taken in any level
    pub collected: HashSet<String>,
    pub tuning: GameplayTuning,
    rng: ChaCha8Rng,
    tick: u64,
}

impl SimWorld {
    pub fn new(
        registry: &ContentRegistry,
        defaults: &GameplayDefaults,
        seed: u64,
    ) -> Result<Self, WorldError> {
        let def = registry
            .level(&defaults.start_level)
            .ok_or_else(|| WorldError::UnknownLevel(defaults.start_level.clone()))?;
        let tuning = GameplayTuning::from(defaults);
        let collected = HashSet::new();
        let level = Level::from_def(def, &collected);
        let player = Player::new(
            level.player_spawn.x,
            level.player_spawn.y,
            &tuning.movement,
            &tuning.combat,
        );
        let actors = spawn_actors(def, &tuning.actors);

        info!("Starting in '{}' ({})", level.name, level.id);
        Ok(Self {
            level,
            player,
            actors,
            abilities: AbilityFlags::with(&defaults.starting_abilities),
            collected,
            tuning,
            rng: ChaCha8Rng::seed_from_u64(seed),
            tick: 0,
        })
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Swap in another level. The player keeps vitals and abilities and is
    /// placed at `spawn`, or the level's own spawn when none is given.
    pub fn enter_level(
        &mut self,
        registry: &ContentRegistry,
        level_id: &str,
        spawn: Option<Vec2>,
    ) -> Result<(), WorldError> {
        let def = registry
            .level(level_id)
            .ok_or_else(|| WorldError::UnknownLevel(level_id.to_string()))?;
        self.level = Level::from_def(def, &self.collected);
        self.actors = spawn_actors(def, &self.tuning.actors);

        let spawn = spawn.unwrap_or(self.level.player_spawn);
        self.player.place_at(spawn.x, spawn.y);
        info!("Entered '{}' ({})", self.level.name, self.level.id);
        Ok(())
    }

    /// Reload the current level with a fresh player. Abilities and collected
    /// pickups survive.
    pub fn respawn(&mut self, registry: &ContentRegistry) -> Result<(), WorldError> {
        let level_id = self.level.id.clone();
        self.enter_level(registry, &level_id, None)?;
        self.player = Player::new(
            self.level.player_spawn.x,
            self.level.player_spawn.y,
            &self.tuning.movement,
            &self.tuning.combat,
        );
        Ok(())
    }

    pub fn tick(&mut self, input: &PlayerInput, registry: &ContentRegistry) -> TickReport {
        let mut report = TickReport::default();

        let mut ctx = TickContext {
            obstacles: self.level.obstacles(),
            input,
            abilities: &self.abilities,
            movement: &self.tuning.movement,
            combat: &self.tuning.combat,
            actors: &self.tuning.actors,
            player_box: self.player.body,
            rng: &mut self.rng,
        };

        let player_strike = self.player.update(&mut ctx);

        ctx.player_box = self.player.body;
        let mut actor_strikes = Vec::new();
        for actor in &mut self.actors {
            if let Some(strike) = actor.update(&mut ctx) {
                actor_strikes.push(strike);
            }
        }

        if let Some(strike) = player_strike {
            for actor in &mut self.actors {
                if !strike.hitbox.overlaps(&actor.bounding_box()) {
                    continue;
                }
                if let Some(dealt) = actor.receive_damage(strike.damage) {
                    debug!("Hit {} for {}", actor.label(), dealt);
                    report.damage_dealt += dealt;
                }
            }
            report.player_strike = Some(strike);
        }

        for strike in &actor_strikes {
            if strike.hitbox.overlaps(&self.player.body) {
                let outcome = self.player.receive_strike(strike, &self.tuning.combat);
                report.player_hits.push(outcome);
            }
        }

        for collectible in &mut self.level.collectibles {
            if let Some(outcome) = collectible.try_collect(
                &self.player.body,
                &mut self.player.health,
                &mut self.abilities,
            ) {
                self.collected.insert(collectible.id.clone());
                report.pickups.push(outcome);
            }
        }
        self.level.collectibles.retain(|c| !c.collected);

        self.actors.retain(|actor| {
            if actor.is_dead() {
                info!("Defeated {}", actor.label());
                report.defeated.push(actor.label().to_string());
                false
            } else {
                true
            }
        });

        report.player_died = !self.player.is_alive();
        let transition = self
            .level
            .transition_at(&self.player.body, &self.abilities)
            .filter(|_| !report.player_died)
            .map(|t| (t.target.clone(), t.spawn));
        if let Some((target, spawn)) = transition {
            match self.enter_level(registry, &target, Some(spawn)) {
                Ok(()) => report.entered_level = Some(target),
                Err(e) => warn!("Transition failed: {}", e),
            }
        }

        self.tick += 1;
        report
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        let player = &self.player;
        PlayerSnapshot {
            bbox: player.body,
            on_ground: player.motion.on_ground,
            touching_wall: player.motion.touching_wall,
            is_dashing: player.motion.is_dashing,
            is_wall_sliding: player.motion.is_wall_sliding,
            is_attacking: player.combat.is_attacking,
            is_parrying: player.combat.is_parrying,
            invulnerable: player.combat.invulnerable,
            facing: player.motion.facing,
            stamina: player.stamina.current,
            max_stamina: player.stamina.max,
            health: player.health.current,
            max_health: player.health.max,
        }
    }

    /// First NPC close enough to talk to.
    pub fn nearby_npc(&self) -> Option<&Npc> {
        self.actors.iter().find_map(|actor| match actor {
            ActorKind::Npc(npc) if npc.can_interact(&self.player.body) => Some(npc),
            _ => None,
        })
    }
}
