//! Level domain: actor spawning from level definitions.

use bevy::prelude::*;

use crate::actors::{ActorKind, ActorTuning, Boss, Enemy, Npc};
use crate::content::{ActorSpawnKind, LevelDef};

pub fn spawn_actors(def: &LevelDef, tuning: &ActorTuning) -> Vec<ActorKind> {
    let actors: Vec<ActorKind> = def
        .actors
        .iter()
        .map(|spawn| match &spawn.kind {
            ActorSpawnKind::Enemy => {
                ActorKind::Enemy(Enemy::new(spawn.x, spawn.y, tuning.enemy.clone()))
            }
            ActorSpawnKind::Boss => {
                ActorKind::Boss(Boss::new(spawn.x, spawn.y, tuning.boss.clone()))
            }
            ActorSpawnKind::Npc { name, dialog_key } => ActorKind::Npc(Npc::new(
                spawn.x,
                spawn.y,
                name.clone(),
                dialog_key.clone(),
                tuning.npc_walk_speed,
                tuning.npc_interaction_radius,
            )),
        })
        .collect();

    debug!("Spawned {} actors in '{}'", actors.len(), def.id);
    actors
}
