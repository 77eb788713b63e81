//! Content domain: level and tuning data loaded from RON at startup.

mod data;
mod loader;
mod registry;
mod validation;

pub use data::{
    ActorSpawnDef, ActorSpawnKind, CollectibleDef, DataFile, GameplayDefaults, LevelDef,
    ObstacleDef, TransitionDef,
};
pub use loader::{ContentLoadError, load_all_content};
pub(crate) use loader::ron_options;
pub use registry::{ContentRegistry, FALLBACK_LEVEL_ID};
pub use validation::{ValidationError, validate_content};

use bevy::prelude::*;
use std::path::Path;

use crate::core::GameConfig;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

fn load_content(mut commands: Commands, config: Res<GameConfig>) {
    let (registry, defaults) = load_validated(Path::new(&config.content_dir));
    commands.insert_resource(registry);
    commands.insert_resource(defaults);
}

/// Load and validate content, falling back to a single built-in room if
/// anything is wrong.
pub fn load_validated(base_path: &Path) -> (ContentRegistry, GameplayDefaults) {
    match load_all_content(base_path) {
        Ok((registry, defaults)) => {
            let errors = validate_content(&registry, &defaults);
            if errors.is_empty() {
                info!("{}", registry.summary());
                return (registry, defaults);
            }
            for error in &errors {
                error!("Content validation failed: {}", error);
            }
        }
        Err(errors) => {
            for error in &errors {
                error!("{}", error);
            }
        }
    }

    warn!(
        "Using built-in fallback content instead of {}",
        base_path.display()
    );
    (
        ContentRegistry::fallback(),
        GameplayDefaults::builtin(FALLBACK_LEVEL_ID),
    )
}
