//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::ContentRegistry;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
pub(crate) fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse a DataFile<T> wrapper from RON text.
pub(crate) fn parse_data_file<T>(file_name: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse a single RON struct (not wrapped in DataFile).
pub(crate) fn parse_single<T>(file_name: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Build a registry from parsed levels. Level ids must be unique.
pub(crate) fn register_levels(
    registry: &mut ContentRegistry,
    file_name: &str,
    levels: Vec<LevelDef>,
) -> Vec<ContentLoadError> {
    let mut errors = Vec::new();
    for level in levels {
        if registry.levels.contains_key(&level.id) {
            errors.push(ContentLoadError {
                file: file_name.to_string(),
                message: format!("Duplicate level id '{}'", level.id),
            });
            continue;
        }
        registry.levels.insert(level.id.clone(), level);
    }
    errors
}

/// Load all content from assets/data/*.ron into a ContentRegistry.
/// Returns errors for any files that fail to load.
pub fn load_all_content(
    base_path: &Path,
) -> Result<(ContentRegistry, GameplayDefaults), Vec<ContentLoadError>> {
    let mut registry = ContentRegistry::default();
    let mut errors = Vec::new();

    let levels_path = base_path.join("levels.ron");
    let levels_name = levels_path.display().to_string();
    match read_file(&levels_path).and_then(|text| parse_data_file::<LevelDef>(&levels_name, &text)) {
        Ok(levels) => errors.extend(register_levels(&mut registry, &levels_name, levels)),
        Err(e) => errors.push(e),
    }

    // Gameplay defaults are a single struct and required
    let defaults_path = base_path.join("gameplay_defaults.ron");
    let defaults_name = defaults_path.display().to_string();
    let gameplay_defaults = match read_file(&defaults_path)
        .and_then(|text| parse_single::<GameplayDefaults>(&defaults_name, &text))
    {
        Ok(defaults) => defaults,
        Err(e) => {
            errors.push(e);
            return Err(errors);
        }
    };

    if errors.is_empty() {
        Ok((registry, gameplay_defaults))
    } else {
        Err(errors)
    }
}
