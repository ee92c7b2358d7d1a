//! Loader for the RON controller config at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::ControllerConfig;

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

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load and validate the controller config file.
pub fn load_controller_config(path: &Path) -> Result<ControllerConfig, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_controller_config(&contents, &file_name)
}

/// Parse and validate controller config text; `file` only labels errors.
pub fn parse_controller_config(
    contents: &str,
    file: &str,
) -> Result<ControllerConfig, ContentLoadError> {
    let config: ControllerConfig =
        ron_options()
            .from_str(contents)
            .map_err(|e| ContentLoadError {
                file: file.to_string(),
                message: format!("Parse error: {}", e),
            })?;

    let problems = validate_config(&config);
    if problems.is_empty() {
        Ok(config)
    } else {
        Err(ContentLoadError {
            file: file.to_string(),
            message: format!("Validation failed: {}", problems.join("; ")),
        })
    }
}

/// Collect every value that would make the controller misbehave.
pub fn validate_config(config: &ControllerConfig) -> Vec<String> {
    let mut problems = Vec::new();

    let mut require_positive = |name: &str, value: f32| {
        if !(value > 0.0) {
            problems.push(format!("{} must be positive, got {}", name, value));
        }
    };

    require_positive("movement.walk_speed", config.movement.walk_speed);
    require_positive("movement.run_speed", config.movement.run_speed);
    require_positive("movement.jump_force", config.movement.jump_force);
    require_positive(
        "movement.double_jump_force",
        config.movement.double_jump_force,
    );
    require_positive(
        "movement.vertical_rest_epsilon",
        config.movement.vertical_rest_epsilon,
    );
    require_positive("physics.gravity", config.physics.gravity);
    require_positive("physics.player_mass", config.physics.player_mass);
    require_positive("physics.player_size.0", config.physics.player_size.0);
    require_positive("physics.player_size.1", config.physics.player_size.1);

    for (index, surface) in config.arena.iter().enumerate() {
        if !(surface.size.0 > 0.0 && surface.size.1 > 0.0) {
            problems.push(format!(
                "arena[{}] ({:?}) has non-positive size {:?}",
                index, surface.kind, surface.size
            ));
        }
    }

    if let Some(kill_plane_y) = config.movement.kill_plane_y {
        if kill_plane_y >= config.physics.player_spawn.1 {
            problems.push(format!(
                "movement.kill_plane_y ({}) must be below the player spawn ({})",
                kill_plane_y, config.physics.player_spawn.1
            ));
        }
    }

    problems
}
