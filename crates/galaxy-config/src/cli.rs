//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use galaxy_core::AnimationSpeed;

use crate::Config;

/// Animated parallax galaxy for your terminal.
///
/// CLI values override settings loaded from `config.toml`.
#[derive(Parser, Debug, Default)]
#[command(name = "galaxy", version, about)]
pub struct CliArgs {
    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Frames per second to animate at.
    #[arg(long)]
    pub fps: Option<f32>,

    /// Animation speed (slow, medium, fast).
    #[arg(long)]
    pub speed: Option<AnimationSpeed>,

    /// Ignore the mouse: no parallax pull and no cursor dust.
    #[arg(long)]
    pub no_interaction: bool,

    /// Log filter (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(fps) = args.fps
            && fps.is_finite()
            && fps > 0.0
        {
            self.field.target_fps = fps;
        }
        if let Some(speed) = args.speed {
            self.field.speed = speed;
        }
        if args.no_interaction {
            self.field.interactive = false;
            self.field.cursor_trail = false;
        }
        if let Some(ref level) = args.log_level {
            self.log.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            fps: Some(30.0),
            speed: Some(AnimationSpeed::Slow),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.field.target_fps, 30.0);
        assert_eq!(config.field.speed, AnimationSpeed::Slow);
        // Non-overridden fields retain defaults
        assert!(config.field.interactive);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_invalid_fps_ignored() {
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs {
            fps: Some(0.0),
            ..Default::default()
        });
        assert_eq!(config.field.target_fps, 60.0);
    }

    #[test]
    fn test_parse_args() {
        let args = CliArgs::try_parse_from([
            "galaxy",
            "--speed",
            "fast",
            "--no-interaction",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.speed, Some(AnimationSpeed::Fast));
        assert!(args.no_interaction);

        let mut config = Config::default();
        config.apply_cli_overrides(&args);
        assert!(!config.field.interactive);
        assert!(!config.field.cursor_trail);
        assert_eq!(config.log.level, "debug");

        assert!(CliArgs::try_parse_from(["galaxy", "--speed", "warp"]).is_err());
    }
}
