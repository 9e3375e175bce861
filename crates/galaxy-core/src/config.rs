//! Tuning parameters for the particle field.
//!
//! Every value here is cosmetic: changing one alters the look of the
//! animation but none of the engine's guarantees (bounded pools, exact wrap,
//! opacity bounds).

use serde::{Deserialize, Serialize};

use crate::AnimationSpeed;

/// Particle field settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Frames per second the engine processes at most.
    pub target_fps: f32,
    /// Early-arrival slack, in milliseconds, when deciding if a frame is due.
    pub frame_tolerance_ms: f32,
    /// Animation speed preset.
    pub speed: AnimationSpeed,
    /// Whether the pointer attracts particles and sheds cursor dust.
    pub interactive: bool,
    /// Whether a fading trail follows the pointer.
    pub cursor_trail: bool,
    /// Distance past the viewport edge at which persistent particles wrap.
    pub wrap_margin: f32,
    /// Reference distance used by the inverse-distance depth scale.
    pub reference_depth: f32,
    /// Pixels of area per particle, per collection.
    pub density: DensityConfig,
    /// Spawn cooldowns and caps for transient particles.
    pub spawn: SpawnConfig,
    /// Slow zoom oscillation.
    pub zoom: ZoomConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            target_fps: 60.0,
            frame_tolerance_ms: 1.0,
            speed: AnimationSpeed::Medium,
            interactive: true,
            cursor_trail: true,
            wrap_margin: 50.0,
            reference_depth: 800.0,
            density: DensityConfig::default(),
            spawn: SpawnConfig::default(),
            zoom: ZoomConfig::default(),
        }
    }
}

impl FieldConfig {
    /// Minimum time between processed frames in milliseconds.
    pub fn frame_interval_ms(&self) -> f32 {
        1000.0 / self.target_fps.max(1.0)
    }
}

/// Area, in square pixels, covered by one particle of each collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityConfig {
    pub background_stars: f32,
    pub middle_stars: f32,
    pub foreground_stars: f32,
    pub orbit_clouds: f32,
    pub dust: f32,
    pub nebulae: f32,
    /// Nebulae always present regardless of area.
    pub nebula_base: usize,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            background_stars: 1500.0,
            middle_stars: 2000.0,
            foreground_stars: 3500.0,
            orbit_clouds: 40000.0,
            dust: 15000.0,
            nebulae: 100000.0,
            nebula_base: 5,
        }
    }
}

/// Randomized cooldown and collection cap for one kind of spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRule {
    /// Shortest wait between spawns.
    pub cooldown_ms: f32,
    /// Random extra wait added on top of the cooldown, 0..jitter.
    pub jitter_ms: f32,
    /// Largest size the target collection may reach through spawning.
    pub cap: usize,
}

/// Spawn rules for the transient and cursor-driven collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub shooting_stars: SpawnRule,
    pub falling_stars: SpawnRule,
    pub cursor_dust: SpawnRule,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            shooting_stars: SpawnRule {
                cooldown_ms: 4000.0,
                jitter_ms: 4000.0,
                cap: 5,
            },
            falling_stars: SpawnRule {
                cooldown_ms: 6000.0,
                jitter_ms: 6000.0,
                cap: 3,
            },
            cursor_dust: SpawnRule {
                cooldown_ms: 600.0,
                jitter_ms: 800.0,
                cap: 150,
            },
        }
    }
}

/// `zoom = max(min, 1 + sin(t * rate) * amplitude + bias)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Angular rate in radians per second of animation time.
    pub rate: f32,
    pub amplitude: f32,
    pub bias: f32,
    pub min: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            rate: 0.05,
            amplitude: 0.3,
            bias: 0.1,
            min: 0.8,
        }
    }
}

impl ZoomConfig {
    /// Largest zoom the oscillation can produce.
    pub fn max(&self) -> f32 {
        (1.0 + self.amplitude.abs() + self.bias).max(self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_interval() {
        let config = FieldConfig::default();
        assert!((config.frame_interval_ms() - 16.666_666).abs() < 1e-3);

        let zero = FieldConfig {
            target_fps: 0.0,
            ..Default::default()
        };
        assert_eq!(zero.frame_interval_ms(), 1000.0);
    }

    #[test]
    fn test_default_caps() {
        let spawn = SpawnConfig::default();
        assert_eq!(spawn.shooting_stars.cap, 5);
        assert_eq!(spawn.falling_stars.cap, 3);
        assert_eq!(spawn.cursor_dust.cap, 150);
    }

    #[test]
    fn test_zoom_max() {
        let zoom = ZoomConfig::default();
        assert!((zoom.max() - 1.4).abs() < 1e-6);
    }
}
