//! Animation speed presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Global animation speed multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Factor applied to the animation-time accumulator.
    pub fn time_multiplier(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Next faster preset, saturating at `Fast`.
    pub fn faster(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium | AnimationSpeed::Fast => AnimationSpeed::Fast,
        }
    }

    /// Next slower preset, saturating at `Slow`.
    pub fn slower(self) -> Self {
        match self {
            AnimationSpeed::Fast => AnimationSpeed::Medium,
            AnimationSpeed::Medium | AnimationSpeed::Slow => AnimationSpeed::Slow,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }
}

impl fmt::Display for AnimationSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationSpeed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slow" => Ok(AnimationSpeed::Slow),
            "medium" => Ok(AnimationSpeed::Medium),
            "fast" => Ok(AnimationSpeed::Fast),
            other => Err(format!("unknown animation speed: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_cycle_saturates() {
        assert_eq!(AnimationSpeed::Fast.faster(), AnimationSpeed::Fast);
        assert_eq!(AnimationSpeed::Slow.slower(), AnimationSpeed::Slow);
        assert_eq!(AnimationSpeed::Slow.faster().faster(), AnimationSpeed::Fast);
    }

    #[test]
    fn test_speed_parse() {
        assert_eq!("FAST".parse::<AnimationSpeed>(), Ok(AnimationSpeed::Fast));
        assert!("warp".parse::<AnimationSpeed>().is_err());
        assert_eq!(AnimationSpeed::Medium.to_string(), "medium");
    }
}
