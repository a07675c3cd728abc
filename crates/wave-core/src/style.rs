use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigError;

/// Named wave presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaveStyle {
    /// Slow and shallow.
    Calm,
    /// Balanced default.
    Gentle,
    /// Fast and deep.
    Energetic,
}

/// The tunables a [`WaveStyle`] overrides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylePreset {
    pub wave_count: u32,
    /// Logical units, converted to pixels by the host.
    pub amplitude: f32,
    pub wave_speed_ms: f64,
    pub vertical_oscillation_speed_ms: f64,
}

impl WaveStyle {
    pub const ALL: [WaveStyle; 3] = [WaveStyle::Calm, WaveStyle::Gentle, WaveStyle::Energetic];

    pub fn preset(&self) -> StylePreset {
        match self {
            WaveStyle::Calm => StylePreset {
                wave_count: 3,
                amplitude: 14.0,
                wave_speed_ms: 2600.0,
                vertical_oscillation_speed_ms: 3000.0,
            },
            WaveStyle::Gentle => StylePreset {
                wave_count: 5,
                amplitude: 20.0,
                wave_speed_ms: 1500.0,
                vertical_oscillation_speed_ms: 2000.0,
            },
            WaveStyle::Energetic => StylePreset {
                wave_count: 7,
                amplitude: 28.0,
                wave_speed_ms: 900.0,
                vertical_oscillation_speed_ms: 1200.0,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WaveStyle::Calm => "Calm",
            WaveStyle::Gentle => "Gentle",
            WaveStyle::Energetic => "Energetic",
        }
    }
}

impl FromStr for WaveStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WaveStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownStyle(s.to_string()))
    }
}
