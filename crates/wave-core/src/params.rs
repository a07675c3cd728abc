use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ConfigError;
use crate::style::WaveStyle;

pub const DEFAULT_WAVE_COUNT: i32 = 5;
pub const DEFAULT_WAVE_AMPLITUDE: f32 = 20.0;
pub const DEFAULT_WAVE_SPEED_MS: f64 = 1200.0;
pub const DEFAULT_VERTICAL_OSCILLATION_SPEED_MS: f64 = 1500.0;

/// Which edge of the surface the wave crest touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WaveDirection {
    #[default]
    Top,
    Bottom,
}

impl WaveDirection {
    pub fn flipped(&self) -> Self {
        match self {
            WaveDirection::Top => WaveDirection::Bottom,
            WaveDirection::Bottom => WaveDirection::Top,
        }
    }
}

/// User-facing wave configuration.
///
/// Every field is optional when deserialized; missing fields take the
/// defaults below. A `style` preset, when present, replaces the count,
/// amplitude and both speeds. Call [`WaveConfig::resolve`] to obtain the
/// validated [`WaveParameters`] the engine runs on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub color: Color,
    pub wave_direction: WaveDirection,
    /// Full sine periods across the surface width. Values below 1 are coerced to 1.
    pub wave_count: i32,
    /// Peak deviation in logical units, before height scaling.
    pub wave_amplitude: f32,
    /// Milliseconds for one full horizontal cycle.
    pub wave_speed_ms: f64,
    /// Milliseconds for one full breathing cycle.
    pub vertical_oscillation_speed_ms: f64,
    pub reverse_direction: bool,
    pub animate_wave_shape: bool,
    pub style: Option<WaveStyle>,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            wave_direction: WaveDirection::Top,
            wave_count: DEFAULT_WAVE_COUNT,
            wave_amplitude: DEFAULT_WAVE_AMPLITUDE,
            wave_speed_ms: DEFAULT_WAVE_SPEED_MS,
            vertical_oscillation_speed_ms: DEFAULT_VERTICAL_OSCILLATION_SPEED_MS,
            reverse_direction: false,
            animate_wave_shape: true,
            style: None,
        }
    }
}

impl WaveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_direction(mut self, direction: WaveDirection) -> Self {
        self.wave_direction = direction;
        self
    }

    pub fn with_wave_count(mut self, count: i32) -> Self {
        self.wave_count = count;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.wave_amplitude = amplitude;
        self
    }

    pub fn with_wave_speed(mut self, ms: f64) -> Self {
        self.wave_speed_ms = ms;
        self
    }

    pub fn with_vertical_oscillation_speed(mut self, ms: f64) -> Self {
        self.vertical_oscillation_speed_ms = ms;
        self
    }

    pub fn with_reverse_direction(mut self, reverse: bool) -> Self {
        self.reverse_direction = reverse;
        self
    }

    pub fn with_animate_shape(mut self, animate: bool) -> Self {
        self.animate_wave_shape = animate;
        self
    }

    pub fn with_style(mut self, style: WaveStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Validate and freeze this configuration.
    pub fn resolve(&self) -> Result<WaveParameters, ConfigError> {
        let (count, amplitude, wave_speed_ms, vertical_ms) = match self.style {
            Some(style) => {
                let preset = style.preset();
                (
                    preset.wave_count as i64,
                    preset.amplitude,
                    preset.wave_speed_ms,
                    preset.vertical_oscillation_speed_ms,
                )
            }
            None => (
                self.wave_count as i64,
                self.wave_amplitude,
                self.wave_speed_ms,
                self.vertical_oscillation_speed_ms,
            ),
        };

        let wave_count = if count < 1 {
            log::warn!("wave_count {count} is below 1, using 1");
            1
        } else {
            count as u32
        };

        if !amplitude.is_finite() || amplitude < 0.0 {
            return Err(ConfigError::InvalidAmplitude(amplitude));
        }
        check_duration("wave_speed_ms", wave_speed_ms)?;
        check_duration("vertical_oscillation_speed_ms", vertical_ms)?;

        Ok(WaveParameters {
            wave_count,
            amplitude,
            wave_speed_ms,
            vertical_oscillation_speed_ms: vertical_ms,
            direction: self.wave_direction,
            reverse_direction: self.reverse_direction,
            animate_shape: self.animate_wave_shape,
            color: self.color,
        })
    }
}

fn check_duration(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDuration { field, value })
    }
}

/// Validated, immutable wave parameters for one render session.
///
/// Only obtainable through [`WaveConfig::resolve`] (or `Default`), so the
/// wave count is always at least 1 and both speeds are positive.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveParameters {
    wave_count: u32,
    amplitude: f32,
    wave_speed_ms: f64,
    vertical_oscillation_speed_ms: f64,
    direction: WaveDirection,
    reverse_direction: bool,
    animate_shape: bool,
    color: Color,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            wave_count: DEFAULT_WAVE_COUNT as u32,
            amplitude: DEFAULT_WAVE_AMPLITUDE,
            wave_speed_ms: DEFAULT_WAVE_SPEED_MS,
            vertical_oscillation_speed_ms: DEFAULT_VERTICAL_OSCILLATION_SPEED_MS,
            direction: WaveDirection::Top,
            reverse_direction: false,
            animate_shape: true,
            color: Color::BLACK,
        }
    }
}

impl WaveParameters {
    pub fn wave_count(&self) -> u32 {
        self.wave_count
    }

    /// Amplitude in logical units.
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn wave_speed_ms(&self) -> f64 {
        self.wave_speed_ms
    }

    pub fn vertical_oscillation_speed_ms(&self) -> f64 {
        self.vertical_oscillation_speed_ms
    }

    pub fn direction(&self) -> WaveDirection {
        self.direction
    }

    pub fn reverse_direction(&self) -> bool {
        self.reverse_direction
    }

    pub fn animate_shape(&self) -> bool {
        self.animate_shape
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Sign applied to horizontal phase advancement: `+1` when reversed, `-1` otherwise.
    pub fn horizontal_sign(&self) -> f64 {
        if self.reverse_direction { 1.0 } else { -1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_public_surface() {
        let params = WaveConfig::default().resolve().unwrap();
        assert_eq!(params, WaveParameters::default());
        assert_eq!(params.wave_count(), 5);
        assert_eq!(params.amplitude(), 20.0);
        assert_eq!(params.wave_speed_ms(), 1200.0);
        assert_eq!(params.vertical_oscillation_speed_ms(), 1500.0);
        assert_eq!(params.direction(), WaveDirection::Top);
        assert!(!params.reverse_direction());
        assert!(params.animate_shape());
        assert_eq!(params.color(), Color::BLACK);
    }

    #[test]
    fn test_non_positive_count_coerced() {
        for count in [0, -3, i32::MIN] {
            let params = WaveConfig::new().with_wave_count(count).resolve().unwrap();
            assert_eq!(params.wave_count(), 1);
        }
    }

    #[test]
    fn test_style_overrides_tunables() {
        let params = WaveConfig::new()
            .with_wave_count(11)
            .with_amplitude(99.0)
            .with_style(WaveStyle::Calm)
            .with_direction(WaveDirection::Bottom)
            .resolve()
            .unwrap();
        assert_eq!(params.wave_count(), 3);
        assert_eq!(params.amplitude(), 14.0);
        assert_eq!(params.wave_speed_ms(), 2600.0);
        assert_eq!(params.vertical_oscillation_speed_ms(), 3000.0);
        // Non-preset fields survive
        assert_eq!(params.direction(), WaveDirection::Bottom);
    }

    #[test]
    fn test_rejects_bad_speeds() {
        let err = WaveConfig::new().with_wave_speed(0.0).resolve().unwrap_err();
        assert_eq!(err, ConfigError::InvalidDuration { field: "wave_speed_ms", value: 0.0 });

        let err = WaveConfig::new()
            .with_vertical_oscillation_speed(-10.0)
            .resolve()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDuration { field: "vertical_oscillation_speed_ms", .. }
        ));

        assert!(WaveConfig::new().with_wave_speed(f64::NAN).resolve().is_err());
        assert!(WaveConfig::new().with_wave_speed(f64::INFINITY).resolve().is_err());
    }

    #[test]
    fn test_rejects_negative_amplitude() {
        assert_eq!(
            WaveConfig::new().with_amplitude(-1.0).resolve().unwrap_err(),
            ConfigError::InvalidAmplitude(-1.0)
        );
        assert!(WaveConfig::new().with_amplitude(0.0).resolve().is_ok());
    }

    #[test]
    fn test_horizontal_sign() {
        let forward = WaveConfig::new().resolve().unwrap();
        let reversed = WaveConfig::new().with_reverse_direction(true).resolve().unwrap();
        assert_eq!(forward.horizontal_sign(), -1.0);
        assert_eq!(reversed.horizontal_sign(), 1.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{ "wave_direction": "Bottom", "style": "Energetic" }"#;
        let config: WaveConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.wave_direction, WaveDirection::Bottom);
        assert_eq!(config.style, Some(WaveStyle::Energetic));
        assert_eq!(config.wave_count, DEFAULT_WAVE_COUNT);
        assert!(config.animate_wave_shape);

        let params = config.resolve().unwrap();
        assert_eq!(params.wave_count(), 7);
    }

    #[test]
    fn test_color_token_in_json() {
        let config: WaveConfig = serde_json::from_str(r##"{ "color": "#1e5ac8" }"##).unwrap();
        assert_eq!(config.color, Color::from_rgb8(30, 90, 200));
        assert_eq!(config.resolve().unwrap().color(), Color::from_rgb8(30, 90, 200));

        let json = serde_json::to_string(&WaveConfig::new().with_color(Color::WHITE)).unwrap();
        assert!(json.contains(r##""color":"#ffffff""##), "{json}");

        let err = serde_json::from_str::<WaveConfig>(r#"{ "color": "teal" }"#).unwrap_err();
        assert!(err.to_string().contains("invalid color token"), "{err}");
    }

    #[test]
    fn test_direction_flip() {
        assert_eq!(WaveDirection::Top.flipped(), WaveDirection::Bottom);
        assert_eq!(WaveDirection::Bottom.flipped().flipped(), WaveDirection::Bottom);
    }
}
