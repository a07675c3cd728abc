use thiserror::Error;

/// Rejected wave configuration.
///
/// Raised once when a [`crate::WaveConfig`] is resolved into parameters.
/// Frame-time code never fails; every numeric edge case there is handled
/// by policy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive, finite duration in milliseconds, got {value}")]
    InvalidDuration { field: &'static str, value: f64 },

    #[error("wave amplitude must be non-negative and finite, got {0}")]
    InvalidAmplitude(f32),

    #[error("invalid color token '{0}', expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("unknown wave style '{0}'")]
    UnknownStyle(String),
}
