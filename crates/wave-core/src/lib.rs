pub mod color;
pub mod error;
pub mod style;
pub mod params;
pub mod clock;
pub mod geometry;
pub mod outline;

pub use color::Color;
pub use error::ConfigError;
pub use style::{StylePreset, WaveStyle};
pub use params::{WaveConfig, WaveDirection, WaveParameters};
pub use clock::{wrap_phase, AnimationState, Phases};
pub use geometry::{build_outline, SurfaceSize, WaveMetrics};
pub use outline::{Fill, OutlineShape, WaveOutline};
