//! Frame-driven phase accumulators.
//!
//! One [`AnimationState`] lives per running wave instance. The host calls
//! [`AnimationState::advance`] once per rendered frame with a monotonic
//! millisecond timestamp; the resulting [`Phases`] feed the geometry builder.

use std::f32::consts::TAU;
use std::f64::consts::TAU as TAU_F64;

use crate::params::WaveParameters;

/// Wrap a phase into `[0, 2π)`.
///
/// Negative inputs are brought up by whole periods, and a float result that
/// lands exactly on `2π` is folded back to 0. Non-finite input yields 0.
pub fn wrap_phase(phase: f32) -> f32 {
    let wrapped = phase.rem_euclid(TAU);
    if !wrapped.is_finite() || wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

fn advance_phase(phase: f32, delta_ms: f64, period_ms: f64, sign: f64) -> f32 {
    let step = (delta_ms / period_ms) * TAU_F64 * sign;
    wrap_phase((phase as f64 + step).rem_euclid(TAU_F64) as f32)
}

/// Snapshot of both oscillators, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Phases {
    pub horizontal: f32,
    pub vertical: f32,
}

/// Mutable animation state of one wave instance.
#[derive(Debug, Clone, Default)]
pub struct AnimationState {
    horizontal_phase: f32,
    vertical_phase: f32,
    last_frame_ms: Option<f64>,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizontal_phase(&self) -> f32 {
        self.horizontal_phase
    }

    pub fn vertical_phase(&self) -> f32 {
        self.vertical_phase
    }

    pub fn last_frame_ms(&self) -> Option<f64> {
        self.last_frame_ms
    }

    pub fn phases(&self) -> Phases {
        Phases {
            horizontal: self.horizontal_phase,
            vertical: self.vertical_phase,
        }
    }

    /// Advance both oscillators to the frame at `now_ms`.
    ///
    /// The first call of a session only records the timestamp. A timestamp
    /// earlier than the previous one counts as zero elapsed time and becomes
    /// the new reference. Returns `true` when the phases moved.
    pub fn advance(&mut self, now_ms: f64, params: &WaveParameters) -> bool {
        if !now_ms.is_finite() {
            log::trace!("ignoring non-finite frame timestamp {now_ms}");
            return false;
        }

        let Some(previous) = self.last_frame_ms.replace(now_ms) else {
            log::debug!("wave animation session started at {now_ms:.1}ms");
            return false;
        };

        let delta_ms = (now_ms - previous).max(0.0);
        if delta_ms == 0.0 {
            return false;
        }

        self.horizontal_phase = advance_phase(
            self.horizontal_phase,
            delta_ms,
            params.wave_speed_ms(),
            params.horizontal_sign(),
        );

        if params.animate_shape() {
            self.vertical_phase = advance_phase(
                self.vertical_phase,
                delta_ms,
                params.vertical_oscillation_speed_ms(),
                1.0,
            );
        }

        true
    }

    /// End the session: forget the last timestamp and zero both phases.
    pub fn reset(&mut self) {
        if self.last_frame_ms.is_some() {
            log::debug!("wave animation session ended");
        }
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::WaveConfig;
    use std::f32::consts::PI;

    fn params(config: WaveConfig) -> WaveParameters {
        config.resolve().unwrap()
    }

    #[test]
    fn test_wrap_phase() {
        assert_eq!(wrap_phase(0.0), 0.0);
        assert!((wrap_phase(TAU + 1.0) - 1.0).abs() < 1e-5);
        assert!((wrap_phase(-1.0) - (TAU - 1.0)).abs() < 1e-5);
        assert_eq!(wrap_phase(TAU), 0.0);
        assert_eq!(wrap_phase(f32::NAN), 0.0);
        // Tiny negative rounds up to 2π under rem_euclid; must fold to 0
        let w = wrap_phase(-1e-9);
        assert!((0.0..TAU).contains(&w));
    }

    #[test]
    fn test_first_tick_records_only() {
        let p = params(WaveConfig::new());
        let mut state = AnimationState::new();
        assert!(!state.advance(5_000.0, &p));
        assert_eq!(state.phases(), Phases::default());
        assert_eq!(state.last_frame_ms(), Some(5_000.0));
    }

    #[test]
    fn test_forward_direction_decreases_phase() {
        let p = params(WaveConfig::new().with_wave_speed(1200.0));
        let mut state = AnimationState::new();
        state.advance(0.0, &p);
        assert!(state.advance(100.0, &p));
        // -π/6 wrapped
        assert!((state.horizontal_phase() - (TAU - PI / 6.0)).abs() < 1e-4);
    }

    #[test]
    fn test_reverse_direction_increases_phase() {
        let p = params(WaveConfig::new().with_wave_speed(1200.0).with_reverse_direction(true));
        let mut state = AnimationState::new();
        state.advance(0.0, &p);
        state.advance(100.0, &p);
        assert!((state.horizontal_phase() - PI / 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_vertical_phase_only_when_breathing() {
        let still = params(WaveConfig::new().with_animate_shape(false));
        let mut state = AnimationState::new();
        state.advance(0.0, &still);
        state.advance(750.0, &still);
        assert_eq!(state.vertical_phase(), 0.0);
        assert!(state.horizontal_phase() != 0.0);

        let breathing = params(WaveConfig::new().with_vertical_oscillation_speed(1500.0));
        let mut state = AnimationState::new();
        state.advance(0.0, &breathing);
        state.advance(750.0, &breathing);
        assert!((state.vertical_phase() - PI).abs() < 1e-4);
    }

    #[test]
    fn test_backwards_time_is_zero_delta() {
        let p = params(WaveConfig::new());
        let mut state = AnimationState::new();
        state.advance(1_000.0, &p);
        state.advance(1_100.0, &p);
        let before = state.phases();

        assert!(!state.advance(900.0, &p));
        assert_eq!(state.phases(), before);
        assert_eq!(state.last_frame_ms(), Some(900.0));

        // Re-anchored on 900: the next 100ms advances normally
        assert!(state.advance(1_000.0, &p));
        assert!(state.phases() != before);
    }

    #[test]
    fn test_non_finite_timestamp_ignored() {
        let p = params(WaveConfig::new());
        let mut state = AnimationState::new();
        state.advance(10.0, &p);
        assert!(!state.advance(f64::NAN, &p));
        assert_eq!(state.last_frame_ms(), Some(10.0));
    }

    #[test]
    fn test_phases_stay_wrapped() {
        let p = params(WaveConfig::new().with_wave_speed(7.0).with_vertical_oscillation_speed(3.0));
        let mut state = AnimationState::new();
        let mut now = 0.0;
        for i in 0..10_000u32 {
            now += (i % 97) as f64 * 1.37;
            state.advance(now, &p);
            assert!((0.0..TAU).contains(&state.horizontal_phase()));
            assert!((0.0..TAU).contains(&state.vertical_phase()));
        }
    }

    #[test]
    fn test_huge_delta_stays_wrapped() {
        let p = params(WaveConfig::new().with_reverse_direction(true));
        let mut state = AnimationState::new();
        state.advance(0.0, &p);
        state.advance(1.0e12, &p);
        assert!((0.0..TAU).contains(&state.horizontal_phase()));
        assert!((0.0..TAU).contains(&state.vertical_phase()));
    }

    #[test]
    fn test_reset_starts_new_session() {
        let p = params(WaveConfig::new());
        let mut state = AnimationState::new();
        state.advance(0.0, &p);
        state.advance(250.0, &p);
        state.reset();
        assert_eq!(state.last_frame_ms(), None);
        assert_eq!(state.phases(), Phases::default());
        assert!(!state.advance(10_000.0, &p));
    }
}
