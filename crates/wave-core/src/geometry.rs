//! Wave outline construction.
//!
//! Given the current [`Phases`], the surface size and the validated
//! parameters, this module scales the amplitude to the available height,
//! places the baseline against the crest edge and samples the sine curve
//! across the width into a closed polygon. Everything here is pure: the
//! same inputs always give the same outline.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::clock::Phases;
use crate::color::Color;
use crate::outline::WaveOutline;
use crate::params::{WaveDirection, WaveParameters};

/// Horizontal distance between curve samples, in pixels.
pub const SAMPLE_STRIDE_PX: f32 = 3.0;
/// Upper bound on sample steps per frame; wider surfaces sample more coarsely.
pub const MAX_SAMPLE_STEPS: usize = 1 << 20;

/// Lowest fraction of the scaled amplitude reached while breathing.
pub const BREATH_FLOOR: f32 = 0.8;
/// Breathing swing on top of the floor; floor + depth is the full amplitude.
/// The breathing sine is mapped into `[0, 1]` before scaling by this.
pub const BREATH_DEPTH: f32 = 0.2;
/// How fast the breathing pattern travels along the wave, per radian of progress.
pub const BREATH_SPREAD: f32 = 0.5;

/// Drawing surface dimensions in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    /// Negative or non-finite dimensions are treated as 0.
    pub fn new(width: f32, height: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }
}

/// Per-frame derived measurements of the wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveMetrics {
    pub size: SurfaceSize,
    /// Configured amplitude after fitting it into the surface height.
    pub scaled_amplitude: f32,
    /// Vertical center line of the sine curve.
    pub baseline: f32,
    /// Width of one full sine period in pixels.
    pub wavelength: f32,
    pub wave_count: u32,
    pub direction: WaveDirection,
    pub animate_shape: bool,
}

impl WaveMetrics {
    /// `amplitude_px` is the configured amplitude already converted from
    /// logical units to device pixels.
    pub fn compute(size: SurfaceSize, amplitude_px: f32, params: &WaveParameters) -> Self {
        let size = SurfaceSize::new(size.width, size.height);
        let amplitude_px = if amplitude_px.is_finite() { amplitude_px.max(0.0) } else { 0.0 };

        // Shrink, never grow, so the peak-to-trough span fits the height
        let scaled_amplitude = if amplitude_px > 0.0 {
            let intrinsic_height = amplitude_px * 2.0;
            let scale = (size.height / intrinsic_height).min(1.0);
            (amplitude_px * scale).min(size.height * 0.5)
        } else {
            0.0
        };

        let baseline = match params.direction() {
            WaveDirection::Top => scaled_amplitude,
            WaveDirection::Bottom => size.height - scaled_amplitude,
        };

        let wave_count = params.wave_count().max(1);
        let wavelength = size.width / wave_count as f32;

        Self {
            size,
            scaled_amplitude,
            baseline,
            wavelength,
            wave_count,
            direction: params.direction(),
            animate_shape: params.animate_shape(),
        }
    }

    /// True when there is no wave worth drawing: the scaled amplitude
    /// rounds to zero pixels, or the surface has no width.
    pub fn is_degenerate(&self) -> bool {
        self.scaled_amplitude.round() == 0.0 || self.wavelength <= 0.0
    }

    /// Angular position of pixel column `x` along the wave.
    pub fn progress(&self, x: f32) -> f32 {
        if self.wavelength > 0.0 {
            (x / self.wavelength) * TAU
        } else {
            0.0
        }
    }

    /// Amplitude at `progress`, including the breathing modulation.
    pub fn local_amplitude(&self, progress: f32, vertical_phase: f32) -> f32 {
        if self.animate_shape {
            let breath = (vertical_phase + progress.abs() * BREATH_SPREAD).sin();
            let swing = (breath + 1.0) * 0.5;
            self.scaled_amplitude * (BREATH_FLOOR + BREATH_DEPTH * swing)
        } else {
            self.scaled_amplitude
        }
    }

    /// Height of the curve at pixel column `x`.
    pub fn sample_y(&self, x: f32, phases: Phases) -> f32 {
        let progress = self.progress(x);
        let amplitude = self.local_amplitude(progress, phases.vertical);
        self.baseline + amplitude * (progress + phases.horizontal).sin()
    }

    /// Sample columns from 0 to the full width; the last one is exactly `width`.
    ///
    /// The stride is [`SAMPLE_STRIDE_PX`] unless that would exceed
    /// [`MAX_SAMPLE_STEPS`], in which case it widens to fit.
    pub fn sample_xs(&self) -> impl DoubleEndedIterator<Item = f32> {
        let width = self.size.width;
        let stride = SAMPLE_STRIDE_PX.max(width / MAX_SAMPLE_STEPS as f32);
        let steps = ((width / stride).ceil() as usize).min(MAX_SAMPLE_STEPS);
        (0..=steps).map(move |i| (i as f32 * stride).min(width))
    }

    /// Write the closed wave polygon into `out`, replacing its contents.
    ///
    /// Top: the area below the curve. Bottom: the area above it.
    pub fn trace_into(&self, phases: Phases, out: &mut Vec<Vec2>) {
        let SurfaceSize { width, height } = self.size;
        out.clear();
        out.push(Vec2::new(0.0, 0.0));

        match self.direction {
            WaveDirection::Top => {
                out.extend(self.sample_xs().map(|x| Vec2::new(x, self.sample_y(x, phases))));
                out.push(Vec2::new(width, height));
                out.push(Vec2::new(0.0, height));
            }
            WaveDirection::Bottom => {
                out.push(Vec2::new(width, 0.0));
                out.extend(
                    self.sample_xs()
                        .rev()
                        .map(|x| Vec2::new(x, self.sample_y(x, phases))),
                );
                out.push(Vec2::new(0.0, height));
            }
        }
    }

    /// The fillable outline for this frame.
    pub fn outline(&self, phases: Phases, color: Color) -> WaveOutline {
        if self.is_degenerate() {
            return WaveOutline::full_rect(self.size.width, self.size.height, color);
        }

        let mut vertices = Vec::with_capacity(self.sample_xs().size_hint().0.saturating_add(3));
        self.trace_into(phases, &mut vertices);
        WaveOutline::polygon(vertices, color)
    }
}

/// Build this frame's outline from scratch.
pub fn build_outline(
    size: SurfaceSize,
    amplitude_px: f32,
    phases: Phases,
    params: &WaveParameters,
) -> WaveOutline {
    WaveMetrics::compute(size, amplitude_px, params).outline(phases, params.color())
}
