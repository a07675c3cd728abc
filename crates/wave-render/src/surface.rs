use crossbeam::channel::{Sender, TrySendError};
use wave_core::{SurfaceSize, WaveOutline};

/// A host drawing surface the wave is painted onto.
pub trait Surface {
    /// Current size in device pixels.
    fn size(&self) -> SurfaceSize;

    /// Convert a logical length to device pixels.
    fn to_px(&self, logical: f32) -> f32 {
        logical
    }

    /// Fill `outline` with its solid color.
    fn fill(&mut self, outline: &WaveOutline);

    /// Whether the host has torn this surface down. Frame loops stop once
    /// this returns `true`.
    fn is_disposed(&self) -> bool {
        false
    }
}

/// Logical-to-pixel scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(pub f32);

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Density {
    pub fn to_px(&self, logical: f32) -> f32 {
        logical * self.0
    }
}

/// Surface that keeps the most recent outline for a retained-mode host to
/// pick up.
#[derive(Debug, Clone, Default)]
pub struct RetainedSurface {
    pub size: SurfaceSize,
    pub density: Density,
    last: Option<WaveOutline>,
    fills: usize,
}

impl RetainedSurface {
    pub fn new(size: SurfaceSize, density: Density) -> Self {
        Self { size, density, last: None, fills: 0 }
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    pub fn last_outline(&self) -> Option<&WaveOutline> {
        self.last.as_ref()
    }

    pub fn take_outline(&mut self) -> Option<WaveOutline> {
        self.last.take()
    }

    /// Number of fills since creation.
    pub fn fill_count(&self) -> usize {
        self.fills
    }
}

impl Surface for RetainedSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn to_px(&self, logical: f32) -> f32 {
        self.density.to_px(logical)
    }

    fn fill(&mut self, outline: &WaveOutline) {
        self.last = Some(outline.clone());
        self.fills += 1;
    }
}

/// Surface that forwards each filled outline over a crossbeam channel so
/// another thread can draw it.
///
/// Sends never block: when the receiver lags, the frame is dropped. Once the
/// receiver is gone the sink reports itself disposed.
pub struct FrameSink {
    tx: Sender<WaveOutline>,
    size: SurfaceSize,
    density: Density,
    disconnected: bool,
    dropped: usize,
}

impl FrameSink {
    pub fn new(tx: Sender<WaveOutline>, size: SurfaceSize, density: Density) -> Self {
        Self { tx, size, density, disconnected: false, dropped: 0 }
    }

    /// Frames discarded because the channel was full.
    pub fn dropped_frames(&self) -> usize {
        self.dropped
    }
}

impl Surface for FrameSink {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn to_px(&self, logical: f32) -> f32 {
        self.density.to_px(logical)
    }

    fn fill(&mut self, outline: &WaveOutline) {
        match self.tx.try_send(outline.clone()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                self.dropped += 1;
                log::trace!("outline channel full, dropping frame");
            }
            Err(TrySendError::Disconnected(_)) => {
                self.disconnected = true;
            }
        }
    }

    fn is_disposed(&self) -> bool {
        self.disconnected
    }
}
