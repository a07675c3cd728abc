//! Frame scheduling: the loop that drives a [`WaveRenderer`] once per
//! display frame until the host disposes of it.
//!
//! A [`FrameScheduler`] is the single suspension point of each iteration. It
//! blocks until the next frame is due and yields its timestamp, or returns
//! `None` once the owner has cancelled. [`FrameProducer`] runs the same loop
//! on a background thread and hands finished outlines to the drawing thread
//! through a bounded channel.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam::channel::{self, Receiver, Sender, TryRecvError};
use wave_core::{SurfaceSize, WaveOutline, WaveParameters};

use crate::renderer::WaveRenderer;
use crate::surface::{Density, FrameSink, Surface};

/// Source of frame-ready signals.
pub trait FrameScheduler {
    /// Block until the next frame and return its timestamp in monotonic
    /// milliseconds, or `None` when the loop should end.
    fn next_frame(&mut self) -> Option<f64>;
}

/// Drive `renderer` until the scheduler runs dry or the surface is disposed.
///
/// Ends the renderer's session on the way out and returns the number of
/// frames drawn.
pub fn run_frame_loop<F, S>(
    renderer: &mut WaveRenderer,
    scheduler: &mut F,
    surface: &mut S,
) -> usize
where
    F: FrameScheduler + ?Sized,
    S: Surface + ?Sized,
{
    let mut frames = 0;
    while !surface.is_disposed() {
        let Some(now_ms) = scheduler.next_frame() else {
            break;
        };
        renderer.render_frame(now_ms, surface);
        frames += 1;
    }
    renderer.stop();
    frames
}

/// Cancels the scheduler it was created with. Cloneable; dropping every
/// clone also cancels.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: Sender<()>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        // Full means a cancel is already pending
        let _ = self.tx.try_send(());
    }
}

fn cancel_pair() -> (CancelHandle, Receiver<()>) {
    let (tx, rx) = channel::bounded(1);
    (CancelHandle { tx }, rx)
}

fn is_cancelled(cancel_rx: &Receiver<()>) -> bool {
    !matches!(cancel_rx.try_recv(), Err(TryRecvError::Empty))
}

/// Fixed-rate scheduler backed by a crossbeam ticker.
pub struct IntervalScheduler {
    ticker: Receiver<Instant>,
    cancel_rx: Receiver<()>,
    origin: Instant,
    cancelled: bool,
}

impl IntervalScheduler {
    pub fn new(interval: Duration) -> (Self, CancelHandle) {
        let (handle, cancel_rx) = cancel_pair();
        let scheduler = Self {
            ticker: channel::tick(interval),
            cancel_rx,
            origin: Instant::now(),
            cancelled: false,
        };
        (scheduler, handle)
    }

    /// Scheduler ticking at `fps` frames per second (at least 1).
    pub fn with_fps(fps: u32) -> (Self, CancelHandle) {
        Self::new(Duration::from_secs_f64(1.0 / fps.max(1) as f64))
    }

    fn elapsed_ms(&self, at: Instant) -> f64 {
        at.saturating_duration_since(self.origin).as_secs_f64() * 1000.0
    }
}

impl FrameScheduler for IntervalScheduler {
    fn next_frame(&mut self) -> Option<f64> {
        if self.cancelled || is_cancelled(&self.cancel_rx) {
            self.cancelled = true;
            return None;
        }

        channel::select! {
            recv(self.cancel_rx) -> _ => {
                self.cancelled = true;
                None
            }
            recv(self.ticker) -> tick => tick.ok().map(|at| self.elapsed_ms(at)),
        }
    }
}

/// Scheduler fed by the host's own frame callback: each timestamp sent on
/// the channel is one frame. Dropping the sender ends the loop.
pub struct ChannelScheduler {
    rx: Receiver<f64>,
}

impl ChannelScheduler {
    pub fn new(rx: Receiver<f64>) -> Self {
        Self { rx }
    }

    /// Create the scheduler along with the sender the host pushes timestamps into.
    pub fn unbounded() -> (Sender<f64>, Self) {
        let (tx, rx) = channel::unbounded();
        (tx, Self::new(rx))
    }
}

impl FrameScheduler for ChannelScheduler {
    fn next_frame(&mut self) -> Option<f64> {
        self.rx.recv().ok()
    }
}

/// Background thread producing wave outlines at a fixed frame rate.
///
/// Outlines for a fixed surface size are sent to `frame_tx` without blocking;
/// the producer stops when [`FrameProducer::stop`] is called, when it is
/// dropped, or when the receiving side disconnects.
pub struct FrameProducer {
    cancel: CancelHandle,
    thread: Option<thread::JoinHandle<usize>>,
}

impl FrameProducer {
    pub fn start(
        params: WaveParameters,
        size: SurfaceSize,
        density: Density,
        frame_interval: Duration,
        frame_tx: Sender<WaveOutline>,
    ) -> io::Result<Self> {
        let (mut scheduler, cancel) = IntervalScheduler::new(frame_interval);

        let thread = thread::Builder::new()
            .name("wave-frames".to_string())
            .spawn(move || {
                log::info!(
                    "wave frame producer started ({}x{}, {:?} per frame)",
                    size.width,
                    size.height,
                    frame_interval
                );
                let mut renderer = WaveRenderer::new(params);
                let mut sink = FrameSink::new(frame_tx, size, density);
                let frames = run_frame_loop(&mut renderer, &mut scheduler, &mut sink);
                log::info!(
                    "wave frame producer stopped after {frames} frames ({} dropped)",
                    sink.dropped_frames()
                );
                frames
            })?;

        Ok(Self {
            cancel,
            thread: Some(thread),
        })
    }

    /// Signal the producer to stop and wait for it. Returns the number of
    /// frames it drew, or 0 if it was already stopped.
    pub fn stop(&mut self) -> usize {
        self.cancel.cancel();
        match self.thread.take() {
            Some(thread) => thread.join().unwrap_or(0),
            None => 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for FrameProducer {
    fn drop(&mut self) {
        self.stop();
    }
}
