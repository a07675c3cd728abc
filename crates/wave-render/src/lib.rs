pub mod surface;
pub mod renderer;
pub mod frame_loop;

pub use surface::{Density, FrameSink, RetainedSurface, Surface};
pub use renderer::WaveRenderer;
pub use frame_loop::{
    run_frame_loop, CancelHandle, ChannelScheduler, FrameProducer, FrameScheduler,
    IntervalScheduler,
};
