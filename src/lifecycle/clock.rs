use std::time::Instant;

use rand::Rng;
use tracing::debug;

use super::collaborators::Renderer;
use super::SceneLifecycle;

/// Wall-clock frame timing.
///
/// Delta time is the difference between consecutive frame timestamps in
/// seconds. Timestamps that go backwards yield a zero delta.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    delta_secs: f64,
    frame_count: u64,
}

impl FrameClock {
    /// Creates a clock whose first frame is measured from `start`.
    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            last_frame: start,
            delta_secs: 0.0,
            frame_count: 0,
        }
    }

    /// Creates a clock starting now.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Records a frame at `now` and returns its delta time in seconds.
    pub fn advance(&mut self, now: Instant) -> f64 {
        self.delta_secs = now.saturating_duration_since(self.last_frame).as_secs_f64();
        self.last_frame = self.last_frame.max(now);
        self.frame_count += 1;
        self.delta_secs
    }

    /// Seconds between the last two frames.
    #[inline]
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta_secs
    }

    /// Frames recorded so far.
    #[inline]
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Seconds from the start to the latest frame.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.last_frame.saturating_duration_since(self.start).as_secs_f64()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// A host that paces frames, typically once per display refresh.
pub trait FrameHost: Renderer {
    /// Blocks until the next frame is due and returns its timestamp, or
    /// `None` once the host wants the loop to stop.
    fn next_frame(&mut self) -> Option<Instant>;
}

/// Drives a [`SceneLifecycle`] once per host frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameLoop {
    clock: FrameClock,
}

impl FrameLoop {
    #[must_use]
    pub fn new(clock: FrameClock) -> Self {
        Self { clock }
    }

    #[must_use]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Runs a single frame at `now`: advances bounces and renders.
    pub fn frame<R: Rng, T: Renderer + ?Sized>(
        &mut self,
        now: Instant,
        lifecycle: &mut SceneLifecycle<R>,
        renderer: &mut T,
    ) -> f64 {
        let dt = self.clock.advance(now);
        lifecycle.tick(dt, renderer);
        dt
    }

    /// Runs frames until the host stops. Returns the number of frames run.
    pub fn run<R: Rng, H: FrameHost + ?Sized>(
        &mut self,
        lifecycle: &mut SceneLifecycle<R>,
        host: &mut H,
    ) -> u64 {
        let mut frames = 0;
        while let Some(now) = host.next_frame() {
            self.frame(now, lifecycle, host);
            frames += 1;
        }
        debug!(frames, elapsed = self.clock.elapsed(), "frame loop stopped");
        frames
    }
}
