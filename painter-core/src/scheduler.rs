/// Fixed-cadence frame loop
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Cadence used by the front ends
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(20);

/// Stops a running [`FrameScheduler`] after the current frame
#[derive(Debug, Clone)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.set(false);
    }
}

/// Runs one frame callback at a fixed interval until stopped.
///
/// Frames never overlap: each callback returns before the next is scheduled,
/// and a slow frame simply delays the following one.
#[derive(Debug)]
pub struct FrameScheduler {
    interval: Duration,
    running: Rc<Cell<bool>>,
}

impl FrameScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: Rc::new(Cell::new(false)),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Rc::clone(&self.running))
    }

    /// Start the loop. Returns the number of frames run, or the first error
    /// a frame reported.
    pub fn run<F, E>(&mut self, mut frame: F) -> Result<u64, E>
    where
        F: FnMut() -> Result<(), E>,
    {
        self.running.set(true);
        tracing::info!("Frame loop started ({:?} interval)", self.interval);

        let mut frames = 0;
        while self.running.get() {
            let frame_start = Instant::now();

            if let Err(e) = frame() {
                self.running.set(false);
                return Err(e);
            }
            frames += 1;

            let elapsed = frame_start.elapsed();
            if self.running.get() && elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            }
        }

        tracing::info!("Frame loop stopped after {} frames", frames);
        Ok(frames)
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}
