/// `setInterval`-driven frame scheduler
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Owns one browser interval timer; dropping it stops the timer.
pub struct IntervalScheduler {
    window: Window,
    interval_ms: i32,
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl IntervalScheduler {
    pub fn new(window: Window, interval_ms: i32) -> Self {
        Self {
            window,
            interval_ms,
            handle: None,
            callback: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Call `frame` every interval, replacing any loop already running
    pub fn start<F>(&mut self, frame: F) -> Result<(), JsValue>
    where
        F: FnMut() + 'static,
    {
        self.stop();

        let callback = Closure::wrap(Box::new(frame) as Box<dyn FnMut()>);
        let handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                self.interval_ms,
            )?;

        self.handle = Some(handle);
        self.callback = Some(callback);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_interval_with_handle(handle);
        }
        self.callback = None;
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
