/// Painter Web - renders the rotating solid onto an HTML canvas
///
/// Build with wasm-pack and construct `WebRenderer` from JavaScript with the
/// id of a `<canvas>` element, then call `start()`.
use std::cell::RefCell;
use std::rc::Rc;

use painter_core::{
    build_from_data, build_pyramid, InputState, ModelData, Renderer, Scene,
    DEFAULT_FRAME_INTERVAL,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

pub mod scheduler;
pub mod surface;

pub use scheduler::IntervalScheduler;
pub use surface::CanvasSurface;

struct App {
    scene: Scene,
    surface: CanvasSurface,
    input: InputState,
}

impl App {
    fn tick(&mut self) {
        self.scene.tick(&self.input, &mut self.surface);
    }
}

#[wasm_bindgen]
pub struct WebRenderer {
    app: Rc<RefCell<App>>,
    scheduler: IntervalScheduler,
    _listeners: Vec<Closure<dyn FnMut(KeyboardEvent)>>,
}

#[wasm_bindgen]
impl WebRenderer {
    /// Attach to the canvas with id `canvas_id` and show a ten-sided pyramid
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WebRenderer, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id `{canvas_id}`")))?
            .dyn_into()
            .map_err(|_| JsValue::from_str(&format!("`{canvas_id}` is not a canvas")))?;
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("unexpected context type"))?;

        let app = Rc::new(RefCell::new(App {
            scene: Scene::new(
                build_pyramid(10, 100.0, 200.0),
                Renderer::new(canvas.width(), canvas.height()),
            ),
            surface: CanvasSurface::new(context),
            input: InputState::new(),
        }));

        let mut listeners = Vec::with_capacity(2);
        for (event, down) in [("keydown", true), ("keyup", false)] {
            let app = Rc::clone(&app);
            let listener = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                let mut app = app.borrow_mut();
                if down {
                    app.input.press(&e.key());
                } else {
                    app.input.release(&e.key());
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);
            window.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
            listeners.push(listener);
        }

        let interval_ms = DEFAULT_FRAME_INTERVAL.as_millis() as i32;
        Ok(WebRenderer {
            app,
            scheduler: IntervalScheduler::new(window, interval_ms),
            _listeners: listeners,
        })
    }

    /// Start advancing and drawing on the frame interval
    pub fn start(&mut self) -> Result<(), JsValue> {
        let app = Rc::clone(&self.app);
        self.scheduler.start(move || app.borrow_mut().tick())
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Draw one frame without advancing
    pub fn render(&mut self) {
        let mut app = self.app.borrow_mut();
        let App { scene, surface, .. } = &mut *app;
        scene.draw(surface);
    }

    /// Replace the solid with one built from a `{"points", "triangles"}` record
    pub fn load_model(&mut self, json: &str) -> Result<(), JsValue> {
        let data = ModelData::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mesh = build_from_data(&data).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.app.borrow_mut().scene.set_mesh(mesh);
        Ok(())
    }
}
