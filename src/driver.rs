// Per-frame loop. `Scene` holds everything one frame needs and works with
// any surface; `start` wires it to the browser window, its events and
// requestAnimationFrame.

use crate::config::CANVAS_ID;
use crate::connections;
use crate::pointer::PointerState;
use crate::renderer::CanvasSurface;
use crate::simulation::Simulation;
use crate::surface::{Bounds, Surface};
use crate::Timer;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement, MouseEvent, Window};

pub struct Scene<R: Rng> {
    simulation: Simulation<R>,
    pointer: PointerState,
    bounds: Bounds,
}

impl<R: Rng> Scene<R> {
    pub fn new(bounds: Bounds, rng: R) -> Self {
        let mut simulation = Simulation::new(rng);
        simulation.init(bounds);
        Scene {
            simulation,
            pointer: PointerState::new(bounds),
            bounds,
        }
    }

    // Clear, move, draw particles, then join neighbours
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear_rect(0.0, 0.0, self.bounds.width, self.bounds.height)?;
        self.simulation.tick(&self.pointer, self.bounds);
        self.simulation.draw(surface)?;
        connections::connect(self.simulation.particles(), self.bounds, surface)
    }

    // Full repopulation; the pointer radius stays as first computed
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.simulation.init(bounds);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.leave();
    }

    pub fn simulation(&self) -> &Simulation<R> {
        &self.simulation
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()?.request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())
}

// Sizes the canvas to the viewport and reports the new bounds
fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement) -> Result<Bounds, JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Ok(Bounds::new(canvas.width() as f64, canvas.height() as f64))
}

fn find_canvas(window: &Window) -> Result<HtmlCanvasElement, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", CANVAS_ID)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("'{}' is not a canvas", CANVAS_ID)))
}

// Any failure before the first frame is scheduled aborts startup
pub fn start() -> Result<(), JsValue> {
    let window = window()?;
    let canvas = find_canvas(&window)?;
    let mut surface = CanvasSurface::from_canvas(&canvas)?;
    let bounds = fit_to_window(&window, &canvas)?;

    let scene = {
        let _timer = Timer::new("Simulation::init");
        Rc::new(RefCell::new(Scene::new(bounds, rand::thread_rng())))
    };
    console::log_1(
        &format!(
            "particle background: {}x{} with {} particles",
            bounds.width,
            bounds.height,
            scene.borrow().simulation().len()
        )
        .into(),
    );

    {
        let scene = scene.clone();
        let window_handle = window.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            match fit_to_window(&window_handle, &canvas) {
                Ok(bounds) => {
                    let _timer = Timer::new("Simulation::init");
                    let mut scene = scene.borrow_mut();
                    scene.resize(bounds);
                    console::log_1(
                        &format!(
                            "resized to {}x{}, {} particles",
                            bounds.width,
                            bounds.height,
                            scene.simulation().len()
                        )
                        .into(),
                    );
                }
                Err(err) => console::error_1(&err),
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    {
        let scene = scene.clone();
        let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
            scene
                .borrow_mut()
                .pointer_move(event.client_x() as f64, event.client_y() as f64);
        }) as Box<dyn FnMut(MouseEvent)>);
        window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }

    {
        let scene = scene.clone();
        let on_leave = Closure::wrap(Box::new(move || {
            scene.borrow_mut().pointer_leave();
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("mouseout", on_leave.as_ref().unchecked_ref())?;
        on_leave.forget();
    }

    // The closure keeps a handle to itself so it can ask for the next frame
    let next_frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first_frame = next_frame.clone();
    *first_frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(err) = scene.borrow_mut().frame(&mut surface) {
            console::error_1(&err);
        }
        if let Some(callback) = next_frame.borrow().as_ref() {
            if let Err(err) = request_animation_frame(callback) {
                console::error_1(&err);
            }
        }
    }) as Box<dyn FnMut()>));

    let first = first_frame.borrow();
    let callback = first
        .as_ref()
        .ok_or_else(|| JsValue::from_str("frame callback missing"))?;
    request_animation_frame(callback)?;
    Ok(())
}
