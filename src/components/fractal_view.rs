use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent, TouchList, WheelEvent, Window};
use yew::prelude::*;

use super::{fps_overlay::FpsOverlay, view_controls::ViewControls};
use crate::config::{self, ViewerConfig};
use crate::error::ViewerError;
use crate::gesture::WheelInput;
use crate::mapper::{ScreenPoint, SurfaceSize};
use crate::render_loop::FrameScheduler;
use crate::renderer::RendererHandle;
use crate::resize::fit_canvas_to_window;
use crate::viewer::Viewer;

type SharedViewer = Rc<RefCell<Option<Viewer<RendererHandle>>>>;
type SharedScheduler = Rc<RefCell<FrameScheduler>>;

#[derive(Properties, PartialEq, Clone)]
pub struct FractalViewProps {
    pub config: ViewerConfig,
}

/// Everything acquired on mount. Dropping it stops the loop, detaches every
/// listener and disposes the renderer, in that order.
struct Mounted {
    scheduler: SharedScheduler,
    listeners: Vec<EventListener>,
    viewer: SharedViewer,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.scheduler.borrow_mut().stop();
        self.listeners.clear();
        if let Some(viewer) = self.viewer.borrow_mut().take() {
            viewer.into_renderer().dispose();
        }
        log::info!("viewer torn down");
    }
}

fn with_viewer(shared: &SharedViewer, f: impl FnOnce(&mut Viewer<RendererHandle>)) {
    if let Some(v) = shared.borrow_mut().as_mut() {
        f(v);
    }
}

fn now_ms(window: &Window) -> f64 {
    window.performance().map_or(0.0, |p| p.now())
}

fn surface_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> ScreenPoint {
    let rect = canvas.get_bounding_client_rect();
    ScreenPoint::new(f64::from(client_x) - rect.left(), f64::from(client_y) - rect.top())
}

fn touch_points(canvas: &HtmlCanvasElement, touches: &TouchList) -> Vec<ScreenPoint> {
    let rect = canvas.get_bounding_client_rect();
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| ScreenPoint::new(f64::from(t.client_x()) - rect.left(), f64::from(t.client_y()) - rect.top()))
        .collect()
}

fn set_cursor(canvas: &HtmlCanvasElement, cursor: &str) {
    let _ = canvas.style().set_property("cursor", cursor);
}

/// Readout published to the overlay once per FPS window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Readout {
    fps: f64,
    zoom: f64,
}

/// Per-frame callback: paint, and refresh the readout when an FPS window closes.
fn frame_callback(shared: SharedViewer, readout: UseStateHandle<Readout>) -> impl FnMut(f64) + 'static {
    move |now: f64| {
        let reading = shared.borrow_mut().as_mut().and_then(|v| {
            let fps = v.frame(now)?;
            Some(Readout {
                fps,
                zoom: v.max_scale() / v.view().scale,
            })
        });
        if let Some(r) = reading {
            readout.set(r);
        }
    }
}

fn mount(
    canvas_ref: &NodeRef,
    config: &ViewerConfig,
    shared: SharedViewer,
    readout: UseStateHandle<Readout>,
) -> Result<Mounted, ViewerError> {
    let window = web_sys::window().ok_or(ViewerError::NoWindow)?;
    let canvas: HtmlCanvasElement = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or_else(|| ViewerError::SurfaceNotFound(config.surface_id.clone()))?;
    let (w, h) = fit_canvas_to_window(&window, &canvas);
    let renderer = RendererHandle::create(&config.surface_id, config.max_iterations)?;
    let surface = SurfaceSize::new(f64::from(w), f64::from(h));
    *shared.borrow_mut() = Some(Viewer::new(renderer, config, surface, now_ms(&window)));

    let scheduler = Rc::new(RefCell::new(FrameScheduler::new()));
    let listeners = attach_listeners(&window, &canvas, &shared, &scheduler, &readout);
    scheduler.borrow_mut().start(frame_callback(shared.clone(), readout));
    Ok(Mounted {
        scheduler,
        listeners,
        viewer: shared,
    })
}

fn attach_listeners(
    window: &Window,
    canvas: &HtmlCanvasElement,
    shared: &SharedViewer,
    scheduler: &SharedScheduler,
    readout: &UseStateHandle<Readout>,
) -> Vec<EventListener> {
    let active = EventListenerOptions::enable_prevent_default();
    let mut out = Vec::new();

    // Mouse drag
    {
        let shared = shared.clone();
        let canvas_c = canvas.clone();
        out.push(EventListener::new(canvas, "mousedown", move |e| {
            let Some(e) = e.dyn_ref::<MouseEvent>() else {
                return;
            };
            let p = surface_point(&canvas_c, e.client_x(), e.client_y());
            with_viewer(&shared, |v| v.on_mouse_down(p));
            set_cursor(&canvas_c, "grabbing");
        }));
    }
    {
        let shared = shared.clone();
        let canvas_c = canvas.clone();
        out.push(EventListener::new(canvas, "mousemove", move |e| {
            let Some(e) = e.dyn_ref::<MouseEvent>() else {
                return;
            };
            let p = surface_point(&canvas_c, e.client_x(), e.client_y());
            with_viewer(&shared, |v| v.on_mouse_move(p));
        }));
    }
    {
        let shared = shared.clone();
        let canvas_c = canvas.clone();
        out.push(EventListener::new(window, "mouseup", move |_e| {
            let mut was_dragging = false;
            with_viewer(&shared, |v| {
                was_dragging = v.is_mouse_dragging();
                v.on_mouse_up();
            });
            if was_dragging {
                set_cursor(&canvas_c, "grab");
            }
        }));
    }

    // Wheel: plain scroll pans, ctrl (or trackpad pinch) zooms at the cursor
    {
        let shared = shared.clone();
        let canvas_c = canvas.clone();
        out.push(EventListener::new_with_options(canvas, "wheel", active, move |e| {
            let Some(e) = e.dyn_ref::<WheelEvent>() else {
                return;
            };
            e.prevent_default();
            let input = WheelInput {
                position: surface_point(&canvas_c, e.client_x(), e.client_y()),
                delta_x: e.delta_x(),
                delta_y: e.delta_y(),
                zoom: e.ctrl_key(),
            };
            with_viewer(&shared, |v| v.on_wheel(input));
        }));
    }

    // Touch
    {
        let shared = shared.clone();
        let canvas_c = canvas.clone();
        out.push(EventListener::new_with_options(canvas, "touchstart", active, move |e| {
            let Some(e) = e.dyn_ref::<TouchEvent>() else {
                return;
            };
            e.prevent_default();
            let points = touch_points(&canvas_c, &e.touches());
            with_viewer(&shared, |v| v.on_touch_start(&points));
        }));
    }
    {
        let shared = shared.clone();
        let canvas_c = canvas.clone();
        out.push(EventListener::new_with_options(canvas, "touchmove", active, move |e| {
            let Some(e) = e.dyn_ref::<TouchEvent>() else {
                return;
            };
            e.prevent_default();
            let points = touch_points(&canvas_c, &e.touches());
            with_viewer(&shared, |v| v.on_touch_move(&points));
        }));
    }
    for name in ["touchend", "touchcancel"] {
        let shared = shared.clone();
        out.push(EventListener::new_with_options(canvas, name, active, move |e| {
            let Some(e) = e.dyn_ref::<TouchEvent>() else {
                return;
            };
            e.prevent_default();
            let remaining = e.touches().length() as usize;
            with_viewer(&shared, |v| v.on_touch_end(remaining));
        }));
    }

    // Keep native pinch-zoom, Safari gesture events and the context menu off the canvas
    for name in ["gesturestart", "gesturechange", "gestureend", "contextmenu"] {
        out.push(EventListener::new_with_options(canvas, name, active, |e| {
            e.prevent_default();
        }));
    }

    // Resize
    {
        let shared = shared.clone();
        let canvas_c = canvas.clone();
        let window_c = window.clone();
        out.push(EventListener::new(window, "resize", move |_e| {
            let (w, h) = fit_canvas_to_window(&window_c, &canvas_c);
            with_viewer(&shared, |v| v.resize(w, h));
        }));
    }

    // Pause the loop while the page is hidden
    if let Some(document) = window.document() {
        let shared = shared.clone();
        let scheduler = scheduler.clone();
        let readout = readout.clone();
        let window_c = window.clone();
        let document_c = document.clone();
        out.push(EventListener::new(&document, "visibilitychange", move |_e| {
            let mut sched = scheduler.borrow_mut();
            if document_c.hidden() {
                sched.stop();
                log::debug!("render loop paused");
            } else if !sched.is_running() {
                let now = now_ms(&window_c);
                with_viewer(&shared, |v| v.restart_loop(now));
                sched.start(frame_callback(shared.clone(), readout.clone()));
                log::debug!("render loop resumed");
            }
        }));
    }

    out
}

#[function_component(FractalView)]
pub fn fractal_view(props: &FractalViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let viewer: SharedViewer = use_mut_ref(|| None);
    let readout = use_state(Readout::default);
    let show_fps = use_state(config::load_show_fps);
    let error = use_state(|| None::<String>);

    {
        let canvas_ref = canvas_ref.clone();
        let viewer = viewer.clone();
        let readout = readout.clone();
        let error = error.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let mounted = match mount(&canvas_ref, &config, viewer, readout) {
                Ok(m) => Some(m),
                Err(err) => {
                    log::error!("viewer failed to start: {err}");
                    error.set(Some(err.to_string()));
                    None
                }
            };
            move || drop(mounted)
        });
    }

    let toggle_fps = {
        let show_fps = show_fps.clone();
        Callback::from(move |_| {
            let next = !*show_fps;
            config::save_show_fps(next);
            show_fps.set(next);
        })
    };
    let zoom_in = {
        let viewer = viewer.clone();
        Callback::from(move |_| with_viewer(&viewer, |v| v.zoom_in()))
    };
    let zoom_out = {
        let viewer = viewer.clone();
        Callback::from(move |_| with_viewer(&viewer, |v| v.zoom_out()))
    };
    let reset = {
        let viewer = viewer.clone();
        Callback::from(move |_| with_viewer(&viewer, |v| v.reset()))
    };

    let banner = match &*error {
        Some(msg) => html! {<div style="position:absolute; top:50%; left:50%; transform:translate(-50%,-50%); background:#161b22; border:1px solid #f85149; color:#f85149; border-radius:8px; padding:12px 16px; font-family:monospace; z-index:2;">
            { format!("Renderer unavailable: {msg}") }
        </div>},
        None => html! {},
    };

    html! {
        <div style="position:relative;">
            <canvas
                id={props.config.surface_id.clone()}
                ref={canvas_ref}
                style="display:block; width:100vw; height:100vh; touch-action:none; cursor:grab;"
            />
            { banner }
            <FpsOverlay fps={readout.fps} zoom={readout.zoom} show={*show_fps} on_toggle={toggle_fps} />
            <ViewControls on_zoom_in={zoom_in} on_zoom_out={zoom_out} on_reset={reset} />
        </div>
    }
}
