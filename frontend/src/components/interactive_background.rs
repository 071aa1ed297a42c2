use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};
use yew::prelude::*;

use crate::utils::circuit::{
    self, CircuitField, Point, Viewport, ACCENT_COLOR, BASE_COLOR, CONNECTOR_ALPHA,
    CROSSHAIR_ALPHA, GLOW_ALPHA, GRID_ALPHA, GRID_LINE_COLOR, INTERACTION_RANGE, NODE_COLOR,
    NODE_MARKER_SIZE,
};
use crate::utils::listeners::attach_all;

fn window_viewport(window: &Window) -> Viewport {
    let dimension = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(dimension(window.inner_width()), dimension(window.inner_height()))
}

fn fit_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width as u32);
    canvas.set_height(viewport.height as u32);
}

/// Paints one frame of the field. Gradient failures skip that glow only.
fn paint(ctx: &CanvasRenderingContext2d, field: &CircuitField) {
    let Viewport { width, height } = field.viewport();

    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(BASE_COLOR);
    ctx.fill_rect(0.0, 0.0, width, height);

    for glow in field.glows() {
        let c = glow.center;
        if let Ok(gradient) = ctx.create_radial_gradient(c.x, c.y, 0.0, c.x, c.y, glow.radius) {
            let _ = gradient.add_color_stop(0.0, &glow.color.with_alpha(GLOW_ALPHA));
            let _ = gradient.add_color_stop(1.0, &glow.color.with_alpha(0.0));
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.fill_rect(0.0, 0.0, width, height);
        }
    }

    ctx.set_line_width(1.0);
    ctx.set_stroke_style_str(GRID_LINE_COLOR);
    ctx.set_global_alpha(GRID_ALPHA);
    for x in circuit::grid_lines(width) {
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
        ctx.stroke();
    }
    for y in circuit::grid_lines(height) {
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        ctx.stroke();
    }

    ctx.set_global_alpha(CROSSHAIR_ALPHA);
    ctx.set_stroke_style_str(ACCENT_COLOR);
    ctx.set_line_width(1.5);
    let Point { x: sx, y: sy } = field.crosshair_center();
    ctx.begin_path();
    ctx.move_to(sx - INTERACTION_RANGE, sy);
    ctx.line_to(sx + INTERACTION_RANGE, sy);
    ctx.move_to(sx, sy - INTERACTION_RANGE);
    ctx.line_to(sx, sy + INTERACTION_RANGE);
    ctx.stroke();

    ctx.set_global_alpha(CONNECTOR_ALPHA);
    ctx.set_fill_style_str(NODE_COLOR);
    let half = NODE_MARKER_SIZE / 2.0;
    for connector in field.connectors() {
        ctx.begin_path();
        ctx.move_to(connector.node.x, connector.node.y);
        ctx.line_to(connector.corner.x, connector.corner.y);
        ctx.line_to(connector.pointer.x, connector.pointer.y);
        ctx.stroke();
        ctx.fill_rect(
            connector.node.x - half,
            connector.node.y - half,
            NODE_MARKER_SIZE,
            NODE_MARKER_SIZE,
        );
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Listeners and the pending frame of one mounted backdrop.
struct AnimationLoop {
    window: Window,
    on_resize: Closure<dyn Fn()>,
    on_mouse_move: Closure<dyn Fn(MouseEvent)>,
    frame: FrameCallback,
    frame_id: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl AnimationLoop {
    /// Returns `None`, with nothing left attached, when there is no 2D context
    /// or a listener cannot be registered.
    fn start(canvas: HtmlCanvasElement) -> Option<Self> {
        let window = web_sys::window()?;
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let viewport = window_viewport(&window);
        fit_canvas(&canvas, viewport);
        let field = Rc::new(RefCell::new(CircuitField::new(viewport, &mut rand::thread_rng())));

        let on_resize = Closure::<dyn Fn()>::new({
            let field = field.clone();
            let window = window.clone();
            move || {
                let viewport = window_viewport(&window);
                fit_canvas(&canvas, viewport);
                field.borrow_mut().resize(viewport, &mut rand::thread_rng());
            }
        });
        let on_mouse_move = Closure::<dyn Fn(MouseEvent)>::new({
            let field = field.clone();
            move |e: MouseEvent| {
                field
                    .borrow_mut()
                    .set_pointer(Point::new(f64::from(e.client_x()), f64::from(e.client_y())));
            }
        });
        let listeners: [(&str, &JsValue); 2] = [
            ("resize", on_resize.as_ref()),
            ("mousemove", on_mouse_move.as_ref()),
        ];
        attach_all(
            &listeners,
            |(event, callback)| {
                window.add_event_listener_with_callback(event, callback.unchecked_ref())
            },
            |(event, callback)| {
                let _ = window.remove_event_listener_with_callback(event, callback.unchecked_ref());
            },
        )
        .ok()?;

        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));
        let stopped = Rc::new(Cell::new(false));

        *frame.borrow_mut() = Some(Closure::<dyn FnMut()>::new({
            let frame = frame.clone();
            let frame_id = frame_id.clone();
            let stopped = stopped.clone();
            let window = window.clone();
            move || {
                if stopped.get() {
                    return;
                }
                {
                    let mut field = field.borrow_mut();
                    field.tick();
                    paint(&ctx, &field);
                }
                if let Some(callback) = frame.borrow().as_ref() {
                    frame_id.set(
                        window
                            .request_animation_frame(callback.as_ref().unchecked_ref())
                            .ok(),
                    );
                }
            }
        }));

        let animation = Self {
            window,
            on_resize,
            on_mouse_move,
            frame,
            frame_id,
            stopped,
        };
        animation.request_frame();
        Some(animation)
    }

    fn request_frame(&self) {
        if let Some(callback) = self.frame.borrow().as_ref() {
            self.frame_id.set(
                self.window
                    .request_animation_frame(callback.as_ref().unchecked_ref())
                    .ok(),
            );
        }
    }

    fn stop(self) {
        self.stopped.set(true);
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        let _ = self.window.remove_event_listener_with_callback(
            "mousemove",
            self.on_mouse_move.as_ref().unchecked_ref(),
        );
        // The frame closure holds its own handle; dropping it here breaks the cycle.
        self.frame.borrow_mut().take();
    }
}

#[function_component(InteractiveBackground)]
pub fn interactive_background() -> Html {
    let canvas_ref = use_node_ref();
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let animation = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(AnimationLoop::start);
                if animation.is_none() {
                    gloo_console::log!("2D canvas unavailable, background disabled");
                }
                move || {
                    if let Some(animation) = animation {
                        animation.stop();
                    }
                }
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="interactive-background"></canvas>
    }
}
