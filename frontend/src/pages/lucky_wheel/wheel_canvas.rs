use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;

use luckydraw_shared::{Prize, WheelPrize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::wheel_utils::*;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub prizes: Vec<Prize>,
    pub motion: WheelMotion,
    pub on_end: Callback<WheelPrize>,
}

/// Canvas wheel with one slot per prize.
///
/// `Spinning` turns the wheel at a constant speed until told otherwise;
/// `Landing(index)` decelerates onto that slot and then emits `on_end` with
/// whatever slot actually sits under the pointer.
#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let rotation = use_mut_ref(|| 0.0_f64);

    {
        let canvas_ref = canvas_ref.clone();
        let rotation = rotation.clone();
        let on_end = props.on_end.clone();

        use_effect_with((props.motion, props.prizes.clone()), move |(motion, prizes)| {
            let cancelled = Rc::new(Cell::new(false));
            let prizes = prizes.clone();

            match *motion {
                WheelMotion::Idle => draw_wheel(&canvas_ref, &prizes, *rotation.borrow()),
                WheelMotion::Spinning => {
                    let mut last_frame = js_sys::Date::now();
                    run_animation(cancelled.clone(), move |now| {
                        let elapsed = now - last_frame;
                        last_frame = now;
                        let current = *rotation.borrow() + SPIN_SPEED_DEG_PER_MS * elapsed;
                        *rotation.borrow_mut() = current;
                        draw_wheel(&canvas_ref, &prizes, current);
                        true
                    });
                }
                WheelMotion::Landing(index) => {
                    let start_time = js_sys::Date::now();
                    let start_rotation = *rotation.borrow();
                    let final_rotation =
                        landing_rotation(start_rotation, index, prizes.len(), LANDING_EXTRA_TURNS);

                    run_animation(cancelled.clone(), move |now| {
                        let progress = ((now - start_time) / LANDING_DURATION_MS).min(1.0);
                        let current =
                            start_rotation + (final_rotation - start_rotation) * ease_out_quart(progress);
                        *rotation.borrow_mut() = current;
                        draw_wheel(&canvas_ref, &prizes, current);

                        if progress < 1.0 {
                            return true;
                        }

                        let slot = slot_under_pointer(current, prizes.len());
                        let label = prizes.get(slot).map(|p| p.name.clone()).unwrap_or_default();
                        on_end.emit(WheelPrize { index: slot, label });
                        false
                    });
                }
            }

            move || cancelled.set(true)
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            width="310"
            height="310"
            class="block h-[310px] w-[310px] rounded-full"
        />
    }
}

/// Call `frame` with the current time on every animation frame until it
/// returns false or `cancelled` is set
fn run_animation(cancelled: Rc<Cell<bool>>, mut frame: impl FnMut(f64) -> bool + 'static) {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !cancelled.get() && frame(js_sys::Date::now()) {
            request_frame(&f);
        } else {
            // Breaks the self-reference so the closure is freed
            let _ = f.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>));

    request_frame(&g);
}

fn request_frame(callback: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(window), Some(callback)) = (window(), callback.borrow().as_ref()) {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

fn draw_wheel(canvas_ref: &NodeRef, prizes: &[Prize], rotation: f64) {
    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
        return;
    };
    let Some(context) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let outer_radius = width.min(height) / 2.0;
    let radius = outer_radius - 10.0;

    context.clear_rect(0.0, 0.0, width, height);

    // Rim
    context.begin_path();
    context.set_fill_style_str("#F0F0F0");
    let _ = context.arc(center_x, center_y, outer_radius, 0.0, 2.0 * PI);
    context.fill();

    if prizes.is_empty() {
        return;
    }

    // Slot 0 starts at 12 o'clock and slots run clockwise
    let segment = segment_angle(prizes.len()).to_radians();
    let base = (rotation - 90.0).to_radians();

    for (i, prize) in prizes.iter().enumerate() {
        let start = base + i as f64 * segment;

        context.begin_path();
        context.set_fill_style_str(&prize.color);
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, start, start + segment);
        context.close_path();
        context.fill();

        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate(start + segment / 2.0 + PI / 2.0);
        context.set_fill_style_str("#ffffff");
        context.set_font("bold 14px -apple-system, sans-serif");
        context.set_text_align("center");
        let _ = context.fill_text(&prize.name, 0.0, -radius * 0.7);
        context.restore();
    }

    // Pointer at 12 o'clock
    context.begin_path();
    context.move_to(center_x, center_y - radius + 16.0);
    context.line_to(center_x - 10.0, center_y - outer_radius + 2.0);
    context.line_to(center_x + 10.0, center_y - outer_radius + 2.0);
    context.close_path();
    context.set_fill_style_str("#FF6B6B");
    context.fill();
}
