use luckydraw_shared::WheelControl;
use yew::prelude::*;

use crate::styles;

pub const SPIN_SPEED_DEG_PER_MS: f64 = 1.5;
pub const LANDING_DURATION_MS: f64 = 4000.0;
pub const LANDING_EXTRA_TURNS: u32 = 4;

/// What the canvas wheel is currently told to do
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WheelMotion {
    #[default]
    Idle,
    Spinning,
    Landing(usize),
}

/// Drives the canvas wheel through its motion state
pub struct MotionControl(pub UseStateHandle<WheelMotion>);

impl WheelControl for MotionControl {
    fn play(&mut self) {
        self.0.set(WheelMotion::Spinning);
    }

    fn stop(&mut self, landing_index: usize) {
        self.0.set(WheelMotion::Landing(landing_index));
    }
}

pub fn segment_angle(slots: usize) -> f64 {
    360.0 / slots.max(1) as f64
}

/// Slot under the pointer at 12 o'clock after rotating the wheel clockwise
/// by `rotation` degrees. Slot 0 starts at the pointer.
pub fn slot_under_pointer(rotation: f64, slots: usize) -> usize {
    if slots == 0 {
        return 0;
    }
    let local = (-rotation).rem_euclid(360.0);
    ((local / segment_angle(slots)) as usize).min(slots - 1)
}

/// Final rotation that brings the middle of `index` under the pointer after
/// at least `extra_turns` full turns from `current`
pub fn landing_rotation(current: f64, index: usize, slots: usize, extra_turns: u32) -> f64 {
    let seg = segment_angle(slots);
    let desired = (-(index as f64 * seg + seg / 2.0)).rem_euclid(360.0);
    let adjustment = (desired - current.rem_euclid(360.0)).rem_euclid(360.0);
    current + extra_turns as f64 * 360.0 + adjustment
}

// Easing function for smooth deceleration
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

#[derive(Properties, PartialEq)]
pub struct GoButtonProps {
    pub busy: bool,
    pub onclick: Callback<MouseEvent>,
}

// Center trigger. Never disabled: the session decides whether a press counts.
#[function_component(GoButton)]
pub fn go_button(props: &GoButtonProps) -> Html {
    html! {
        <button
            onclick={props.onclick.clone()}
            class={classes!(styles::GO_BUTTON, props.busy.then_some("opacity-80"))}
        >
            if props.busy {
                <svg class="animate-spin" xmlns="http://www.w3.org/2000/svg" width="22" height="22" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 6v6l4 2" />
                </svg>
            } else {
                <span>{"GO"}</span>
            }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub prize: Option<String>,
    pub recorded: bool,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(prize) = &props.prize else {
        return html! {};
    };

    html! {
        <div class="mt-6 flex flex-col items-center">
            <div class="rounded-xl bg-gradient-to-r from-[#FF6B6B] to-[#FF8E99] px-6 py-3 text-lg font-bold text-white shadow-lg">
                {format!("Result: {}", prize)}
            </div>
            if !props.recorded {
                <p class="mt-2 text-xs text-gray-400">{"Not saved yet. Keep a screenshot of this screen."}</p>
            }
        </div>
    }
}
