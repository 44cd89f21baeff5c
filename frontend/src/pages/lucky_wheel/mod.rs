mod password_gate;
mod prize_exclusion;
mod wheel_canvas;
mod wheel_utils;

use chrono::Local;
use gloo_timers::future::TimeoutFuture;
use luckydraw_shared::constants::ALREADY_PARTICIPATED_NOTICE;
use luckydraw_shared::session::submit_result;
use luckydraw_shared::submission::format_timestamp;
use luckydraw_shared::{DrawError, PrizeId, SpinPhase, Step, TriggerOutcome, WheelPrize};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::browser::{alert, FormRecorder, LocalParticipationStore};
use crate::hooks::use_draw_session;
use crate::styles;

use password_gate::PasswordGate;
use prize_exclusion::PrizeExclusion;
use wheel_canvas::WheelCanvas;
use wheel_utils::{GoButton, MotionControl, ResultDisplay, WheelMotion};

// Alert the visitor about problems they can act on; log the rest
fn surface(err: DrawError) {
    if err.is_user_facing() {
        alert(&err.to_string());
    } else {
        log::warn!("{}", err);
    }
}

#[function_component(LuckyWheelPage)]
pub fn lucky_wheel_page() -> Html {
    let draw = use_draw_session();
    let motion = use_state(|| WheelMotion::Idle);

    let on_access_input = {
        let draw = draw.clone();
        Callback::from(move |value: String| {
            draw.session.borrow_mut().set_access_input(value);
            draw.refresh();
        })
    };

    let on_verify = {
        let draw = draw.clone();
        Callback::from(move |_: ()| {
            let verified = draw.session.borrow_mut().verify_access();
            if let Err(e) = verified {
                surface(e);
            }
            draw.refresh();
        })
    };

    let on_toggle = {
        let draw = draw.clone();
        Callback::from(move |id: PrizeId| {
            let toggled = draw.session.borrow_mut().toggle_exclusion(id);
            if let Err(e) = toggled {
                surface(e);
            }
            draw.refresh();
        })
    };

    let on_confirm = {
        let draw = draw.clone();
        Callback::from(move |_: ()| {
            let confirmed = draw.session.borrow_mut().confirm_exclusions().map(|prizes| prizes.len());
            if let Err(e) = confirmed {
                surface(e);
            }
            draw.refresh();
        })
    };

    let on_start = {
        let draw = draw.clone();
        let motion = motion.clone();

        Callback::from(move |_: MouseEvent| {
            let triggered = draw
                .session
                .borrow_mut()
                .trigger_spin(&mut MotionControl(motion.clone()));

            match triggered {
                Ok(TriggerOutcome::Started) => {
                    let draw = draw.clone();
                    let motion = motion.clone();
                    let delay = draw.session.borrow().config().spin_delay_ms;

                    // Let the wheel spin up before committing where it lands
                    spawn_local(async move {
                        TimeoutFuture::new(delay).await;
                        let mut rng = SmallRng::from_entropy();
                        let landing = draw
                            .session
                            .borrow_mut()
                            .request_landing(&mut rng, &mut MotionControl(motion));
                        if let Err(e) = landing {
                            log::warn!("Could not commit landing slot: {}", e);
                        }
                        draw.refresh();
                    });
                }
                Ok(TriggerOutcome::Ignored) => {}
                Err(e) => surface(e),
            }
            draw.refresh();
        })
    };

    let on_end = {
        let draw = draw.clone();
        let motion = motion.clone();

        Callback::from(move |landed: WheelPrize| {
            motion.set(WheelMotion::Idle);
            let draw = draw.clone();

            spawn_local(async move {
                let endpoint = draw.session.borrow().config().form_endpoint.clone();
                let recorder = FormRecorder::new(endpoint);
                let mut store = LocalParticipationStore::open();
                let time = format_timestamp(&Local::now());

                let settled = submit_result(&draw.session, &recorder, &mut store, &landed, time).await;
                draw.refresh();
                match settled {
                    Ok(notice) => alert(&notice.message()),
                    Err(e) => log::error!("Dropped wheel result {:?}: {}", landed, e),
                }
            });
        })
    };

    let session = draw.session.borrow();
    let step = session.step();
    let access_input = session.access_input().to_string();
    let catalog = session.config().catalog.clone();
    let excluded = session.excluded_ids().to_vec();
    let confirm_label = session.confirm_label();
    let can_confirm = session.can_confirm();
    let final_prizes = session.final_prizes().to_vec();
    let has_participated = session.has_participated();
    let is_busy = session.is_submitting() || *motion != WheelMotion::Idle;
    let fingerprint = session.fingerprint().to_string();
    let (last_prize, recorded) = match session.phase() {
        SpinPhase::Announced { prize, recorded } => (Some(prize.clone()), *recorded),
        _ => (None, false),
    };
    drop(session);

    match step {
        Step::Password => html! {
            <PasswordGate value={access_input} oninput={on_access_input} onconfirm={on_verify} />
        },
        Step::Exclude => html! {
            <PrizeExclusion
                prizes={catalog}
                {excluded}
                {confirm_label}
                {can_confirm}
                ontoggle={on_toggle}
                onconfirm={on_confirm}
            />
        },
        Step::Wheel => html! {
            <div class={styles::WHEEL_SCREEN}>
                <h1 class={styles::TITLE}>{"LUCKY WHEEL"}</h1>
                <div class={styles::WHEEL_WRAPPER}>
                    <WheelCanvas prizes={final_prizes} motion={*motion} {on_end} />
                    <GoButton busy={is_busy} onclick={on_start} />
                </div>

                if has_participated {
                    <p class={styles::WARN_TEXT}>{format!("{} ✨", ALREADY_PARTICIPATED_NOTICE)}</p>
                }

                <ResultDisplay prize={last_prize} {recorded} />

                <p class={styles::VISITOR_ID}>{format!("ID: {}", fingerprint)}</p>
            </div>
        },
    }
}
