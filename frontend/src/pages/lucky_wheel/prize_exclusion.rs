use luckydraw_shared::{Prize, PrizeId};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PrizeExclusionProps {
    pub prizes: Vec<Prize>,
    pub excluded: Vec<PrizeId>,
    pub confirm_label: String,
    pub can_confirm: bool,
    pub ontoggle: Callback<PrizeId>,
    pub onconfirm: Callback<()>,
}

// One row per catalog prize; the visitor ticks the two they expect to miss
#[function_component(PrizeExclusion)]
pub fn prize_exclusion(props: &PrizeExclusionProps) -> Html {
    let rows = props.prizes.iter().map(|prize| {
        let is_excluded = props.excluded.contains(&prize.id);
        let id = prize.id;
        let onclick = props.ontoggle.reform(move |_: MouseEvent| id);

        html! {
            <div
                key={prize.id}
                {onclick}
                class={classes!(
                    styles::PRIZE_ROW,
                    if is_excluded { styles::PRIZE_ROW_EXCLUDED } else { styles::PRIZE_ROW_KEPT }
                )}
            >
                <div class="flex items-center">
                    <span class="mr-2.5">{"🎁"}</span>
                    <span class={classes!("text-gray-800", is_excluded.then_some("font-bold"))}>
                        {prize.name.clone()}
                    </span>
                </div>
                <div class={classes!(
                    styles::CHECKBOX,
                    if is_excluded { styles::CHECKBOX_ON } else { styles::CHECKBOX_OFF }
                )}>
                    if is_excluded {
                        <span class="text-[10px] text-white">{"✓"}</span>
                    }
                </div>
            </div>
        }
    });

    let onclick = props.onconfirm.reform(|_: MouseEvent| ());

    html! {
        <div class={styles::MODAL_OVERLAY}>
            <div class={styles::MODAL_CARD}>
                <h2 class={styles::MODAL_TITLE}>{"Exclude Prizes"}</h2>
                <p class={styles::MODAL_SUBTITLE}>{"Tick the 2 prizes you think you will NOT win"}</p>

                <div class={styles::PRIZE_LIST}>
                    { for rows }
                </div>

                <button
                    {onclick}
                    class={classes!(
                        styles::BUTTON_GRADIENT,
                        "mt-2.5",
                        if props.can_confirm { "opacity-100" } else { "opacity-40" }
                    )}
                >
                    {props.confirm_label.clone()}
                </button>
            </div>
        </div>
    }
}
